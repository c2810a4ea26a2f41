use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("Hello, world!");
    assert_eq!(handler.get_output(), "Hello, world!\n");
}

#[test]
fn buffer_handler_keeps_line_order() {
    let handler = buffer_handler();
    handler.println("one");
    handler.println("two");
    handler.println("Hey, three");
    assert_eq!(handler.lines(), vec!["one", "two", "Hey, three"]);
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    handler.println("printed, not captured");
    assert_eq!(handler.get_output(), "");
    assert!(handler.lines().is_empty());
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handler_sees_writes_from_every_clone() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("from clone");
    handler.println("from original");
    assert_eq!(handler.lines(), vec!["from clone", "from original"]);
}
