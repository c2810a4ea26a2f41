use super::*;
use pretty_assertions::assert_eq;
use school_core::buffer_handler;

#[test]
fn parse_accepts_every_name() {
    for lesson in Lesson::ALL {
        assert_eq!(Lesson::parse(lesson.name()), Ok(lesson));
    }
}

#[test]
fn parse_ignores_case() {
    assert_eq!(Lesson::parse("Classes"), Ok(Lesson::Classes));
    assert_eq!(Lesson::parse("ENUMS"), Ok(Lesson::Enums));
}

#[test]
fn parse_rejects_unknown_lesson() {
    assert_eq!(
        Lesson::parse("protocols"),
        Err(CliError::UnknownLesson("protocols".to_string()))
    );
}

#[test]
fn display_is_the_name() {
    assert_eq!(Lesson::Structs.to_string(), "structs");
}

#[test]
fn each_lesson_prints_something() {
    for lesson in Lesson::ALL {
        let out = buffer_handler();
        lesson.demonstrate(&out);
        assert!(!out.lines().is_empty(), "{lesson} printed nothing");
    }
}
