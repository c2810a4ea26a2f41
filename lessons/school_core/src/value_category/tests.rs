use super::*;
use pretty_assertions::assert_eq;

#[test]
fn predicates_work() {
    assert!(ValueCategory::Reference.is_reference());
    assert!(!ValueCategory::Reference.is_value());

    assert!(!ValueCategory::Value.is_reference());
    assert!(ValueCategory::Value.is_value());
}

#[test]
fn display_names() {
    assert_eq!(ValueCategory::Reference.to_string(), "reference");
    assert_eq!(ValueCategory::Value.to_string(), "value");
}

#[test]
fn size_is_1_byte() {
    assert_eq!(std::mem::size_of::<ValueCategory>(), 1);
}

#[test]
fn describe_category_uses_type_name() {
    struct Probe;

    impl Categorized for Probe {
        const CATEGORY: ValueCategory = ValueCategory::Value;
        const TYPE_NAME: &'static str = "Probe";
    }

    assert_eq!(Probe::describe_category(), "Probe is a value type");
}
