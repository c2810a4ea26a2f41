use super::*;
use crate::Shared;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use school_core::buffer_handler;

#[test]
fn derived_announce_through_base_handle_uses_override() {
    let out = buffer_handler();
    let derived = Shared::new(DerivedEntity::new(10, 1));
    let as_base: Shared<dyn Entity> = derived.upcast();
    as_base.read().announce(&out);
    assert_eq!(out.get_output(), "Hello, world!\n");
}

#[test]
fn derived_announce_through_trait_object_reference() {
    let out = buffer_handler();
    let entities: Vec<Box<dyn Entity>> = vec![
        Box::new(BaseEntity::new(2)),
        Box::new(DerivedEntity::new(10, 1)),
    ];
    for entity in &entities {
        entity.announce(&out);
    }
    assert_eq!(out.lines(), vec![PARENT_GREETING, DERIVED_GREETING]);
}

#[test]
fn base_announce_prints_parent_line() {
    let out = buffer_handler();
    BaseEntity::new(2).announce(&out);
    assert_eq!(out.get_output(), "Parent says: Hello, world!\n");
}

#[test]
fn sealed_announce_is_the_same_for_every_entity() {
    let out = buffer_handler();
    BaseEntity::new(2).sealed_announce(&out);
    DerivedEntity::new(10, 1).sealed_announce(&out);
    let as_base: Shared<dyn Entity> = Shared::new(DerivedEntity::new(0, 0)).upcast();
    as_base.read().sealed_announce(&out);
    assert_eq!(
        out.lines(),
        vec![SEALED_GREETING, SEALED_GREETING, SEALED_GREETING]
    );
}

#[test]
fn private_greeting_backs_the_override() {
    assert_eq!(DerivedEntity::greeting(), DERIVED_GREETING);
}

#[test]
fn derived_initializes_base_portion() {
    let derived = DerivedEntity::new(10, 1);
    assert_eq!(derived.value, 10);
    assert_eq!(derived.parent_value(), 1);
    assert_eq!(derived.base(), &BaseEntity::new(1));
}

#[test]
fn parent_value_is_mutable_through_base_handle() {
    let derived = Shared::new(DerivedEntity::new(10, 1));
    let as_base = derived.upcast();
    as_base.write().set_parent_value(7);
    assert_eq!(derived.read().parent_value(), 7);
    assert_eq!(derived.read().value, 10);
}

#[test]
fn both_entities_are_reference_types() {
    assert!(BaseEntity::CATEGORY.is_reference());
    assert!(DerivedEntity::CATEGORY.is_reference());
    assert_eq!(
        BaseEntity::describe_category(),
        "BaseEntity is a reference type"
    );
}

proptest! {
    #[test]
    fn base_construction_stores_input(parent_value in any::<i64>()) {
        let base = BaseEntity::new(parent_value);
        prop_assert_eq!(base.parent_value, parent_value);
    }

    #[test]
    fn derived_construction_stores_both_inputs(value in any::<i64>(), parent_value in any::<i64>()) {
        let derived = DerivedEntity::new(value, parent_value);
        prop_assert_eq!(derived.value, value);
        prop_assert_eq!(derived.parent_value(), parent_value);
    }
}
