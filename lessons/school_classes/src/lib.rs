//! School Classes - the reference-type lesson.
//!
//! Shows single inheritance with dynamic dispatch, a method that no subtype
//! may override, and shared-reference mutation: two handles, one entity.
//!
//! # Usage
//!
//! ```
//! use school_classes::{BaseEntity, DerivedEntity, Entity, Shared};
//! use school_core::buffer_handler;
//!
//! let out = buffer_handler();
//! let derived = Shared::new(DerivedEntity::new(10, 1));
//! let as_base: Shared<dyn Entity> = derived.upcast();
//! as_base.read().announce(&out);
//! Shared::new(BaseEntity::new(2)).read().announce(&out);
//! assert_eq!(out.lines(), vec!["Hello, world!", "Parent says: Hello, world!"]);
//! ```

mod entity;
mod shared;

pub use entity::{
    BaseEntity, DerivedEntity, Entity, SealedAnnounce, DERIVED_GREETING, PARENT_GREETING,
    SEALED_GREETING,
};
pub use shared::Shared;

use school_core::{Categorized, PrintHandlerImpl};

/// Run the reference-type demonstration, writing each observed line to `out`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn demonstrate(out: &PrintHandlerImpl) {
    out.println(&DerivedEntity::describe_category());

    let derived = Shared::new(DerivedEntity::new(10, 1));
    let parent = Shared::new(BaseEntity::new(2));

    // Derived override wins even through a base-typed handle.
    let as_base: Shared<dyn Entity> = derived.upcast();
    as_base.read().announce(out);
    parent.read().announce(out);
    as_base.read().sealed_announce(out);

    let alias = derived.clone();
    derived.write().value = 10;
    alias.write().value = 11;
    tracing::debug!(handles = derived.handle_count(), "mutated through alias");

    out.println(&format!("derived.value = {}", derived.read().value));
    out.println(&format!("alias.value = {}", alias.read().value));
}
