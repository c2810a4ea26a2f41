//! The entity hierarchy: `BaseEntity` and `DerivedEntity`.
//!
//! Inheritance is expressed as the [`Entity`] trait. Its provided
//! [`Entity::announce`] is the base behavior; `DerivedEntity` embeds a
//! `BaseEntity` and overrides `announce`. [`SealedAnnounce`] carries the one
//! method no entity may override.

use school_core::{Categorized, PrintHandlerImpl, ValueCategory};

/// Line printed by the base `announce`.
pub const PARENT_GREETING: &str = "Parent says: Hello, world!";

/// Line printed by `DerivedEntity::announce`.
pub const DERIVED_GREETING: &str = "Hello, world!";

/// Line printed by `sealed_announce`, for every entity.
pub const SEALED_GREETING: &str = "Only parent version";

/// Capability shared by every entity in the hierarchy.
///
/// Implementors expose their base portion; everything else has a default
/// that behaves like `BaseEntity`.
pub trait Entity {
    /// The fully initialized base portion of this entity.
    fn base(&self) -> &BaseEntity;

    /// Mutable access to the base portion.
    fn base_mut(&mut self) -> &mut BaseEntity;

    /// Print this entity's greeting. Overridable.
    fn announce(&self, out: &PrintHandlerImpl) {
        out.println(PARENT_GREETING);
    }

    /// The base portion's `parent_value`.
    fn parent_value(&self) -> i64 {
        self.base().parent_value
    }

    /// Overwrite the base portion's `parent_value`.
    fn set_parent_value(&mut self, parent_value: i64) {
        self.base_mut().parent_value = parent_value;
    }
}

/// Methods available on every entity that no entity can replace.
///
/// The blanket implementation below covers all `Entity` types, so a second
/// implementation for any type is a coherence error:
///
/// ```compile_fail
/// use school_classes::{BaseEntity, Entity, SealedAnnounce};
/// use school_core::PrintHandlerImpl;
///
/// struct Impostor(BaseEntity);
///
/// impl Entity for Impostor {
///     fn base(&self) -> &BaseEntity { &self.0 }
///     fn base_mut(&mut self) -> &mut BaseEntity { &mut self.0 }
/// }
///
/// impl SealedAnnounce for Impostor {
///     fn sealed_announce(&self, out: &PrintHandlerImpl) {
///         out.println("Impostor version");
///     }
/// }
/// ```
pub trait SealedAnnounce: Entity {
    /// Print [`SEALED_GREETING`].
    fn sealed_announce(&self, out: &PrintHandlerImpl) {
        out.println(SEALED_GREETING);
    }
}

impl<T: Entity + ?Sized> SealedAnnounce for T {}

/// Root of the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseEntity {
    pub parent_value: i64,
}

impl BaseEntity {
    pub fn new(parent_value: i64) -> Self {
        BaseEntity { parent_value }
    }
}

impl Entity for BaseEntity {
    fn base(&self) -> &BaseEntity {
        self
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        self
    }
}

impl Categorized for BaseEntity {
    const CATEGORY: ValueCategory = ValueCategory::Reference;
    const TYPE_NAME: &'static str = "BaseEntity";
}

/// A `BaseEntity` with an extra `value` and its own greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedEntity {
    base: BaseEntity,
    pub value: i64,
}

impl DerivedEntity {
    /// The base portion is constructed before the derived field is set.
    pub fn new(value: i64, parent_value: i64) -> Self {
        let base = BaseEntity::new(parent_value);
        DerivedEntity { base, value }
    }

    // Module-private: not reachable from other crates or from types
    // built on top of `DerivedEntity`.
    fn greeting() -> &'static str {
        DERIVED_GREETING
    }
}

impl Entity for DerivedEntity {
    fn base(&self) -> &BaseEntity {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    fn announce(&self, out: &PrintHandlerImpl) {
        out.println(Self::greeting());
    }
}

impl Categorized for DerivedEntity {
    const CATEGORY: ValueCategory = ValueCategory::Reference;
    const TYPE_NAME: &'static str = "DerivedEntity";
}

#[cfg(test)]
mod tests;
