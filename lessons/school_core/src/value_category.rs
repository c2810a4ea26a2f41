//! Value category for lesson types: what assignment does to them.
//!
//! A `Reference` type is reached through handles; assigning a handle shares
//! the object. A `Value` type is copied on assignment; the copy is independent.

/// How a type behaves when assigned to another binding.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ValueCategory {
    /// Heap-allocated behind a reference-counted handle; assignment aliases.
    Reference,

    /// Owned inline; assignment copies.
    Value,
}

impl ValueCategory {
    /// Check if assignment shares the underlying object.
    #[inline]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }

    /// Check if assignment produces an independent copy.
    #[inline]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Value)
    }

    /// Get a human-readable name for this category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Value => "value",
        }
    }
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every lesson type to state its assignment semantics.
pub trait Categorized {
    /// Category of `Self`.
    const CATEGORY: ValueCategory;

    /// Type name as shown in demonstration output.
    const TYPE_NAME: &'static str;

    /// One-line description, e.g. `ValueRecord is a value type`.
    fn describe_category() -> String {
        format!("{} is a {} type", Self::TYPE_NAME, Self::CATEGORY)
    }
}

#[cfg(test)]
mod tests;
