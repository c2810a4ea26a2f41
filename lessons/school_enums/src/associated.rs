//! `AssociatedEnum`: a case carrying a payload inline.

use std::fmt;

/// Cases that carry data. `message` is computed from the payload on every
/// call; nothing is cached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssociatedEnum {
    /// Greets whoever is named in the payload.
    Greeting(String),
}

impl AssociatedEnum {
    /// Build the `Greeting` case around `name`.
    pub fn greeting(name: impl Into<String>) -> Self {
        AssociatedEnum::Greeting(name.into())
    }

    /// The formatted message for the held case.
    pub fn message(&self) -> String {
        match self {
            AssociatedEnum::Greeting(name) => format!("Hello, {name}!"),
        }
    }

    /// The name carried by the held case.
    pub fn payload(&self) -> &str {
        match self {
            AssociatedEnum::Greeting(name) => name,
        }
    }

    /// Replace the payload in place, keeping the case.
    pub fn set_payload(&mut self, payload: impl Into<String>) {
        match self {
            AssociatedEnum::Greeting(name) => *name = payload.into(),
        }
    }
}

impl fmt::Display for AssociatedEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
