//! Lesson registry.

use std::fmt;

use school_core::PrintHandlerImpl;

use crate::error::{CliError, CliResult};

/// One self-contained demonstration unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lesson {
    Classes,
    Structs,
    Enums,
}

impl Lesson {
    /// Every lesson, in program order.
    pub const ALL: [Lesson; 3] = [Lesson::Classes, Lesson::Structs, Lesson::Enums];

    pub const fn name(self) -> &'static str {
        match self {
            Lesson::Classes => "classes",
            Lesson::Structs => "structs",
            Lesson::Enums => "enums",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Lesson::Classes => "reference types: inheritance, dynamic dispatch, shared handles",
            Lesson::Structs => "value types: copy on assignment",
            Lesson::Enums => "enumerations: raw values and associated payloads",
        }
    }

    /// Look up a lesson by name, ignoring ASCII case.
    pub fn parse(name: &str) -> CliResult<Self> {
        Self::ALL
            .into_iter()
            .find(|lesson| lesson.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CliError::UnknownLesson(name.to_string()))
    }

    /// Print this lesson's demonstration to `out`.
    pub fn demonstrate(self, out: &PrintHandlerImpl) {
        match self {
            Lesson::Classes => school_classes::demonstrate(out),
            Lesson::Structs => school_structs::demonstrate(out),
            Lesson::Enums => school_enums::demonstrate(out),
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
