//! Run configuration.

use crate::error::{CliError, CliResult};
use crate::lesson::Lesson;

/// What `school run` should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Lessons to run, in order.
    pub lessons: Vec<Lesson>,
    /// Discard lesson output (tracing still reports progress).
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            lessons: Lesson::ALL.to_vec(),
            quiet: false,
        }
    }
}

impl RunConfig {
    /// Build a config from the arguments following `run`.
    ///
    /// No lesson names means every lesson. Names may repeat; each occurrence
    /// runs once more.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> CliResult<Self> {
        let mut config = RunConfig {
            lessons: Vec::new(),
            quiet: false,
        };

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--quiet" || arg == "-q" {
                config.quiet = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.to_string()));
            } else {
                config.lessons.push(Lesson::parse(arg)?);
            }
        }

        if config.lessons.is_empty() {
            config.lessons = Lesson::ALL.to_vec();
        }
        Ok(config)
    }
}
