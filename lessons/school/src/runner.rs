//! Runs lessons against a print handler.

use school_core::PrintHandlerImpl;

use crate::config::RunConfig;
use crate::lesson::Lesson;

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Lessons that ran, in order.
    pub completed: Vec<Lesson>,
}

/// Run every lesson in `config`, each preceded by a `[name]` header line.
#[tracing::instrument(level = "debug", skip_all, fields(count = config.lessons.len()))]
pub fn run_lessons(config: &RunConfig, out: &PrintHandlerImpl) -> RunSummary {
    let mut completed = Vec::with_capacity(config.lessons.len());

    for &lesson in &config.lessons {
        tracing::debug!(%lesson, "starting lesson");
        out.println(&format!("[{lesson}]"));
        lesson.demonstrate(out);
        completed.push(lesson);
    }

    tracing::debug!(completed = completed.len(), "run finished");
    RunSummary { completed }
}
