use crate::core::creator::ProjectCreator;
use crate::domain::model::{BatchReport, ProjectOutcome};
use crate::domain::ports::Toolchain;

pub struct ScaffoldEngine<T: Toolchain> {
    creator: ProjectCreator<T>,
}

impl<T: Toolchain> ScaffoldEngine<T> {
    pub fn new(creator: ProjectCreator<T>) -> Self {
        Self { creator }
    }

    /// Creates every name in order. A failure is logged and the loop moves
    /// on; nothing here is fatal.
    pub fn run<I, S>(&self, names: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();

        for name in names {
            let name = name.as_ref();
            let result = self.creator.create(name);

            if let Err(e) = &result {
                tracing::error!(
                    project = name,
                    step = %e.step(),
                    "❌ error making project: {}: {}",
                    name,
                    e
                );
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            }

            report.outcomes.push(ProjectOutcome {
                name: name.to_string(),
                result,
            });
        }

        tracing::info!(
            "📁 {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }
}
