use crate::core::Generator;
use crate::domain::model::{EmitFailure, ScaffoldReport};
use crate::utils::error::Result;

pub struct ScaffoldEngine<G: Generator> {
    generator: G,
}

impl<G: Generator> ScaffoldEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Runs the plan sequentially. A failed emission is recorded and the
    /// remaining artifacts are still attempted; only the report says
    /// whether the run was complete.
    pub async fn run(&self) -> Result<ScaffoldReport> {
        println!("Starting scaffold generation...");

        let plan = self.generator.plan();
        println!("Planned {} artifacts", plan.len());

        let mut report = ScaffoldReport::default();

        for artifact in &plan {
            match self.generator.emit(artifact).await {
                Ok(()) => {
                    tracing::info!("📄 Wrote {}", artifact.filename);
                    report.written.push(artifact.filename.clone());
                }
                Err(e) => {
                    tracing::warn!("⚠️ Failed to write {}: {}", artifact.filename, e);
                    report.failures.push(EmitFailure {
                        filename: artifact.filename.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        println!("Finished: {}", report.summary());
        Ok(report)
    }
}
