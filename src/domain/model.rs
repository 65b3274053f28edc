use serde::{Deserialize, Serialize};

/// One generated output file: a filename relative to the output directory
/// and its literal content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmitFailure {
    pub filename: String,
    pub reason: String,
}

/// Aggregate outcome of one scaffold run. A failed artifact never aborts
/// the batch; both successes and failures are recorded here.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub written: Vec<String>,
    pub failures: Vec<EmitFailure>,
}

impl ScaffoldReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("{}/{} artifacts written", self.written.len(), self.total())
    }
}
