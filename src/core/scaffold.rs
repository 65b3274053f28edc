use crate::core::templates;
use crate::core::{Artifact, ConfigProvider, Generator, Storage};
use crate::utils::error::Result;

pub struct ScaffoldPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ScaffoldPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Generator for ScaffoldPipeline<S, C> {
    fn plan(&self) -> Vec<Artifact> {
        let filter = self.config.artifact_filter();
        let mut artifacts = templates::builtin_artifacts();

        if !filter.is_empty() {
            artifacts.retain(|a| filter.iter().any(|name| name == &a.filename));
        }

        tracing::debug!("Planned {} artifacts for emission", artifacts.len());
        artifacts
    }

    async fn emit(&self, artifact: &Artifact) -> Result<()> {
        tracing::debug!("Emitting artifact: {}", artifact.filename);
        self.storage
            .write_file(&artifact.filename, artifact.content.as_bytes())
            .await
    }
}
