use crate::domain::model::Artifact;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    /// Filenames to emit; an empty slice means every built-in artifact.
    fn artifact_filter(&self) -> &[String];
}

#[async_trait]
pub trait Generator: Send + Sync {
    fn plan(&self) -> Vec<Artifact>;
    async fn emit(&self, artifact: &Artifact) -> Result<()>;
}
