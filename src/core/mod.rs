pub mod engine;
pub mod scaffold;
pub mod templates;

pub use crate::domain::model::{Artifact, EmitFailure, ScaffoldReport};
pub use crate::domain::ports::{ConfigProvider, Generator, Storage};
pub use crate::utils::error::Result;
