pub mod creator;
pub mod engine;
pub mod templates;
pub mod toolchain;

pub use crate::domain::model::{BatchReport, ProjectOutcome, ProjectRequest, TemplateContext};
pub use crate::domain::ports::Toolchain;
pub use crate::utils::error::Result;
