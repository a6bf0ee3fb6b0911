pub mod config;
pub mod format;
pub mod report;

pub use config::{AppConfig, CONFIG_ENV};
pub use format::OutputFormat;
pub use report::{ConversionReport, FieldReport, ModelRender};
