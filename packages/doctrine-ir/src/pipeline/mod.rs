//! Pipeline orchestration

pub mod document_pipeline;
pub mod report;

pub use document_pipeline::DocumentPipeline;
pub use report::ProcessingReport;
