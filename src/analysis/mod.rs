//! Analysis module - Risk classification and report assembly
//!
//! - [`classifier`] - Pure risk-scoring policy over identity + scopes
//! - [`report`] - Per-token analysis results and the aggregated scan report
//! - [`pipeline`] - Orchestrates detection, resolution and classification

pub mod classifier;
pub mod pipeline;
pub mod report;

pub use classifier::{Classification, Classifier, IdentityType, RiskLevel};
pub use pipeline::Pipeline;
pub use report::{ScanReport, TokenAnalysis};
