//! Command implementations

pub mod analyze;
pub mod decode;

pub use analyze::{AnalysisResult, GroupAnalysis, analyze_word};
pub use decode::{DecodeRequest, DecodeResult, OutputMode, run_decode};
