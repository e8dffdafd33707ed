pub mod collector;
pub mod errors;
pub mod logger;
pub mod reporting;
pub mod targets;
pub mod utils;

pub use collector::{collect_files, CollectorConfig};
pub use errors::CollectorError;
pub use targets::{TargetSet, DEFAULT_TARGET_FILENAMES};
