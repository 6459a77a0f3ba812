use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },

    #[error("No text found in {0}")]
    EmptyText(String),

    #[error("Source too large: {size} bytes (max: {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("All {} strategies failed: {}", .0.len(), .0.join("; "))]
    AllStrategiesFailed(Vec<String>),
}
