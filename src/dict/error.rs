#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HashError {
    #[error("[Dict]Invalid Capacity: {0}")]
    InvalidCapacity(usize),
    #[error("[Dict]Empty Key")]
    EmptyKey,
}
