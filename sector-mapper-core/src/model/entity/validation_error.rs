use thiserror::Error;

/// reasons a create/edit form submission is rejected before touching the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a name is required")]
    MissingName,
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("invalid color '{0}', expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("invalid icon size {0}")]
    InvalidIconSize(u32),
    #[error("invalid sector at position {index}: {reason}")]
    InvalidSector { index: usize, reason: String },
}
