use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperConfigError {
    #[error("{0}")]
    ConfigurationError(String),
}
