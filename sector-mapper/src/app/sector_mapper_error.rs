use crate::config::MapperConfigError;
use sector_mapper_core::model::entity::{EntityError, ValidationError};
use sector_mapper_core::store::{PersistenceError, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectorMapperError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Entity(#[from] EntityError),
    #[error(transparent)]
    Configuration(#[from] MapperConfigError),
}
