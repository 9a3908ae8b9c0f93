use crate::model::entity::EntityId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("an entity with id {0} already exists")]
    DuplicateId(EntityId),
    #[error("no entity with id {0}")]
    EntityNotFound(EntityId),
}
