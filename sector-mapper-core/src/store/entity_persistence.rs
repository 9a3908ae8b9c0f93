use super::PersistenceError;
use crate::model::entity::Entity;

/// backing storage for the entity store. called once on startup and after
/// every mutation; callers treat failures as recoverable.
pub trait EntityPersistence {
    fn load(&self) -> Result<Vec<Entity>, PersistenceError>;

    fn save(&mut self, entities: &[Entity]) -> Result<(), PersistenceError>;
}
