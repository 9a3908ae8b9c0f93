use super::{EntityPersistence, PersistenceError};
use crate::model::entity::Entity;

/// in-process persistence, mostly for tests and dry runs. saves and loads can be
/// made to fail to exercise the recovery paths of callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    entities: Vec<Entity>,
    pub fail_loads: bool,
    pub fail_saves: bool,
    save_count: usize,
}

impl MemoryPersistence {
    pub fn new(entities: Vec<Entity>) -> MemoryPersistence {
        MemoryPersistence {
            entities,
            ..Default::default()
        }
    }

    pub fn stored(&self) -> &[Entity] {
        &self.entities
    }

    /// number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl EntityPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<Entity>, PersistenceError> {
        if self.fail_loads {
            return Err(PersistenceError::Unavailable(String::from(
                "memory store configured to fail loads",
            )));
        }
        Ok(self.entities.clone())
    }

    fn save(&mut self, entities: &[Entity]) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Unavailable(String::from(
                "memory store configured to fail saves",
            )));
        }
        self.entities = entities.to_vec();
        self.save_count += 1;
        Ok(())
    }
}
