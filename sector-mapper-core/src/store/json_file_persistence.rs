use super::{EntityPersistence, PersistenceError};
use crate::model::entity::Entity;
use std::path::{Path, PathBuf};

/// stores the entity list as a pretty-printed JSON array in a single file.
/// a missing file loads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> JsonFilePersistence {
        JsonFilePersistence { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntityPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<Entity>, PersistenceError> {
        if !self.path.exists() {
            log::info!("no entity file at {}, starting empty", self.path.display());
            return Ok(vec![]);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| PersistenceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        if contents.trim().is_empty() {
            return Ok(vec![]);
        }
        serde_json::from_str(&contents).map_err(|e| PersistenceError::Decode {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&mut self, entities: &[Entity]) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string_pretty(entities)
            .map_err(|e| PersistenceError::Encode { source: e })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&self.path, contents).map_err(|e| PersistenceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!("saved {} entities to {}", entities.len(), self.path.display());
        Ok(())
    }
}
