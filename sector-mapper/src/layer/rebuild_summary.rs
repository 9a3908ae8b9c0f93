use sector_mapper_core::model::entity::EntityId;

/// what a layer rebuild placed and what it left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebuildSummary {
    pub flat: usize,
    pub clustered: usize,
    /// entities left out because their group is hidden
    pub hidden: usize,
    /// entities left out because their coordinates are unusable
    pub skipped: Vec<EntityId>,
}

impl RebuildSummary {
    pub fn placed(&self) -> usize {
        self.flat + self.clustered
    }
}
