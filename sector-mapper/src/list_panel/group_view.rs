use super::ListItem;
use sector_mapper_core::model::entity::EntityCategory;

/// a group as the list panel shows it: at most the revealed number of items,
/// plus how many more a "load more" control would bring in.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub category: EntityCategory,
    pub name: String,
    /// entities in the group matching the current filter
    pub total: usize,
    pub items: Vec<ListItem>,
    pub remaining: usize,
    /// true when the group's markers are hidden from the map
    pub hidden: bool,
}

impl GroupView {
    pub fn visible(&self) -> usize {
        self.items.len()
    }
}
