mod group_view;
mod list_item;
mod list_panel_state;

pub use group_view::GroupView;
pub use list_item::ListItem;
pub use list_panel_state::{ListPanel, DEFAULT_INITIAL_CAP, DEFAULT_LOAD_MORE_BATCH};
