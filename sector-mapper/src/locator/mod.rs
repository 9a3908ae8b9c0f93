mod entity_locator;
mod locate_outcome;

pub use entity_locator::Locator;
pub use locate_outcome::LocateOutcome;
