mod mapper_cli;
mod notifier;
mod sector_mapper_app;
mod sector_mapper_error;

pub use mapper_cli::{MapperCli, MapperOperation};
pub use notifier::{LogNotifier, NotificationKind, Notifier, RecordingNotifier};
pub use sector_mapper_app::SectorMapperApp;
pub use sector_mapper_error::SectorMapperError;
