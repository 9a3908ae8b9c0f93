mod mapper_config_error;
mod sector_mapper_config;

pub use mapper_config_error::MapperConfigError;
pub use sector_mapper_config::SectorMapperConfig;
