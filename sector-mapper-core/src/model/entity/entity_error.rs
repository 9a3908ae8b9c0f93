use super::EntityId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityError {
    #[error("entity {id} has non-finite coordinates ({latitude}, {longitude})")]
    NonFiniteCoordinate {
        id: EntityId,
        latitude: f64,
        longitude: f64,
    },
    #[error("entity {id} has coordinates outside WGS84 bounds ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        id: EntityId,
        latitude: f64,
        longitude: f64,
    },
}
