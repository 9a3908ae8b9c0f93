//! spherical web mercator projection into the pixel space of a 256px tile pyramid.
use geo::Point;
use std::f64::consts::PI;

pub const TILE_SIZE_PX: f64 = 256.0;

/// latitude limit of the square web mercator world
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// width and height in pixels of the whole world at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE_PX * 2f64.powi(i32::from(zoom))
}

/// projects a lon/lat point to pixel coordinates at `zoom`, origin top-left.
pub fn project(point: &Point<f64>, zoom: u8) -> [f64; 2] {
    let size = world_size(zoom);
    let lat = point.y().clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.x() + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    [x, y]
}
