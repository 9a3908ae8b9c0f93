use geo::{Destination, Haversine, LineString, Point, Polygon};
use uom::si::f64::Length;
use uom::si::length::meter;

/// number of arc segments used when approximating a sector wedge.
pub const SECTOR_ARC_STEPS: usize = 15;

pub fn is_valid_lat_lng(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// true when both lat/lon components of two positions differ by no more than `epsilon` degrees.
pub fn within_epsilon(a: &Point<f64>, b: &Point<f64>, epsilon: f64) -> bool {
    (a.x() - b.x()).abs() <= epsilon && (a.y() - b.y()).abs() <= epsilon
}

/// builds the wedge polygon of an antenna sector: apex at the site, arc of
/// `steps` segments spanning `azimuth ± beamwidth / 2` at `range`. arc points
/// are great-circle destinations from the apex.
pub fn sector_wedge(
    origin: &Point<f64>,
    azimuth: f64,
    beamwidth: f64,
    range: Length,
    steps: usize,
) -> Polygon<f64> {
    let steps = steps.max(1);
    let meters = range.get::<meter>();
    let start = azimuth - beamwidth / 2.0;
    let end = azimuth + beamwidth / 2.0;
    let mut ring = Vec::with_capacity(steps + 3);
    ring.push(origin.0);
    for i in 0..=steps {
        let bearing = start + (i as f64 / steps as f64) * (end - start);
        ring.push(Haversine.destination(*origin, bearing, meters).0);
    }
    ring.push(origin.0);
    Polygon::new(LineString::new(ring), vec![])
}
