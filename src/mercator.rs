//! Spherical (Web) Mercator projection, EPSG:3857.

const PI: f64 = std::f64::consts::PI;

/// Forward/inverse spherical Mercator projection between geographic
/// degrees and projected meters.
///
/// The projection is permissive: latitudes at or beyond the poles are not
/// clamped, the formulas extrapolate with whatever the floating-point math
/// yields. Callers that need the safe range use [`LATITUDE_MAX`] and
/// [`LATITUDE_MIN`].
///
/// [`LATITUDE_MAX`]: SphericalMercator::LATITUDE_MAX
/// [`LATITUDE_MIN`]: SphericalMercator::LATITUDE_MIN
#[derive(Debug, Clone, Copy)]
pub struct SphericalMercator;

impl SphericalMercator {
    /// Spherical earth radius in meters.
    pub const EARTH_RADIUS: f64 = 6_378_137.0;
    /// Edge of the projected world square: both axes span
    /// `[-MAX_EXTENT_METERS, MAX_EXTENT_METERS]`.
    pub const MAX_EXTENT_METERS: f64 = 20_037_508.342_789_244;
    /// Highest latitude where the projection stays within the world square.
    pub const LATITUDE_MAX: f64 = 85.0511287798066;
    pub const LATITUDE_MIN: f64 = -Self::LATITUDE_MAX;

    pub fn new() -> Self {
        Self
    }

    /// Forward projection: `(longitude, latitude)` in degrees to meters.
    pub fn forward(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let x = Self::EARTH_RADIUS * longitude.to_radians();
        let y = Self::EARTH_RADIUS * (PI / 4.0 + latitude.to_radians() / 2.0).tan().ln();
        (x, y)
    }

    /// Inverse projection: meters to `(longitude, latitude)` in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let longitude = (x / Self::EARTH_RADIUS).to_degrees();
        let latitude = (2.0 * (y / Self::EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        (longitude, latitude)
    }
}

impl Default for SphericalMercator {
    fn default() -> Self {
        Self::new()
    }
}
