use crate::errors::InvalidDomainError;
use crate::mercator::SphericalMercator;

/// Rectangular extent of the application's domain coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DomainExtent {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, InvalidDomainError> {
        if max_x - min_x <= 0.0 || max_y - min_y <= 0.0 {
            return Err(InvalidDomainError::new(
                "domain extent must have a positive span on both axes",
            ));
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Pixel dimensions of the viewport, origin at top-left, y increasing
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelViewport {
    pub width: f64,
    pub height: f64,
}

impl PixelViewport {
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidDomainError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(InvalidDomainError::new(
                "viewport dimensions must be positive",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Geographic rectangle in degrees.
///
/// The default covers the full Web-Mercator-safe world, the portion of the
/// globe the projection can represent without going to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicBounds {
    pub west_longitude: f64,
    pub south_latitude: f64,
    pub east_longitude: f64,
    pub north_latitude: f64,
}

impl GeographicBounds {
    pub fn new(
        west_longitude: f64,
        south_latitude: f64,
        east_longitude: f64,
        north_latitude: f64,
    ) -> Self {
        Self {
            west_longitude,
            south_latitude,
            east_longitude,
            north_latitude,
        }
    }

    pub fn get_center_point(&self) -> LonLat {
        LonLat {
            longitude: (self.west_longitude + self.east_longitude) / 2.0,
            latitude: (self.south_latitude + self.north_latitude) / 2.0,
        }
    }
}

impl Default for GeographicBounds {
    fn default() -> Self {
        Self {
            west_longitude: -180.0,
            south_latitude: SphericalMercator::LATITUDE_MIN,
            east_longitude: 180.0,
            north_latitude: SphericalMercator::LATITUDE_MAX,
        }
    }
}

/// Point in domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPoint {
    pub x: f64,
    pub y: f64,
}

/// Point in projected Web Mercator meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

/// Point in viewport pixels, origin at top-left, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Axis-aligned bounding box in domain units, e.g. the footprint of a map
/// tile translated into the domain's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBbox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl DomainBbox {
    pub fn get_center_point(&self) -> DomainPoint {
        DomainPoint {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn intersects(&self, other: &DomainBbox) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }
}
