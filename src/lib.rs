mod errors;
mod mercator;
mod projection;
mod tile;
mod transform;
mod types;

// Public API surface
pub use errors::InvalidDomainError;
pub use mercator::SphericalMercator;
pub use projection::Projection;
pub use tile::{Tile, TileGeometry};
pub use transform::TransformationParams;
pub use types::{
    DomainBbox, DomainExtent, DomainPoint, GeographicBounds, LonLat, MercatorPoint, PixelPoint,
    PixelViewport,
};
