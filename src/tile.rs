use crate::mercator::SphericalMercator;
use crate::types::GeographicBounds;

const PI: f64 = std::f64::consts::PI;

/// Tile address in the standard power-of-two tile pyramid: zoom level `z`
/// divides the world into `2^z x 2^z` tiles, rows increasing southward.
///
/// Indices outside `[0, 2^z)` are not rejected; the edge math extrapolates
/// deterministically past the world square.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub tile_x: i64,
    pub tile_y: i64,
    pub zoom_level: u8,
}

impl Tile {
    pub fn new(tile_x: i64, tile_y: i64, zoom_level: u8) -> Self {
        Self {
            tile_x,
            tile_y,
            zoom_level,
        }
    }

    /// Geographic bounds of this tile. Row `tile_y` is the tile's north
    /// edge and `tile_y + 1` its south edge.
    pub fn get_bounding_box(&self) -> GeographicBounds {
        GeographicBounds {
            west_longitude: TileGeometry::tile_x_to_longitude(self.tile_x, self.zoom_level),
            south_latitude: TileGeometry::tile_y_to_latitude(self.tile_y + 1, self.zoom_level),
            east_longitude: TileGeometry::tile_x_to_longitude(self.tile_x + 1, self.zoom_level),
            north_latitude: TileGeometry::tile_y_to_latitude(self.tile_y, self.zoom_level),
        }
    }
}

/// Edge math of the tile pyramid.
pub struct TileGeometry;

impl TileGeometry {
    pub fn tile_x_to_longitude(tile_x: i64, zoom_level: u8) -> f64 {
        let n = Self::tile_count(zoom_level) as f64;
        (tile_x as f64 / n) * 360.0 - 180.0
    }

    pub fn tile_y_to_latitude(tile_y: i64, zoom_level: u8) -> f64 {
        let n = Self::tile_count(zoom_level) as f64;
        let radians = (PI - (2.0 * PI * tile_y as f64) / n).sinh().atan();
        radians.to_degrees()
    }

    /// Column of the tile containing `longitude`, for index lookups.
    pub fn longitude_to_tile_x(longitude: f64, zoom_level: u8) -> i64 {
        let n = Self::tile_count(zoom_level);
        ((longitude + 180.0) / 360.0 * n as f64).floor() as i64
    }

    /// Row of the tile containing `latitude`, for index lookups. Unlike the
    /// edge conversions this clamps, first to the Mercator-safe latitude
    /// range and then to `[0, 2^z)`, so any latitude yields a real row.
    pub fn latitude_to_tile_y(latitude: f64, zoom_level: u8) -> i64 {
        let latitude = latitude
            .max(SphericalMercator::LATITUDE_MIN)
            .min(SphericalMercator::LATITUDE_MAX);

        let n = Self::tile_count(zoom_level);
        let lat_rad = latitude.to_radians();

        let y = 0.5 - lat_rad.sin().atanh() / (2.0 * PI);

        let tile_y = (y * n as f64).floor() as i64;
        tile_y.clamp(0, n - 1)
    }

    pub fn tile_count(zoom_level: u8) -> i64 {
        1i64 << zoom_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_zero_edges() {
        assert_relative_eq!(TileGeometry::tile_x_to_longitude(0, 0), -180.0);
        assert_relative_eq!(TileGeometry::tile_x_to_longitude(1, 0), 180.0);
        assert_relative_eq!(
            TileGeometry::tile_y_to_latitude(0, 0),
            SphericalMercator::LATITUDE_MAX,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            TileGeometry::tile_y_to_latitude(1, 0),
            SphericalMercator::LATITUDE_MIN,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zoom_one_shared_edges() {
        // The equator and the antimeridian split the four zoom-1 tiles.
        assert_relative_eq!(TileGeometry::tile_x_to_longitude(1, 1), 0.0);
        assert_relative_eq!(TileGeometry::tile_y_to_latitude(1, 1), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_edge_lookup_consistency() {
        for zoom_level in 0..=18u8 {
            let tile_x = TileGeometry::longitude_to_tile_x(12.5, zoom_level);
            let west = TileGeometry::tile_x_to_longitude(tile_x, zoom_level);
            let east = TileGeometry::tile_x_to_longitude(tile_x + 1, zoom_level);
            assert!(west <= 12.5 && 12.5 < east);

            let tile_y = TileGeometry::latitude_to_tile_y(48.2, zoom_level);
            let north = TileGeometry::tile_y_to_latitude(tile_y, zoom_level);
            let south = TileGeometry::tile_y_to_latitude(tile_y + 1, zoom_level);
            assert!(south <= 48.2 && 48.2 <= north);
        }
    }

    #[test]
    fn test_lookup_clamps_out_of_range_latitude() {
        let n = TileGeometry::tile_count(5);
        assert_eq!(TileGeometry::latitude_to_tile_y(90.0, 5), 0);
        assert_eq!(TileGeometry::latitude_to_tile_y(-90.0, 5), n - 1);
    }

    #[test]
    fn test_edges_extrapolate_out_of_range() {
        // Edge conversions never clamp; addresses past the pyramid keep
        // following the same formulas.
        assert_relative_eq!(TileGeometry::tile_x_to_longitude(4, 1), 540.0);
        let below = TileGeometry::tile_y_to_latitude(3, 1);
        assert!(below < SphericalMercator::LATITUDE_MIN);
    }
}
