use tracing::debug;

use crate::errors::InvalidDomainError;
use crate::mercator::SphericalMercator;
use crate::tile::Tile;
use crate::transform::TransformationParams;
use crate::types::{
    DomainBbox, DomainExtent, DomainPoint, GeographicBounds, LonLat, MercatorPoint, PixelViewport,
};

/// Converts between the application's domain coordinate system, Web
/// Mercator meters, geographic longitude/latitude, tile addresses and
/// viewport pixels.
///
/// The configured [`GeographicBounds`] fix which portion of the globe maps
/// onto the full domain extent. All fields are set once at construction;
/// every conversion is a pure function of the stored extents and the call
/// arguments, so a `Projection` is safely shared across threads.
#[derive(Debug, Clone)]
pub struct Projection {
    viewport: PixelViewport,
    domain: DomainExtent,
    geographic_bounds: GeographicBounds,
    mercator: SphericalMercator,
    mercator_min_x: f64,
    mercator_min_y: f64,
    mercator_max_x: f64,
    mercator_max_y: f64,
}

impl Projection {
    /// Build a projection mapping the full Web-Mercator-safe world onto
    /// the given domain extent.
    pub fn new(
        width_in_pixels: f64,
        height_in_pixels: f64,
        min_x_in_domain: f64,
        max_x_in_domain: f64,
        min_y_in_domain: f64,
        max_y_in_domain: f64,
    ) -> Result<Self, InvalidDomainError> {
        Self::with_geographic_bounds(
            width_in_pixels,
            height_in_pixels,
            min_x_in_domain,
            max_x_in_domain,
            min_y_in_domain,
            max_y_in_domain,
            GeographicBounds::default(),
        )
    }

    /// Build a projection mapping `geographic_bounds` onto the given
    /// domain extent.
    pub fn with_geographic_bounds(
        width_in_pixels: f64,
        height_in_pixels: f64,
        min_x_in_domain: f64,
        max_x_in_domain: f64,
        min_y_in_domain: f64,
        max_y_in_domain: f64,
        geographic_bounds: GeographicBounds,
    ) -> Result<Self, InvalidDomainError> {
        let viewport = PixelViewport::new(width_in_pixels, height_in_pixels)?;
        let domain = DomainExtent::new(
            min_x_in_domain,
            max_x_in_domain,
            min_y_in_domain,
            max_y_in_domain,
        )?;

        let mercator = SphericalMercator::new();

        let (mercator_min_x, mercator_min_y) = mercator.forward(
            geographic_bounds.west_longitude,
            geographic_bounds.south_latitude,
        );
        let (mercator_max_x, mercator_max_y) = mercator.forward(
            geographic_bounds.east_longitude,
            geographic_bounds.north_latitude,
        );

        debug!(
            "domain extent {}x{} mapped to mercator meters x [{}, {}], y [{}, {}]",
            domain.width(),
            domain.height(),
            mercator_min_x,
            mercator_max_x,
            mercator_min_y,
            mercator_max_y
        );

        Ok(Self {
            viewport,
            domain,
            geographic_bounds,
            mercator,
            mercator_min_x,
            mercator_min_y,
            mercator_max_x,
            mercator_max_y,
        })
    }

    pub fn domain_extent(&self) -> &DomainExtent {
        &self.domain
    }

    pub fn pixel_viewport(&self) -> &PixelViewport {
        &self.viewport
    }

    pub fn geographic_bounds(&self) -> &GeographicBounds {
        &self.geographic_bounds
    }

    /// The affine map sending the domain extent onto the mercator-meter
    /// rectangle of the configured geographic bounds. Derived on every
    /// call from the immutable construction parameters.
    pub fn get_transformation_params(&self) -> TransformationParams {
        TransformationParams::derive(
            &self.domain,
            self.mercator_min_x,
            self.mercator_min_y,
            self.mercator_max_x,
            self.mercator_max_y,
        )
    }

    pub fn project_domain_xy_to_web_mercator_xy(&self, domain_x: f64, domain_y: f64) -> MercatorPoint {
        let (x, y) = self.get_transformation_params().apply(domain_x, domain_y);
        MercatorPoint { x, y }
    }

    pub fn reverse_project_web_mercator_xy_to_domain_xy(
        &self,
        meters_x: f64,
        meters_y: f64,
    ) -> DomainPoint {
        let (x, y) = self.get_transformation_params().invert(meters_x, meters_y);
        DomainPoint { x, y }
    }

    /// Domain coordinates to geographic degrees, e.g. to place a domain
    /// data point on a map.
    pub fn convert_domain_xy_to_lon_lat(&self, domain_x: f64, domain_y: f64) -> LonLat {
        let meters = self.project_domain_xy_to_web_mercator_xy(domain_x, domain_y);
        let (longitude, latitude) = self.mercator.inverse(meters.x, meters.y);
        LonLat {
            longitude,
            latitude,
        }
    }

    /// Geographic degrees to domain coordinates, e.g. to turn a map
    /// location into a domain query value.
    pub fn convert_lon_lat_to_domain_xy(&self, longitude: f64, latitude: f64) -> DomainPoint {
        let (meters_x, meters_y) = self.mercator.forward(longitude, latitude);
        self.reverse_project_web_mercator_xy_to_domain_xy(meters_x, meters_y)
    }

    /// Footprint of a map tile in domain coordinates, e.g. the query range
    /// a tile-addressed data source covers in the domain's axes.
    pub fn convert_tile_xyz_to_domain_bbox(&self, tile: &Tile) -> DomainBbox {
        let bounds = tile.get_bounding_box();

        let (west_meters, south_meters) = self
            .mercator
            .forward(bounds.west_longitude, bounds.south_latitude);
        let (east_meters, north_meters) = self
            .mercator
            .forward(bounds.east_longitude, bounds.north_latitude);

        let min = self.reverse_project_web_mercator_xy_to_domain_xy(west_meters, south_meters);
        let max = self.reverse_project_web_mercator_xy_to_domain_xy(east_meters, north_meters);

        DomainBbox {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    /// Viewport pixel position to domain coordinates, given the geographic
    /// bounds currently visible in the viewport.
    ///
    /// `view` is a call-time argument, independent of the projection's own
    /// configured [`GeographicBounds`]: the configured bounds fix the
    /// domain-to-world mapping, while `view` describes what is on screen
    /// right now (it changes as the map pans and zooms).
    pub fn convert_pixel_xy_to_domain_xy(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        view: &GeographicBounds,
    ) -> DomainPoint {
        let (west_meters, south_meters) = self
            .mercator
            .forward(view.west_longitude, view.south_latitude);
        let (east_meters, north_meters) = self
            .mercator
            .forward(view.east_longitude, view.north_latitude);

        // Pixel y grows downward while mercator y grows northward, hence
        // the negated y scale.
        let scale_x = self.viewport.width / (east_meters - west_meters);
        let scale_y = -self.viewport.height / (north_meters - south_meters);

        let translate_x = -(scale_x * west_meters);
        let translate_y = self.viewport.height - scale_y * south_meters;

        let view_params = TransformationParams::new(scale_x, scale_y, translate_x, translate_y);
        let (meters_x, meters_y) = view_params.invert(pixel_x, pixel_y);

        self.reverse_project_web_mercator_xy_to_domain_xy(meters_x, meters_y)
    }
}
