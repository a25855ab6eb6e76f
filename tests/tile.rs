#[cfg(test)]
mod tests {
    use projection::{Projection, Tile, TileGeometry};
    use tracing::info;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn default_projection() -> Projection {
        Projection::new(1000.0, 1000.0, 0.0, 1000.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_zoom_zero_tile_covers_domain() {
        init();
        let projection = default_projection();

        let bbox = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(0, 0, 0));
        info!("zoom 0 tile in domain: {:?}", bbox);

        assert!(approx_equal(bbox.min_x, 0.0, 1e-6));
        assert!(approx_equal(bbox.min_y, -1.0, 1e-6));
        assert!(approx_equal(bbox.max_x, 1000.0, 1e-6));
        assert!(approx_equal(bbox.max_y, 1.0, 1e-6));
    }

    #[test]
    fn test_zoom_one_quadrants_tile_the_domain() {
        init();
        let projection = default_projection();

        let top_left = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(0, 0, 1));
        let top_right = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(1, 0, 1));
        let bottom_left = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(0, 1, 1));
        let bottom_right = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(1, 1, 1));

        // Union equals the zoom-0 footprint.
        let min_x = top_left.min_x.min(bottom_left.min_x);
        let min_y = bottom_left.min_y.min(bottom_right.min_y);
        let max_x = top_right.max_x.max(bottom_right.max_x);
        let max_y = top_left.max_y.max(top_right.max_y);
        assert!(approx_equal(min_x, 0.0, 1e-6));
        assert!(approx_equal(min_y, -1.0, 1e-6));
        assert!(approx_equal(max_x, 1000.0, 1e-6));
        assert!(approx_equal(max_y, 1.0, 1e-6));

        // Adjacent tiles share exact boundary coordinates: the vertical
        // seam is the antimeridian-to-Greenwich midline, the horizontal
        // seam the equator.
        assert!(approx_equal(top_left.max_x, top_right.min_x, 1e-9));
        assert!(approx_equal(bottom_left.max_x, bottom_right.min_x, 1e-9));
        assert!(approx_equal(top_left.min_y, bottom_left.max_y, 1e-9));
        assert!(approx_equal(top_right.min_y, bottom_right.max_y, 1e-9));

        assert!(approx_equal(top_left.max_x, 500.0, 1e-6));
        assert!(approx_equal(top_left.min_y, 0.0, 1e-9));

        // Quadrant interiors do not overlap.
        assert!(!top_left.contains(bottom_right.get_center_point().x, bottom_right.get_center_point().y));
        assert!(top_left.intersects(&top_right));
    }

    #[test]
    fn test_deeper_tile_nests_in_parent() {
        init();
        let projection = default_projection();

        let parent = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(2, 1, 2));
        let child = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(4, 2, 3));

        assert!(parent.contains(child.min_x, child.min_y));
        assert!(parent.contains(child.max_x, child.max_y));
        assert!(approx_equal(parent.min_x, child.min_x, 1e-9));
        assert!(approx_equal(parent.max_y, child.max_y, 1e-9));
    }

    #[test]
    fn test_out_of_range_tile_extrapolates() {
        init();
        let projection = default_projection();

        // Column past the pyramid edge lands east of the domain instead of
        // failing.
        let bbox = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(2, 0, 1));
        assert!(bbox.min_x >= 1000.0 - 1e-6);
        assert!(bbox.min_x.is_finite() && bbox.max_x.is_finite());
    }

    #[test]
    fn test_tile_bounding_box_matches_lookup() {
        init();

        let zoom_level = 10;
        let tile_x = TileGeometry::longitude_to_tile_x(77.5946, zoom_level);
        let tile_y = TileGeometry::latitude_to_tile_y(12.9716, zoom_level);
        let tile = Tile::new(tile_x, tile_y, zoom_level);

        let bounds = tile.get_bounding_box();
        info!("tile {:?} covers {:?}", tile, bounds);
        assert!(bounds.west_longitude <= 77.5946 && 77.5946 < bounds.east_longitude);
        assert!(bounds.south_latitude <= 12.9716 && 12.9716 <= bounds.north_latitude);
        assert!(bounds.west_longitude < bounds.east_longitude);
        assert!(bounds.south_latitude < bounds.north_latitude);
    }
}
