use projection::{LonLat, Projection, Tile};

fn main() {
    tracing_subscriber::fmt().init();

    let min_x_in_domain = 0.0;
    let max_x_in_domain = 1000.0;

    let min_y_in_domain = -1.0;
    let max_y_in_domain = 1.0;

    let width_in_pixels = 1000.0;
    let height_in_pixels = 1000.0;

    let projection = match Projection::new(
        width_in_pixels,
        height_in_pixels,
        min_x_in_domain,
        max_x_in_domain,
        min_y_in_domain,
        max_y_in_domain,
    ) {
        Ok(projection) => projection,
        Err(e) => {
            println!("Error building projection: {}", e);
            return;
        }
    };

    println!("Domain extent:     {:?}", projection.domain_extent());
    println!("Pixel viewport:    {:?}", projection.pixel_viewport());
    println!("Geographic bounds: {:?}", projection.geographic_bounds());

    println!("-----------------------------------");
    // Bottom left of the screen
    let bottom_left_in_meters =
        projection.project_domain_xy_to_web_mercator_xy(min_x_in_domain, min_y_in_domain);
    let bottom_left_in_lon_lat =
        projection.convert_domain_xy_to_lon_lat(min_x_in_domain, min_y_in_domain);
    println!("Bottom left in meters:  {:?}", bottom_left_in_meters);
    println!("Bottom left in lon/lat: {:?}", bottom_left_in_lon_lat);

    println!("-----------------------------------");
    // Center of the screen
    let center_x = (max_x_in_domain + min_x_in_domain) / 2.0;
    let center_y = (max_y_in_domain + min_y_in_domain) / 2.0;
    let center_in_meters = projection.project_domain_xy_to_web_mercator_xy(center_x, center_y);
    let center_in_lon_lat = projection.convert_domain_xy_to_lon_lat(center_x, center_y);
    println!("Center in meters:  {:?}", center_in_meters);
    println!("Center in lon/lat: {:?}", center_in_lon_lat);

    println!("-----------------------------------");
    // Top right of the screen
    let top_right_in_meters =
        projection.project_domain_xy_to_web_mercator_xy(max_x_in_domain, max_y_in_domain);
    let top_right_in_lon_lat =
        projection.convert_domain_xy_to_lon_lat(max_x_in_domain, max_y_in_domain);
    println!("Top right in meters:  {:?}", top_right_in_meters);
    println!("Top right in lon/lat: {:?}", top_right_in_lon_lat);

    println!("-----------------------------------");
    // The single zoom-0 tile covers the whole domain
    let entire_domain = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(0, 0, 0));
    println!("Zoom 0 tile (0, 0): {:?}", entire_domain);

    // The four zoom-1 quadrants
    for (tile_x, tile_y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let bbox = projection.convert_tile_xyz_to_domain_bbox(&Tile::new(tile_x, tile_y, 1));
        println!("Zoom 1 tile ({}, {}): {:?}", tile_x, tile_y, bbox);
    }

    println!("-----------------------------------");
    let null_island = LonLat::new(0.0, 0.0);
    let domain = projection.convert_lon_lat_to_domain_xy(null_island.longitude, null_island.latitude);
    println!("Null island in domain: {:?}", domain);
}
