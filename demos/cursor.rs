use projection::{GeographicBounds, PixelPoint, Projection};

const WIDTH_IN_PIXELS: f64 = 1000.0;
const HEIGHT_IN_PIXELS: f64 = 1000.0;

fn print_view(projection: &Projection, label: &str, view: &GeographicBounds) {
    let corners = [
        ("top left", PixelPoint { x: 0.0, y: 0.0 }),
        ("bottom left", PixelPoint { x: 0.0, y: HEIGHT_IN_PIXELS }),
        (
            "middle",
            PixelPoint {
                x: WIDTH_IN_PIXELS / 2.0,
                y: HEIGHT_IN_PIXELS / 2.0,
            },
        ),
        ("top right", PixelPoint { x: WIDTH_IN_PIXELS, y: 0.0 }),
        (
            "bottom right",
            PixelPoint {
                x: WIDTH_IN_PIXELS,
                y: HEIGHT_IN_PIXELS,
            },
        ),
    ];

    println!("-----------------------------------");
    println!("{} centered on {:?}", label, view.get_center_point());
    for (name, pixel) in corners {
        let domain = projection.convert_pixel_xy_to_domain_xy(pixel.x, pixel.y, view);
        println!("  {:12} -> {:?}", name, domain);
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let projection = match Projection::new(
        WIDTH_IN_PIXELS,
        HEIGHT_IN_PIXELS,
        0.0,
        1000.0,
        -1.0,
        1.0,
    ) {
        Ok(projection) => projection,
        Err(e) => {
            println!("Error building projection: {}", e);
            return;
        }
    };

    // Zoomed out to the whole world
    print_view(
        &projection,
        "world view",
        &GeographicBounds::new(-180.0, -90.0, 180.0, 90.0),
    );

    // Zoomed in on the south-west quarter
    print_view(
        &projection,
        "south-west view",
        &GeographicBounds::new(-180.0, -90.0, 0.0, 0.0),
    );

    // Zoomed in on the north-east quarter
    print_view(
        &projection,
        "north-east view",
        &GeographicBounds::new(0.0, 0.0, 180.0, 90.0),
    );
}
