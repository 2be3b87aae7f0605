//! Basic sun position calculation for the current moment at a few locations.

use chrono::Utc;
use sunlight::position;

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Hamburg, Germany",
            latitude: 53.55,
            longitude: 9.99,
        },
        City {
            name: "San Francisco, USA",
            latitude: 37.7749,
            longitude: -122.4194,
        },
        City {
            name: "Sydney, Australia",
            latitude: -33.87,
            longitude: 151.21,
        },
    ];

    let now = Utc::now();
    println!("Sun position at {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    for city in &cities {
        let position = position::sun_position(now, city.latitude, city.longitude)?;

        println!("=== {} ===", city.name);
        println!(
            "Altitude: {:.2}° ({})",
            position.altitude().to_degrees(),
            if position.is_sun_up() {
                "above horizon"
            } else {
                "below horizon"
            }
        );
        println!(
            "Azimuth: {:.2}° from north",
            position.azimuth_from_north().to_degrees()
        );
        println!();
    }

    Ok(())
}
