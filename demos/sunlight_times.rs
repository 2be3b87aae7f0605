//! All fourteen sunlight phases for one day, printed in local time.
//!
//! Shows the polar behaviour as well: the Tromsø entry reports most phases
//! as not occurring around midsummer.

use chrono::NaiveDate;
use chrono_tz::Tz;
use sunlight::{times, PhaseEvent};

struct Location {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let locations = [
        Location {
            name: "Berlin, Germany",
            latitude: 52.52,
            longitude: 13.405,
            timezone: "Europe/Berlin",
        },
        Location {
            name: "Tromsø, Norway (Arctic)",
            latitude: 69.65,
            longitude: 18.96,
            timezone: "Europe/Oslo",
        },
        Location {
            name: "Quito, Ecuador (Equator)",
            latitude: -0.18,
            longitude: -78.47,
            timezone: "America/Guayaquil",
        },
    ];

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    for location in &locations {
        let tz: Tz = location.timezone.parse()?;
        let result = times::sunlight_times(date, location.latitude, location.longitude, &tz)?;

        println!("=== {} ({}) ===", location.name, date);
        for (phase, event) in result.iter() {
            match event {
                PhaseEvent::Occurs(instant) => {
                    println!("{:<16} {}", phase.to_string(), instant.format("%H:%M:%S %Z"));
                }
                PhaseEvent::DoesNotOccur => {
                    println!("{:<16} does not occur", phase.to_string());
                }
            }
        }
        println!();
    }

    Ok(())
}
