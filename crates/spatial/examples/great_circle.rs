//! Prints spherical and ellipsoidal distances between two airports,
//! plus the ECEF/ENU view of the same pair.
//!
//! Run with: cargo run -p spatial --example great_circle

use spatial::geodesy::{haversine, vincenty, Enu, Geodetic};

fn main() -> Result<(), spatial::GeomError> {
    let sfo = Geodetic::from_degrees(37.6213, -122.3790, 4.0)?;
    let lhr = Geodetic::from_degrees(51.4700, -0.4543, 25.0)?;

    let sphere = haversine(&sfo, &lhr);
    println!("haversine:        {:>12.1} m", sphere);

    let geodesic = vincenty(&sfo, &lhr, 1e-12, 200)?;
    println!("vincenty:         {:>12.1} m", geodesic.distance);
    println!(
        "initial azimuth:  {:>12.6} deg",
        geodesic.initial_azimuth.to_degrees()
    );
    println!(
        "final azimuth:    {:>12.6} deg",
        geodesic.final_azimuth.to_degrees()
    );

    let sfo_ecef = sfo.to_ecef();
    let lhr_ecef = lhr.to_ecef();
    println!("ecef chord:       {:>12.1} m", sfo_ecef.distance(&lhr_ecef));

    let enu = Enu::from_ecef(&lhr_ecef, &sfo_ecef);
    println!(
        "enu from SFO:     east {:.1} m, north {:.1} m, up {:.1} m",
        enu.east, enu.north, enu.up
    );
    println!("slant range:      {:>12.1} m", enu.range());

    Ok(())
}
