//! Basic walk-through: train a table, insert points, query them back.
//!
//! Run with: cargo run --example getting_started

use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel, Result};

fn main() -> Result<()> {
    env_logger::init();

    // Map city latitudes (roughly 29..48 in this sample) onto buckets 0..19.
    let inputs: Vec<f64> = (29..49).map(|lat| lat as f64).collect();
    let targets: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &inputs, &targets)?;

    println!(
        "trained table: capacity {}, window {:?}",
        map.capacity(),
        map.prediction_bounds()
    );

    let cities = [
        (1u64, 40.7128, -74.0060, "New York"),
        (2, 41.8781, -87.6298, "Chicago"),
        (3, 29.7604, -95.3698, "Houston"),
        (4, 37.7749, -122.4194, "San Francisco"),
        (5, 47.6062, -122.3321, "Seattle"),
    ];
    for (id, lat, lon, name) in &cities {
        map.insert(IndexedPoint::new(*id, *lat, *lon))?;
        println!("inserted {} at ({}, {})", name, lat, lon);
    }

    // Exact lookup requires the originally stored coordinates.
    if let Some(found) = map.point_search(40.7128, -74.0060) {
        println!("point search hit: id {}", found.id);
    }

    // Latitude band scan with a longitude filter.
    if let Some(hits) = map.range_search([35.0, -130.0], [45.0, -70.0])? {
        println!("range scan found {} points:", hits.len());
        for p in &hits {
            println!("  id {} at ({}, {})", p.id, p.lat(), p.lon());
        }
    }

    assert!(map.remove(29.7604, -95.3698));
    println!("removed Houston; {} points remain", map.len());

    println!("{}", map.stats());
    Ok(())
}
