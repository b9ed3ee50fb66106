//! Region containment: store rectangles and find one covering a query point.
//!
//! Run with: cargo run --example region_lookup

use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel, Region, Result};

fn main() -> Result<()> {
    env_logger::init();

    let sample: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let mut map: LearnedHashMap<LinearModel, Region> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample)?;

    // A strip of adjacent coverage cells along the latitude axis.
    for i in 0..8u64 {
        let base = i as f64 * 5.0;
        map.insert(Region::new(
            IndexedPoint::new(i, base, 0.0),
            IndexedPoint::new(i, base + 4.5, 20.0),
        ))?;
    }
    println!("stored {} regions across {} buckets", map.len(), map.capacity());

    // A direct hit: the query's bucket holds the containing region.
    if let Some(region) = map.region_search(12.0, 10.0) {
        println!(
            "query (12.0, 10.0) covered by region {} with lat bounds {:?}",
            region.a.id,
            region.lat_bounds()
        );
    }

    // A ring hit: this rectangle's first corner hashes far from the query,
    // so the expanding ring has to walk outward to find it.
    map.insert(Region::new(
        IndexedPoint::new(99, 39.0, 30.0),
        IndexedPoint::new(99, 20.0, 60.0),
    ))?;
    if let Some(region) = map.region_search(22.0, 45.0) {
        println!("query (22.0, 45.0) covered by region {}", region.a.id);
    }

    // No stored rectangle covers this point.
    if map.region_search(12.0, 90.0).is_none() {
        println!("query (12.0, 90.0) is uncovered");
    }

    println!("{}", map.stats().to_json().expect("stats serialization"));
    Ok(())
}
