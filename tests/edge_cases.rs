use geodex::{Axis, GeodexError, IndexedPoint, LearnedHashMap, LinearModel, Region};

/// Test 1: Large skewed dataset stress test
#[test]
fn test_large_skewed_dataset() {
    let sample: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");

    // 10K points crowded into a quarter of the trained window.
    for i in 0..10_000u64 {
        let lat = (i % 25) as f64;
        let lon = -74.0 + i as f64 * 0.0001;
        map.insert(IndexedPoint::new(i, lat, lon))
            .unwrap_or_else(|_| panic!("failed to insert point {}", i));
    }
    assert_eq!(map.len(), 10_000);

    let stats = map.stats();
    assert_eq!(stats.total_entries, 10_000);
    assert_eq!(stats.occupied_buckets, 25);
    assert!((stats.average_chain_len - 400.0).abs() < 1e-9);

    // Lookups stay exact inside long chains.
    let found = map
        .point_search(7.0, -74.0 + 7.0 * 0.0001)
        .expect("point not found");
    assert_eq!(found.id, 7);
}

/// Test 2: Extreme coordinate values
#[test]
fn test_extreme_coordinates() {
    // Window wide enough for the whole latitude domain.
    let model = LinearModel::from_coefficients(1.0, 0.0);
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::with_model(model, Axis::Latitude, -90, 90).expect("construction failed");

    let poles = [
        (1u64, 90.0, 0.0),
        (2, -90.0, 0.0),
        (3, 0.0, 180.0),
        (4, 0.0, -180.0),
    ];
    for (id, lat, lon) in poles {
        map.insert(IndexedPoint::new(id, lat, lon))
            .expect("insert failed");
    }

    assert_eq!(map.point_search(90.0, 0.0).expect("not found").id, 1);
    assert_eq!(map.point_search(-90.0, 0.0).expect("not found").id, 2);
    // The date-line points share bucket 90 and are told apart by longitude.
    assert_eq!(map.point_search(0.0, 180.0).expect("not found").id, 3);
    assert_eq!(map.point_search(0.0, -180.0).expect("not found").id, 4);
}

/// Test 3: Non-finite queries never panic
#[test]
fn test_non_finite_queries() {
    let sample = [0.0, 1.0, 2.0, 3.0];
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");
    map.insert(IndexedPoint::new(1, 1.0, 1.0)).expect("insert failed");

    assert!(map.point_search(f64::NAN, 1.0).is_none());
    assert!(map.point_search(f64::INFINITY, 1.0).is_none());
    assert!(!map.remove(f64::NAN, 1.0));
    assert!(
        map.range_search([f64::NAN, 0.0], [f64::NAN, 1.0])
            .expect("scan should not error")
            .is_none()
    );

    // Non-finite insert coordinates are rejected, not stored.
    assert!(map.insert(IndexedPoint::new(2, f64::NAN, 0.0)).is_err());
    assert_eq!(map.len(), 1);
}

/// Test 4: Single-bucket degenerate table
#[test]
fn test_single_bucket_table() {
    // A flat model chains every value into bucket 0.
    let model = LinearModel::from_coefficients(0.0, 0.0);
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::with_model(model, Axis::Latitude, 0, 0).expect("construction failed");
    assert_eq!(map.capacity(), 1);

    for i in 0..100u64 {
        map.insert(IndexedPoint::new(i, i as f64, 0.0))
            .expect("insert failed");
    }

    assert_eq!(map.point_search(63.0, 0.0).expect("not found").id, 63);
    let hits = map
        .range_search([10.0, -1.0], [19.0, 1.0])
        .expect("range scan failed")
        .expect("range scan found nothing");
    assert_eq!(hits.len(), 10);

    let stats = map.stats();
    assert_eq!(stats.occupied_buckets, 1);
    assert_eq!(stats.average_chain_len, 100.0);
}

/// Test 5: Region removal matches the first corner only
#[test]
fn test_region_removal_by_first_corner() {
    let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
    let mut map: LearnedHashMap<LinearModel, Region> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");

    map.insert(Region::new(
        IndexedPoint::new(1, 2.0, 3.0),
        IndexedPoint::new(1, 4.0, 6.0),
    ))
    .expect("insert failed");

    // The second corner is not the region's identity.
    assert!(!map.remove(4.0, 6.0));
    assert!(map.remove(2.0, 3.0));
    assert!(map.is_empty());
}

/// Test 6: Duplicate coordinates accumulate and drain one by one
#[test]
fn test_duplicate_accumulation() {
    let sample = [0.0, 1.0, 2.0, 3.0];
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");

    for i in 0..5u64 {
        map.insert(IndexedPoint::new(i, 2.0, 2.0)).expect("insert failed");
    }
    assert_eq!(map.len(), 5);

    // Each removal unlinks exactly one duplicate.
    for remaining in (0..5u64).rev() {
        assert!(map.remove(2.0, 2.0));
        assert_eq!(map.len(), remaining as usize);
    }
    assert!(!map.remove(2.0, 2.0));
}

/// Test 7: Range scan degenerate to a single coordinate
#[test]
fn test_point_sized_range() {
    let sample: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");

    map.insert(IndexedPoint::new(1, 4.0, 7.0)).expect("insert failed");
    map.insert(IndexedPoint::new(2, 4.0, 8.0)).expect("insert failed");

    // min == max on both axes is a valid, inclusive query.
    let hits = map
        .range_search([4.0, 7.0], [4.0, 7.0])
        .expect("range scan failed")
        .expect("range scan found nothing");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

/// Test 8: Stats report survives a JSON round trip
#[test]
fn test_stats_json_round_trip() {
    let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");
    for i in 0..5u64 {
        map.insert(IndexedPoint::new(i, (i % 3) as f64, 0.0))
            .expect("insert failed");
    }

    let stats = map.stats();
    let json = stats.to_json().expect("serialization failed");
    let back: geodex::MapStats = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back.total_entries, stats.total_entries);
    assert_eq!(back.occupied_buckets, stats.occupied_buckets);
    assert_eq!(back.occupancy, stats.occupancy);
}

/// Test 9: Capacity-unsafe resize reports how many entries it would strand
#[test]
fn test_resize_strand_count() {
    let sample: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
        LearnedHashMap::train(Axis::Latitude, &sample, &sample).expect("training failed");
    for i in 0..10u64 {
        map.insert(IndexedPoint::new(i, i as f64, 0.0)).expect("insert failed");
    }

    match map.resize(0, 4) {
        Err(GeodexError::CapacityChangeUnsafe {
            min_index,
            max_index,
            stranded,
        }) => {
            assert_eq!(min_index, 0);
            assert_eq!(max_index, 4);
            assert_eq!(stranded, 5);
        }
        other => panic!("expected CapacityChangeUnsafe, got {:?}", other),
    }
}
