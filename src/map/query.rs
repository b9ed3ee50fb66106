//! Containment and range queries over the learned hash table.
//!
//! Region containment uses an expanding-ring probe around the predicted
//! bucket; range scans map the query interval on the trained axis to a
//! bucket interval and scan only the chains inside it.

use super::table::LearnedHashMap;
use crate::error::{GeodexError, Result};
use crate::model::Model;
use crate::types::{Axis, IndexedPoint, Region};

impl<M: Model> LearnedHashMap<M, Region> {
    /// Find some stored region containing the query point.
    ///
    /// # Algorithm
    ///
    /// 1. Compute the query's bucket from the indexed axis and scan that
    ///    chain in insertion order.
    /// 2. On a miss, expand outward in both directions at once, probing
    ///    `center+1`, then `center-1`, then `center+2`, then `center-2`, and
    ///    so on, scanning each probed chain fully before advancing, until
    ///    both directions have run off the ends of the table.
    ///
    /// The first containing region in this probe order is returned; when
    /// regions overlap there is no guarantee of nearest, smallest, or
    /// unique match. Under the learned-index assumption that neighboring
    /// buckets hold coordinate-adjacent data, a miss at the center is
    /// expected to resolve within a few rings.
    ///
    /// A prediction outside the table clamps to the nearest edge bucket, so
    /// the ring still sweeps every chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel, Region};
    ///
    /// let sample = [0.0, 1.0, 2.0, 3.0];
    /// let mut map: LearnedHashMap<LinearModel, Region> =
    ///     LearnedHashMap::train(Axis::Latitude, &sample, &sample)?;
    /// map.insert(Region::new(
    ///     IndexedPoint::new(1, 1.0, 1.0),
    ///     IndexedPoint::new(1, 2.0, 2.0),
    /// ))?;
    ///
    /// let found = map.region_search(1.5, 1.5).expect("containing region");
    /// assert_eq!(found.a.id, 1);
    /// # Ok::<(), geodex::GeodexError>(())
    /// ```
    pub fn region_search(&self, lat: f64, lon: f64) -> Option<&Region> {
        let capacity = self.capacity() as i64;
        let key = self.raw_bucket_key(self.axis().pick(lat, lon)).ok()?;
        let center = key.clamp(0, capacity - 1);

        if let Some(region) = self.scan_for_containing(center, lat, lon) {
            return Some(region);
        }

        let mut upper = center + 1;
        let mut lower = center - 1;
        while upper < capacity || lower >= 0 {
            if upper < capacity {
                if let Some(region) = self.scan_for_containing(upper, lat, lon) {
                    return Some(region);
                }
                upper += 1;
            }
            if lower >= 0 {
                if let Some(region) = self.scan_for_containing(lower, lat, lon) {
                    return Some(region);
                }
                lower -= 1;
            }
        }
        None
    }

    fn scan_for_containing(&self, index: i64, lat: f64, lon: f64) -> Option<&Region> {
        self.bucket(index as usize)
            .iter()
            .find(|region| region.contains(lat, lon))
    }
}

impl<M: Model> LearnedHashMap<M, IndexedPoint> {
    /// Scan for all stored points inside the axis-aligned query rectangle.
    ///
    /// `min` and `max` are `[lat, lon]` bounds with `min[0] <= max[0]` and
    /// `min[1] <= max[1]`. The bound on the trained axis is mapped to a
    /// bucket interval (clamped into the table, swapped if the model is
    /// decreasing), and every chain in that interval is scanned with an
    /// inclusive two-axis containment test.
    ///
    /// Candidates outside the probed bucket interval are never examined:
    /// completeness depends on the model mapping the true coordinate range
    /// into that interval, which holds when the model is monotonic over the
    /// queried axis.
    ///
    /// Returns `Ok(None)` when nothing matched.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `min` exceeds `max` on either axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel};
    ///
    /// let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
    /// let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
    ///     LearnedHashMap::train(Axis::Latitude, &sample, &sample)?;
    /// for i in 0..5 {
    ///     map.insert(IndexedPoint::new(i, i as f64, 0.0))?;
    /// }
    ///
    /// let hits = map.range_search([1.0, -1.0], [3.0, 1.0])?.expect("matches");
    /// assert_eq!(hits.len(), 3);
    /// # Ok::<(), geodex::GeodexError>(())
    /// ```
    pub fn range_search(
        &self,
        min: [f64; 2],
        max: [f64; 2],
    ) -> Result<Option<Vec<IndexedPoint>>> {
        if min[0] > max[0] {
            return Err(GeodexError::InvalidRange {
                axis: Axis::Latitude,
                min: min[0],
                max: max[0],
            });
        }
        if min[1] > max[1] {
            return Err(GeodexError::InvalidRange {
                axis: Axis::Longitude,
                min: min[1],
                max: max[1],
            });
        }

        // The trained axis drives bucket selection; the other axis is only
        // filtered per candidate.
        let (axis_min, axis_max) = match self.axis() {
            Axis::Latitude => (min[0], max[0]),
            Axis::Longitude => (min[1], max[1]),
        };

        let (min_key, max_key) = match (
            self.raw_bucket_key(axis_min),
            self.raw_bucket_key(axis_max),
        ) {
            (Ok(min_key), Ok(max_key)) => (min_key, max_key),
            _ => {
                log::warn!("rejecting range scan with non-finite predictions");
                return Ok(None);
            }
        };

        let capacity = self.capacity() as i64;
        let (mut min_key, mut max_key) = if min_key > max_key {
            (max_key, min_key)
        } else {
            (min_key, max_key)
        };
        // The whole predicted interval lies off the table.
        if max_key < 0 || min_key >= capacity {
            return Ok(None);
        }
        min_key = min_key.max(0);
        max_key = max_key.min(capacity - 1);

        let mut results = Vec::new();
        for index in min_key..=max_key {
            for candidate in self.bucket(index as usize).iter() {
                let lat = candidate.lat();
                let lon = candidate.lon();
                if (lat - max[0]) * (lat - min[0]) <= 0.0 && (lon - max[1]) * (lon - min[1]) <= 0.0
                {
                    results.push(candidate.clone());
                }
            }
        }

        if results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(results))
        }
    }
}
