//! The learned hash table: construction, index mapping, and chain
//! maintenance.

use super::bucket::Bucket;
use crate::error::{GeodexError, Result};
use crate::model::{LinearModel, Model};
use crate::types::{Axis, SpatialValue};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hash table whose bucket placement is computed by a trained model.
///
/// The table owns a fixed array of collision chains sized to the model's
/// prediction window `[min_index, max_index]`, derived once at construction:
/// `capacity = max_index - min_index + 1` and
/// `bucket(value) = round(model.predict(value)) - min_index`.
///
/// A table instance stores exactly one value type `V` (points or regions)
/// and hashes every value on the axis chosen at construction.
///
/// Not thread-safe: wrap in a lock for concurrent access. The model is
/// read-only after construction.
///
/// # Examples
///
/// ```
/// use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel};
///
/// // Identity training sample: coordinate k maps to bucket k.
/// let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
///     LearnedHashMap::train(Axis::Latitude, &sample, &sample)?;
/// assert_eq!(map.capacity(), 5);
///
/// map.insert(IndexedPoint::new(3, 2.0, 0.0))?;
/// let found = map.point_search(2.0, 0.0).expect("stored point");
/// assert_eq!(found.id, 3);
/// # Ok::<(), geodex::GeodexError>(())
/// ```
pub struct LearnedHashMap<M, V> {
    model: M,
    axis: Axis,
    min_index: i64,
    max_index: i64,
    buckets: Vec<Bucket<V>>,
    len: usize,
}

impl<V: SpatialValue> LearnedHashMap<LinearModel, V> {
    /// Train a linear model on `(inputs, targets)` and build the table.
    ///
    /// `inputs` are coordinate values on `axis`; `targets` are the desired
    /// bucket indices. The prediction window is the min/max of the model's
    /// rounded predictions over `inputs`, and capacity follows from it.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty or length-mismatched sample, non-finite
    /// sample values, or a model whose predictions over the sample are
    /// non-finite.
    pub fn train(axis: Axis, inputs: &[f64], targets: &[f64]) -> Result<Self> {
        let model = LinearModel::fit(inputs, targets)?;

        let mut min_index = i64::MAX;
        let mut max_index = i64::MIN;
        for prediction in model.predict_batch(inputs) {
            let rounded = rounded_prediction(prediction)?;
            min_index = min_index.min(rounded);
            max_index = max_index.max(rounded);
        }

        log::debug!(
            "trained table on {axis}: window [{min_index}, {max_index}], capacity {}",
            max_index - min_index + 1
        );

        Self::with_model(model, axis, min_index, max_index)
    }
}

impl<M: Model, V: SpatialValue> LearnedHashMap<M, V> {
    /// Build a table from a pre-trained model and an explicit prediction
    /// window, skipping training.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `max_index < min_index`.
    pub fn with_model(model: M, axis: Axis, min_index: i64, max_index: i64) -> Result<Self> {
        let capacity = window_capacity(min_index, max_index)?;
        let buckets = std::iter::repeat_with(Bucket::new).take(capacity).collect();
        Ok(Self {
            model,
            axis,
            min_index,
            max_index,
            buckets,
            len: 0,
        })
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The axis values are hashed on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The `[min_index, max_index]` prediction window.
    pub fn prediction_bounds(&self) -> (i64, i64) {
        (self.min_index, self.max_index)
    }

    /// The indexing model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Raw bucket key for a coordinate value: `round(predict(value)) -
    /// min_index`, without the range check. Range scans clamp this into the
    /// table themselves.
    pub(crate) fn raw_bucket_key(&self, value: f64) -> Result<i64> {
        Ok(rounded_prediction(self.model.predict(value))? - self.min_index)
    }

    /// Bucket index for a coordinate value, checked against the table range.
    pub(crate) fn bucket_index(&self, value: f64) -> Result<usize> {
        let key = self.raw_bucket_key(value)?;
        if key < 0 || key >= self.buckets.len() as i64 {
            return Err(GeodexError::IndexOutOfRange {
                index: key,
                capacity: self.buckets.len(),
            });
        }
        Ok(key as usize)
    }

    pub(crate) fn bucket(&self, index: usize) -> &Bucket<V> {
        &self.buckets[index]
    }

    /// Insert a value into the bucket its indexed coordinate maps to.
    ///
    /// Insertion always appends at the tail of the chain; re-inserting
    /// identical coordinates stores a duplicate rather than overwriting.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when the value's coordinate maps outside the
    /// table's prediction window; the table is left unchanged.
    /// `InvalidInput` when the model prediction is non-finite.
    pub fn insert(&mut self, value: V) -> Result<()> {
        let index = self.bucket_index(value.axis_value(self.axis))?;
        self.buckets[index].push(value);
        self.len += 1;
        Ok(())
    }

    /// Exact point lookup.
    ///
    /// Probes the predicted bucket and scans its chain for an entry whose
    /// coordinates equal `(lat, lon)` exactly, with no tolerance: the query
    /// must use the originally stored values. A prediction outside the
    /// table is a clean miss.
    pub fn point_search(&self, lat: f64, lon: f64) -> Option<&V> {
        let index = self.bucket_index(self.axis.pick(lat, lon)).ok()?;
        self.buckets[index].iter().find(|v| v.matches(lat, lon))
    }

    /// Remove the first entry matching `(lat, lon)` exactly.
    ///
    /// Returns whether a match was found and unlinked. Other chains and the
    /// capacity are unaffected.
    pub fn remove(&mut self, lat: f64, lon: f64) -> bool {
        let Ok(index) = self.bucket_index(self.axis.pick(lat, lon)) else {
            return false;
        };
        match self.buckets[index].remove_first(|v| v.matches(lat, lon)) {
            Some(_) => {
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Re-window the table to `[min_index, max_index]` and rehash every
    /// entry through the model.
    ///
    /// The new placement of every entry is validated before the table is
    /// touched: on error nothing has changed.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the window is inverted. `CapacityChangeUnsafe` if
    /// any entry's predicted bucket falls outside the new window; resizing
    /// must never silently strand entries in unreachable buckets.
    pub fn resize(&mut self, min_index: i64, max_index: i64) -> Result<()> {
        let capacity = window_capacity(min_index, max_index)?;

        // Validation pass: compute every entry's new bucket first.
        let mut placements = Vec::with_capacity(self.len);
        let mut stranded = 0usize;
        for bucket in &self.buckets {
            for value in bucket.iter() {
                let prediction = self.model.predict(value.axis_value(self.axis));
                let key = match rounded_prediction(prediction) {
                    Ok(rounded) => rounded - min_index,
                    Err(_) => {
                        stranded += 1;
                        continue;
                    }
                };
                if key < 0 || key >= capacity as i64 {
                    stranded += 1;
                } else {
                    placements.push(key as usize);
                }
            }
        }
        if stranded > 0 {
            return Err(GeodexError::CapacityChangeUnsafe {
                min_index,
                max_index,
                stranded,
            });
        }

        // Commit: drain old chains in the same order the placements were
        // computed and reinsert.
        let mut old_buckets = std::mem::take(&mut self.buckets);
        self.buckets = std::iter::repeat_with(Bucket::new).take(capacity).collect();
        let mut placements = placements.into_iter();
        for bucket in &mut old_buckets {
            for value in bucket.drain() {
                let index = placements
                    .next()
                    .unwrap_or_else(|| unreachable!("placement computed per entry"));
                self.buckets[index].push(value);
            }
        }

        self.min_index = min_index;
        self.max_index = max_index;
        log::debug!("resized table to window [{min_index}, {max_index}], capacity {capacity}");
        Ok(())
    }

    /// Occupancy report over the bucket array. Diagnostic only; no state is
    /// mutated.
    pub fn stats(&self) -> MapStats {
        let mut occupancy = FxHashMap::default();
        for (index, bucket) in self.buckets.iter().enumerate() {
            if !bucket.is_empty() {
                occupancy.insert(index, bucket.len());
            }
        }
        let occupied_buckets = occupancy.len();
        let average_chain_len = if occupied_buckets == 0 {
            0.0
        } else {
            self.len as f64 / occupied_buckets as f64
        };
        MapStats {
            capacity: self.buckets.len(),
            total_entries: self.len,
            occupied_buckets,
            average_chain_len,
            occupancy,
        }
    }
}

fn window_capacity(min_index: i64, max_index: i64) -> Result<usize> {
    if max_index < min_index {
        return Err(GeodexError::InvalidInput(format!(
            "prediction window is inverted: min {min_index} exceeds max {max_index}"
        )));
    }
    max_index
        .checked_sub(min_index)
        .and_then(|span| span.checked_add(1))
        .and_then(|span| usize::try_from(span).ok())
        .ok_or_else(|| {
            GeodexError::InvalidInput(format!(
                "prediction window [{min_index}, {max_index}] is too wide"
            ))
        })
}

fn rounded_prediction(prediction: f64) -> Result<i64> {
    if !prediction.is_finite() {
        return Err(GeodexError::InvalidInput(format!(
            "model produced a non-finite prediction: {prediction}"
        )));
    }
    Ok(prediction.round() as i64)
}

/// Occupancy statistics for a [`LearnedHashMap`].
///
/// `Display` prints the summary form; the `occupancy` map (bucket index →
/// chain length, non-empty buckets only) carries the verbose per-bucket
/// breakdown, also available as JSON via [`to_json`](MapStats::to_json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapStats {
    /// Number of buckets in the table.
    pub capacity: usize,
    /// Total stored entries.
    pub total_entries: usize,
    /// Number of non-empty buckets.
    pub occupied_buckets: usize,
    /// Average chain length over occupied buckets.
    pub average_chain_len: f64,
    /// Chain length per non-empty bucket.
    pub occupancy: FxHashMap<usize, usize>,
}

impl MapStats {
    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for MapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries: {}, occupied buckets: {}/{}, average chain length: {:.2}",
            self.total_entries, self.occupied_buckets, self.capacity, self.average_chain_len
        )
    }
}
