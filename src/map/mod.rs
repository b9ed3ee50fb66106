//! # Learned-Index Hash Table
//!
//! Instead of a conventional hash function, bucket placement is computed by
//! evaluating a trained regression model over one coordinate axis. For
//! coordinate data that is roughly linearly distributed along that axis,
//! rounded model predictions give near-contiguous bucket assignment, which
//! the queries exploit:
//!
//! - **Point search** probes exactly the predicted bucket and scans its
//!   chain for an exact coordinate match.
//! - **Region search** starts at the predicted bucket and expands outward
//!   in both directions (`center`, `center+1`, `center-1`, `center+2`, …)
//!   until a stored rectangle contains the query point or the table is
//!   exhausted. Under the learned-index assumption, neighboring buckets
//!   hold coordinate-adjacent data, so a miss at the center is usually
//!   resolved within a few rings.
//! - **Range scan** maps the query interval on the trained axis to a bucket
//!   interval and scans only the chains inside it.
//!
//! ## Construction
//!
//! ```text
//! 1. Fit the model on a (coordinate, index) training sample
//! 2. min_index/max_index = min/max of rounded predictions over the sample
//! 3. capacity = max_index - min_index + 1 buckets, fixed thereafter
//! 4. bucket(value) = round(model.predict(value)) - min_index
//! ```
//!
//! Collisions are resolved by chaining; a bucket owns its chain and appends
//! new entries at the tail, so chains keep insertion order. A table stores
//! one value type, chosen at compile time: [`IndexedPoint`](crate::IndexedPoint)
//! tables answer point and range queries, [`Region`](crate::Region) tables
//! answer containment queries.
//!
//! The table is single-threaded by design: no internal locking, no
//! suspension points. The model is read-only after construction.

mod bucket;
mod table;

pub mod query;

pub use table::{LearnedHashMap, MapStats};
