//! Learned-index hash table for geographic coordinate data.
//!
//! Bucket placement is computed by a trained regression model over one
//! coordinate axis instead of a conventional hash function, giving
//! near-contiguous buckets for roughly linearly distributed coordinates.
//! The table supports exact point lookup, containment lookup for stored
//! rectangles, and two-dimensional range scans.
//!
//! ```rust
//! use geodex::{Axis, IndexedPoint, LearnedHashMap, LinearModel};
//!
//! // Train on an identity sample: coordinate k maps to bucket k.
//! let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let mut map: LearnedHashMap<LinearModel, IndexedPoint> =
//!     LearnedHashMap::train(Axis::Latitude, &sample, &sample)?;
//!
//! map.insert(IndexedPoint::new(3, 2.0, 0.0))?;
//! let found = map.point_search(2.0, 0.0).expect("stored point");
//! assert_eq!(found.id, 3);
//! # Ok::<(), geodex::GeodexError>(())
//! ```

pub mod error;
pub mod map;
pub mod model;
pub mod types;

pub use error::{GeodexError, Result};

pub use map::{LearnedHashMap, MapStats};

pub use model::{LinearModel, Model};

pub use types::{Axis, IndexedPoint, Region, SpatialValue};

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeodexError, Result};

    pub use crate::{LearnedHashMap, MapStats};

    pub use crate::{LinearModel, Model};

    pub use crate::{Axis, IndexedPoint, Region, SpatialValue};
}
