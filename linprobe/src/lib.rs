#![deny(clippy::disallowed_methods)]

//! An open-addressing set with linear probing and tombstone deletion.
//!
//! ```
//! use linprobe::OpenAddressSet;
//!
//! let mut set = OpenAddressSet::new();
//! assert!(set.insert("Hello"));
//! assert!(!set.insert("Hello"));
//! assert!(set.remove("Hello"));
//! assert!(set.is_empty());
//! ```

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
mod config;
mod error;
mod hasher;
mod iter;
#[cfg(any(test, feature = "proptest-arbitrary", feature = "arbitrary"))]
pub mod ops;
mod probe;
#[cfg(any(test, feature = "proptest-arbitrary"))]
pub mod proptest;
mod set;
mod slot;

pub use config::SetConfig;
pub use error::SetError;
pub use hasher::MulHasher;
pub use iter::{Cursor, IntoIter, Iter};
pub use set::OpenAddressSet;

pub const INITIAL_CAPACITY: usize = 128;
pub const MAX_LOAD_FACTOR: f64 = 0.7;

// MAX_LOAD_FACTOR as a fraction, so the load check never leaves integer arithmetic
const LOAD_NUMERATOR: u128 = 7;
const LOAD_DENOMINATOR: u128 = 10;
