//! Lazy, restartable sequences built from scalar intervals and combined without materializing
//! anything in between.
//!
//! [`interval`] is the only primitive producer. [`join`] enumerates the Cartesian product of several
//! sequences in odometer order and [`map`] transforms values on access. Both accept any
//! [`Sequence`], including each other's output, so combinators nest freely:
//!
//! ```
//! use rangekit::{Sequence, interval, join, map};
//!
//! let cells = map(join((interval(0, 1), interval(0, 2))), |(row, col)| row * 3 + col);
//! assert_eq!(cells.begin().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod interval;
pub mod join;
pub mod log;
pub mod map;
pub mod sequence;
pub mod tuple;

pub use cursor::{Cursor, Step, StepBack};
pub use error::RangeError;
pub use interval::{Interval, Scalar, indexes, indexes_of, interval, interval_by};
pub use join::{Join, join};
pub use map::{Map, map};
pub use sequence::{Item, Sequence};
