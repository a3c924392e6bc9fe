//! Shape related traits/structs like [Shape4] and [HasShape].
//!
//! Every tensor in strata is 4 dimensional. The dimensions are, from slowest
//! to fastest varying: `items`, `features`, `height`, `width`.
//! ```rust
//! # use strata_core::shapes::*;
//! let s = Shape4::new(2, 3, 4, 5);
//! assert_eq!(s.num_elements(), 120);
//! assert_eq!(s.strides(), [60, 20, 5, 1]);
//! assert_eq!(s.try_offset([1, 2, 3, 4]).unwrap(), 119);
//! ```

mod shape;

pub use shape::{HasShape, Shape4, NUM_DIMS};

pub use crate::dtypes::{Dtype, Unit};
