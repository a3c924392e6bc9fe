//! Operations on tensors like [Concat].
//!
//! # Concatenation
//!
//! [Concat] joins a list of tensors that agree on every dimension except
//! one. Two axes are supported, selected with [ConcatAxis]:
//!
//! | axis | joins | layout in the output |
//! | --- | --- | --- |
//! | [ConcatAxis::Items] (0) | whole tensors | one contiguous block per input |
//! | [ConcatAxis::Features] (1) | per item slices | inputs interleave item by item |
//!
//! An operator is configured once, which validates the shapes, resizes the
//! output, and records a [CopyPlan]. The forward pass replays the plan from the
//! inputs' data into the output's data; the backward pass replays it in the
//! other direction, from the output's gradient into each input's gradient.
//!
//! ```rust
//! # use strata_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0], Shape4::new(1, 3, 1, 1));
//! let b: Tensor<f32, _> = dev.tensor_from_vec(vec![4.0, 5.0, 6.0], Shape4::new(1, 3, 1, 1));
//! let mut ab: Tensor<f32, _> = dev.zeros(&Shape4::default());
//!
//! let op = Concat::configure(ConcatAxis::Items, &[&a, &b], &mut ab);
//! op.forward(&[&a, &b], &mut ab);
//! assert_eq!(ab.shape(), &Shape4::new(2, 3, 1, 1));
//! assert_eq!(ab.as_vec(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```

mod concat;

pub use concat::{
    AlongFeatures, AlongItems, Concat, ConcatAxis, ConcatStrategy, CopyPlan, CopyRange, CopySpan,
};
