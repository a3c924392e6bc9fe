//! # strata-core
//!
//! The building blocks behind `strata`: 4d tensors with a data buffer and a
//! gradient buffer, a [tensor::Cpu] device that allocates and copies them, and
//! the concatenation operator in [tensor_ops].
//!
//! # Shapes & Tensors
//!
//! *See [shapes] and [tensor] for more information.*
//!
//! Every tensor has a [`shapes::Shape4`] of `(items, features, height, width)`,
//! stored row-major with `items` as the slowest varying dimension. The two
//! buffers of a tensor always have exactly [`shapes::Shape4::num_elements`]
//! entries.
//!
//! ```rust
//! # use strata_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let t: Tensor<f32, _> = dev.zeros(&Shape4::new(2, 3, 4, 5));
//! assert_eq!(t.count(), 120);
//! assert_eq!(t.shape().offset_of_feature(1, 2).unwrap(), 100);
//! ```
//!
//! # Concatenation
//!
//! *See [tensor_ops] for more information*
//!
//! [`tensor_ops::Concat`] joins tensors along the item axis or the feature
//! axis. It is configured once against the input shapes, then replays the
//! same copy plan on every forward and backward pass.
//!
//! ```rust
//! # use strata_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0], Shape4::new(2, 1, 1, 1));
//! let b: Tensor<f32, _> = dev.tensor_from_vec(vec![3.0, 4.0, 5.0, 6.0], Shape4::new(2, 2, 1, 1));
//! let mut out: Tensor<f32, _> = dev.zeros(&Shape4::default());
//!
//! let concat = Concat::configure(ConcatAxis::Features, &[&a, &b], &mut out);
//! concat.forward(&[&a, &b], &mut out);
//! assert_eq!(out.shape(), &Shape4::new(2, 3, 1, 1));
//! assert_eq!(out.data(), &[1.0, 3.0, 4.0, 2.0, 5.0, 6.0]);
//! ```

pub mod dtypes;
pub mod nn_traits;
pub mod shapes;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::nn_traits::*;
    pub use crate::shapes::*;
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}
