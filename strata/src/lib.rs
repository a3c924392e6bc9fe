//! # strata
//!
//! A concatenation layer for layered numeric graphs, built on
//! [strata_core].
//!
//! The graph engine that owns the tensors builds a [nn::ConcatLayer] from a
//! [nn::ConcatConfig], sets it up once the input shapes are known, and then
//! drives it through the [nn::Layer] interface on every pass.
//!
//! ```rust
//! # use strata::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0], Shape4::new(2, 1, 1, 1));
//! let b: Tensor<f32, _> = dev.tensor_from_vec(vec![3.0, 4.0, 5.0, 6.0], Shape4::new(2, 2, 1, 1));
//! let mut top: Tensor<f32, _> = dev.zeros(&Shape4::default());
//!
//! let mut layer = ConcatConfig { axis: 1 }.build();
//! layer.setup(&[&a, &b], &mut [&mut top]);
//! let loss = layer.forward(&[&a, &b], &mut [&mut top]);
//! assert_eq!(loss, 0.0);
//! assert_eq!(top.as_vec(), [1.0, 3.0, 4.0, 2.0, 5.0, 6.0]);
//! ```
//!
//! See [feature_flags] for details on feature flags.

pub mod feature_flags;
pub mod nn;

pub use strata_core::*;

pub mod prelude {
    pub use crate::nn::*;
    pub use strata_core::prelude::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub type TestDevice = super::tensor::Cpu;

    #[cfg(not(feature = "test-f64"))]
    pub type TestDtype = f32;

    #[cfg(feature = "test-f64")]
    pub type TestDtype = f64;
}
