//! The [Tensor] struct, [Cpu] device, and
//! traits like [ZerosTensor], [TensorFromVec], [SampleTensor], and [MemoryCopier].
//!
//! At a high level a tensor is made up of:
//! 1. The [crate::shapes::Shape4] of the array it stores
//! 2. The [crate::shapes::Dtype] of the elements of the array
//! 3. The Device the data and gradient buffers are stored on
//!
//! # Creating tensors
//!
//! ### Use device's ZerosTensor and SampleTensor
//!
//! ```rust
//! # use strata_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let _: Tensor<f32, _> = dev.zeros(&Shape4::new(2, 3, 4, 5));
//! let _: Tensor<f32, _> = dev.sample_uniform(&Shape4::new(1, 2, 1, 1));
//! ```
//!
//! ### From a vec
//!
//! ```rust
//! # use strata_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let t: Tensor<f32, _> = dev.tensor_from_vec(vec![0.0; 6], Shape4::new(2, 3, 1, 1));
//! assert!(dev.try_tensor_from_vec(vec![0.0f32; 5], Shape4::new(2, 3, 1, 1)).is_err());
//! ```
//!
//! # Copying between buffers
//!
//! Devices implement [MemoryCopier], a bounds-checked bulk copy between two
//! of their buffers. Layers never index device buffers directly.

pub(crate) mod cpu;
mod error;
pub(crate) mod storage_traits;
mod tensor_impl;

pub use cpu::Cpu;
pub use error::Error;
pub use storage_traits::{MemoryCopier, SampleTensor, Storage, TensorFromVec, ZerosTensor};
pub use tensor_impl::Tensor;
