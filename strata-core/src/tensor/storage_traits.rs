use rand::distributions::Distribution;
use rand_distr::{Standard, StandardNormal, Uniform};

use crate::shapes::*;

use super::{Error, Tensor};

/// Something that can store nd arrays for a given [Dtype]
pub trait Storage<E>: 'static + std::fmt::Debug + Default + Clone {
    /// Generic Storage type
    type Vec: 'static + std::fmt::Debug + Clone + Send + Sync;

    /// Allocates `len` zeroed elements.
    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error>;

    fn to_vec(&self, v: &Self::Vec) -> Vec<E>;
}

/// Bulk element copies between two device buffers.
///
/// A copy must behave exactly like copying `len` elements one at a time from
/// `src[src_offset..]` into `dst[dst_offset..]`, and must be complete before
/// the call returns.
pub trait MemoryCopier<E>: Storage<E> {
    /// Copies `len` elements. Returns [Error::OutOfBounds] if either range
    /// does not fit inside its buffer; in that case nothing is written.
    fn try_copy(
        &self,
        len: usize,
        src: &Self::Vec,
        src_offset: usize,
        dst: &mut Self::Vec,
        dst_offset: usize,
    ) -> Result<(), Error>;
}

/// Construct tensors filled with zeros.
pub trait ZerosTensor<E>: Storage<E> {
    /// Creates a tensor filled with zeros.
    /// ```rust
    /// # use strata_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32, _> = dev.zeros(&Shape4::new(2, 3, 1, 1));
    /// ```
    fn zeros<S: HasShape>(&self, src: &S) -> Tensor<E, Self> {
        self.try_zeros(src).unwrap()
    }

    /// Fallible version of [ZerosTensor::zeros]
    fn try_zeros<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error>;
}

/// Construct tensors from rust vectors.
pub trait TensorFromVec<E>: Storage<E> {
    /// Moves `src` into the data buffer of a new tensor. The gradient
    /// buffer is zeroed.
    /// ```rust
    /// # use strata_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let t: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0], Shape4::new(1, 3, 1, 1));
    /// assert_eq!(t.features(), 3);
    /// ```
    fn tensor_from_vec<S: HasShape>(&self, src: Vec<E>, shape: S) -> Tensor<E, Self> {
        self.try_tensor_from_vec(src, shape).unwrap()
    }

    /// Fallible version of [TensorFromVec::tensor_from_vec]. Returns
    /// [Error::WrongNumElements] if `src` does not have exactly as many
    /// elements as `shape`.
    fn try_tensor_from_vec<S: HasShape>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error>;
}

/// Constructs tensors filled with random values from a given distribution.
pub trait SampleTensor<E: Unit>: Storage<E> {
    /// Samples a tensor with a given shape from a uniform distribution
    fn sample_uniform<S: HasShape>(&self, src: &S) -> Tensor<E, Self>
    where
        Standard: Distribution<E>,
    {
        self.sample::<S, _>(src, Standard)
    }

    /// Samples a tensor with a given shape from a uniform distribution in `[low, high)`
    fn sample_uniform_range<S: HasShape>(&self, src: &S, low: E, high: E) -> Tensor<E, Self>
    where
        E: rand_distr::uniform::SampleUniform,
    {
        self.sample::<S, _>(src, Uniform::new(low, high))
    }

    /// Samples a tensor with a given shape from a normal distribution
    fn sample_normal<S: HasShape>(&self, src: &S) -> Tensor<E, Self>
    where
        StandardNormal: Distribution<E>,
    {
        self.sample::<S, _>(src, StandardNormal)
    }

    /// Samples a tensor with a given shape from a given distribution.
    fn sample<S: HasShape, D: Distribution<E>>(&self, src: &S, distr: D) -> Tensor<E, Self> {
        self.try_sample(src, distr).unwrap()
    }

    /// Fallibly samples a tensor with a given shape from a given distribution.
    fn try_sample<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error>;
}
