use super::{storage_traits::Storage, Error};
use crate::shapes::{HasShape, Shape4};

/// The single tensor struct that stores 4d arrays.
///
/// A tensor owns two buffers of identical length: `data`, which holds
/// the values produced by a forward pass, and `grad`, which receives the
/// gradient during a backward pass. Both are laid out row-major according
/// to [Shape4].
///
/// # Generics
/// 1. `E` - The type of the elements, e.g. [f32].
/// 2. `D` - The device the buffers are stored on, e.g. [super::Cpu].
///
/// # Creating tensors
///
/// Tensors are created through their device:
/// ```rust
/// # use strata_core::prelude::*;
/// let dev: Cpu = Default::default();
/// let a: Tensor<f32, _> = dev.zeros(&Shape4::new(2, 3, 4, 5));
/// let b: Tensor<f32, _> = dev.sample_normal(&Shape4::new(1, 3, 4, 5));
/// let c: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0], Shape4::new(2, 1, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Tensor<E, D: Storage<E>> {
    pub(crate) shape: Shape4,
    pub(crate) data: D::Vec,
    pub(crate) grad: D::Vec,
    pub(crate) device: D,
}

impl<E, D: Storage<E>> HasShape for Tensor<E, D> {
    fn shape(&self) -> &Shape4 {
        &self.shape
    }
}

impl<E, D: Storage<E>> Tensor<E, D> {
    pub fn shape(&self) -> &Shape4 {
        &self.shape
    }

    /// Total number of elements, i.e. the length of both buffers.
    pub fn count(&self) -> usize {
        self.shape.num_elements()
    }

    pub fn items(&self) -> usize {
        self.shape.items
    }

    pub fn features(&self) -> usize {
        self.shape.features
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn data(&self) -> &D::Vec {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D::Vec {
        &mut self.data
    }

    pub fn grad(&self) -> &D::Vec {
        &self.grad
    }

    pub fn grad_mut(&mut self) -> &mut D::Vec {
        &mut self.grad
    }

    /// Copies the data buffer into a [Vec].
    pub fn as_vec(&self) -> Vec<E> {
        self.device.to_vec(&self.data)
    }

    /// Copies the gradient buffer into a [Vec].
    pub fn grad_vec(&self) -> Vec<E> {
        self.device.to_vec(&self.grad)
    }

    /// Resizes the tensor to `shape`. See [Tensor::try_reshape].
    pub fn reshape<S: Into<Shape4>>(&mut self, shape: S) {
        self.try_reshape(shape).unwrap()
    }

    /// Resizes the tensor to `shape`.
    ///
    /// If the shape is unchanged this does nothing. Otherwise both buffers are
    /// reallocated and zeroed; previous contents are discarded.
    pub fn try_reshape<S: Into<Shape4>>(&mut self, shape: S) -> Result<(), Error> {
        let shape = shape.into();
        if shape == self.shape {
            return Ok(());
        }
        let numel = shape.num_elements();
        let data = self.device.try_alloc_len(numel)?;
        let grad = self.device.try_alloc_len(numel)?;
        self.data = data;
        self.grad = grad;
        self.shape = shape;
        Ok(())
    }
}
