//! The interfaces a graph engine drives layers through.
//!
//! A graph engine builds each layer from its configuration with
//! [BuildLayer], calls [Layer::try_setup] once the shapes of the layer's
//! inputs ("bottom" tensors) are known, and then alternates
//! [Layer::try_forward] and [Layer::try_backward] for every pass.

use crate::{
    shapes::Dtype,
    tensor::{Error, MemoryCopier, Tensor},
};

/// Something that can be turned into a runnable layer, e.g. a config struct.
pub trait BuildLayer {
    type Built;

    /// Fallible version of [BuildLayer::build].
    fn try_build(&self) -> Result<Self::Built, Error>;

    /// Builds the layer. **Panics** if the configuration is invalid.
    fn build(&self) -> Self::Built {
        self.try_build().unwrap()
    }
}

/// A layer of a computation graph.
///
/// `bottom` tensors are the layer's inputs and `top` tensors its outputs.
/// The layer owns neither; the graph engine lends them for each call.
pub trait Layer<E: Dtype, D: MemoryCopier<E>> {
    /// Validates the shapes of `bottom` and reshapes every `top` tensor.
    fn try_setup(
        &mut self,
        bottom: &[&Tensor<E, D>],
        top: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error>;

    /// Computes `top` from `bottom`, returning the layer's contribution to
    /// the loss.
    fn try_forward(
        &mut self,
        bottom: &[&Tensor<E, D>],
        top: &mut [&mut Tensor<E, D>],
    ) -> Result<E, Error>;

    /// Computes the gradients of `bottom` from the gradients of `top`.
    /// Does nothing if `propagate_down` is false.
    fn try_backward(
        &mut self,
        top: &[&Tensor<E, D>],
        propagate_down: bool,
        bottom: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error>;

    fn setup(&mut self, bottom: &[&Tensor<E, D>], top: &mut [&mut Tensor<E, D>]) {
        self.try_setup(bottom, top).unwrap()
    }

    fn forward(&mut self, bottom: &[&Tensor<E, D>], top: &mut [&mut Tensor<E, D>]) -> E {
        self.try_forward(bottom, top).unwrap()
    }

    fn backward(
        &mut self,
        top: &[&Tensor<E, D>],
        propagate_down: bool,
        bottom: &mut [&mut Tensor<E, D>],
    ) {
        self.try_backward(top, propagate_down, bottom).unwrap()
    }
}
