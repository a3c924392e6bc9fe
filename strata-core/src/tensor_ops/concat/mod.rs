mod plan;
mod strategy;

pub use plan::{CopyPlan, CopyRange, CopySpan};
pub use strategy::{AlongFeatures, AlongItems, ConcatAxis, ConcatStrategy};

use crate::{
    shapes::{Dtype, Shape4},
    tensor::{Error, MemoryCopier, Storage, Tensor},
};

/// Concatenates a list of tensors along [ConcatAxis::Items] or
/// [ConcatAxis::Features].
///
/// The operator holds no tensors. [Concat::try_configure] validates the
/// inputs, resizes the output and records the copies needed; forward and
/// backward then replay those copies against tensors of the same shapes.
/// When the input shapes change (e.g. a new batch size), configure again.
///
/// ```rust
/// # use strata_core::prelude::*;
/// let dev: Cpu = Default::default();
/// let a: Tensor<f32, _> = dev.sample_normal(&Shape4::new(2, 3, 1, 1));
/// let b: Tensor<f32, _> = dev.sample_normal(&Shape4::new(1, 3, 1, 1));
/// let mut ab: Tensor<f32, _> = dev.zeros(&Shape4::default());
///
/// let op = Concat::configure(ConcatAxis::Items, &[&a, &b], &mut ab);
/// assert_eq!(op.output_shape(), Shape4::new(3, 3, 1, 1));
///
/// op.forward(&[&a, &b], &mut ab);
/// assert_eq!(ab.as_vec()[..6], a.as_vec()[..]);
/// assert_eq!(ab.as_vec()[6..], b.as_vec()[..]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concat {
    axis: ConcatAxis,
    joined: usize,
    output_shape: Shape4,
    total_elements: usize,
    input_shapes: Vec<Shape4>,
    plan: CopyPlan,
}

impl Concat {
    /// Configures the operator. See [Concat::try_configure].
    pub fn configure<E, D: Storage<E>>(
        axis: ConcatAxis,
        inputs: &[&Tensor<E, D>],
        output: &mut Tensor<E, D>,
    ) -> Self {
        Self::try_configure(axis, inputs, output).unwrap()
    }

    /// Validates `inputs`, reshapes `output` to their concatenation along
    /// `axis`, and records the copy plan used by forward and backward.
    ///
    /// Fails with [Error::InvalidConfiguration] if `inputs` is empty or if
    /// any input differs from the first one on an axis other than `axis`.
    ///
    /// **Panics** if the reshaped output does not hold exactly as many
    /// elements as all inputs together. That can only happen through a bug in
    /// the shape computation, never through bad input.
    pub fn try_configure<E, D: Storage<E>>(
        axis: ConcatAxis,
        inputs: &[&Tensor<E, D>],
        output: &mut Tensor<E, D>,
    ) -> Result<Self, Error> {
        let input_shapes: Vec<Shape4> = inputs.iter().map(|t| *t.shape()).collect();
        let strategy = axis.strategy();
        let output_shape = strategy.output_shape(&input_shapes)?;
        let total_elements = inputs.iter().map(|t| t.count()).sum();

        output.try_reshape(output_shape)?;
        assert_eq!(
            total_elements,
            output.count(),
            "concat along {axis} produced an output of shape {output_shape} that cannot hold {total_elements} input elements",
        );

        let plan = strategy.copy_plan(&input_shapes, &output_shape)?;
        debug_assert_eq!(plan.num_elements(), total_elements);
        log::debug!(
            "concat along {axis}: {} inputs -> {output_shape} ({} copies)",
            inputs.len(),
            plan.spans().len(),
        );

        Ok(Self {
            axis,
            joined: output_shape.dim(axis.index()),
            output_shape,
            total_elements,
            input_shapes,
            plan,
        })
    }

    pub fn axis(&self) -> ConcatAxis {
        self.axis
    }

    /// Size of the output along [Concat::axis].
    pub fn joined(&self) -> usize {
        self.joined
    }

    pub fn output_shape(&self) -> Shape4 {
        self.output_shape
    }

    /// Sum of the element counts of all inputs, equal to the output's count.
    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    pub fn num_inputs(&self) -> usize {
        self.input_shapes.len()
    }

    pub fn plan(&self) -> &CopyPlan {
        &self.plan
    }

    /// Copies the inputs' data into the output's data. See [Concat::try_forward].
    pub fn forward<E: Dtype, D: MemoryCopier<E>>(
        &self,
        inputs: &[&Tensor<E, D>],
        output: &mut Tensor<E, D>,
    ) -> E {
        self.try_forward(inputs, output).unwrap()
    }

    /// Copies each input's data buffer into its region of the output's data
    /// buffer, overwriting it.
    ///
    /// Shapes are not validated again; `inputs` must be the list the operator
    /// was configured with. A list of a different length is rejected, and any
    /// copy that would leave a buffer fails with [Error::OutOfBounds].
    ///
    /// Concatenation contributes nothing to a loss, so this always returns zero.
    pub fn try_forward<E: Dtype, D: MemoryCopier<E>>(
        &self,
        inputs: &[&Tensor<E, D>],
        output: &mut Tensor<E, D>,
    ) -> Result<E, Error> {
        self.check_num_inputs(inputs.len())?;
        log::trace!("concat forward along {}", self.axis);
        for copy in self.plan.forward_copies() {
            let src = &inputs[copy.input].data;
            let len = copy.src.len();
            output
                .device
                .try_copy(len, src, copy.src.start, &mut output.data, copy.dst.start)?;
        }
        Ok(E::zero())
    }

    /// Splits the output's gradient into the inputs' gradients. See
    /// [Concat::try_backward].
    pub fn backward<E: Dtype, D: MemoryCopier<E>>(
        &self,
        output: &Tensor<E, D>,
        propagate_down: bool,
        inputs: &mut [&mut Tensor<E, D>],
    ) {
        self.try_backward(output, propagate_down, inputs).unwrap()
    }

    /// Copies each region of the output's gradient buffer into the gradient
    /// buffer of the input it came from. This is the exact inverse of
    /// [Concat::try_forward].
    ///
    /// Input gradients are overwritten, not accumulated into. If
    /// `propagate_down` is false nothing is copied.
    pub fn try_backward<E: Dtype, D: MemoryCopier<E>>(
        &self,
        output: &Tensor<E, D>,
        propagate_down: bool,
        inputs: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error> {
        let mask = std::vec![propagate_down; inputs.len()];
        self.try_backward_masked(output, &mask, inputs)
    }

    /// Like [Concat::try_backward], but with one `propagate_down` flag per
    /// input. Inputs whose flag is false keep their gradient untouched.
    pub fn try_backward_masked<E: Dtype, D: MemoryCopier<E>>(
        &self,
        output: &Tensor<E, D>,
        propagate_down: &[bool],
        inputs: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error> {
        self.check_num_inputs(inputs.len())?;
        if propagate_down.len() != inputs.len() {
            return Err(Error::InvalidConfiguration(format!(
                "got {} propagate_down flags for {} inputs",
                propagate_down.len(),
                inputs.len()
            )));
        }
        if !propagate_down.iter().any(|&p| p) {
            log::debug!("concat backward along {} skipped", self.axis);
            return Ok(());
        }
        log::trace!("concat backward along {}", self.axis);
        for copy in self.plan.backward_copies() {
            if !propagate_down[copy.input] {
                continue;
            }
            let dst = &mut inputs[copy.input].grad;
            let len = copy.src.len();
            output
                .device
                .try_copy(len, &output.grad, copy.src.start, dst, copy.dst.start)?;
        }
        Ok(())
    }

    fn check_num_inputs(&self, num: usize) -> Result<(), Error> {
        if num == self.input_shapes.len() {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration(format!(
                "concat was configured for {} inputs but got {num}",
                self.input_shapes.len()
            )))
        }
    }
}
