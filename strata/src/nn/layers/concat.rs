use crate::prelude::*;

/// Configuration of a [ConcatLayer].
///
/// `axis` is the axis number from the graph description: `0` joins along
/// items, `1` (the default) along features. Any other value is rejected when
/// the layer is built.
///
/// # Examples
/// ```rust
/// # use strata::prelude::*;
/// let layer = ConcatConfig::default().build();
/// assert_eq!(layer.axis(), ConcatAxis::Features);
/// assert!(ConcatConfig { axis: 2 }.try_build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConcatConfig {
    pub axis: isize,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self { axis: 1 }
    }
}

impl BuildLayer for ConcatConfig {
    type Built = ConcatLayer;
    fn try_build(&self) -> Result<Self::Built, Error> {
        let axis = ConcatAxis::try_from(self.axis)?;
        Ok(ConcatLayer::new(axis))
    }
}

/// Joins all bottom tensors into its single top tensor. See [Concat].
///
/// The layer must be set up before its first forward pass, and set up again
/// whenever the shapes of its bottom tensors change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatLayer {
    axis: ConcatAxis,
    op: Option<Concat>,
}

impl ConcatLayer {
    pub fn new(axis: ConcatAxis) -> Self {
        Self { axis, op: None }
    }

    pub fn axis(&self) -> ConcatAxis {
        self.axis
    }

    /// The configured operator, or `None` before setup.
    pub fn op(&self) -> Option<&Concat> {
        self.op.as_ref()
    }

    fn try_op(&self) -> Result<&Concat, Error> {
        self.op.as_ref().ok_or_else(|| {
            Error::InvalidConfiguration("concat layer used before setup".into())
        })
    }
}

fn single_top<T>(top: &mut [T]) -> Result<&mut T, Error> {
    let num = top.len();
    match top {
        [t] => Ok(t),
        _ => Err(Error::InvalidConfiguration(format!(
            "concat layer takes exactly one top tensor, got {num}"
        ))),
    }
}

impl<E: Dtype, D: MemoryCopier<E>> Layer<E, D> for ConcatLayer {
    fn try_setup(
        &mut self,
        bottom: &[&Tensor<E, D>],
        top: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error> {
        let top = single_top(top)?;
        self.op = Some(Concat::try_configure(self.axis, bottom, top)?);
        Ok(())
    }

    fn try_forward(
        &mut self,
        bottom: &[&Tensor<E, D>],
        top: &mut [&mut Tensor<E, D>],
    ) -> Result<E, Error> {
        let top = single_top(top)?;
        self.try_op()?.try_forward(bottom, top)
    }

    fn try_backward(
        &mut self,
        top: &[&Tensor<E, D>],
        propagate_down: bool,
        bottom: &mut [&mut Tensor<E, D>],
    ) -> Result<(), Error> {
        let op = self.try_op()?;
        match top {
            [t] => op.try_backward(t, propagate_down, bottom),
            _ => Err(Error::InvalidConfiguration(format!(
                "concat layer takes exactly one top tensor, got {}",
                top.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn test_default_axis_is_features() {
        assert_eq!(ConcatConfig::default().axis, 1);
        assert_eq!(
            ConcatConfig::default().build().axis(),
            ConcatAxis::Features
        );
        assert_eq!(ConcatConfig { axis: 0 }.build().axis(), ConcatAxis::Items);
    }

    #[test]
    fn test_build_rejects_unsupported_axes() {
        for axis in [-1, 2, 3] {
            assert!(matches!(
                ConcatConfig { axis }.try_build(),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_forward_before_setup() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype, _> = dev.zeros(&Shape4::new(1, 1, 1, 1));
        let mut top: Tensor<TestDtype, _> = dev.zeros(&Shape4::default());
        let mut layer = ConcatConfig::default().build();
        let r = layer.try_forward(&[&a], &mut [&mut top]);
        assert!(matches!(r, Err(Error::InvalidConfiguration(_))));
        assert!(layer.op().is_none());
    }

    #[test]
    fn test_setup_requires_single_top() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype, _> = dev.zeros(&Shape4::new(1, 1, 1, 1));
        let mut t0: Tensor<TestDtype, _> = dev.zeros(&Shape4::default());
        let mut t1: Tensor<TestDtype, _> = dev.zeros(&Shape4::default());
        let mut layer = ConcatConfig::default().build();
        assert!(layer.try_setup(&[&a], &mut [&mut t0, &mut t1]).is_err());
        assert!(layer.try_setup(&[&a], &mut []).is_err());
        assert!(layer.try_setup(&[&a], &mut [&mut t0]).is_ok());
    }

    #[test]
    fn test_layer_forward_backward() {
        let dev: TestDevice = Default::default();
        let mut a: Tensor<TestDtype, _> = dev.sample_normal(&Shape4::new(2, 3, 2, 2));
        let mut b: Tensor<TestDtype, _> = dev.sample_normal(&Shape4::new(1, 3, 2, 2));
        let mut top: Tensor<TestDtype, _> = dev.zeros(&Shape4::default());

        let mut layer = ConcatConfig { axis: 0 }.build();
        layer.setup(&[&a, &b], &mut [&mut top]);
        assert_eq!(top.shape(), &Shape4::new(3, 3, 2, 2));
        assert_eq!(layer.op().map(|op| op.joined()), Some(3));

        let loss = layer.forward(&[&a, &b], &mut [&mut top]);
        assert_eq!(loss, 0.0);

        *top.grad_mut() = top.data().clone();
        layer.backward(&[&top], true, &mut [&mut a, &mut b]);
        assert_eq!(a.grad_vec(), a.as_vec());
        assert_eq!(b.grad_vec(), b.as_vec());
    }
}
