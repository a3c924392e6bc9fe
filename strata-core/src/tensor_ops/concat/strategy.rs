use super::plan::{CopyPlan, CopySpan};
use crate::{shapes::Shape4, tensor::Error};

const AXIS_NAMES: [&str; 4] = ["items", "features", "height", "width"];

/// How tensors are joined along one particular axis.
///
/// A strategy knows how to compute the joined shape and how to lay the
/// inputs out inside it. Adding support for another axis means adding another
/// implementor, nothing in [super::Concat] changes.
pub trait ConcatStrategy: std::fmt::Debug + Send + Sync {
    /// The axis this strategy joins along.
    fn axis(&self) -> usize;

    /// Validates `inputs` and returns the shape of their concatenation.
    ///
    /// Every input must match the first one on every axis except
    /// [ConcatStrategy::axis]. The output takes its size along that axis
    /// from the sum over all inputs.
    fn output_shape(&self, inputs: &[Shape4]) -> Result<Shape4, Error> {
        let axis = self.axis();
        let first = inputs.first().ok_or_else(|| {
            Error::InvalidConfiguration("concat needs at least one input".into())
        })?;
        let mut joined = first.dim(axis);
        for (i, shape) in inputs.iter().enumerate().skip(1) {
            for d in (0..AXIS_NAMES.len()).filter(|&d| d != axis) {
                if shape.dim(d) != first.dim(d) {
                    return Err(Error::InvalidConfiguration(format!(
                        "input {i} has shape {shape} but input 0 has shape {first}: \
                         they must agree on {} when joining along {}",
                        AXIS_NAMES[d], AXIS_NAMES[axis]
                    )));
                }
            }
            joined += shape.dim(axis);
        }
        Ok(first.with_dim(axis, joined))
    }

    /// The copies that place every input inside `output`.
    ///
    /// `inputs` must already have passed [ConcatStrategy::output_shape], and
    /// `output` must be its result.
    fn copy_plan(&self, inputs: &[Shape4], output: &Shape4) -> Result<CopyPlan, Error>;
}

/// Joins along axis 0. Each input is a single contiguous block of the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlongItems;

impl ConcatStrategy for AlongItems {
    fn axis(&self) -> usize {
        0
    }

    fn copy_plan(&self, inputs: &[Shape4], output: &Shape4) -> Result<CopyPlan, Error> {
        let mut plan = CopyPlan::default();
        let mut offset_items = 0;
        for (i, shape) in inputs.iter().enumerate() {
            plan.push(CopySpan {
                input: i,
                len: shape.num_elements(),
                input_offset: 0,
                output_offset: output.offset_of_item(offset_items)?,
            });
            offset_items += shape.items;
        }
        Ok(plan)
    }
}

/// Joins along axis 1. Each item of the output holds that item of every
/// input, one after another.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlongFeatures;

impl ConcatStrategy for AlongFeatures {
    fn axis(&self) -> usize {
        1
    }

    fn copy_plan(&self, inputs: &[Shape4], output: &Shape4) -> Result<CopyPlan, Error> {
        let mut plan = CopyPlan::default();
        let mut offset_features = 0;
        for (i, shape) in inputs.iter().enumerate() {
            let len = shape.item_len();
            for n in 0..output.items {
                plan.push(CopySpan {
                    input: i,
                    len,
                    input_offset: shape.offset_of_item(n)?,
                    output_offset: output.offset_of_feature(n, offset_features)?,
                });
            }
            offset_features += shape.features;
        }
        Ok(plan)
    }
}

/// The axes [super::Concat] can join along.
///
/// Only the two outermost axes are supported. Converting any other axis
/// number fails with [Error::InvalidConfiguration]:
/// ```rust
/// # use strata_core::prelude::*;
/// assert_eq!(ConcatAxis::try_from(1isize), Ok(ConcatAxis::Features));
/// assert!(ConcatAxis::try_from(2isize).is_err());
/// assert!(ConcatAxis::try_from(-1isize).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcatAxis {
    Items,
    Features,
}

impl ConcatAxis {
    pub const fn index(&self) -> usize {
        match self {
            Self::Items => 0,
            Self::Features => 1,
        }
    }

    pub fn strategy(&self) -> &'static dyn ConcatStrategy {
        match self {
            Self::Items => &AlongItems,
            Self::Features => &AlongFeatures,
        }
    }
}

impl TryFrom<isize> for ConcatAxis {
    type Error = Error;
    fn try_from(axis: isize) -> Result<Self, Self::Error> {
        match axis {
            0 => Ok(Self::Items),
            1 => Ok(Self::Features),
            _ => Err(Error::InvalidConfiguration(format!(
                "cannot concat along axis {axis}: only item-count (0) and feature-count (1) axes are supported"
            ))),
        }
    }
}

impl TryFrom<usize> for ConcatAxis {
    type Error = Error;
    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        isize::try_from(axis)
            .map_err(|_| {
                Error::InvalidConfiguration(format!("cannot concat along axis {axis}"))
            })
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for ConcatAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(AXIS_NAMES[self.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_conversions() {
        assert_eq!(ConcatAxis::try_from(0isize), Ok(ConcatAxis::Items));
        assert_eq!(ConcatAxis::try_from(1usize), Ok(ConcatAxis::Features));
        for bad in [2isize, 3, -1, 100] {
            assert!(matches!(
                ConcatAxis::try_from(bad),
                Err(Error::InvalidConfiguration(_))
            ));
        }
        assert!(ConcatAxis::try_from(usize::MAX).is_err());
        assert_eq!(ConcatAxis::Features.strategy().axis(), 1);
        assert_eq!(ConcatAxis::Items.to_string(), "items");
    }

    #[test]
    fn test_output_shape_sums_join_axis() {
        let inputs = [
            Shape4::new(2, 3, 4, 5),
            Shape4::new(1, 3, 4, 5),
            Shape4::new(4, 3, 4, 5),
        ];
        assert_eq!(
            AlongItems.output_shape(&inputs),
            Ok(Shape4::new(7, 3, 4, 5))
        );
        let inputs = [Shape4::new(2, 1, 4, 5), Shape4::new(2, 6, 4, 5)];
        assert_eq!(
            AlongFeatures.output_shape(&inputs),
            Ok(Shape4::new(2, 7, 4, 5))
        );
    }

    #[test]
    fn test_output_shape_rejects_mismatched_dims() {
        let inputs = [Shape4::new(2, 3, 4, 5), Shape4::new(2, 3, 4, 6)];
        assert!(matches!(
            AlongItems.output_shape(&inputs),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(AlongFeatures.output_shape(&inputs).is_err());

        let inputs = [Shape4::new(2, 3, 1, 1), Shape4::new(3, 3, 1, 1)];
        assert!(AlongItems.output_shape(&inputs).is_ok());
        assert!(AlongFeatures.output_shape(&inputs).is_err());
    }

    #[test]
    fn test_output_shape_rejects_empty() {
        assert!(AlongItems.output_shape(&[]).is_err());
        assert!(AlongFeatures.output_shape(&[]).is_err());
    }

    #[test]
    fn test_items_plan_is_one_block_per_input() {
        let inputs = [Shape4::new(2, 3, 1, 1), Shape4::new(1, 3, 1, 1)];
        let output = AlongItems.output_shape(&inputs).unwrap();
        let plan = AlongItems.copy_plan(&inputs, &output).unwrap();
        assert_eq!(
            plan.spans(),
            [
                CopySpan {
                    input: 0,
                    len: 6,
                    input_offset: 0,
                    output_offset: 0
                },
                CopySpan {
                    input: 1,
                    len: 3,
                    input_offset: 0,
                    output_offset: 6
                },
            ]
        );
    }

    #[test]
    fn test_features_plan_interleaves_items() {
        let inputs = [Shape4::new(2, 1, 1, 1), Shape4::new(2, 2, 1, 1)];
        let output = AlongFeatures.output_shape(&inputs).unwrap();
        let plan = AlongFeatures.copy_plan(&inputs, &output).unwrap();
        let spans: Vec<(usize, usize, usize, usize)> = plan
            .spans()
            .iter()
            .map(|s| (s.input, s.len, s.input_offset, s.output_offset))
            .collect();
        assert_eq!(spans, [(0, 1, 0, 0), (0, 1, 1, 3), (1, 2, 0, 1), (1, 2, 2, 4)]);
        assert_eq!(plan.num_elements(), output.num_elements());
    }
}
