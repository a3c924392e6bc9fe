use crate::tensor::Error;

/// Number of dimensions of every [Shape4].
pub const NUM_DIMS: usize = 4;

/// The shape of a 4d tensor laid out row-major, `items` outermost.
///
/// | axis | name |
/// | --- | --- |
/// | 0 | items |
/// | 1 | features |
/// | 2 | height |
/// | 3 | width |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape4 {
    pub items: usize,
    pub features: usize,
    pub height: usize,
    pub width: usize,
}

impl Shape4 {
    pub const fn new(items: usize, features: usize, height: usize, width: usize) -> Self {
        Self {
            items,
            features,
            height,
            width,
        }
    }

    /// The dimensions as an array, indexed by axis.
    #[inline(always)]
    pub const fn concrete(&self) -> [usize; NUM_DIMS] {
        [self.items, self.features, self.height, self.width]
    }

    pub const fn from_concrete(dims: &[usize; NUM_DIMS]) -> Self {
        Self::new(dims[0], dims[1], dims[2], dims[3])
    }

    /// The size of dimension `axis`. **Panics** if `axis >= 4`.
    #[inline(always)]
    pub const fn dim(&self, axis: usize) -> usize {
        self.concrete()[axis]
    }

    /// A copy of self with dimension `axis` replaced by `size`.
    pub fn with_dim(&self, axis: usize, size: usize) -> Self {
        let mut dims = self.concrete();
        dims[axis] = size;
        Self::from_concrete(&dims)
    }

    /// The total number of elements.
    #[inline(always)]
    pub const fn num_elements(&self) -> usize {
        self.items * self.features * self.height * self.width
    }

    /// Number of elements in a single item, i.e. `features * height * width`.
    #[inline(always)]
    pub const fn item_len(&self) -> usize {
        self.features * self.height * self.width
    }

    /// The strides of how this shape is layed out in memory.
    #[inline(always)]
    pub fn strides(&self) -> [usize; NUM_DIMS] {
        let sizes = self.concrete();
        let mut strides = [0; NUM_DIMS];
        strides[NUM_DIMS - 1] = 1;
        for i in (0..(NUM_DIMS - 1)).rev() {
            strides[i] = strides[i + 1] * sizes[i + 1];
        }
        strides
    }

    /// The linear index of `[item, feature, row, col]`:
    /// `((item * features + feature) * height + row) * width + col`.
    ///
    /// Each coordinate must be less than its dimension, except that a
    /// coordinate equal to the dimension is accepted when every coordinate
    /// after it is zero. That one-past-the-end position is where an empty
    /// trailing region starts, e.g. `offset_of_item(items)`.
    pub fn try_offset(&self, index: [usize; NUM_DIMS]) -> Result<usize, Error> {
        let dims = self.concrete();
        for i in 0..NUM_DIMS {
            let in_bounds = index[i] < dims[i]
                || (index[i] == dims[i] && index[i + 1..].iter().all(|&j| j == 0));
            if !in_bounds {
                return Err(Error::OutOfBounds {
                    index: index[i],
                    len: dims[i],
                });
            }
        }
        let strides = self.strides();
        Ok(index.iter().zip(strides.iter()).map(|(i, s)| i * s).sum())
    }

    /// Offset of the first element of item `item`.
    pub fn offset_of_item(&self, item: usize) -> Result<usize, Error> {
        self.try_offset([item, 0, 0, 0])
    }

    /// Offset of the first element of feature `feature` of item `item`.
    pub fn offset_of_feature(&self, item: usize, feature: usize) -> Result<usize, Error> {
        self.try_offset([item, feature, 0, 0])
    }
}

impl From<(usize, usize, usize, usize)> for Shape4 {
    fn from((items, features, height, width): (usize, usize, usize, usize)) -> Self {
        Self::new(items, features, height, width)
    }
}

impl std::fmt::Display for Shape4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.items, self.features, self.height, self.width
        )
    }
}

/// Represents something that has a [Shape4].
pub trait HasShape {
    fn shape(&self) -> &Shape4;
}

impl HasShape for Shape4 {
    fn shape(&self) -> &Shape4 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(Shape4::new(2, 3, 4, 5).strides(), [60, 20, 5, 1]);
        assert_eq!(Shape4::new(1, 1, 1, 1).strides(), [1, 1, 1, 1]);
    }

    #[test]
    fn test_offset_matches_row_major_formula() {
        let s = Shape4::new(3, 4, 2, 5);
        let mut expected = 0;
        for n in 0..3 {
            for c in 0..4 {
                for h in 0..2 {
                    for w in 0..5 {
                        assert_eq!(s.try_offset([n, c, h, w]).unwrap(), expected);
                        assert_eq!(
                            expected,
                            ((n * s.features + c) * s.height + h) * s.width + w
                        );
                        expected += 1;
                    }
                }
            }
        }
        assert_eq!(expected, s.num_elements());
    }

    #[test]
    fn test_offset_one_past_the_end() {
        let s = Shape4::new(2, 3, 1, 1);
        assert_eq!(s.offset_of_item(2).unwrap(), 6);
        assert_eq!(s.offset_of_feature(1, 3).unwrap(), 6);
        assert_eq!(s.offset_of_feature(0, 3).unwrap(), 3);
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let s = Shape4::new(2, 3, 4, 5);
        assert!(matches!(
            s.offset_of_item(3),
            Err(Error::OutOfBounds { index: 3, len: 2 })
        ));
        assert!(matches!(
            s.try_offset([0, 1, 4, 1]),
            Err(Error::OutOfBounds { index: 4, len: 4 })
        ));
        assert!(s.try_offset([0, 0, 0, 5]).is_ok());
        assert!(s.try_offset([0, 0, 0, 6]).is_err());
    }

    #[test]
    fn test_with_dim() {
        let s = Shape4::new(2, 3, 4, 5);
        assert_eq!(s.with_dim(0, 7), Shape4::new(7, 3, 4, 5));
        assert_eq!(s.with_dim(1, 7), Shape4::new(2, 7, 4, 5));
        assert_eq!(s.dim(2), 4);
        assert_eq!(s.item_len(), 60);
    }
}
