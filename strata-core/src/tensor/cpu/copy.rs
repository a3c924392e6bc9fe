use crate::{
    shapes::Unit,
    tensor::{storage_traits::MemoryCopier, Error},
};

use super::Cpu;

fn checked_range(
    offset: usize,
    len: usize,
    buf_len: usize,
) -> Result<std::ops::Range<usize>, Error> {
    match offset.checked_add(len) {
        Some(end) if end <= buf_len => Ok(offset..end),
        _ => Err(Error::OutOfBounds {
            index: offset.saturating_add(len),
            len: buf_len,
        }),
    }
}

impl<E: Unit> MemoryCopier<E> for Cpu {
    fn try_copy(
        &self,
        len: usize,
        src: &Self::Vec,
        src_offset: usize,
        dst: &mut Self::Vec,
        dst_offset: usize,
    ) -> Result<(), Error> {
        let src_range = checked_range(src_offset, len, src.len())?;
        let dst_range = checked_range(dst_offset, len, dst.len())?;
        dst[dst_range].copy_from_slice(&src[src_range]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn test_copy_into_middle() {
        let dev: TestDevice = Default::default();
        let src = std::vec![1.0, 2.0, 3.0, 4.0];
        let mut dst = std::vec![0.0; 6];
        MemoryCopier::<TestDtype>::try_copy(&dev, 2, &src, 1, &mut dst, 3).unwrap();
        assert_eq!(dst, [0.0, 0.0, 0.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_copy_zero_len_at_end() {
        let dev: TestDevice = Default::default();
        let src = std::vec![1.0];
        let mut dst = std::vec![0.0; 2];
        MemoryCopier::<TestDtype>::try_copy(&dev, 0, &src, 1, &mut dst, 2).unwrap();
        assert_eq!(dst, [0.0, 0.0]);
    }

    #[test]
    fn test_copy_out_of_bounds_writes_nothing() {
        let dev: TestDevice = Default::default();
        let src = std::vec![1.0, 2.0, 3.0];
        let mut dst = std::vec![0.0; 3];
        assert_eq!(
            MemoryCopier::<TestDtype>::try_copy(&dev, 3, &src, 0, &mut dst, 1),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(
            MemoryCopier::<TestDtype>::try_copy(&dev, 2, &src, 2, &mut dst, 0),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(dst, [0.0; 3]);
    }
}
