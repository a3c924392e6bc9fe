mod allocate;
mod copy;
mod device;

pub use device::Cpu;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shapes::*, tensor::*};

    #[test]
    fn test_same_seed_samples_same_values() {
        let a: Tensor<f32, _> = Cpu::seed_from_u64(7).sample_normal(&Shape4::new(2, 3, 1, 1));
        let b: Tensor<f32, _> = Cpu::seed_from_u64(7).sample_normal(&Shape4::new(2, 3, 1, 1));
        assert_eq!(a.as_vec(), b.as_vec());
    }

    #[test]
    fn test_cloned_device_shares_rng() {
        let dev = Cpu::seed_from_u64(7);
        let other = dev.clone();
        let a: Tensor<f32, _> = dev.sample_normal(&Shape4::new(1, 4, 1, 1));
        let b: Tensor<f32, _> = other.sample_normal(&Shape4::new(1, 4, 1, 1));
        assert_ne!(a.as_vec(), b.as_vec());
    }
}
