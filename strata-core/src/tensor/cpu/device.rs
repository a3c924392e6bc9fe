use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::shapes::Unit;
use crate::tensor::{storage_traits::Storage, Error};

/// A device that stores data on the heap.
///
/// The [Default] impl seeds the rng with 0.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// A thread safe random number generator.
    pub(crate) rng: Arc<Mutex<StdRng>>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl Cpu {
    /// Constructs rng with the given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl<E: Unit> Storage<E> for Cpu {
    type Vec = Vec<E>;

    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error> {
        self.try_alloc_elem(len, Default::default())
    }

    fn to_vec(&self, v: &Self::Vec) -> Vec<E> {
        v.clone()
    }
}
