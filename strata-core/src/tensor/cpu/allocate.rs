use crate::{
    shapes::*,
    tensor::{storage_traits::*, Error, Tensor},
};

use super::Cpu;

use rand::{distributions::Distribution, Rng};

impl Cpu {
    #[inline]
    pub(crate) fn try_alloc_elem<E: Unit>(&self, numel: usize, elem: E) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.resize(numel, elem);
        Ok(data)
    }

    fn try_tensor_with_data<E: Unit>(
        &self,
        shape: Shape4,
        data: Vec<E>,
    ) -> Result<Tensor<E, Self>, Error> {
        let grad = self.try_alloc_elem(data.len(), E::default())?;
        Ok(Tensor {
            shape,
            data,
            grad,
            device: self.clone(),
        })
    }
}

impl<E: Unit> ZerosTensor<E> for Cpu {
    fn try_zeros<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error> {
        let shape = *src.shape();
        let data = self.try_alloc_elem::<E>(shape.num_elements(), Default::default())?;
        self.try_tensor_with_data(shape, data)
    }
}

impl<E: Unit> TensorFromVec<E> for Cpu {
    fn try_tensor_from_vec<S: HasShape>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = *shape.shape();
        if src.len() != shape.num_elements() {
            Err(Error::WrongNumElements)
        } else {
            self.try_tensor_with_data(shape, src)
        }
    }
}

impl<E: Unit> SampleTensor<E> for Cpu {
    fn try_sample<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error> {
        let mut tensor: Tensor<E, Self> = self.try_zeros(src)?;
        {
            let mut rng = self.rng.lock().unwrap();
            for v in tensor.data.iter_mut() {
                *v = rng.sample(&distr);
            }
        }
        Ok(tensor)
    }
}
