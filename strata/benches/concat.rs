use std::time::Instant;

use strata::prelude::*;

type Dev = Cpu;
type Dtype = f32;

const ITERS: usize = 20;

fn bench(axis: ConcatAxis, shapes: &[Shape4]) {
    println!("Benchmarking `concat` along {axis}");
    println!("Dtype {}", std::any::type_name::<Dtype>());
    for s in shapes {
        println!("Input shape {s}");
    }

    let dev: Dev = Default::default();
    let mut inputs: Vec<Tensor<Dtype, Dev>> =
        shapes.iter().map(|s| dev.sample_normal(s)).collect();
    let mut top: Tensor<Dtype, Dev> = dev.zeros(&Shape4::default());

    let mut layer = ConcatLayer::new(axis);
    {
        let bottom: Vec<&Tensor<Dtype, Dev>> = inputs.iter().collect();
        layer.setup(&bottom, &mut [&mut top]);
    }
    println!("Output shape {}", top.shape());

    for _ in 0..ITERS {
        let bottom: Vec<&Tensor<Dtype, Dev>> = inputs.iter().collect();
        let start = Instant::now();
        layer.forward(&bottom, &mut [&mut top]);
        let fwd_dur = start.elapsed();

        let mut bottom: Vec<&mut Tensor<Dtype, Dev>> = inputs.iter_mut().collect();
        let start = Instant::now();
        layer.backward(&[&top], true, &mut bottom);
        let bwd_dur = start.elapsed();
        println!("fwd={:?} bwd={:?}", fwd_dur, bwd_dur);
    }
    println!();
}

fn main() {
    bench(
        ConcatAxis::Items,
        &[Shape4::new(32, 64, 56, 56), Shape4::new(16, 64, 56, 56)],
    );
    bench(
        ConcatAxis::Features,
        &[
            Shape4::new(32, 64, 56, 56),
            Shape4::new(32, 32, 56, 56),
            Shape4::new(32, 16, 56, 56),
        ],
    );
}
