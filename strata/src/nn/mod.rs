//! Layers that plug into a graph engine through [Layer].

pub mod layers;

pub use layers::*;
pub use strata_core::nn_traits::*;
