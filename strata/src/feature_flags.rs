//! Information about the available feature flags
//!
//! # "std"
//!
//! **Enabled by default**
//!
//! Implements [std::error::Error] for [crate::tensor::Error]. This is the only
//! thing the flag controls; the crates always link `std`.
//!
//! # "serde"
//!
//! Derives `Serialize` and `Deserialize` for [crate::shapes::Shape4],
//! [crate::tensor_ops::ConcatAxis] and [crate::nn::ConcatConfig], so layer
//! configurations can be read from whatever format the graph description
//! uses.
//!
//! Example:
//! ```toml
//! strata = { version = "...", features = ["serde"] }
//! ```
//!
//! # "test-f64"
//!
//! Runs the test suite with `f64` tensors instead of `f32`.
//!
//! ```bash
//! cargo test --features test-f64
//! ```
