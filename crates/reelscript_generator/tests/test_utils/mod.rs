//! Test utilities for generator tests.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockTextGenerator, sample_inputs};
