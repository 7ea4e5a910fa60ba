//! Shared data model for the equality-correlation kernel.
//!
//! This crate has no algorithms in it — just the types the kernel, the
//! dispatcher, and the host bindings all need to agree on: matrix views,
//! the rotation convention, the request flags, the result bundle, and the
//! error type. Keeping these separate from `eqcorr-core` mirrors this
//! workspace's existing split between a types crate and an engine crate.

mod error;
mod matrix;
mod request;
mod result;
mod rotation;

pub use error::Error;
pub use matrix::MatrixView;
pub use request::{AggregatorRequest, RotationRequest};
pub use result::{ComputeResult, FullMap, Histogram, RotationMaps};
pub use rotation::Rotation;
