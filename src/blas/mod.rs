//! BLAS-style dispatch layer.
//!
//! Free functions that take a runtime layout + index description (layout,
//! triangle, leading dimension, increments) and route it to the selected
//! backend: native CBLAS when the `cblas` feature is on and the element
//! type has a native routine, an internal generic fallback otherwise.
//! Backend selection is resolved per element type at compile time; there
//! is no runtime registry.

mod backend;
mod hemv;
mod trcopy;

pub use backend::{ActiveBackend, BackendConfig, GenericBackend};

#[cfg(feature = "cblas")]
pub use backend::CblasBackend;

pub use hemv::{hemv, HemvScalar};
pub use trcopy::trcopy;

#[cfg(feature = "device")]
pub use trcopy::TrcopyDevice;
