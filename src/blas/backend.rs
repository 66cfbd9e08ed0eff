//! Backend markers and compile-time configuration.
//!
//! Each backend declares what it can do natively so that dispatch code
//! can adapt without per-call `cfg` checks. The [`ActiveBackend`] alias
//! is the single point of backend selection based on Cargo features.

/// Static configuration for a dispatch backend.
pub trait BackendConfig {
    /// Human-readable backend name, for diagnostics.
    const NAME: &'static str;

    /// Whether complex Hermitian matrix-vector products run on a native
    /// kernel (as opposed to the generic fallback).
    const NATIVE_COMPLEX_HEMV: bool;
}

/// Internal generic fallback: plain Rust loops, any scalar type.
pub struct GenericBackend;

impl BackendConfig for GenericBackend {
    const NAME: &'static str = "generic";
    const NATIVE_COMPLEX_HEMV: bool = false;
}

/// Native CBLAS backend (via `cblas-sys`).
#[cfg(feature = "cblas")]
pub struct CblasBackend;

#[cfg(feature = "cblas")]
impl BackendConfig for CblasBackend {
    const NAME: &'static str = "cblas";
    const NATIVE_COMPLEX_HEMV: bool = true;
}

/// The active dispatch backend, selected by Cargo features.
#[cfg(feature = "cblas")]
pub type ActiveBackend = CblasBackend;

/// The active dispatch backend, selected by Cargo features.
#[cfg(not(feature = "cblas"))]
pub type ActiveBackend = GenericBackend;
