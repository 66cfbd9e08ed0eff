//! LAPACK-compatible C interface.
//!
//! Entry points with the exact calling convention of the reference LAPACK
//! routines: FORTRAN argument order, pointer/by-reference semantics,
//! column-major 1-based buffers, and the reference error codes reported
//! through the trailing `INFO` parameter. Existing LAPACK client code can
//! link against these symbols as a drop-in replacement.
//!
//! The shim owns validation, workspace queries, and the translation
//! between raw caller buffers and this crate's view types; the numerical
//! Schur-form computation itself is an external collaborator, injected at
//! runtime with [`register_dgeesx_kernel`]. Calling a compute path with no
//! kernel registered reports failure through `INFO` (see [`dgeesx_`]).

mod geesx;
mod kernel;

pub use geesx::{dgeesx_, SelectCallback};
pub use kernel::{
    register_dgeesx_kernel, DgeesxKernel, DgeesxOutcome, DgeesxTask, Sense,
};
