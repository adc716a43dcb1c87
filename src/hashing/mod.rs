//! Hash primitive selection
//!
//! The search loop never names a concrete algorithm. It asks the registry for
//! a [`Hasher`] built from a [`HashKind`] and treats it as an opaque
//! reset-update-finalize capability.

mod registry;

pub use registry::{HashKind, Hasher, select_hash};
