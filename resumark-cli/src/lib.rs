//! Library surface for the resumark binary.
//!
//! Only the transform table lives here, so the binary and its integration
//! tests share one implementation.

pub mod transforms;
