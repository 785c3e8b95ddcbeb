//! Core utilities for enumerator.
//!
//! Generated source is produced as bytes by `enumerator-codegen`; this crate
//! decides where those bytes go.

mod destination;

pub use destination::{Destination, WriteResult};
