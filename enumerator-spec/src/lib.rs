//! Enum specification model for enumerator.
//!
//! An [`EnumSpec`] describes one closed enumeration: the Go package and type
//! it lives in, its ordered variants, an optional sentinel variant and the
//! optional JSON serialization and exhaustiveness-marker features.
//!
//! Specs are built either from command-line flags ([`EnumSpec::new`] and the
//! `with_*` methods) or from a TOML spec file ([`SpecFile::open`]), and are
//! checked once with [`EnumSpec::validate`] before generation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod spec;
mod validate;

pub use error::{Error, Result, ValidationError};
pub use file::SpecFile;
pub use spec::{EnumSpec, SerializationOptions};
pub use validate::is_go_keyword;
