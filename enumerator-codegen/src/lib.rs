//! Go sum-type code generation for enumerator.
//!
//! Turns a validated [`EnumSpec`](enumerator_spec::EnumSpec) into the bytes of
//! one Go source file: a sealed interface, a single carrier type, one value
//! per variant, lookup functions, optional JSON support and an error type for
//! unknown names.
//!
//! # Module Organization
//!
//! - [`builder`] - Text emission (Emitter, CodeFragment, Renderable)
//! - [`ast`] - Go declaration builders (Struct, Interface, Func, ...)
//! - [`naming`] - Identifiers derived from the type name
//! - [`sections`] - The named parts of a generated file, in output order

pub mod ast;
pub mod builder;
mod generator;
pub mod naming;
pub mod sections;

pub use generator::{GenerateError, Generator, generate};
pub use naming::DerivedNames;
