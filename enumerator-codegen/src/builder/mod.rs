//! Code generation building blocks.
//!
//! - [`Emitter`] - Accumulating writer with indentation and deferred errors
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments

mod emitter;
mod fragment;

pub use emitter::{EmitError, Emitter};
pub use fragment::{CodeFragment, Renderable};
