//! Go declaration builders.
//!
//! Each node renders to [`CodeFragment`]s. Nodes do not know about enums;
//! the sections in [`crate::sections`] decide what to build.

mod decls;
mod func;

pub use decls::{Field, Imports, Interface, Struct, VarBlock};
pub use func::{Func, If};

use crate::builder::CodeFragment;

/// Quote `s` as a Go interpreted string literal without escaping.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Join rendered nodes, separating them with one blank line.
pub fn separated<I>(nodes: I) -> Vec<CodeFragment>
where
    I: IntoIterator<Item = Vec<CodeFragment>>,
{
    let mut out = Vec::new();
    for node in nodes {
        if !out.is_empty() {
            out.push(CodeFragment::blank());
        }
        out.extend(node);
    }
    out
}
