//! Generation pipeline.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use enumerator_spec::{EnumSpec, ValidationError};

use crate::{
    builder::{EmitError, Emitter},
    sections::{Section, SectionContext, sections},
};

/// Errors that abort generation. No output is produced when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read copyright file '{}'", path.display())]
    CopyrightRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to emit generated code: {0}")]
    Emit(#[from] EmitError),
}

/// Assembles the sections of a generated file in order.
///
/// # Example
///
/// ```
/// use enumerator_codegen::Generator;
/// use enumerator_spec::EnumSpec;
///
/// let spec = EnumSpec::new("color", "Color", ["Red", "Green"]);
/// let source = Generator::new().generate(&spec).unwrap();
/// assert!(source.starts_with(b"package color\n"));
/// ```
pub struct Generator {
    sections: Vec<Box<dyn Section>>,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            sections: sections(),
        }
    }

    /// Validate `spec` and render it to Go source.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure unchanged, a
    /// [`GenerateError::CopyrightRead`] when a declared copyright file cannot
    /// be read, or the emitter's aggregated write errors.
    pub fn generate(&self, spec: &EnumSpec) -> Result<Vec<u8>, GenerateError> {
        spec.validate()?;
        tracing::debug!(
            type_name = %spec.type_name,
            variants = spec.values.len(),
            "spec is valid"
        );

        let copyright = spec.copyright.as_deref().map(read_copyright).transpose()?;
        let ctx = SectionContext::new(spec, copyright);

        let mut emitter = Emitter::in_memory();
        let mut first = true;
        for section in &self.sections {
            if !section.is_enabled(&ctx) {
                tracing::trace!(section = section.name(), "skipped");
                continue;
            }
            let fragments = section.render(&ctx);
            if fragments.is_empty() {
                tracing::trace!(section = section.name(), "rendered nothing");
                continue;
            }
            if !first {
                emitter.blank();
            }
            first = false;
            tracing::debug!(section = section.name(), "rendering");
            emitter.emit(&fragments);
        }

        let bytes = emitter.flush()?;
        tracing::debug!(bytes = bytes.len(), "generated {}", spec.type_name);
        Ok(bytes)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate Go source for `spec` with the default section set.
pub fn generate(spec: &EnumSpec) -> Result<Vec<u8>, GenerateError> {
    Generator::new().generate(spec)
}

fn read_copyright(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::CopyrightRead {
        path: path.to_path_buf(),
        source,
    })
}
