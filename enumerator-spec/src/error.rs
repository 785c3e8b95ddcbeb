use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for spec-file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while reading or parsing a TOML spec file.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(
        code(enumerator::io),
        help("check that the spec file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse enum spec")]
    #[diagnostic(code(enumerator::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// A structural rule broken by an [`EnumSpec`](crate::EnumSpec).
///
/// Validation stops at the first broken rule, so a spec reports exactly one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("package name is empty")]
    #[diagnostic(
        code(enumerator::empty_package),
        help("set the Go package with --package or `package = \"...\"`")
    )]
    EmptyPackageName,

    #[error("type name is empty")]
    #[diagnostic(
        code(enumerator::empty_type),
        help("set the enum type with --type or `type = \"...\"`")
    )]
    EmptyTypeName,

    #[error("values are empty")]
    #[diagnostic(
        code(enumerator::empty_values),
        help("list at least one value, e.g. --values Red,Green,Blue")
    )]
    EmptyValues,

    #[error("sentinel value '{sentinel}' not found in values")]
    #[diagnostic(
        code(enumerator::sentinel_not_found),
        help("the sentinel must be one of the listed values")
    )]
    SentinelNotFound { sentinel: String },

    #[error("decoding unknown or null values to the sentinel requires a sentinel value")]
    #[diagnostic(
        code(enumerator::sentinel_required),
        help("set the sentinel with --undefined or `sentinel = \"...\"`")
    )]
    SentinelRequiredForDecoding,

    #[error("duplicate value '{name}'")]
    #[diagnostic(code(enumerator::duplicate_value))]
    DuplicateValue { name: String },

    #[error("'{name}' is a Go reserved keyword")]
    #[diagnostic(
        code(enumerator::reserved_keyword),
        help("rename the {context} '{name}' to something else")
    )]
    ReservedKeyword { name: String, context: String },

    #[error("{context} name '{name}' clashes with an identifier in the generated code")]
    #[diagnostic(
        code(enumerator::reserved_name),
        help(
            "rename the {context} '{name}'; generated declarations, imports and the builtins they use are taken"
        )
    )]
    ReservedName { name: String, context: String },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(enumerator::invalid_identifier),
        help(
            "{reason}. Use only ASCII letters, digits, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },
}
