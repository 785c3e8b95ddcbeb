use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, ValidationError};

/// Declarative description of one closed enumeration.
///
/// Variant order is significant: it fixes the order of the generated value
/// table and lookup map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumSpec {
    /// Go package of the generated file.
    #[serde(default)]
    pub package: String,

    /// Name of the generated sum type.
    #[serde(default, rename = "type")]
    pub type_name: String,

    /// Variant names in declaration order.
    #[serde(default)]
    pub values: Vec<String>,

    /// Fallback variant for unknown names; must be one of `values`.
    #[serde(default)]
    pub sentinel: Option<String>,

    #[serde(default)]
    pub serialization: SerializationOptions,

    /// Emit the `//sumtype:decl` directive for exhaustiveness checkers.
    #[serde(default)]
    pub exhaustiveness_marker: bool,

    /// Text file prepended to the output as a comment block.
    #[serde(default)]
    pub copyright: Option<PathBuf>,

    /// Arguments echoed into the `go:generate` directive.
    #[serde(skip)]
    pub invocation: Option<String>,
}

/// JSON serialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializationOptions {
    /// Generate the JSON marshallable wrapper.
    #[serde(default)]
    pub json: bool,
    /// Decode empty input, `null` and unknown names to the sentinel.
    #[serde(default)]
    pub unknown_to_sentinel: bool,
}

impl EnumSpec {
    /// Create a spec for `type_name` in `package` with the given variants.
    ///
    /// Names are trimmed; an empty sentinel counts as no sentinel.
    pub fn new<I, S>(package: impl Into<String>, type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: package.into(),
            type_name: type_name.into(),
            values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
        .normalized()
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = Some(sentinel.into());
        self.normalized()
    }

    pub fn with_serialization(mut self, serialization: SerializationOptions) -> Self {
        self.serialization = serialization;
        self
    }

    /// Enable JSON marshalling, optionally decoding unknown input to the sentinel.
    pub fn with_json(self, unknown_to_sentinel: bool) -> Self {
        self.with_serialization(SerializationOptions {
            json: true,
            unknown_to_sentinel,
        })
    }

    pub fn with_exhaustiveness_marker(mut self, enabled: bool) -> Self {
        self.exhaustiveness_marker = enabled;
        self
    }

    pub fn with_copyright(mut self, path: impl Into<PathBuf>) -> Self {
        self.copyright = Some(path.into());
        self
    }

    pub fn with_invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }

    /// Whether JSON marshalling code is generated.
    pub fn generates_json(&self) -> bool {
        self.serialization.json
    }

    /// Whether generated decoding falls back to the sentinel.
    pub fn decodes_unknown_to_sentinel(&self) -> bool {
        self.serialization.json && self.serialization.unknown_to_sentinel
    }

    /// Check the spec's structural rules, stopping at the first violation.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        crate::validate::validate(self)
    }

    /// Parse a spec from TOML with a custom filename for error reporting.
    ///
    /// The result is not validated; call [`EnumSpec::validate`].
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let spec: EnumSpec =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        Ok(spec.normalized())
    }

    /// Resolve a relative copyright path against `base`.
    pub(crate) fn resolve_copyright(mut self, base: &Path) -> Self {
        if let Some(path) = self.copyright.take() {
            self.copyright = Some(if path.is_relative() {
                base.join(path)
            } else {
                path
            });
        }
        self
    }

    fn normalized(mut self) -> Self {
        self.package = self.package.trim().to_string();
        self.type_name = self.type_name.trim().to_string();
        for value in &mut self.values {
            *value = value.trim().to_string();
        }
        self.sentinel = self
            .sentinel
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}

impl FromStr for EnumSpec {
    type Err = Box<Error>;

    fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "enum.toml")
    }
}
