use std::path::{Path, PathBuf};

use crate::{EnumSpec, Result};

/// A parsed TOML spec file.
pub struct SpecFile {
    path: PathBuf,
    spec: EnumSpec,
}

impl SpecFile {
    /// Open and parse a spec file.
    ///
    /// A relative `copyright` path is resolved against the spec file's directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let spec = EnumSpec::from_str_with_filename(&content, &filename)?.resolve_copyright(base);

        Ok(Self { path, spec })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the file and return the parsed spec.
    pub fn into_spec(self) -> EnumSpec {
        self.spec
    }
}
