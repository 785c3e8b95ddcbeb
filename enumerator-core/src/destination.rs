use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Where generated source is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A file, created with its parent directories and overwritten if present
    File(PathBuf),
}

impl Destination {
    /// `None` or an empty path means standard output.
    pub fn from_path(path: Option<impl Into<PathBuf>>) -> Self {
        match path.map(Into::into) {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Stdout,
        }
    }

    /// Write `bytes` verbatim to this destination.
    pub fn write(&self, bytes: &[u8]) -> Result<WriteResult> {
        self.write_with(bytes, &mut io::stdout().lock())
    }

    /// Like [`Destination::write`], with `stdout` standing in for standard output.
    pub fn write_with(&self, bytes: &[u8], stdout: &mut impl Write) -> Result<WriteResult> {
        match self {
            Self::Stdout => {
                stdout
                    .write_all(bytes)
                    .and_then(|()| stdout.flush())
                    .wrap_err("failed to write to stdout")?;
                Ok(WriteResult::Stdout)
            }
            Self::File(path) => {
                write_file(path, bytes)?;
                tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote generated code");
                Ok(WriteResult::Written(path.clone()))
            }
        }
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// Bytes went to standard output
    Stdout,
    /// File was written
    Written(PathBuf),
}
