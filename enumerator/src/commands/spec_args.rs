use std::path::PathBuf;

use clap::Args;
use enumerator_spec::{EnumSpec, SerializationOptions, SpecFile};

/// Flags describing one enum, or a TOML spec file holding the same.
#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Go package name
    #[arg(long, required_unless_present = "spec")]
    pub package: Option<String>,

    /// Enum type name
    #[arg(long = "type", value_name = "TYPE", required_unless_present = "spec")]
    pub type_name: Option<String>,

    /// Comma-separated variant names, in declaration order
    #[arg(long, required_unless_present = "spec")]
    pub values: Option<String>,

    /// Sentinel variant returned by `OfOrUndefined`
    #[arg(long, value_name = "NAME")]
    pub undefined: Option<String>,

    /// Generate JSON marshalling
    #[arg(long)]
    pub marshal_json: bool,

    /// Decode empty input, null and unknown names to the sentinel
    #[arg(long, requires = "marshal_json")]
    pub unmarshal_json_to_undefined: bool,

    /// Emit the `//sumtype:decl` exhaustiveness marker
    #[arg(long)]
    pub sumtype: bool,

    /// File whose contents are emitted as a leading comment block
    #[arg(long, value_name = "FILE")]
    pub copyright: Option<PathBuf>,

    /// Read the enum from a TOML spec file instead of flags
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "package", "type_name", "values", "undefined", "marshal_json",
            "unmarshal_json_to_undefined", "sumtype", "copyright",
        ]
    )]
    pub spec: Option<PathBuf>,
}

impl SpecArgs {
    /// Build the spec from the spec file or the flags. Not validated.
    pub fn load(&self) -> enumerator_spec::Result<EnumSpec> {
        if let Some(path) = &self.spec {
            let file = SpecFile::open(path)?;
            tracing::debug!(path = %file.path().display(), "loaded spec file");
            return Ok(file.into_spec());
        }

        let mut spec = EnumSpec::new(
            self.package.clone().unwrap_or_default(),
            self.type_name.clone().unwrap_or_default(),
            parse_values(self.values.as_deref().unwrap_or_default()),
        )
        .with_serialization(SerializationOptions {
            json: self.marshal_json,
            unknown_to_sentinel: self.unmarshal_json_to_undefined,
        })
        .with_exhaustiveness_marker(self.sumtype);

        if let Some(sentinel) = &self.undefined {
            spec = spec.with_sentinel(sentinel);
        }
        if let Some(path) = &self.copyright {
            spec = spec.with_copyright(path);
        }
        Ok(spec)
    }
}

/// Split a comma-separated list; an empty string means no variants.
fn parse_values(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|v| v.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        spec: SpecArgs,
    }

    fn parse(args: &[&str]) -> Result<SpecArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("enumerator").chain(args.iter().copied()))
            .map(|cli| cli.spec)
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("Red, Green ,Blue"), vec!["Red", "Green", "Blue"]);
        assert!(parse_values("").is_empty());
        assert!(parse_values("  ").is_empty());
    }

    #[test]
    fn test_flags_build_spec() {
        let args = parse(&[
            "--package", "color", "--type", "Color", "--values", "Undefined,Red", "--undefined",
            "Undefined", "--marshal-json", "--unmarshal-json-to-undefined", "--sumtype",
        ])
        .unwrap();
        let spec = args.load().unwrap();

        assert_eq!(spec.package, "color");
        assert_eq!(spec.type_name, "Color");
        assert_eq!(spec.values, vec!["Undefined", "Red"]);
        assert_eq!(spec.sentinel.as_deref(), Some("Undefined"));
        assert!(spec.decodes_unknown_to_sentinel());
        assert!(spec.exhaustiveness_marker);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_empty_values_fail_validation() {
        let spec = parse(&["--package", "color", "--type", "Color", "--values", ""])
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(
            spec.validate(),
            Err(enumerator_spec::ValidationError::EmptyValues)
        );
    }

    #[test]
    fn test_required_flags_without_spec() {
        assert!(parse(&["--package", "color"]).is_err());
    }

    #[test]
    fn test_decode_to_sentinel_requires_json() {
        assert!(
            parse(&[
                "--package", "color", "--type", "Color", "--values", "Red",
                "--unmarshal-json-to-undefined",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_spec_conflicts_with_flags() {
        assert!(parse(&["--spec", "enum.toml", "--package", "color"]).is_err());
    }

    #[test]
    fn test_spec_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.toml");
        fs::write(
            &path,
            r#"
            package = "color"
            type = "Color"
            values = ["Red", "Green"]
            "#,
        )
        .unwrap();

        let spec = parse(&["--spec", path.to_str().unwrap()])
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(spec.values, vec!["Red", "Green"]);
    }
}
