//! Structural validation of enum specs.

use std::collections::HashSet;

use crate::{EnumSpec, ValidationError};

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Package-level functions and variables every generated file declares.
const GENERATED_NAMES: &[&str] = &["Of", "OfOrUndefined", "allValuesByString"];

/// Predeclared Go identifiers the generated code refers to.
const PREDECLARED_NAMES: &[&str] = &["byte", "error", "len", "nil", "string"];

/// Check if a name is a Go reserved keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Run every rule in order and return the first violation.
pub(crate) fn validate(spec: &EnumSpec) -> Result<(), ValidationError> {
    if spec.package.is_empty() {
        return Err(ValidationError::EmptyPackageName);
    }
    if spec.type_name.is_empty() {
        return Err(ValidationError::EmptyTypeName);
    }
    if spec.values.is_empty() {
        return Err(ValidationError::EmptyValues);
    }

    validate_sentinel(spec)?;
    validate_unique(&spec.values)?;

    validate_name(&spec.package, "package")?;
    validate_name(&spec.type_name, "type")?;
    for value in &spec.values {
        validate_name(value, "value")?;
    }

    let mut taken = file_scope_names(spec);
    validate_free(&spec.type_name, "type", &taken)?;
    taken.push(spec.type_name.clone());
    for value in &spec.values {
        validate_free(value, "value", &taken)?;
    }
    if let Some(sentinel) = &spec.sentinel {
        validate_free(sentinel, "sentinel", &sentinel_scope_names(spec))?;
    }

    Ok(())
}

/// Identifiers the generated file declares, imports or relies on, other
/// than the variants themselves.
fn file_scope_names(spec: &EnumSpec) -> Vec<String> {
    let type_name = &spec.type_name;
    let mut names: Vec<String> = GENERATED_NAMES
        .iter()
        .chain(PREDECLARED_NAMES)
        .map(|n| n.to_string())
        .collect();
    // only `func init` may use this name
    names.push("init".to_string());
    names.push(format!("base{}", type_name));
    names.push(format!("Invalid{}NameError", type_name));
    names.push(format!("newInvalid{}NameError", type_name));

    if spec.generates_json() {
        names.push(format!("Marshallable{}", type_name));
        names.push("bytes".to_string());
        names.push("strings".to_string());
        if !spec.decodes_unknown_to_sentinel() {
            names.push("errors".to_string());
        }
    }
    names
}

/// Locals in scope wherever the generated code returns or assigns the sentinel.
fn sentinel_scope_names(spec: &EnumSpec) -> Vec<&'static str> {
    let mut names = vec!["name"];
    if spec.decodes_unknown_to_sentinel() {
        names.extend(["m", "jsonBytes", "jsonString"]);
    }
    names
}

fn validate_free<S: AsRef<str>>(
    name: &str,
    context: &str,
    taken: &[S],
) -> Result<(), ValidationError> {
    if taken.iter().any(|t| t.as_ref() == name) {
        return Err(ValidationError::ReservedName {
            name: name.to_string(),
            context: context.to_string(),
        });
    }
    Ok(())
}

fn validate_sentinel(spec: &EnumSpec) -> Result<(), ValidationError> {
    if let Some(sentinel) = &spec.sentinel {
        if !spec.values.contains(sentinel) {
            return Err(ValidationError::SentinelNotFound {
                sentinel: sentinel.clone(),
            });
        }
    }

    if spec.decodes_unknown_to_sentinel() && spec.sentinel.is_none() {
        return Err(ValidationError::SentinelRequiredForDecoding);
    }

    Ok(())
}

fn validate_unique(values: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(ValidationError::DuplicateValue {
                name: value.clone(),
            });
        }
    }
    Ok(())
}

fn validate_name(name: &str, context: &str) -> Result<(), ValidationError> {
    if is_go_keyword(name) {
        return Err(ValidationError::ReservedKeyword {
            name: name.to_string(),
            context: context.to_string(),
        });
    }

    if let Some(reason) = validate_identifier(name) {
        return Err(ValidationError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(())
}

/// Validate that a name is a valid Go identifier.
/// Returns None if valid, Some(reason) if invalid
///
/// Only ASCII letters, digits and `_` are accepted. `char::is_alphabetic`
/// and `char::is_alphanumeric` admit categories such as `Nl` and `No` that
/// Go rejects.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if name == "_" {
        return Some("name cannot be the blank identifier");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphabetic() && first != '_' {
            return Some("name must start with a letter or underscore");
        }
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name contains invalid characters");
        }
    }

    None
}
