//! Identifiers derived from the enum type name.

/// Binary name recorded in the generation marker and `go:generate` directive.
pub const GENERATOR_NAME: &str = "enumerator";

/// Exact-match lookup function.
pub const LOOKUP_FN: &str = "Of";

/// Lookup function falling back to the sentinel.
pub const LOOKUP_OR_SENTINEL_FN: &str = "OfOrUndefined";

/// Package-level map from variant name to value.
pub const VALUES_BY_NAME: &str = "allValuesByString";

/// Names of the generated helper types and functions.
///
/// Pure function of the type name, so identical specs always produce
/// identical identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The enum interface itself.
    pub type_name: String,
    /// Unexported method sealing the interface.
    pub sealed_method: String,
    /// Single concrete carrier type behind every variant.
    pub base_impl: String,
    /// JSON wrapper holding one optional value.
    pub marshallable: String,
    /// Error returned for unknown names.
    pub invalid_name_error: String,
    pub invalid_name_error_ctor: String,
}

impl DerivedNames {
    pub fn resolve(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            sealed_method: format!("sealed{}", type_name),
            base_impl: format!("base{}", type_name),
            marshallable: format!("Marshallable{}", type_name),
            invalid_name_error: format!("Invalid{}NameError", type_name),
            invalid_name_error_ctor: format!("newInvalid{}NameError", type_name),
        }
    }
}
