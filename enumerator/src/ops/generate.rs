//! Generate operation - spec to Go source at a destination.

use enumerator_core::Destination;
use enumerator_spec::EnumSpec;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Nothing reaches `destination` unless generation succeeds as a whole.
pub fn generate(spec: &EnumSpec, destination: &Destination) -> Result<GenerateReport> {
    let source = enumerator_codegen::generate(spec)
        .wrap_err_with(|| format!("Failed to generate {}", spec.type_name))?;
    let result = destination.write(&source)?;

    Ok(GenerateReport {
        type_name: spec.type_name.clone(),
        result,
    })
}
