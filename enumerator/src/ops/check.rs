//! Check operation - spec validation.

use enumerator_spec::EnumSpec;

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(spec: &EnumSpec) -> CheckReport {
    let result = spec.validate();
    if let Err(err) = &result {
        tracing::debug!(%err, "spec is invalid");
    }

    CheckReport {
        type_name: spec.type_name.clone(),
        package: spec.package.clone(),
        values: spec.values.clone(),
        sentinel: spec.sentinel.clone(),
        json: spec.generates_json(),
        result,
    }
}
