//! Check command report data structures.

use enumerator_spec::ValidationError;

use super::output::{Output, Report};

/// Report data from spec validation.
#[derive(Debug)]
pub struct CheckReport {
    pub type_name: String,
    pub package: String,
    /// Variants in declaration order.
    pub values: Vec<String>,
    pub sentinel: Option<String>,
    /// Whether JSON marshalling is generated.
    pub json: bool,
    /// The first rule the spec violates, if any.
    pub result: Result<(), ValidationError>,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        // Invalid specs are reported as diagnostics by the command
        if !self.is_valid() {
            return;
        }

        out.success(&format!("{} is valid", self.type_name));
        out.newline();
        out.key_value_indented("package", &self.package);
        out.key_value_indented("json", if self.json { "yes" } else { "no" });
        out.key_value_indented(
            "variants",
            &format!(
                "{} value{}",
                self.values.len(),
                if self.values.len() == 1 { "" } else { "s" }
            ),
        );
        for value in &self.values {
            if self.sentinel.as_deref() == Some(value.as_str()) {
                out.list_item(&format!("{} (sentinel)", value));
            } else {
                out.list_item(value);
            }
        }
    }
}
