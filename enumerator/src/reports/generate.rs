//! Generate command report data structures.

use enumerator_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generated enum type.
    pub type_name: String,
    /// Where the source went.
    pub result: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        // stdout already holds the source
        if let WriteResult::Written(path) = &self.result {
            out.status(&format!("Generated {} to {}", self.type_name, path.display()));
        }
    }
}
