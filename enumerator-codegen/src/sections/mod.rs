//! Section generators.
//!
//! A generated file is assembled from named sections in a fixed order. Each
//! section contributes one concern and may opt out via
//! [`Section::is_enabled`]; the [`Generator`](crate::Generator) separates the
//! enabled sections with one blank line.

mod base_impl;
mod copyright;
mod declaration;
mod header;
mod imports;
mod invalid_name_error;
mod json;
mod lookup;
mod values;

pub use base_impl::BaseImplSection;
pub use copyright::CopyrightSection;
pub use declaration::DeclarationSection;
pub use header::HeaderSection;
pub use imports::ImportsSection;
pub use invalid_name_error::InvalidNameErrorSection;
pub use json::JsonSection;
pub use lookup::LookupSection;
pub use values::ValuesSection;

use enumerator_spec::EnumSpec;

use crate::{builder::CodeFragment, naming::DerivedNames};

/// Everything a section may read while rendering.
#[derive(Debug, Clone)]
pub struct SectionContext<'a> {
    pub spec: &'a EnumSpec,
    pub names: DerivedNames,
    /// Copyright text, already read from `spec.copyright`.
    pub copyright: Option<String>,
}

impl<'a> SectionContext<'a> {
    pub fn new(spec: &'a EnumSpec, copyright: Option<String>) -> Self {
        Self {
            spec,
            names: DerivedNames::resolve(&spec.type_name),
            copyright,
        }
    }

    /// The sentinel variant, if one is declared.
    pub fn sentinel(&self) -> Option<&'a str> {
        self.spec.sentinel.as_deref()
    }
}

/// One named part of the generated file.
pub trait Section {
    /// The section name (used in logs).
    fn name(&self) -> &'static str;

    /// Whether this section contributes anything for the given spec.
    fn is_enabled(&self, _ctx: &SectionContext<'_>) -> bool {
        true
    }

    /// Render the section without leading or trailing blank lines.
    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment>;
}

/// All sections in output order.
pub fn sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(CopyrightSection),
        Box::new(HeaderSection),
        Box::new(ImportsSection),
        Box::new(DeclarationSection),
        Box::new(BaseImplSection),
        Box::new(ValuesSection),
        Box::new(LookupSection),
        Box::new(JsonSection),
        Box::new(InvalidNameErrorSection),
    ]
}

#[cfg(test)]
pub(crate) fn render_section(section: &dyn Section, spec: &EnumSpec) -> String {
    use crate::builder::Emitter;

    let ctx = SectionContext::new(spec, None);
    let mut emitter = Emitter::in_memory();
    emitter.emit(&section.render(&ctx));
    String::from_utf8(emitter.flush().unwrap()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let names: Vec<&str> = sections().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "copyright",
                "header",
                "imports",
                "declaration",
                "base_impl",
                "values",
                "lookup",
                "json",
                "invalid_name_error",
            ]
        );
    }

    #[test]
    fn test_context_resolves_names() {
        let spec = EnumSpec::new("color", "Color", ["Undefined", "Red"]).with_sentinel("Undefined");
        let ctx = SectionContext::new(&spec, None);

        assert_eq!(ctx.names.base_impl, "baseColor");
        assert_eq!(ctx.sentinel(), Some("Undefined"));
    }
}
