use super::{Section, SectionContext};
use crate::{
    ast::Imports,
    builder::{CodeFragment, Renderable},
};

/// Standard-library imports needed by the JSON machinery.
pub struct ImportsSection;

impl Section for ImportsSection {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn is_enabled(&self, ctx: &SectionContext<'_>) -> bool {
        ctx.spec.generates_json()
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let mut imports = Imports::new().add("bytes");
        // errors is only used to wrap failed strict lookups
        if !ctx.spec.decodes_unknown_to_sentinel() {
            imports = imports.add("errors");
        }
        imports.add("strings").to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use enumerator_spec::EnumSpec;

    use super::*;
    use crate::sections::render_section;

    #[test]
    fn test_strict_decoding_imports_errors() {
        let spec = EnumSpec::new("color", "Color", ["Red"]).with_json(false);
        assert_eq!(
            render_section(&ImportsSection, &spec),
            "import (\n\t\"bytes\"\n\t\"errors\"\n\t\"strings\"\n)\n"
        );
    }

    #[test]
    fn test_sentinel_decoding_skips_errors() {
        let spec = EnumSpec::new("color", "Color", ["Undefined", "Red"])
            .with_sentinel("Undefined")
            .with_json(true);
        assert_eq!(
            render_section(&ImportsSection, &spec),
            "import (\n\t\"bytes\"\n\t\"strings\"\n)\n"
        );
    }

    #[test]
    fn test_disabled_without_json() {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        let ctx = SectionContext::new(&spec, None);
        assert!(!ImportsSection.is_enabled(&ctx));
    }
}
