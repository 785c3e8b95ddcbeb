use super::{Section, SectionContext};
use crate::{
    ast::Interface,
    builder::{CodeFragment, Renderable},
};

/// The sealed enum interface.
pub struct DeclarationSection;

impl Section for DeclarationSection {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let mut interface = Interface::new(&names.type_name)
            .method(format!("{}()", names.sealed_method))
            .method("String() string");
        if ctx.spec.generates_json() {
            interface = interface.method(format!("ToJSONMarshallable() {}", names.marshallable));
        }
        interface.to_fragments()
    }
}
