use super::{Section, SectionContext};
use crate::{
    ast::{Field, Func, Struct, separated},
    builder::{CodeFragment, Renderable},
};

/// The concrete carrier type shared by every variant.
pub struct BaseImplSection;

impl Section for BaseImplSection {
    fn name(&self) -> &'static str {
        "base_impl"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let receiver = format!("b {}", names.base_impl);

        separated([
            Struct::new(&names.base_impl)
                .field(Field::new("name", "string"))
                .to_fragments(),
            Func::new(&names.sealed_method)
                .receiver(&receiver)
                .to_fragments(),
            Func::new("String")
                .receiver(&receiver)
                .returns("string")
                .body_line("return b.name")
                .to_fragments(),
        ])
    }
}
