use super::{Section, SectionContext};
use crate::{
    ast::{Func, If, separated},
    builder::{CodeFragment, Renderable},
    naming::{LOOKUP_FN, LOOKUP_OR_SENTINEL_FN, VALUES_BY_NAME},
};

/// `Of` and, with a sentinel, `OfOrUndefined`.
pub struct LookupSection;

impl Section for LookupSection {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let found = format!("value, ok := {}[name]; ok", VALUES_BY_NAME);

        let mut funcs = vec![
            Func::new(LOOKUP_FN)
                .params("name string")
                .returns(format!("({}, error)", names.type_name))
                .body_node(If::new(&found).line("return value, nil"))
                .body_line(format!(
                    "return nil, {}(name)",
                    names.invalid_name_error_ctor
                ))
                .to_fragments(),
        ];

        if let Some(sentinel) = ctx.sentinel() {
            funcs.push(
                Func::new(LOOKUP_OR_SENTINEL_FN)
                    .params("name string")
                    .returns(&names.type_name)
                    .body_node(If::new(&found).line("return value"))
                    .body_line(format!("return {}", sentinel))
                    .to_fragments(),
            );
        }

        separated(funcs)
    }
}
