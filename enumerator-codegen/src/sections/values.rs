use super::{Section, SectionContext};
use crate::{
    ast::{VarBlock, quoted},
    builder::{CodeFragment, Renderable},
    naming::VALUES_BY_NAME,
};

/// One package-level value per variant plus the name lookup map.
///
/// Both lists keep the declaration order of `values`.
pub struct ValuesSection;

impl Section for ValuesSection {
    fn name(&self) -> &'static str {
        "values"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let values = &ctx.spec.values;

        let block = values.iter().fold(VarBlock::new(), |block, value| {
            block.var(
                value,
                &format!("{}{{name: {}}}", names.base_impl, quoted(value)),
            )
        });

        let entries = values
            .iter()
            .map(|value| CodeFragment::line(format!("{}.String(): {},", value, value)))
            .collect();

        block
            .blank()
            .composite(
                VALUES_BY_NAME,
                &format!("map[string]{}{{", names.type_name),
                entries,
            )
            .to_fragments()
    }
}
