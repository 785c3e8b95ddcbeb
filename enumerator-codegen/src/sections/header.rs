use super::{Section, SectionContext};
use crate::{builder::CodeFragment, naming::GENERATOR_NAME};

/// Package clause, generation marker and tool directives.
pub struct HeaderSection;

impl Section for HeaderSection {
    fn name(&self) -> &'static str {
        "header"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let spec = ctx.spec;
        let directive = match spec.invocation.as_deref().filter(|s| !s.is_empty()) {
            Some(args) => format!("//go:generate {} {}", GENERATOR_NAME, args),
            None => format!("//go:generate {}", GENERATOR_NAME),
        };

        let mut fragments = vec![
            CodeFragment::line(format!("package {}", spec.package)),
            CodeFragment::blank(),
            CodeFragment::comment(format!("Code generated by {} DO NOT EDIT.", GENERATOR_NAME)),
            CodeFragment::line(directive),
        ];
        if spec.exhaustiveness_marker {
            fragments.push(CodeFragment::line("//sumtype:decl"));
        }
        fragments
    }
}
