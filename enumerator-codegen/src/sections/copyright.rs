use super::{Section, SectionContext};
use crate::builder::CodeFragment;

/// Copyright text as a `//` comment block.
pub struct CopyrightSection;

impl Section for CopyrightSection {
    fn name(&self) -> &'static str {
        "copyright"
    }

    /// An empty copyright file contributes nothing.
    fn is_enabled(&self, ctx: &SectionContext<'_>) -> bool {
        ctx.copyright
            .as_deref()
            .is_some_and(|text| text.lines().next().is_some())
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let Some(text) = ctx.copyright.as_deref() else {
            return Vec::new();
        };
        text.lines()
            .map(CodeFragment::comment)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use enumerator_spec::EnumSpec;

    use super::*;
    use crate::builder::Emitter;

    fn render(copyright: &str) -> String {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        let ctx = SectionContext::new(&spec, Some(copyright.to_string()));
        let mut emitter = Emitter::in_memory();
        emitter.emit(&CopyrightSection.render(&ctx));
        String::from_utf8(emitter.flush().unwrap()).unwrap()
    }

    #[test]
    fn test_every_line_commented_in_order() {
        let code = render("MIT License\n\nCopyright (c) 2024 Someone\n");
        assert_eq!(code, "// MIT License\n//\n// Copyright (c) 2024 Someone\n");
    }

    #[test]
    fn test_crlf_dropped_trailing_whitespace_kept() {
        let code = render("First  \r\nSecond");
        assert_eq!(code, "// First  \n// Second\n");
    }

    #[test]
    fn test_disabled_for_empty_file() {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        let ctx = SectionContext::new(&spec, Some(String::new()));
        assert!(!CopyrightSection.is_enabled(&ctx));

        let ctx = SectionContext::new(&spec, Some("\n".to_string()));
        assert!(CopyrightSection.is_enabled(&ctx));
    }

    #[test]
    fn test_disabled_without_copyright() {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        let ctx = SectionContext::new(&spec, None);
        assert!(!CopyrightSection.is_enabled(&ctx));
    }
}
