use super::{Section, SectionContext};
use crate::{
    ast::{Field, Func, Struct, separated},
    builder::{CodeFragment, Renderable},
};

/// Error type returned by `Of` for unknown names.
pub struct InvalidNameErrorSection;

impl Section for InvalidNameErrorSection {
    fn name(&self) -> &'static str {
        "invalid_name_error"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let error = &names.invalid_name_error;

        separated([
            Struct::new(error)
                .field(Field::new("name", "string"))
                .to_fragments(),
            Func::new("Error")
                .receiver(format!("e {}", error))
                .returns("string")
                .body_line(format!(
                    r#"return "invalid {} name: \"" + e.name + "\"""#,
                    names.type_name
                ))
                .to_fragments(),
            Func::new(&names.invalid_name_error_ctor)
                .params("name string")
                .returns(error)
                .body_line(format!("return {}{{name: name}}", error))
                .to_fragments(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use enumerator_spec::EnumSpec;

    use super::*;
    use crate::sections::render_section;

    #[test]
    fn test_invalid_name_error() {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        assert_eq!(
            render_section(&InvalidNameErrorSection, &spec),
            r#"type InvalidColorNameError struct {
	name string
}

func (e InvalidColorNameError) Error() string {
	return "invalid Color name: \"" + e.name + "\""
}

func newInvalidColorNameError(name string) InvalidColorNameError {
	return InvalidColorNameError{name: name}
}
"#
        );
    }
}
