use super::{Section, SectionContext};
use crate::{
    ast::{Field, Func, If, Struct, separated},
    builder::{CodeFragment, Renderable},
    naming::{DerivedNames, LOOKUP_FN, LOOKUP_OR_SENTINEL_FN},
};

/// JSON wrapper type with `MarshalJSON` / `UnmarshalJSON` and conversions.
pub struct JsonSection;

impl Section for JsonSection {
    fn name(&self) -> &'static str {
        "json"
    }

    fn is_enabled(&self, ctx: &SectionContext<'_>) -> bool {
        ctx.spec.generates_json()
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<CodeFragment> {
        let names = &ctx.names;
        let fallback = ctx
            .sentinel()
            .filter(|_| ctx.spec.decodes_unknown_to_sentinel());

        separated([
            Struct::new(&names.marshallable)
                .field(Field::new("en", &names.type_name))
                .to_fragments(),
            marshal_json(names).to_fragments(),
            unmarshal_json(names, fallback).to_fragments(),
            Func::new("ToJSONMarshallable")
                .receiver(format!("b {}", names.base_impl))
                .returns(&names.marshallable)
                .body_line(format!("return {}{{en: b}}", names.marshallable))
                .to_fragments(),
            Func::new("ToEnum")
                .receiver(format!("m {}", names.marshallable))
                .returns(&names.type_name)
                .body_line("return m.en")
                .to_fragments(),
        ])
    }
}

/// An unset wrapper encodes as `null`, anything else as its quoted name.
fn marshal_json(names: &DerivedNames) -> Func {
    Func::new("MarshalJSON")
        .receiver(format!("m {}", names.marshallable))
        .returns("([]byte, error)")
        .body_node(If::new("m.en == nil").line(r#"return []byte("null"), nil"#))
        .body_line(r#"return []byte("\"" + m.en.String() + "\""), nil"#)
}

/// Empty input and `null` leave the wrapper unset, or assign the sentinel
/// when `fallback` is given. Any other input has one surrounding pair of
/// quotes stripped and is looked up by name.
fn unmarshal_json(names: &DerivedNames, fallback: Option<&str>) -> Func {
    let no_value = |condition: &str| match fallback {
        Some(sentinel) => If::new(condition)
            .line(format!("m.en = {}", sentinel))
            .line("return nil"),
        None => If::new(condition).line("return nil"),
    };

    let func = Func::new("UnmarshalJSON")
        .receiver(format!("m *{}", names.marshallable))
        .params("jsonBytes []byte")
        .returns("error")
        .body_node(no_value("len(jsonBytes) == 0"))
        .body_blank()
        .body_line("jsonString := bytes.NewBuffer(jsonBytes).String()")
        .body_node(no_value(r#"jsonString == "null""#))
        .body_blank()
        .body_line(
            r#"trimmedString := strings.TrimSuffix(strings.TrimPrefix(jsonString, "\""), "\"")"#,
        );

    let func = match fallback {
        Some(_) => func.body_line(format!("m.en = {}(trimmedString)", LOOKUP_OR_SENTINEL_FN)),
        None => func
            .body_line(format!("value, err := {}(trimmedString)", LOOKUP_FN))
            .body_node(If::new("err != nil").line(format!(
                r#"return errors.Join(errors.New("could not unmarshal {} from JSON"), err)"#,
                names.type_name
            )))
            .body_line("m.en = value"),
    };

    func.body_blank().body_line("return nil")
}

#[cfg(test)]
mod tests {
    use enumerator_spec::EnumSpec;

    use super::*;
    use crate::sections::render_section;

    #[test]
    fn test_disabled_without_json() {
        let spec = EnumSpec::new("color", "Color", ["Red"]);
        let ctx = SectionContext::new(&spec, None);
        assert!(!JsonSection.is_enabled(&ctx));
    }

    #[test]
    fn test_marshal_json() {
        let spec = EnumSpec::new("color", "Color", ["Red"]).with_json(false);
        let code = render_section(&JsonSection, &spec);
        assert!(code.contains(
            r#"func (m MarshallableColor) MarshalJSON() ([]byte, error) {
	if m.en == nil {
		return []byte("null"), nil
	}
	return []byte("\"" + m.en.String() + "\""), nil
}
"#
        ));
    }

    #[test]
    fn test_strict_unmarshal_wraps_lookup_error() {
        let spec = EnumSpec::new("color", "Color", ["Red"]).with_json(false);
        let code = render_section(&JsonSection, &spec);
        assert!(code.contains(
            r#"	if len(jsonBytes) == 0 {
		return nil
	}
"#
        ));
        assert!(code.contains(
            r#"	value, err := Of(trimmedString)
	if err != nil {
		return errors.Join(errors.New("could not unmarshal Color from JSON"), err)
	}
	m.en = value
"#
        ));
        assert!(!code.contains("OfOrUndefined"));
    }

    #[test]
    fn test_sentinel_unmarshal_never_fails() {
        let spec = EnumSpec::new("color", "Color", ["Undefined", "Red"])
            .with_sentinel("Undefined")
            .with_json(true);
        let code = render_section(&JsonSection, &spec);
        assert!(code.contains(
            r#"	if jsonString == "null" {
		m.en = Undefined
		return nil
	}
"#
        ));
        assert!(code.contains("\tm.en = OfOrUndefined(trimmedString)\n"));
        assert!(!code.contains("errors."));
    }

    #[test]
    fn test_sentinel_without_fallback_decodes_strictly() {
        let spec = EnumSpec::new("color", "Color", ["Undefined", "Red"])
            .with_sentinel("Undefined")
            .with_json(false);
        let code = render_section(&JsonSection, &spec);
        assert!(code.contains("value, err := Of(trimmedString)"));
        assert!(!code.contains("m.en = Undefined"));
    }

    #[test]
    fn test_conversions() {
        let spec = EnumSpec::new("color", "Color", ["Red"]).with_json(false);
        let code = render_section(&JsonSection, &spec);
        assert!(code.starts_with("type MarshallableColor struct {\n\ten Color\n}\n"));
        assert!(code.contains(
            "func (b baseColor) ToJSONMarshallable() MarshallableColor {\n\treturn MarshallableColor{en: b}\n}\n"
        ));
        assert!(code.ends_with("func (m MarshallableColor) ToEnum() Color {\n\treturn m.en\n}\n"));
    }
}
