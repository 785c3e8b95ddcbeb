//! Go type, import and variable declarations.

use super::quoted;
use crate::builder::{CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go struct types.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .map(|f| CodeFragment::line(format!("{} {}", f.name, f.ty)))
            .collect();
        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            body,
        )]
    }
}

/// Builder for Go interface types.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    methods: Vec<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add a method signature, e.g. `String() string`.
    pub fn method(mut self, signature: impl Into<String>) -> Self {
        self.methods.push(signature.into());
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.methods.iter().map(CodeFragment::line).collect();
        vec![CodeFragment::block(
            format!("type {} interface {{", self.name),
            body,
        )]
    }
}

/// A parenthesized Go import declaration.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    paths: Vec<String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }
}

impl Renderable for Imports {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .paths
            .iter()
            .map(|p| CodeFragment::line(quoted(p)))
            .collect();
        vec![CodeFragment::block_with_close("import (", body, ")")]
    }
}

/// A parenthesized Go `var` declaration.
#[derive(Debug, Clone, Default)]
pub struct VarBlock {
    body: Vec<CodeFragment>,
}

impl VarBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name = value`.
    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.body
            .push(CodeFragment::line(format!("{} = {}", name, value)));
        self
    }

    /// Add `name = header` followed by indented entries and a closing `}`.
    pub fn composite(mut self, name: &str, header: &str, entries: Vec<CodeFragment>) -> Self {
        self.body.push(CodeFragment::block(
            format!("{} = {}", name, header),
            entries,
        ));
        self
    }

    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }
}

impl Renderable for VarBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block_with_close(
            "var (",
            self.body.clone(),
            ")",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Emitter;

    fn render(node: &impl Renderable) -> String {
        let mut emitter = Emitter::in_memory();
        emitter.emit(node);
        String::from_utf8(emitter.flush().unwrap()).unwrap()
    }

    #[test]
    fn test_struct() {
        let code = render(&Struct::new("baseColor").field(Field::new("name", "string")));
        assert_eq!(code, "type baseColor struct {\n\tname string\n}\n");
    }

    #[test]
    fn test_interface() {
        let code = render(
            &Interface::new("Color")
                .method("sealedColor()")
                .method("String() string"),
        );
        assert_eq!(
            code,
            "type Color interface {\n\tsealedColor()\n\tString() string\n}\n"
        );
    }

    #[test]
    fn test_imports() {
        let imports = Imports::new().add("bytes").add("strings");
        assert_eq!(
            render(&imports),
            "import (\n\t\"bytes\"\n\t\"strings\"\n)\n"
        );
    }

    #[test]
    fn test_var_block() {
        let code = render(
            &VarBlock::new()
                .var("Red", "baseColor{name: \"Red\"}")
                .blank()
                .composite(
                    "all",
                    "map[string]Color{",
                    vec![CodeFragment::line("Red.String(): Red,")],
                ),
        );
        assert_eq!(
            code,
            "var (\n\tRed = baseColor{name: \"Red\"}\n\n\tall = map[string]Color{\n\t\tRed.String(): Red,\n\t}\n)\n"
        );
    }
}
