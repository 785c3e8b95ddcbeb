//! Go function builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    receiver: Option<String>,
    params: String,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: String::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Make this a method, e.g. `receiver("b baseColor")`.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Set the parameter list, e.g. `params("name string")`.
    pub fn params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a blank line to the function body.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Add a nested statement to the function body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({}) ", r))
            .unwrap_or_default();
        let returns = self
            .returns
            .as_ref()
            .map(|r| format!(" {}", r))
            .unwrap_or_default();
        format!("func {}{}({}){}", receiver, self.name, self.params, returns)
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.body.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", self.signature()))];
        }
        vec![CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.clone(),
        )]
    }
}

/// A Go `if` statement without `else`.
#[derive(Debug, Clone)]
pub struct If {
    condition: String,
    body: Vec<CodeFragment>,
}

impl If {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }
}

impl Renderable for If {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("if {} {{", self.condition),
            self.body.clone(),
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
    fn test_empty_method_is_one_line() {
        let code = render(&Func::new("sealedColor").receiver("b baseColor"));
        assert_eq!(code, "func (b baseColor) sealedColor() {}\n");
    }

    #[test]
    fn test_function_with_params_and_returns() {
        let code = render(
            &Func::new("newInvalidColorNameError")
                .params("name string")
                .returns("InvalidColorNameError")
                .body_line("return InvalidColorNameError{name: name}"),
        );
        assert_eq!(
            code,
            "func newInvalidColorNameError(name string) InvalidColorNameError {\n\treturn InvalidColorNameError{name: name}\n}\n"
        );
    }

    #[test]
    fn test_nested_if() {
        let code = render(
            &Func::new("Of")
                .params("name string")
                .returns("(Color, error)")
                .body_node(If::new("ok").line("return value, nil"))
                .body_blank()
                .body_line("return nil, err"),
        );
        assert_eq!(
            code,
            "func Of(name string) (Color, error) {\n\tif ok {\n\t\treturn value, nil\n\t}\n\n\treturn nil, err\n}\n"
        );
    }
}
