//! Source templates with `{PLACEHOLDER}` substitution

const CONSTANT_TEMPLATE: &str = include_str!("../../templates/Constant.java.template");
const METADATA_TEMPLATE: &str = include_str!("../../templates/Metadata.java.template");

/// A source file template bundled with the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTemplate {
    /// One top-level constant class: `{PACKAGE}`, `{CLASS_BODY}`
    Constant,
    /// The metadata reference class: `{PACKAGE}`, `{CONCEPTS}`, `{FORMS}`
    Metadata,
}

impl SourceTemplate {
    pub fn text(self) -> &'static str {
        match self {
            Self::Constant => CONSTANT_TEMPLATE,
            Self::Metadata => METADATA_TEMPLATE,
        }
    }

    /// Replace each `{NAME}` placeholder with its value
    pub fn render(self, values: &[(&str, &str)]) -> String {
        values
            .iter()
            .fold(self.text().to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
