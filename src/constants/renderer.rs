//! Rendering of constant groups as nested class source and flattened references

use crate::constants::model::{ConstantGroup, ConstantValue};
use crate::constants::table::FlatReferenceTable;
use tracing::debug;

/// Both renderer outputs for a set of groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConstants {
    /// Class declarations for every top-level group, separated by blank lines
    pub source: String,
    pub table: FlatReferenceTable,
}

/// Render source text and the flattened reference table for `groups`
pub fn render(groups: &[ConstantGroup]) -> RenderedConstants {
    let renderer = ClassRenderer::new();
    let source = groups
        .iter()
        .map(|group| renderer.render(group))
        .collect::<Vec<_>>()
        .join("\n\n");

    RenderedConstants {
        source,
        table: flatten(groups),
    }
}

/// Render a single top-level group as a class declaration
pub fn render_group(group: &ConstantGroup) -> String {
    ClassRenderer::new().render(group)
}

/// Flatten `groups` into dotted paths, resolving list references in order
pub fn flatten(groups: &[ConstantGroup]) -> FlatReferenceTable {
    let mut flattener = ConstantFlattener::new();
    for group in groups {
        flattener.add_group(group);
    }
    flattener.finish()
}

/// Renders constant groups as nested class declarations.
///
/// Nested classes come before the members of their enclosing class. Scalars
/// become quoted `String` constants; list elements are emitted unquoted so that
/// they can name other constants.
pub struct ClassRenderer {
    indent: &'static str,
}

impl ClassRenderer {
    pub fn new() -> Self {
        Self { indent: "\t" }
    }

    pub fn render(&self, group: &ConstantGroup) -> String {
        let mut out = String::new();
        self.append_class(&mut out, group, 0);
        out
    }

    fn append_class(&self, out: &mut String, group: &ConstantGroup, level: usize) {
        let class_indent = self.indent.repeat(level);
        let member_indent = self.indent.repeat(level + 1);

        out.push_str(&class_indent);
        out.push_str(if level == 0 {
            "public class "
        } else {
            "public static class "
        });
        out.push_str(group.name());
        out.push_str(" {");
        if level == 0 {
            out.push('\n');
        }

        for child in group.children() {
            out.push('\n');
            self.append_class(out, child, level + 1);
            out.push('\n');
        }
        out.push('\n');

        for (name, value) in group.members() {
            out.push_str(&member_indent);
            out.push_str("public static final ");
            match value {
                ConstantValue::Scalar(v) => {
                    out.push_str(&format!("String {name} = \"{v}\";"));
                }
                ConstantValue::List(elements) => {
                    out.push_str(&format!("String[] {name} = {{ {} }};", elements.join(", ")));
                }
            }
            out.push('\n');
        }

        out.push_str(&class_indent);
        out.push('}');
    }
}

impl Default for ClassRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first flattener that accumulates one table across many groups.
///
/// A list element is resolved against the table built so far, first as a full
/// path and then relative to the current top-level group. Elements that are
/// not (yet) in the table stay literal, so a list naming a constant declared
/// after it keeps the constant's name instead of its value.
#[derive(Debug, Default)]
pub struct ConstantFlattener {
    table: FlatReferenceTable,
}

impl ConstantFlattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a top-level group, rooted at its own name
    pub fn add_group(&mut self, group: &ConstantGroup) {
        self.flatten_group(group.name(), group.name(), group);
    }

    pub fn finish(self) -> FlatReferenceTable {
        self.table
    }

    fn flatten_group(&mut self, top: &str, path: &str, group: &ConstantGroup) {
        for child in group.children() {
            let child_path = format!("{path}.{}", child.name());
            self.flatten_group(top, &child_path, child);
        }

        for (name, value) in group.members() {
            let resolved = match value {
                ConstantValue::Scalar(v) => v.clone(),
                ConstantValue::List(elements) => elements
                    .iter()
                    .map(|element| self.resolve(top, element))
                    .collect::<Vec<_>>()
                    .join(","),
            };
            self.table.insert(format!("{path}.{name}"), resolved);
        }
    }

    fn resolve(&self, top: &str, element: &str) -> String {
        if let Some(value) = self.table.get(element) {
            return value.to_string();
        }
        if let Some(value) = self.table.get(&format!("{top}.{element}")) {
            return value.to_string();
        }
        debug!("List element '{}' in {} left unresolved", element, top);
        element.to_string()
    }
}
