//! Source printer for generated declarations
//!
//! Renders output trees as host-language source, for hosts that splice text
//! rather than trees and for readable test expectations.
//!
//! ```
//! use prismatic::syntax::printer::SourcePrinter;
//! use prismatic::syntax::generated::{GeneratedDecl, InitializerDecl, Member};
//!
//! let init = GeneratedDecl::Member(Member::Initializer(InitializerDecl {
//!     visibility: None,
//!     parameters: vec![],
//!     body: vec![],
//! }));
//! assert_eq!(SourcePrinter::new().print(&[init]), "init() {\n}");
//! ```

use super::generated::{
    AccessorBody, ComputedProperty, ExtensionDecl, FunctionParameter, GeneratedDecl,
    InitializerDecl, Member,
};
use super::stmt::{Condition, Stmt};

/// Pretty printer for generated declarations
pub struct SourcePrinter {
    /// Indentation string for one level
    indent: String,
}

impl SourcePrinter {
    /// Create a printer indenting with four spaces
    pub fn new() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }

    /// Set the indentation string
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Print declarations separated by blank lines
    pub fn print(&self, decls: &[GeneratedDecl]) -> String {
        let rendered: Vec<String> = decls.iter().map(|decl| self.print_decl(decl)).collect();
        rendered.join("\n\n")
    }

    /// Print one declaration
    pub fn print_decl(&self, decl: &GeneratedDecl) -> String {
        let mut output = String::new();
        match decl {
            GeneratedDecl::Member(member) => self.write_member(member, 0, &mut output),
            GeneratedDecl::Extension(extension) => self.write_extension(extension, &mut output),
        }
        trim_final_newline(output)
    }

    /// Print one member at the outermost level
    pub fn print_member(&self, member: &Member) -> String {
        let mut output = String::new();
        self.write_member(member, 0, &mut output);
        trim_final_newline(output)
    }

    fn line(&self, output: &mut String, depth: usize, text: &str) {
        for _ in 0..depth {
            output.push_str(&self.indent);
        }
        output.push_str(text);
        output.push('\n');
    }

    fn write_extension(&self, extension: &ExtensionDecl, output: &mut String) {
        self.line(output, 0, &format!("extension {} {{", extension.extended_type));
        for (i, member) in extension.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.write_member(member, 1, output);
        }
        self.line(output, 0, "}");
    }

    fn write_member(&self, member: &Member, depth: usize, output: &mut String) {
        match member {
            Member::Property(property) => self.write_property(property, depth, output),
            Member::Initializer(init) => self.write_initializer(init, depth, output),
        }
    }

    fn write_property(&self, property: &ComputedProperty, depth: usize, output: &mut String) {
        let header = format!(
            "{}var {}: {} {{",
            modifier(property.visibility.map(|v| v.keyword())),
            property.name,
            property.ty
        );
        self.line(output, depth, &header);
        match &property.accessors {
            AccessorBody::Getter(body) => self.write_block(body, depth + 1, output),
            AccessorBody::GetSet { get, set } => {
                self.line(output, depth + 1, "get {");
                self.write_block(get, depth + 2, output);
                self.line(output, depth + 1, "}");
                self.line(output, depth + 1, "set {");
                self.write_block(set, depth + 2, output);
                self.line(output, depth + 1, "}");
            }
        }
        self.line(output, depth, "}");
    }

    fn write_initializer(&self, init: &InitializerDecl, depth: usize, output: &mut String) {
        let parameters: Vec<String> = init.parameters.iter().map(format_parameter).collect();
        let header = format!(
            "{}init({}) {{",
            modifier(init.visibility.map(|v| v.keyword())),
            parameters.join(", ")
        );
        self.line(output, depth, &header);
        self.write_block(&init.body, depth + 1, output);
        self.line(output, depth, "}");
    }

    fn write_block(&self, body: &[Stmt], depth: usize, output: &mut String) {
        for stmt in body {
            self.write_stmt(stmt, depth, output);
        }
    }

    fn write_stmt(&self, stmt: &Stmt, depth: usize, output: &mut String) {
        match stmt {
            Stmt::Expr(expr) => self.line(output, depth, &expr.to_string()),
            Stmt::Return(None) => self.line(output, depth, "return"),
            Stmt::Return(Some(expr)) => self.line(output, depth, &format!("return {}", expr)),
            Stmt::Assign { target, value } => {
                self.line(output, depth, &format!("{} = {}", target, value))
            }
            Stmt::Guard {
                conditions,
                else_body,
            } => {
                self.line(
                    output,
                    depth,
                    &format!("guard {} else {{", format_conditions(conditions)),
                );
                self.write_block(else_body, depth + 1, output);
                self.line(output, depth, "}");
            }
            Stmt::If {
                conditions,
                then_body,
                else_body,
            } => {
                self.line(
                    output,
                    depth,
                    &format!("if {} {{", format_conditions(conditions)),
                );
                self.write_block(then_body, depth + 1, output);
                match else_body {
                    Some(else_body) => {
                        self.line(output, depth, "} else {");
                        self.write_block(else_body, depth + 1, output);
                        self.line(output, depth, "}");
                    }
                    None => self.line(output, depth, "}"),
                }
            }
        }
    }
}

impl Default for SourcePrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn modifier(keyword: Option<&str>) -> String {
    keyword.map(|k| format!("{} ", k)).unwrap_or_default()
}

fn format_parameter(parameter: &FunctionParameter) -> String {
    match &parameter.default_value {
        Some(default) => format!("{}: {} = {}", parameter.name, parameter.ty, default),
        None => format!("{}: {}", parameter.name, parameter.ty),
    }
}

fn format_conditions(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn trim_final_newline(mut output: String) -> String {
    if output.ends_with('\n') {
        output.pop();
    }
    output
}
