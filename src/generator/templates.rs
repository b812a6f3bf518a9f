//! Pure rendering functions from descriptors to generated C# text.
//!
//! No templating engine; the output is a fixed header, one forwarding
//! declaration per method, and a fixed footer, concatenated in that order.

use crate::error::Result;
use crate::models::{escape_keyword, prettify_param_name, MethodDescriptor, PassMode};
use crate::surface::SurfaceManifest;

/// Using directive, namespace open, MoonSharp annotation, static class open.
pub fn render_header(surface: &SurfaceManifest, namespace_name: &str) -> String {
    format!(
        "using {};\n\
         \n\
         namespace {}\n\
         {{\n\
         \t[MoonSharp.Interpreter.MoonSharpUserData]\n\
         \tpublic static class {}\n\
         \t{{\n",
        surface.using_directive, namespace_name, surface.wrapper_class
    )
}

/// Closes the class and the namespace. The trailing newline keeps the file
/// ending the way the original generator wrote it.
pub fn render_footer() -> &'static str {
    "\t}\n}\n"
}

/// One forwarding declaration, newline-terminated:
///
/// ```text
/// public static System.Boolean Begin(System.String name, ref System.Boolean pOpen) => ImGui.Begin(name, ref pOpen);
/// ```
pub fn render_declaration(type_name: &str, method: &MethodDescriptor) -> Result<String> {
    let return_type = if method.returns_void() {
        "void"
    } else {
        method.return_type.as_str()
    };

    Ok(format!(
        "\t\tpublic static {} {}({}) => {}.{}({});\n",
        return_type,
        method.name,
        render_parameter_list(method, true)?,
        type_name,
        method.name,
        render_parameter_list(method, false)?,
    ))
}

/// Renders the parameter list with types (declaration signature) or without
/// (forwarding call), joined with `, `.
fn render_parameter_list(method: &MethodDescriptor, with_types: bool) -> Result<String> {
    let mut rendered = Vec::with_capacity(method.parameters.len());
    for param in &method.parameters {
        let name = escape_keyword(prettify_param_name(&param.name)?);
        let text = match (param.pass_mode, with_types) {
            (PassMode::Value, true) => format!("{} {}", param.type_name, name),
            (PassMode::Value, false) => name,
            (mode, true) => format!(
                "{} {} {}",
                mode.modifier(),
                strip_byref_marker(&param.type_name),
                name
            ),
            (mode, false) => format!("{} {}", mode.modifier(), name),
        };
        rendered.push(text);
    }
    Ok(rendered.join(", "))
}

/// Reflection prints by-reference types with a trailing `&`; the C#
/// signature wants the element type.
fn strip_byref_marker(type_name: &str) -> &str {
    type_name.strip_suffix('&').unwrap_or(type_name)
}
