use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a parameter is handed to the wrapped method.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PassMode {
    /// Plain by-value parameter.
    Value,
    /// By-reference, caller-visible mutation (`ref` in C#).
    Ref,
    /// By-reference, output-only (`out` in C#).
    Out,
}

impl Default for PassMode {
    fn default() -> Self {
        PassMode::Value
    }
}

impl PassMode {
    /// The C# modifier keyword, empty for by-value parameters.
    pub fn modifier(&self) -> &'static str {
        match self {
            PassMode::Value => "",
            PassMode::Ref => "ref",
            PassMode::Out => "out",
        }
    }
}

/// One parameter of a surface method, as reflection would describe it.
///
/// For `ref`/`out` parameters `type_name` carries the CLR by-reference form
/// with its trailing `&` (e.g. `System.Single&`); the renderer strips it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub pass_mode: PassMode,
}

impl ParameterDescriptor {
    pub fn value(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            pass_mode: PassMode::Value,
        }
    }

    pub fn by_ref(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            pass_mode: PassMode::Ref,
        }
    }

    pub fn out(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            pass_mode: PassMode::Out,
        }
    }
}

/// One public method of the target surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    /// CLR fully-qualified return type; `System.Void` means no value.
    pub return_type: String,
    #[serde(default)]
    pub returns_pointer: bool,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

fn default_true() -> bool {
    true
}

impl MethodDescriptor {
    pub fn returns_void(&self) -> bool {
        self.return_type == "System.Void"
    }
}

/// Fold an underscored parameter name into camelCase.
///
/// Names without underscores pass through verbatim. Otherwise the first
/// segment is kept as-is and every later segment gets its first character
/// upper-cased, rest unchanged: `scale_min` becomes `scaleMin`.
pub fn prettify_param_name(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::EmptyIdentifier("parameter name is empty".to_string()));
    }

    if !name.contains('_') {
        return Ok(name.to_string());
    }

    let mut result = String::new();
    for (i, word) in name.split('_').enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&first_char_to_upper(word)?);
        }
    }

    Ok(result)
}

/// Escape a parameter name that collides with a C# keyword, so the generated
/// file stays parseable (`ref` becomes the verbatim identifier `@ref`).
pub fn escape_keyword(name: String) -> String {
    match name.as_str() {
        "ref" => "@ref".to_string(),
        "in" => "@in".to_string(),
        _ => name,
    }
}

fn first_char_to_upper(word: &str) -> Result<String> {
    let mut chars = word.chars();
    match chars.next() {
        None => Err(Error::EmptyIdentifier(
            "parameter name contains an empty segment".to_string(),
        )),
        Some(first) => Ok(first.to_uppercase().collect::<String>() + chars.as_str()),
    }
}
