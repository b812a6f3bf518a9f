use crate::error::Result;
use crate::models::MethodDescriptor;
use serde::{Deserialize, Serialize};

/// Method names inherited from `System.Object`; noise from the base object
/// model, never wrapped.
const OBJECT_IDENTITY_METHODS: [&str; 4] = ["GetType", "ToString", "Equals", "GetHashCode"];

const IMGUI_SURFACE: &str = include_str!("surface/imgui.json");

/// Static description of the API surface to wrap.
///
/// The .NET original reflected over the compiled `ImGui` type at runtime;
/// here the same information ships as an embedded manifest. The order of
/// `methods` is the enumeration order and is preserved into the output, so
/// two runs over the same manifest produce byte-identical files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceManifest {
    /// Short type name used on the forwarding side (`ImGui.Begin(..)`).
    pub type_name: String,
    /// Fully-qualified type name, reported while scanning.
    pub full_name: String,
    /// Namespace imported at the top of the generated file.
    pub using_directive: String,
    /// Name of the emitted static class.
    pub wrapper_class: String,
    pub methods: Vec<MethodDescriptor>,
}

impl SurfaceManifest {
    /// The embedded ImGui.NET surface this generator ships with.
    pub fn imgui() -> Result<Self> {
        Ok(serde_json::from_str(IMGUI_SURFACE)?)
    }

    /// Methods that get a forwarding declaration: publicly visible, not one
    /// of the object-identity methods, and not pointer-returning
    /// (pointer-returning methods are silently skipped).
    ///
    /// Overloads are not deduplicated; every retained descriptor is emitted.
    pub fn eligible_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| {
            m.is_public && !OBJECT_IDENTITY_METHODS.contains(&m.name.as_str()) && !m.returns_pointer
        })
    }
}
