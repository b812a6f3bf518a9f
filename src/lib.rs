//! # imgui-wrapgen
//!
//! Generates C# source for a static wrapper class over the ImGui.NET
//! `ImGui` API surface, annotated with
//! `[MoonSharp.Interpreter.MoonSharpUserData]` so the MoonSharp (Lua)
//! interpreter can call into it.
//!
//! Every public method of the surface becomes one forwarding declaration
//! with prettified (underscore to camelCase) parameter names:
//!
//! ```csharp
//! public static System.Boolean SliderFloat(System.String label, ref System.Single v, System.Single vMin, System.Single vMax) => ImGui.SliderFloat(label, ref v, vMin, vMax);
//! ```
//!
//! The surface is described by an embedded manifest of public method
//! signatures (name, return type, ordered parameter descriptors with
//! pass-mode), standing in for the runtime reflection the .NET original
//! used. Methods inherited from `System.Object` and pointer-returning
//! methods are skipped.
//!
//! ## Usage
//!
//! ```bash
//! imgui-wrapgen MyNameSpace ./ImGuiWrapper.cs
//! ```
//!
//! Programmatic:
//!
//! ```rust
//! use imgui_wrapgen::{SurfaceManifest, WrapperGenerator};
//!
//! let surface = SurfaceManifest::imgui()?;
//! let generator = WrapperGenerator::new(surface);
//! let source = generator.render("MyNameSpace", false)?;
//! assert!(source.contains("public static class ImGuiWrapper"));
//! # Ok::<(), imgui_wrapgen::Error>(())
//! ```

mod error;
pub mod generator;
pub mod interface;
pub mod models;
pub mod surface;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generator::{FileWriter, WrapperGenerator};
pub use interface::{generate_from_args, Cli, LogLevel, Logger};
pub use surface::SurfaceManifest;
