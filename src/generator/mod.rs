//! Assembles the wrapper source: header, one forwarding declaration per
//! eligible method in manifest order, footer.

pub mod file_writer;
pub mod templates;

pub use file_writer::FileWriter;

use crate::error::{Error, Result};
use crate::surface::SurfaceManifest;
use templates::{render_declaration, render_footer, render_header};

pub struct WrapperGenerator {
    surface: SurfaceManifest,
}

impl WrapperGenerator {
    pub fn new(surface: SurfaceManifest) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &SurfaceManifest {
        &self.surface
    }

    /// Render the complete wrapper file into one buffer.
    ///
    /// `allow_pointers` asks for pointer-returning methods to be wrapped as
    /// well; that path is not implemented and always fails with
    /// [`Error::Unsupported`] before anything is rendered.
    pub fn render(&self, namespace_name: &str, allow_pointers: bool) -> Result<String> {
        if allow_pointers {
            return Err(Error::Unsupported(
                "wrapping pointer-returning methods is not implemented".to_string(),
            ));
        }

        let mut buffer = render_header(&self.surface, namespace_name);
        for method in self.surface.eligible_methods() {
            buffer.push_str(&render_declaration(&self.surface.type_name, method)?);
        }
        buffer.push_str(render_footer());
        Ok(buffer)
    }
}
