pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{LogLevel, Logger};

use crate::error::Result;
use crate::generator::{FileWriter, WrapperGenerator};
use crate::surface::SurfaceManifest;

/// Run one generation pass: load the embedded surface, render the wrapper,
/// write it to the requested path.
///
/// Progress lines go through the logger; any error aborts the run before a
/// file is produced (the write itself is the last step).
pub fn generate_from_args(args: &Cli, logger: &Logger) -> Result<()> {
    logger.info("Starting");

    let surface = SurfaceManifest::imgui()?;
    logger.info(&format!("Scanning type {}", surface.full_name));
    logger.info(&format!(
        "Found {} methods, processing..",
        surface.methods.len()
    ));

    let generator = WrapperGenerator::new(surface);
    let content = generator.render(&args.namespace, args.allow_pointers)?;

    logger.info(&format!(
        "Done processing methods, writing output to the file {}",
        args.output.display()
    ));
    FileWriter::new(&args.output).write_wrapper_file(&content)?;

    logger.info("Done");
    Ok(())
}
