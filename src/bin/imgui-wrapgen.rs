use clap::Parser;
use imgui_wrapgen::interface::{generate_from_args, Cli, Logger};

fn main() {
    let args = Cli::parse();
    let logger = Logger::new();

    if let Err(e) = generate_from_args(&args, &logger) {
        logger.error(&e.console_message());
        std::process::exit(1);
    }
}
