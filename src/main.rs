#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError, data::LogLevel},
    cli::Cli,
};

mod application;
mod cli;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    colored::control::set_override(cli_args.color.should_colorize());
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

// Logs go to stderr so that stdout only carries operation output.
fn setup_tracing(cli_args: &Cli) {
    if cli_args.log_level != LogLevel::Silent {
        tracing_subscriber::fmt()
            .with_max_level(cli_args.log_level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
