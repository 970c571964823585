mod config;
mod file_io;

use anyhow::Context;
use blockpad_lib_codec::padding::PaddingScheme;
use clap::Parser;
use config::{Command, Settings};
use log::{log, Level};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn transform(
    command: Command,
    scheme: PaddingScheme,
    block_size: usize,
    input: &[u8],
) -> anyhow::Result<Vec<u8>> {
    let output = match command {
        Command::Pad => scheme
            .pad(input, block_size)
            .with_context(|| format!("cannot pad with {scheme}"))?,
        Command::Unpad => scheme
            .unpad(input)
            .with_context(|| format!("cannot unpad as {scheme}"))?,
    };
    Ok(output)
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let input = file_io::read_input(settings.input.as_deref()).context("cannot read input")?;
    log!(Level::Info, "Read {} bytes", input.len());

    let output = transform(settings.command, settings.scheme, settings.block_size(), &input)?;

    file_io::write_output(settings.output.as_deref(), &output).context("cannot write output")?;
    log!(Level::Info, "Wrote {} bytes", output.len());
    Ok(())
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("blockpad: {e:#}")
}

fn main() -> ExitCode {
    let dotenv = config::load_dotenv(None);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    match dotenv {
        Ok(Some(path)) => log!(Level::Debug, "Loaded {}", path.display()),
        Ok(None) => {}
        Err(e) => log!(Level::Warn, "Ignoring .env: {}", e),
    }

    let settings = Settings::parse();
    log!(Level::Debug, "{:?}", settings);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // bypasses the RUST_LOG filter
            eprintln!("{}", failure_message(&e));
            log!(Level::Debug, "{:?}", e);
            ExitCode::FAILURE
        }
    }
}
