// fcra/src/main.rs

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use fcra::cli::Cli;
use fcra::commands;
use fcra_core::FcraError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=fcra_core=debug fcra summary to see query timings.
    // Logs go to stderr so that --json output stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fcra=info,fcra_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        report(&err);
        std::process::exit(1);
    }
    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("❌ {:#}", err);
    if let Some(diagnostic) = find_diagnostic(err) {
        if let Some(code) = diagnostic.code() {
            eprintln!("   code: {}", code);
        }
        if let Some(help) = diagnostic.help() {
            eprintln!("   👉 {}", help);
        }
    }
}

fn find_diagnostic(err: &anyhow::Error) -> Option<&dyn Diagnostic> {
    err.chain().find_map(|cause| {
        if let Some(core) = cause.downcast_ref::<FcraError>() {
            return match core {
                FcraError::Domain(e) => Some(e as &dyn Diagnostic),
                FcraError::Infrastructure(e) => Some(e as &dyn Diagnostic),
            };
        }
        if let Some(e) = cause.downcast_ref::<fcra_core::domain::DomainError>() {
            return Some(e as &dyn Diagnostic);
        }
        cause
            .downcast_ref::<fcra_core::infrastructure::error::InfrastructureError>()
            .map(|e| e as &dyn Diagnostic)
    })
}
