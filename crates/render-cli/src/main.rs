use std::io::Write;

use anyhow::Context;
use clap::Parser;
use render_cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Default level is warn; RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rendered = run(&args)?;

    match &args.output {
        Some(path) => std::fs::write(path, &rendered.svg)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    if let Some(verdict) = rendered.verdict {
        eprintln!("{}", verdict.message);
        if !verdict.correct {
            std::process::exit(2);
        }
    }
    Ok(())
}
