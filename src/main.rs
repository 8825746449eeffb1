use anyhow::Result;
use artworks::config::{Args, Config};
use artworks::driver;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let config = Config::from_args(argh::from_env::<Args>());

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    let mut interpreter = driver::run(config, &mut stdout)?;
    stdout.flush()?;

    if config.interactive {
        interpreter.repl()?;
    }
    Ok(())
}
