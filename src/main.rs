// registrar/src/main.rs

use anyhow::Result;
use std::io;

use registrar::console::Console;
use registrar::settings::Settings;

fn main() -> Result<()> {
    // Quiet by default so log lines do not interleave with the menu;
    // RUST_LOG opts in.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let workdir = std::env::current_dir()?;
    let settings = Settings::load(&workdir);
    let data_path = settings.data_path(&workdir);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    registrar::app::run(&mut console, &data_path)
}
