mod app;
mod renderer;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use folio_core::PageConfig;
use folio_core::model::{PageState, ThemeContext};
use folio_protocol::ThemeMode;
use tracing_subscriber::EnvFilter;

/// Logs go to a file: the terminal is owned by the UI while it runs.
fn init_logging() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env("FOLIO_LOG") else {
        return Ok(());
    };
    let path = std::env::var_os("FOLIO_LOG_FILE")
        .map_or_else(|| PathBuf::from("folio.log"), PathBuf::from);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    PageConfig::from_toml_str(&text).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 || args.get(1).is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: folio [config.toml]");
        std::process::exit(1);
    }

    init_logging()?;
    let config = load_config(args.get(1).map(String::as_str))?;

    // Terminals are dark unless told otherwise.
    let persisted = std::env::var("FOLIO_THEME")
        .ok()
        .and_then(|s| ThemeMode::parse(&s));
    let page = PageState::new(config, ThemeContext::initialize(persisted, true))?;
    tracing::info!(theme = %page.theme(), "starting folio");

    let mut app = app::TuiApp::new(page);
    renderer::run(&mut app)
}
