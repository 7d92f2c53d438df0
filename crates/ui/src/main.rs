#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("folio")
            .with_inner_size([1100.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(|cc| Ok(Box::new(folio_ui::FolioApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

// The web build starts from `folio_ui::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
