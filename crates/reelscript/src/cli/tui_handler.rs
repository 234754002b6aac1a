//! TUI launch command handler.

use reelscript::{GeneratorConfig, ReelscriptResult};
use std::path::PathBuf;

/// Log file used while the TUI owns the terminal.
pub fn tui_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("reelscript")
        .join("reelscript-tui.log")
}

/// Launch the terminal form.
#[cfg(all(feature = "tui", feature = "gemini"))]
pub fn launch_tui(config: &GeneratorConfig) -> ReelscriptResult<()> {
    use reelscript::{GeminiClient, Orchestrator, Osc52Clipboard, ScriptGenerator, run_tui};

    tracing::info!(model = %config.model(), "Launching TUI");

    let client = GeminiClient::new(config.api_key()?, config.model().clone())?;
    let orchestrator = Orchestrator::new(ScriptGenerator::from_config(client, config))
        .with_timeout(config.request_timeout());
    let mut clipboard = Osc52Clipboard::stdout();

    run_tui(orchestrator, &mut clipboard)
}

#[cfg(not(all(feature = "tui", feature = "gemini")))]
pub fn launch_tui(_config: &GeneratorConfig) -> ReelscriptResult<()> {
    eprintln!("Error: TUI and gemini features not enabled. Rebuild with --features tui,gemini");
    std::process::exit(1);
}
