//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use reelscript::{ClientType, GeneratorConfig, ReelDuration, ReelscriptResult, ScriptInputs, VideoAngle};
use std::path::PathBuf;

/// Reelscript - real estate reel scripts from four form values
#[derive(Parser, Debug)]
#[command(name = "reelscript")]
#[command(about = "Generate short-form real estate video scripts with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./reelscript.toml, then ~/.config/reelscript/)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load configuration from `--config` or the default locations.
    pub fn load_config(&self) -> ReelscriptResult<GeneratorConfig> {
        match &self.config {
            Some(path) => GeneratorConfig::from_file(path),
            None => GeneratorConfig::load(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a script and print its sections
    Generate {
        #[command(flatten)]
        form: FormArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Launch the terminal form
    Tui,

    /// Print the prompt for a set of inputs without calling the API
    Prompt {
        #[command(flatten)]
        form: FormArgs,
    },
}

/// The four form values.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Client type: investment, family-home, vip-luxury
    #[arg(long)]
    pub client_type: ClientType,

    /// Area or project name (at least 2 characters)
    #[arg(long)]
    pub area: String,

    /// Video angle: common-mistake, comparison, filtering, warning, decision-advice
    #[arg(long)]
    pub angle: VideoAngle,

    /// Reel duration in seconds: 30, 45, 60
    #[arg(long, default_value = "30")]
    pub duration: ReelDuration,
}

impl FormArgs {
    /// Fresh inputs for one submission.
    pub fn inputs(&self) -> ScriptInputs {
        ScriptInputs::from_choices(self.client_type, self.area.clone(), self.angle, self.duration)
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Section titles and bodies
    Human,
    /// JSON object with the raw script and its sections
    Json,
    /// The script text exactly as generated
    Raw,
}
