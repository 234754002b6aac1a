//! Reelscript CLI binary.
//!
//! - Generate a script from flags and print its sections
//! - Launch the terminal form
//! - Print the prompt for a set of inputs

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, print_prompt, run_generate};

    // A missing .env is fine; the environment may already hold the key.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Tui => {
            let log_path = cli::tui_log_path();
            reelscript::init_tracing_to_file(&log_path, cli.verbose)?;
        }
        _ => reelscript::init_tracing(cli.verbose)?,
    }

    let config = cli.load_config()?;

    match cli.command {
        Commands::Generate { form, format } => {
            run_generate(&config, form.inputs(), format).await?;
        }

        Commands::Tui => {
            launch_tui(&config)?;
        }

        Commands::Prompt { form } => {
            print_prompt(&form.inputs())?;
        }
    }

    Ok(())
}
