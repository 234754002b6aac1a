//! Generate and prompt command handlers.

use crate::cli::commands::OutputFormat;
use reelscript::{
    GeneratedScript, GeneratorConfig, ReelscriptResult, RequestState, ScriptInputs, Section,
    build_prompt,
};
use serde::Serialize;

/// JSON shape of a successful generation.
#[derive(Debug, Serialize)]
struct ScriptOutput<'a> {
    script: &'a GeneratedScript,
    sections: &'a [Section],
}

/// Generate one script and print it.
///
/// Exits with status 1 after printing the user-facing message when the
/// request fails.
#[cfg(feature = "gemini")]
#[tracing::instrument(skip_all, fields(area = %inputs.area(), ?format))]
pub async fn run_generate(
    config: &GeneratorConfig,
    inputs: ScriptInputs,
    format: OutputFormat,
) -> ReelscriptResult<()> {
    use reelscript::{GeminiClient, Orchestrator, ScriptGenerator};

    let client = GeminiClient::new(config.api_key()?, config.model().clone())?;
    let mut orchestrator = Orchestrator::new(ScriptGenerator::from_config(client, config))
        .with_timeout(config.request_timeout());

    let state = orchestrator.submit(inputs).await?;
    print_state(state, format)
}

#[cfg(not(feature = "gemini"))]
pub async fn run_generate(
    _config: &GeneratorConfig,
    _inputs: ScriptInputs,
    _format: OutputFormat,
) -> ReelscriptResult<()> {
    eprintln!("Error: gemini feature not enabled. Rebuild with --features gemini");
    std::process::exit(1);
}

fn print_state(state: &RequestState, format: OutputFormat) -> ReelscriptResult<()> {
    match state {
        RequestState::Success { script, sections } => {
            match format {
                OutputFormat::Human => print!("{}", render_human(sections)),
                OutputFormat::Json => println!("{}", render_json(script, sections)),
                OutputFormat::Raw => println!("{}", script),
            }
            Ok(())
        }
        RequestState::Failed(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        // submit() always settles; Idle only follows a cancellation.
        RequestState::Idle | RequestState::Loading => Ok(()),
    }
}

/// Sections as titled blocks separated by blank lines.
fn render_human(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("== {} ==\n", section.title));
        if !section.content.is_empty() {
            out.push_str(&section.content);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn render_json(script: &GeneratedScript, sections: &[Section]) -> String {
    let output = ScriptOutput { script, sections };
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize script");
        String::from("{}")
    })
}

/// Print the full prompt for a set of inputs.
pub fn print_prompt(inputs: &ScriptInputs) -> ReelscriptResult<()> {
    inputs.validate()?;
    println!("{}", build_prompt(inputs));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_output_lists_sections_in_order() {
        let sections = vec![
            Section::new("1) HOOK", "foo"),
            Section::new("2) EMPTY", ""),
            Section::new("3) CTA", "bar"),
        ];
        assert_eq!(
            render_human(&sections),
            "== 1) HOOK ==\nfoo\n\n== 2) EMPTY ==\n\n== 3) CTA ==\nbar\n\n"
        );
    }

    #[test]
    fn json_output_holds_script_and_sections() {
        let script = GeneratedScript::from("1) HOOK\nfoo".to_string());
        let sections = vec![Section::new("1) HOOK", "foo")];

        let value: serde_json::Value = serde_json::from_str(&render_json(&script, &sections)).unwrap();

        assert_eq!(value["script"], "1) HOOK\nfoo");
        assert_eq!(value["sections"][0]["title"], "1) HOOK");
        assert_eq!(value["sections"][0]["content"], "foo");
    }
}
