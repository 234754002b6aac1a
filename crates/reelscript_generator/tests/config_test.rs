// Configuration loading tests.

use std::io::Write;
use std::time::Duration;

use reelscript_error::{ReelscriptErrorKind, UpstreamErrorKind};
use reelscript_generator::GeneratorConfig;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_default_matches_bundled_config() -> anyhow::Result<()> {
    let file = write_config("")?;
    let loaded = GeneratorConfig::from_file(file.path())?;

    assert_eq!(loaded, GeneratorConfig::default());
    assert_eq!(loaded.model(), "gemini-2.5-flash");
    assert_eq!(*loaded.temperature(), 0.7);
    assert_eq!(loaded.request_timeout(), None);
    Ok(())
}

#[test]
fn test_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
model = "gemini-2.5-pro"
request_timeout_secs = 90
"#,
    )?;
    let loaded = GeneratorConfig::from_file(file.path())?;

    assert_eq!(loaded.model(), "gemini-2.5-pro");
    assert_eq!(*loaded.temperature(), 0.7);
    assert_eq!(loaded.api_key_env(), "GEMINI_API_KEY");
    assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(90)));
    Ok(())
}

#[test]
fn test_out_of_range_temperature_is_rejected() -> anyhow::Result<()> {
    let file = write_config("temperature = 3.5\n")?;
    let err = GeneratorConfig::from_file(file.path()).unwrap_err();

    match err.kind() {
        ReelscriptErrorKind::Config(e) => assert!(e.message.contains("temperature")),
        other => panic!("Expected config error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_zero_timeout_is_rejected() -> anyhow::Result<()> {
    let file = write_config("request_timeout_secs = 0\n")?;
    assert!(GeneratorConfig::from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_malformed_file_is_rejected() -> anyhow::Result<()> {
    let file = write_config("model = [not toml\n")?;
    let err = GeneratorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), ReelscriptErrorKind::Config(_)));
    Ok(())
}

#[test]
fn test_missing_file_is_rejected() {
    assert!(GeneratorConfig::from_file("/nonexistent/reelscript.toml").is_err());
}

#[test]
fn test_missing_credential_names_the_variable() -> anyhow::Result<()> {
    let file = write_config("api_key_env = \"REELSCRIPT_TEST_KEY_THAT_IS_NEVER_SET\"\n")?;
    let config = GeneratorConfig::from_file(file.path())?;

    let err = config.api_key().unwrap_err();
    assert_eq!(
        err.kind,
        UpstreamErrorKind::MissingApiKey("REELSCRIPT_TEST_KEY_THAT_IS_NEVER_SET".to_string())
    );
    assert!(err.kind.is_auth());
    Ok(())
}
