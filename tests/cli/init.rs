use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Created .plocrc.json"), "stdout:\n{}", stdout);

    let config = test.read_json(".plocrc.json")?;
    assert_eq!(config["backendSource"], "locales/en/out.gotext.json");
    assert_eq!(config["targetLocale"], "de");
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".plocrc.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_init_then_generate_uses_written_defaults() -> Result<()> {
    let test = CliTest::new()?;

    assert!(test.init_command().output()?.status.success());
    test.write_file("ui/src/locales/keys_found.txt", "nav.save\n")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert!(test.root().join("ui/src/locales/de.json").exists());
    Ok(())
}
