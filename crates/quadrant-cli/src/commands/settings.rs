//! `quadrant settings` - inspect or create the settings file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use quadrant_core::config::SurveySettings;
use quadrant_infrastructure::settings::save_settings;

/// Prints the effective settings as TOML.
pub fn show<W: Write>(path: &Path, settings: &SurveySettings, out: &mut W) -> Result<()> {
    let exists = path.exists();
    writeln!(
        out,
        "{}",
        format!(
            "# {}{}",
            path.display(),
            if exists { "" } else { " (not found, showing defaults)" }
        )
        .bright_black()
    )?;
    let rendered = toml::to_string_pretty(settings).context("Failed to render settings")?;
    write!(out, "{rendered}")?;
    Ok(())
}

/// Writes a settings file with default values.
///
/// An existing file is left alone unless `force` is set.
pub async fn init<W: Write>(path: &Path, force: bool, out: &mut W) -> Result<()> {
    if path.exists() && !force {
        writeln!(
            out,
            "{}",
            format!("{} already exists (use --force to overwrite)", path.display()).yellow()
        )?;
        return Ok(());
    }

    save_settings(path, SurveySettings::default())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out, "{}", format!("✓ Wrote {}", path.display()).green())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_infrastructure::settings::load_settings;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut out = Vec::new();

        init(&path, false, &mut out).await.unwrap();
        assert_eq!(load_settings(&path).await.unwrap(), SurveySettings::default());

        std::fs::write(&path, "[limits]\nsave_limit = 7\n").unwrap();
        init(&path, false, &mut out).await.unwrap();
        assert_eq!(load_settings(&path).await.unwrap().limits.save_limit, 7);

        init(&path, true, &mut out).await.unwrap();
        assert_eq!(load_settings(&path).await.unwrap().limits.save_limit, 3);
    }

    #[test]
    fn test_show_renders_toml() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        show(&dir.path().join("missing.toml"), &SurveySettings::default(), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("not found, showing defaults"));
        assert!(printed.contains("[limits]"));
        assert!(printed.contains("nickname_max = 20"));
    }
}
