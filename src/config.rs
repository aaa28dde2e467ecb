use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::theme::ThemeMode;

/// Persistent defaults, stored as CLI flag tokens so the config file reads
/// exactly like a command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub theme: Option<ThemeMode>,
    pub gutter: Option<u16>,
}

impl ConfigFlags {
    /// Merge, with `other` (typically the CLI) winning for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            theme: other.theme.or(self.theme),
            gutter: other.gutter.or(self.gutter),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("hoverline").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("hoverline")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("hoverline").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("hoverline")
                .join("config");
        }
    }

    PathBuf::from(".hoverlinerc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".hoverlinerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut out = String::from("# hoverline defaults (saved with --save)\n");
    if flags.watch {
        out.push_str("--watch\n");
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        out.push_str(&format!("--theme {theme_str}\n"));
    }
    if let Some(gutter) = flags.gutter {
        out.push_str(&format!("--gutter {gutter}\n"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, out).with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut iter = tokens.iter().map(String::as_str);
    while let Some(token) = iter.next() {
        match token {
            "--watch" => flags.watch = true,
            "--theme" => {
                if let Some(value) = iter.next() {
                    flags.theme = parse_theme(value);
                }
            }
            "--gutter" => {
                if let Some(value) = iter.next() {
                    flags.gutter = value.parse().ok();
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--theme=") {
                    flags.theme = parse_theme(value);
                } else if let Some(value) = token.strip_prefix("--gutter=") {
                    flags.gutter = value.parse().ok();
                }
            }
        }
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}
