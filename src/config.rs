use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrlConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// [preview] section: the sidebar pane.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// Total column width of the sidebar pane
    #[serde(default = "default_preview_width")]
    pub width: u16,
    /// Whether the sidebar starts open
    #[serde(default = "default_true")]
    pub open: bool,
}

/// [display] section: list pane options.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_author: bool,
    #[serde(default = "default_true")]
    pub show_branch: bool,
}

fn default_preview_width() -> u16 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: default_preview_width(),
            open: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_author: true,
            show_branch: true,
        }
    }
}

/// Load config by merging global defaults with per-repo overrides.
/// Priority: per-repo `.prl-config.toml` > global `~/.config/prl/config.toml`
/// > built-in defaults. Merging is deep: individual fields within sections
/// override independently.
pub fn load_config(repo_root: &str) -> PrlConfig {
    let local_path = format!("{repo_root}/.prl-config.toml");
    let global_path = dirs::config_dir()
        .map(|d| d.join("prl/config.toml").to_string_lossy().to_string());

    let global_table = global_path
        .and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(parse_table);

    let local_table = std::fs::read_to_string(&local_path)
        .ok()
        .and_then(parse_table);

    let merged = match (global_table, local_table) {
        (Some(mut global), Some(local)) => {
            deep_merge(&mut global, local);
            toml::Value::Table(global)
        }
        (Some(global), None) => toml::Value::Table(global),
        (None, Some(local)) => toml::Value::Table(local),
        (None, None) => return PrlConfig::default(),
    };

    merged.try_into().unwrap_or_default()
}

fn parse_table(content: String) -> Option<toml::map::Map<String, toml::Value>> {
    match content.parse::<toml::Value>().ok()? {
        toml::Value::Table(t) => Some(t),
        _ => None,
    }
}

/// Recursively merge `overlay` into `base`. Overlay values win; nested
/// tables are merged recursively.
fn deep_merge(
    base: &mut toml::map::Map<String, toml::Value>,
    overlay: toml::map::Map<String, toml::Value>,
) {
    for (key, value) in overlay {
        match (base.get_mut(&key), &value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table.clone());
            }
            _ => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().to_str().unwrap());
        assert_eq!(config.preview.width, 50);
        assert!(config.preview.open);
        assert!(config.display.show_author);
    }

    #[test]
    fn local_file_overrides_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prl-config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[preview]\nwidth = 72").unwrap();

        let config = load_config(dir.path().to_str().unwrap());
        assert_eq!(config.preview.width, 72);
        // untouched field keeps its default
        assert!(config.preview.open);
    }

    #[test]
    fn malformed_local_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prl-config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let config = load_config(dir.path().to_str().unwrap());
        assert_eq!(config.preview.width, 50);
    }

    #[test]
    fn deep_merge_prefers_overlay_within_sections() {
        let mut base = parse_table("[preview]\nwidth = 40\nopen = false".to_string()).unwrap();
        let overlay = parse_table("[preview]\nwidth = 80".to_string()).unwrap();
        deep_merge(&mut base, overlay);

        let merged: PrlConfig = toml::Value::Table(base).try_into().unwrap();
        assert_eq!(merged.preview.width, 80);
        assert!(!merged.preview.open);
    }
}
