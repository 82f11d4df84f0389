use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tilepress_core::palette::Palette;
use tilepress_core::present::{PresentConfig, RowOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RowOrderSetting {
    #[default]
    TopDown,
    BottomUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentSettings {
    pub width: usize,
    pub height: usize,
    pub surface_width: usize,
    pub surface_height: usize,
    pub row_order: RowOrderSetting,
    /// Offset for top-down rows, origin for bottom-up rows.
    pub row_offset: isize,
}

impl Default for PresentSettings {
    fn default() -> Self {
        let base = PresentConfig::default();
        Self {
            width: base.output_width,
            height: base.output_height,
            surface_width: base.surface_width,
            surface_height: base.surface_height,
            row_order: RowOrderSetting::default(),
            row_offset: 0,
        }
    }
}

impl PresentSettings {
    pub fn to_present_config(&self) -> PresentConfig {
        let rows = match self.row_order {
            RowOrderSetting::TopDown => RowOrder::TopDown {
                offset: self.row_offset,
            },
            RowOrderSetting::BottomUp => RowOrder::BottomUp {
                origin: self.row_offset,
            },
        };
        PresentConfig {
            output_width: self.width.max(1),
            output_height: self.height.max(1),
            surface_width: self.surface_width.max(1),
            surface_height: self.surface_height.max(1),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Colors 0-3 as 0xRRGGBBAA.
    pub colors: [u32; 4],
    pub apply_bgp: bool,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            colors: Palette::MONOCHROME.0,
            apply_bgp: false,
        }
    }
}

impl PaletteSettings {
    pub fn palette(&self) -> Palette<u32> {
        Palette(self.colors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub present: PresentSettings,
    pub palette: PaletteSettings,
}

pub fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("tilepress").join("config.toml");
        }
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("tilepress").join("config.toml");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("tilepress")
            .join("config.toml");
    }

    PathBuf::from("config.toml")
}

pub fn load_from_file(path: &Path) -> Config {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };

    match toml::from_str::<Config>(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(
                "Failed to parse config {}: {e}; using defaults",
                path.display()
            );
            Config::default()
        }
    }
}

pub fn save_to_file(path: &Path, cfg: &Config) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text = toml::to_string_pretty(cfg).unwrap_or_else(|_| String::new());
    std::fs::write(path, text)
}
