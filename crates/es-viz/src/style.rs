//! Presentation options handed to the renderer alongside every artifact.
//!
//! Style is plain data: builders take a `&StyleConfig` and copy it into the
//! artifact. Nothing here is global.

use es_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Top-level style configuration (YAML or programmatic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Name of the preset this config started from.
    pub theme: String,
    /// Grid lines.
    pub grid: GridConfig,
    /// Background colors.
    pub colors: ColorsConfig,
    /// Font sizes.
    pub font: FontConfig,
    /// Default series line width (points).
    pub line_width: f64,
    /// Series colors, cycled in order.
    pub palette: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        BuiltinTheme::Whitegrid.base_config()
    }
}

impl StyleConfig {
    /// Color for the `i`-th series (palette cycles).
    pub fn series_color(&self, i: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[i % self.palette.len()].as_str())
    }
}

/// Grid line options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Draw the grid.
    pub show: bool,
    /// Line dash pattern, e.g. `--`.
    pub line_style: String,
    /// Grid opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, line_style: "--".into(), alpha: 0.6 }
    }
}

/// Background colors (hex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Plot area background.
    pub axes_face: String,
    /// Figure background.
    pub figure_face: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { axes_face: "#ffffff".into(), figure_face: "#ffffff".into() }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Base text and title.
    pub size: f64,
    /// Axis labels.
    pub label_size: f64,
    /// Legend entries.
    pub legend_size: f64,
    /// Tick labels.
    pub tick_size: f64,
    /// Annotation box.
    pub annotation_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 14.0, label_size: 16.0, legend_size: 14.0, tick_size: 12.0, annotation_size: 10.0 }
    }
}

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// White background, dashed grid, large fonts.
    Whitegrid,
    /// No grid, smaller fonts.
    Minimal,
}

impl BuiltinTheme {
    /// Theme by name; unknown names fall back to `Whitegrid`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Whitegrid,
        }
    }

    /// Full style for this preset.
    pub fn base_config(self) -> StyleConfig {
        match self {
            Self::Whitegrid => whitegrid(),
            Self::Minimal => minimal(),
        }
    }
}

fn tab10() -> Vec<String> {
    ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn whitegrid() -> StyleConfig {
    StyleConfig {
        theme: "whitegrid".into(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        font: FontConfig::default(),
        line_width: 2.2,
        palette: tab10(),
    }
}

fn minimal() -> StyleConfig {
    StyleConfig {
        theme: "minimal".into(),
        grid: GridConfig { show: false, ..GridConfig::default() },
        font: FontConfig {
            size: 10.0,
            label_size: 11.0,
            legend_size: 10.0,
            tick_size: 9.0,
            annotation_size: 9.0,
        },
        line_width: 1.5,
        ..whitegrid()
    }
}

/// Resolve a style from optional YAML.
///
/// The YAML `theme` key selects the preset that unspecified keys fall back to;
/// explicitly given keys override it.
pub fn resolve_style(user_yaml: Option<&str>) -> Result<StyleConfig> {
    let Some(yaml) = user_yaml else {
        return Ok(StyleConfig::default());
    };

    let raw: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
    let theme = raw.get("theme").and_then(|t| t.as_str()).map(BuiltinTheme::parse);

    let mut base = serde_yaml_ng::to_value(theme.unwrap_or(BuiltinTheme::Whitegrid).base_config())
        .map_err(|e| Error::Config(e.to_string()))?;
    merge_yaml(&mut base, raw);
    serde_yaml_ng::from_value(base).map_err(|e| Error::Config(e.to_string()))
}

fn merge_yaml(base: &mut serde_yaml_ng::Value, over: serde_yaml_ng::Value) {
    use serde_yaml_ng::Value;
    match (base, over) {
        (Value::Mapping(b), Value::Mapping(o)) => {
            for (k, v) in o {
                match b.get_mut(&k) {
                    Some(slot) => merge_yaml(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
