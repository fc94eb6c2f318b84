//! The JSON artifact shared by every scenario.

use serde::{Deserialize, Serialize};

use crate::style::StyleConfig;

/// Value of `schema_version` in every emitted artifact.
pub const SCHEMA_VERSION: &str = "exprstat_pmf_plot_v0";

/// One labelled curve: `y[i]` is plotted at `x[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend entry.
    pub label: String,
    /// Palette color, if the style has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Abscissae (counts or enzyme loads).
    pub x: Vec<f64>,
    /// Probabilities, aligned with `x`.
    pub y: Vec<f64>,
    /// `sum(y)`; below 1 when the count support is truncated.
    pub total: f64,
}

/// Figure size in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl FigureSize {
    /// Size from inches.
    pub fn inches(width: f64, height: f64) -> Self {
        Self { width: width * 72.0, height: height * 72.0 }
    }
}

/// Text box placed in axes-fraction coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Box contents; may span several lines.
    pub text: String,
    /// Horizontal position, 0 = left edge.
    pub x: f64,
    /// Vertical position, 0 = bottom edge.
    pub y: f64,
    /// Font size (points).
    pub font_size: f64,
}

/// Plot-friendly artifact for one expression scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmfPlotArtifact {
    /// Always [`SCHEMA_VERSION`].
    pub schema_version: String,
    /// Scenario id: `narrow`, `bursty`, `switching` or `sweep`.
    pub scenario: String,
    /// Figure title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Legend heading, when the series vary one named parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    /// Parameter box drawn over the axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
    /// Figure size.
    pub figure: FigureSize,
    /// Style the artifact was built with.
    pub style: StyleConfig,
    /// Curves, in legend order.
    pub series: Vec<Series>,
}

impl PmfPlotArtifact {
    pub(crate) fn new(
        scenario: &str,
        title: &str,
        x_label: &str,
        y_label: &str,
        figure: FigureSize,
        style: &StyleConfig,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            scenario: scenario.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            legend_title: None,
            annotation: None,
            figure,
            style: style.clone(),
            series: Vec::new(),
        }
    }

    /// Append a series; its color comes from the style palette.
    pub(crate) fn push_series(&mut self, label: String, x: Vec<f64>, y: Vec<f64>) {
        let color = self.style.series_color(self.series.len()).map(str::to_string);
        let total = y.iter().sum();
        self.series.push(Series { label, color, x, y, total });
    }
}
