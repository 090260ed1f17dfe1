//! WASM-facing entry points for the stitch chart pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every entry point has an `*_internal` counterpart returning
//! Rust types, which native tests use to avoid depending on a JS host.
//!
//! ```
//! let report = stitch_wasm::parse_pattern_internal("6x\n(x, v)*6");
//! assert_eq!(report.stitches.len(), 18);
//! assert!(report.diagnostics.is_empty());
//! ```

use config::constants::{ChartConfig, DEFAULT_HEIGHT_SCALE};
use serde::Serialize;
use stitch_layout::{
    connect_rows, layout_oval_pattern, layout_spiral, BezierConnection, ParsedOvalStitch,
    StitchPosition,
};
use stitch_mesh::{generate_wireframe, WireframeOptions};
use stitch_parser::{parse_pattern, summarize, validate_rows, ParsedStitch, PatternSummary, RowValidation};
use wasm_bindgen::prelude::*;

mod buffer_handle;
mod diagnostics;

pub use buffer_handle::WireframeHandle;
pub use diagnostics::{row_diagnostics, Diagnostic, DiagnosticList, Severity};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "stitch-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// =============================================================================
// REPORTS
// =============================================================================

/// Everything the chart renderer needs for one pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReport {
    pub stitches: Vec<ParsedStitch>,
    pub rows: Vec<RowValidation>,
    pub summary: PatternSummary,
    pub diagnostics: Vec<Diagnostic>,
}

/// Spiral coordinates plus the curves between rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiralReport {
    pub positions: Vec<StitchPosition>,
    pub connections: Vec<BezierConnection>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn to_js_error(diagnostics: &[Diagnostic]) -> JsValue {
    let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    JsValue::from_str(&messages.join("\n"))
}

fn chart_config(
    base_radius: f64,
    row_spacing: f64,
    z_increment: f64,
    height_scale: f64,
) -> Result<ChartConfig, Vec<Diagnostic>> {
    ChartConfig::new(base_radius, row_spacing, z_increment, height_scale)
        .map_err(|err| vec![Diagnostic::from(err)])
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses a pattern and returns a JSON [`PatternReport`].
///
/// A fatal parse yields no stitches and a single error diagnostic, never a
/// thrown exception.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const report = JSON.parse(parse_pattern_json("6x\n(x, v)*6"));
/// // report.rows.forEach(row => console.log(row.row, row.isValid));
/// ```
#[wasm_bindgen]
pub fn parse_pattern_json(text: &str) -> Result<String, JsValue> {
    to_json(&parse_pattern_internal(text))
}

/// Host-only helper behind [`parse_pattern_json`].
pub fn parse_pattern_internal(text: &str) -> PatternReport {
    match parse_pattern(text) {
        Ok(stitches) => {
            let rows = validate_rows(&stitches);
            PatternReport {
                summary: summarize(&stitches),
                diagnostics: row_diagnostics(&rows),
                stitches,
                rows,
            }
        }
        Err(err) => PatternReport {
            stitches: Vec::new(),
            rows: Vec::new(),
            summary: PatternSummary::default(),
            diagnostics: vec![Diagnostic::from(err)],
        },
    }
}

/// Returns the diagnostics for a pattern as JSON.
#[wasm_bindgen]
pub fn validate_pattern_json(text: &str) -> Result<String, JsValue> {
    to_json(&validate_pattern_internal(text))
}

/// Returns the diagnostics for a pattern as a wasm handle.
#[wasm_bindgen]
pub fn validate_pattern(text: &str) -> DiagnosticList {
    DiagnosticList::new(validate_pattern_internal(text))
}

/// Host-only helper behind [`validate_pattern_json`].
pub fn validate_pattern_internal(text: &str) -> Vec<Diagnostic> {
    parse_pattern_internal(text).diagnostics
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Lays a pattern out as a spiral and returns a JSON [`SpiralReport`].
#[wasm_bindgen]
pub fn layout_spiral_json(
    text: &str,
    base_radius: f64,
    row_spacing: f64,
    z_increment: f64,
) -> Result<String, JsValue> {
    let config = chart_config(base_radius, row_spacing, z_increment, DEFAULT_HEIGHT_SCALE)
        .map_err(|diagnostics| to_js_error(&diagnostics))?;
    layout_spiral_internal(text, &config)
        .map_err(|diagnostics| to_js_error(&diagnostics))
        .and_then(|report| to_json(&report))
}

/// Host-only helper behind [`layout_spiral_json`].
pub fn layout_spiral_internal(text: &str, config: &ChartConfig) -> Result<SpiralReport, Vec<Diagnostic>> {
    let stitches = parse_pattern(text).map_err(|err| vec![Diagnostic::from(err)])?;
    let positions = layout_spiral(&stitches, config);
    let connections = connect_rows(&positions);
    Ok(SpiralReport {
        positions,
        connections,
    })
}

/// Lays out an oval pattern and returns JSON.
///
/// The result is `null` when the first line has no `ch N ... from hook`
/// foundation; callers treat that as nothing to render.
#[wasm_bindgen]
pub fn layout_oval_json(text: &str) -> Result<String, JsValue> {
    to_json(&layout_oval_internal(text))
}

/// Host-only helper behind [`layout_oval_json`].
pub fn layout_oval_internal(text: &str) -> Option<Vec<ParsedOvalStitch>> {
    layout_oval_pattern(text)
}

// =============================================================================
// WIREFRAME
// =============================================================================

/// Parses, lays out and draws a pattern.
///
/// # Errors
/// Returns a JavaScript error containing diagnostics if the configuration is
/// invalid, the parse is fatal or the wireframe would be too large.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const wireframe = render_wireframe("6x", 1.0, 1.0, 0.02, 0.8, true);
/// //   console.log("Segments:", wireframe.segment_count);
/// // } catch (error) {
/// //   console.error("Render failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn render_wireframe(
    text: &str,
    base_radius: f64,
    row_spacing: f64,
    z_increment: f64,
    height_scale: f64,
    connectors: bool,
) -> Result<WireframeHandle, JsValue> {
    chart_config(base_radius, row_spacing, z_increment, height_scale)
        .and_then(|config| render_wireframe_internal(text, &config, connectors))
        .map_err(|diagnostics| to_js_error(&diagnostics))
}

/// Internal implementation of [`render_wireframe`].
///
/// Returns diagnostics on error for better error reporting.
pub fn render_wireframe_internal(
    text: &str,
    config: &ChartConfig,
    connectors: bool,
) -> Result<WireframeHandle, Vec<Diagnostic>> {
    let stitches = parse_pattern(text).map_err(|err| vec![Diagnostic::from(err)])?;
    let positions = layout_spiral(&stitches, config);
    let options = WireframeOptions::for_config(config).with_connectors(connectors);
    let wireframe = generate_wireframe(&positions, &options).map_err(|err| vec![Diagnostic::from(err)])?;

    tracing::debug!(segments = wireframe.segment_count(), "wireframe rendered");
    Ok(WireframeHandle::from_wireframe(&wireframe))
}
