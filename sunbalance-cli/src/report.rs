//! Terminal rendering of one UV report: metric readouts, the UV gauge,
//! per-skin-type advisory lines and the skin type glossary.

use crossterm::style::{Color, Stylize};
use sunbalance_core::{ExposureEstimate, FetchError, SkinType, UvReading};

/// Gauge scale is fixed to the standard UV index domain.
const GAUGE_MAX: f64 = 12.0;
/// Gauge bar width in terminal cells.
const GAUGE_WIDTH: usize = 48;

/// Render a full report for a successful reading.
pub fn print_report(reading: &UvReading, estimate: &ExposureEstimate) {
    println!("Current UV Index  {:>5.1}", reading.uv);
    println!("Max UV Index      {:>5.1}", reading.uv_max);
    if let Some(at) = reading.uv_time {
        println!("Observed at       {}", at.format("%Y-%m-%d %H:%M UTC"));
    }

    println!();
    print_gauge(reading.uv);
    println!();

    let lines = advisory_lines(estimate);
    if !lines.is_empty() {
        println!("Safe Exposure Time");
        for line in &lines {
            println!("  {line}");
        }
        println!();
    }

    print_glossary();
}

/// Render a fetch failure as a single message; no partial report is shown.
pub fn print_error(err: &FetchError) {
    eprintln!("{}", format!("Failed to fetch UV data: {err}").red());
}

/// The static six-line Fitzpatrick glossary, independent of any fetch.
pub fn print_glossary() {
    println!("Skin Type Information");
    for skin in SkinType::all() {
        println!("  Type {}: {}", skin.numeral(), skin.description());
    }
}

fn print_gauge(uv: f64) {
    let cell = marker_cell(uv);

    let mut pointer = " ".repeat(GAUGE_WIDTH);
    pointer.replace_range(cell..cell + 1, "▼");

    let mut bar = String::new();
    for i in 0..GAUGE_WIDTH {
        // Color each cell by the band its midpoint value falls in.
        let value = (i as f64 + 0.5) * GAUGE_MAX / GAUGE_WIDTH as f64;
        bar.push_str(&"█".with(band_color(value)).to_string());
    }

    println!("UV Index");
    println!("  {pointer}");
    println!("  {bar}");
    println!("  {}", axis_line());
}

/// Bar cell the threshold marker lands on; readings above the scale clamp
/// to the top cell (the numeric readout still shows the raw value).
fn marker_cell(uv: f64) -> usize {
    let clamped = uv.clamp(0.0, GAUGE_MAX);
    ((clamped / GAUGE_MAX) * (GAUGE_WIDTH - 1) as f64).round() as usize
}

/// WHO exposure-category bands: low, moderate, high, very high.
fn band_color(value: f64) -> Color {
    if value < 3.0 {
        Color::Green
    } else if value < 6.0 {
        Color::Yellow
    } else if value < 8.0 {
        Color::DarkYellow
    } else {
        Color::Red
    }
}

/// Tick labels at the band edges, aligned under the bar.
fn axis_line() -> String {
    let mut axis = " ".repeat(GAUGE_WIDTH + 2);
    for (value, label) in [(0.0, "0"), (3.0, "3"), (6.0, "6"), (8.0, "8"), (12.0, "12")] {
        let col = ((value / GAUGE_MAX) * (GAUGE_WIDTH - 1) as f64).round() as usize;
        axis.replace_range(col..col + label.len(), label);
    }
    axis
}

/// One line per defined estimate; undefined and zero-minute entries are
/// silently omitted ("0 minutes" is never shown as a duration).
fn advisory_lines(estimate: &ExposureEstimate) -> Vec<String> {
    estimate
        .defined()
        .filter(|(_, minutes)| *minutes > 0)
        .map(|(skin, minutes)| format!("Skin Type {}: {} minutes", skin.numeral(), minutes))
        .collect()
}
