//! One-shot commands: options, map, series and quality.

use dfl_data::{DataQualityReport, Dataset};
use dfl_utils::numbers::format_amount;
use dfl_view::{Controller, SelectionChange};
use log::info;
use std::fmt::Write;
use std::sync::Arc;

/// Load the CSV and start a session over it.
pub fn load_controller(csv_path: &str) -> anyhow::Result<Controller> {
    let dataset = Dataset::from_path(csv_path)?;
    info!(
        "[Landings] cmd: Loaded {} landings from {}",
        dataset.len(),
        csv_path
    );
    Ok(Controller::new(Arc::new(dataset))?)
}

pub fn run_options(csv_path: &str) -> anyhow::Result<()> {
    let controller = load_controller(csv_path)?;
    print!("{}", format_options(&controller));
    Ok(())
}

pub fn run_map(csv_path: &str, species: Option<String>, year: Option<i32>) -> anyhow::Result<()> {
    let mut controller = load_controller(csv_path)?;
    let mut change = SelectionChange::new();
    change.species = species;
    change.year = year;
    let views = controller.on_selection_changed(change);
    println!("{}", serde_json::to_string_pretty(&views.map)?);
    Ok(())
}

pub fn run_series(csv_path: &str, species: Option<String>, ports: Vec<String>) -> anyhow::Result<()> {
    let mut controller = load_controller(csv_path)?;
    let mut change = SelectionChange::new();
    change.species = species;
    if !ports.is_empty() {
        change.ports = Some(ports);
    }
    controller.on_selection_changed(change);
    match controller.series_notice() {
        Some(notice) => println!("{}", notice),
        None => println!("{}", serde_json::to_string_pretty(&controller.views().series)?),
    }
    Ok(())
}

pub fn run_quality(csv_path: &str) -> anyhow::Result<()> {
    let dataset = Dataset::from_path(csv_path)?;
    print!("{}", format_quality(dataset.quality()));
    Ok(())
}

/// Picker options, one labelled line each.
pub fn format_options(controller: &Controller) -> String {
    let years: Vec<String> = controller.year_options().iter().map(i32::to_string).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Species: {}", controller.species_options().join(", "));
    let _ = writeln!(out, "Years:   {}", years.join(", "));
    let _ = writeln!(out, "Ports:   {}", controller.port_options().join(", "));
    out
}

pub fn format_quality(report: &DataQualityReport) -> String {
    let lines = [
        ("Rows read", report.rows_read),
        ("Rows loaded", report.rows_loaded),
        ("Rows dropped", report.rows_dropped()),
        ("  missing year", report.missing_year),
        ("  missing species", report.missing_species),
        ("  missing port", report.missing_port),
        ("Invalid weight cells", report.invalid_weight),
        ("Invalid value cells", report.invalid_value),
        ("Invalid coordinate cells", report.invalid_coordinates),
        ("Rows without landed weight", report.rows_without_landed_weight),
        ("Rows without position", report.rows_without_position),
    ];
    let mut out = String::new();
    for (label, count) in lines {
        let _ = writeln!(out, "{:<28}{:>8}", label, count);
    }
    if report.is_clean() {
        out.push_str("No problems found\n");
    }
    out
}

/// Current selection and both views as plain text.
pub fn describe(controller: &Controller) -> String {
    let selection = controller.selection();
    let views = controller.views();
    let ports: Vec<&str> = selection.ports.iter().map(String::as_str).collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Species: {}  Year: {}  Ports: {}",
        selection.species,
        selection.year,
        if ports.is_empty() { "(none)".to_string() } else { ports.join(", ") }
    );
    let _ = writeln!(
        out,
        "Map: {} markers, {} kg landed",
        views.map.markers.len(),
        format_amount(views.map.total_weight())
    );
    if views.map.unplotted > 0 {
        let _ = writeln!(out, "     {} landings not plotted", views.map.unplotted);
    }
    match controller.series_notice() {
        Some(notice) => {
            let _ = writeln!(out, "Series: {}", notice);
        }
        None => {
            let _ = writeln!(out, "Series:");
            for (port, points) in &views.series.series {
                let values: Vec<String> = points
                    .iter()
                    .map(|p| format!("{}: {}", p.year, format_amount(p.weight)))
                    .collect();
                let _ = writeln!(out, "  {}  {}", port, values.join("  "));
            }
        }
    }
    out
}
