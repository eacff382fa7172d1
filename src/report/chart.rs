//! Static chart dashboard reporter
//!
//! Renders a multi-panel SVG dashboard into the results directory. Panels
//! whose backing data is empty are left blank; with no data at all the
//! whole stage is skipped.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use super::timestamp;
use crate::analytics::aggregate::AnalyticsData;
use crate::error::{Error, Result};

const SUCCESS_COLOR: RGBColor = RGBColor(46, 204, 113);
const FAILURE_COLOR: RGBColor = RGBColor(231, 76, 60);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Render the dashboard. Returns the artifact path, or `None` when the
/// aggregate holds no data at all.
pub fn generate_chart_dashboard(
    data: &AnalyticsData,
    results_dir: &Path,
) -> Result<Option<PathBuf>> {
    if !data.has_data() {
        println!("❌ No data to analyze");
        return Ok(None);
    }

    fs::create_dir_all(results_dir)?;
    let output_path = results_dir.join(format!("load_test_analytics_{}.svg", timestamp()));

    {
        let root = SVGBackend::new(&output_path, (1600, 900)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        let root = root
            .titled("Load Testing Analytics Dashboard", ("sans-serif", 32))
            .map_err(chart_err)?;

        let panels = root.split_evenly((2, 4));

        if data.upload_total() > 0 {
            draw_outcome_pie(
                &panels[0],
                "File Upload Success Rate",
                data.success_count,
                data.failure_count,
            )?;
        }

        if data.chat_total() > 0 {
            draw_outcome_pie(
                &panels[1],
                "Chat Completion Success Rate",
                data.chat_success_count,
                data.chat_failure_count,
            )?;
        }

        if !data.file_types.is_empty() {
            let (labels, counts) = sorted_pairs(&data.file_types);
            draw_bar_panel(
                &panels[2],
                "File Types Distribution",
                &labels,
                &counts,
                SKY_BLUE,
                "File Type",
                "Count",
            )?;
        }

        if !data.chat_models.is_empty() {
            let (labels, counts) = sorted_pairs(&data.chat_models);
            draw_bar_panel(
                &panels[3],
                "Chat Models Used",
                &labels,
                &counts,
                LIGHT_GREEN,
                "Model",
                "Count",
            )?;
        }

        if !data.response_times.is_empty() {
            draw_duration_histogram(
                &panels[4],
                "File Upload Response Times",
                &data.response_times,
                LIGHT_CORAL,
            )?;
        }

        if !data.chat_response_times.is_empty() {
            draw_duration_histogram(
                &panels[5],
                "Chat Response Times",
                &data.chat_response_times,
                LIGHT_BLUE,
            )?;
        }

        if !data.scenarios.is_empty() {
            let (labels, counts): (Vec<String>, Vec<u64>) =
                data.scenario_counts().into_iter().unzip();
            draw_bar_panel(
                &panels[6],
                "Scenarios Tested",
                &labels,
                &counts,
                ORANGE,
                "Scenario",
                "Test Runs",
            )?;
        }

        root.present().map_err(chart_err)?;
    }

    println!(
        "📊 Analytics dashboard saved as: {}",
        output_path.display()
    );
    Ok(Some(output_path))
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

fn sorted_pairs(map: &std::collections::HashMap<String, u64>) -> (Vec<String>, Vec<u64>) {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().unzip()
}

fn draw_outcome_pie(
    area: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    successes: u64,
    failures: u64,
) -> Result<()> {
    let area = area
        .clone()
        .titled(title, ("sans-serif", 18))
        .map_err(chart_err)?;

    let (width, height) = area.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.3;

    let sizes = [successes as f64, failures as f64];
    let colors = [SUCCESS_COLOR, FAILURE_COLOR];
    let labels = ["Success", "Failure"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 14).into_font());
    pie.percentages(("sans-serif", 12).into_font().color(&BLACK));
    area.draw(&pie).map_err(chart_err)?;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_bar_panel(
    area: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    labels: &[String],
    counts: &[u64],
    color: RGBColor,
    x_desc: &str,
    y_desc: &str,
) -> Result<()> {
    let max_count = counts.iter().copied().max().unwrap_or(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(45)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0u64..max_count + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => labels.get(*index).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(8)
                .data(counts.iter().enumerate().map(|(index, count)| (index, *count))),
        )
        .map_err(chart_err)?;

    Ok(())
}

fn draw_duration_histogram(
    area: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    times: &[u64],
    color: RGBColor,
) -> Result<()> {
    const BINS: usize = 15;

    let min = times.iter().copied().min().unwrap_or(0);
    let max = times.iter().copied().max().unwrap_or(0);
    let bin_width = ((max - min) / BINS as u64).max(1);

    let mut counts = vec![0u64; BINS];
    for &time in times {
        let index = (((time - min) / bin_width) as usize).min(BINS - 1);
        counts[index] += 1;
    }

    let labels: Vec<String> = (0..BINS)
        .map(|index| (min + index as u64 * bin_width).to_string())
        .collect();

    draw_bar_panel(
        area,
        title,
        &labels,
        &counts,
        color,
        "Response Time (ms)",
        "Frequency",
    )
}
