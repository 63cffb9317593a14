use crate::charts::catalog::{ChartDescriptor, Orientation, PlotKind};
use crate::charts::derive::ChartData;
use crate::charts::stats::{kde, BoxSummary};
use crate::errors::ServerError;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

type Root<'b> = DrawingArea<SVGBackend<'b>, Shift>;
type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Seaborn's "deep" palette.
const PALETTE: [RGBColor; 10] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
    RGBColor(218, 139, 195),
    RGBColor(140, 140, 140),
    RGBColor(204, 185, 116),
    RGBColor(100, 181, 205),
];

const FONT: &str = "sans-serif";
const MAX_LABEL_CHARS: usize = 26;
const VIOLIN_POINTS: usize = 120;

fn color(i: usize) -> RGBColor {
    PALETTE[i % PALETTE.len()]
}

/// Axis captions for one chart.
#[derive(Debug, Clone, Copy)]
pub struct AxisNames<'a> {
    pub category: &'a str,
    pub value: &'a str,
}

/// Draws `data` as an SVG document of `size` pixels.
pub fn draw(
    descriptor: &ChartDescriptor,
    data: &ChartData,
    axes: AxisNames<'_>,
    size: (u32, u32),
) -> Result<String, ServerError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;

        match (descriptor.plot, data) {
            (PlotKind::Bar(orientation), ChartData::Means(means)) => {
                bars(&root, means, orientation, axes)?
            }
            (PlotKind::Scatter, ChartData::Means(means)) => scatter(&root, means, axes)?,
            (PlotKind::Violin, ChartData::Values(values)) => violin(&root, values, axes)?,
            (PlotKind::Box, ChartData::Groups(groups)) => boxes(&root, groups, axes)?,
            (PlotKind::Count(orientation), ChartData::Counts(counts)) => {
                let counts: Vec<(String, f64)> = counts
                    .iter()
                    .map(|(label, n)| (label.clone(), *n as f64))
                    .collect();
                let axes = AxisNames {
                    value: "count",
                    ..axes
                };
                bars(&root, &counts, orientation, axes)?
            }
            (plot, _) => {
                return Err(ServerError::Render(format!(
                    "'{}' cannot be drawn as {plot:?}",
                    descriptor.title
                )))
            }
        }

        root.present()?;
    }
    Ok(svg)
}

fn label_style(size: u32) -> TextStyle<'static> {
    TextStyle::from((FONT, size).into_font()).color(&BLACK)
}

fn shorten(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

/// Value axis range that always includes zero, with headroom on top.
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi <= lo {
        return 0.0..1.0;
    }
    lo * 1.1..hi * 1.1
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((hi - lo) * 0.08).max(1.0);
    lo - pad..hi + pad
}

/// Position of category `i` along its axis. Horizontal charts list the
/// first category at the top.
fn slot(i: usize, n: usize, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Vertical => i as f64,
        Orientation::Horizontal => (n - 1 - i) as f64,
    }
}

fn point(value: f64, at: f64, orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Vertical => (at, value),
        Orientation::Horizontal => (value, at),
    }
}

/// Cartesian frame with a numeric value axis and one slot per category.
/// Category names are drawn next to their slot rather than as mesh ticks,
/// so every category gets a label however many there are.
fn category_frame<'a, 'b>(
    root: &'a Root<'b>,
    labels: &[&str],
    values: Range<f64>,
    orientation: Orientation,
    axes: AxisNames<'_>,
) -> Result<Chart<'a, 'b>, ServerError> {
    let slots = -0.5..(labels.len().max(1) as f64 - 0.5);
    let blank = |_: &f64| String::new();

    let mut chart = match orientation {
        Orientation::Horizontal => ChartBuilder::on(root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(190)
            .build_cartesian_2d(values.clone(), slots)?,
        Orientation::Vertical => ChartBuilder::on(root)
            .margin(15)
            .x_label_area_size(55)
            .y_label_area_size(70)
            .build_cartesian_2d(slots, values.clone())?,
    };

    let mut mesh = chart.configure_mesh();
    mesh.label_style(label_style(12))
        .axis_desc_style(label_style(15));
    match orientation {
        Orientation::Horizontal => {
            mesh.disable_y_mesh()
                .y_label_formatter(&blank)
                .x_desc(axes.value)
                .y_desc(axes.category);
        }
        Orientation::Vertical => {
            mesh.disable_x_mesh()
                .x_label_formatter(&blank)
                .x_desc(axes.category)
                .y_desc(axes.value);
        }
    }
    mesh.draw()?;

    let n = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let at = slot(i, n, orientation);
        let text = shorten(label);
        match orientation {
            Orientation::Horizontal => {
                let (px, py) = chart.backend_coord(&(values.start, at));
                let style = label_style(12).pos(Pos::new(HPos::Right, VPos::Center));
                root.draw(&Text::new(text, (px - 8, py), style))?;
            }
            Orientation::Vertical => {
                let (px, py) = chart.backend_coord(&(at, values.start));
                let style = label_style(12).pos(Pos::new(HPos::Center, VPos::Top));
                root.draw(&Text::new(text, (px, py + 6), style))?;
            }
        }
    }

    if labels.is_empty() {
        let (w, h) = root.dim_in_pixel();
        let style = label_style(18).pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new("No data", (w as i32 / 2, h as i32 / 2), style))?;
    }

    Ok(chart)
}

fn bars(
    root: &Root<'_>,
    data: &[(String, f64)],
    orientation: Orientation,
    axes: AxisNames<'_>,
) -> Result<(), ServerError> {
    let labels: Vec<&str> = data.iter().map(|(l, _)| l.as_str()).collect();
    let mut chart = category_frame(
        root,
        &labels,
        value_range(data.iter().map(|(_, v)| *v)),
        orientation,
        axes,
    )?;

    let n = data.len();
    chart.draw_series(data.iter().enumerate().map(|(i, (_, value))| {
        let at = slot(i, n, orientation);
        Rectangle::new(
            [
                point(0.0, at - 0.4, orientation),
                point(*value, at + 0.4, orientation),
            ],
            color(i).filled(),
        )
    }))?;

    Ok(())
}

fn scatter(root: &Root<'_>, data: &[(String, f64)], axes: AxisNames<'_>) -> Result<(), ServerError> {
    let labels: Vec<&str> = data.iter().map(|(l, _)| l.as_str()).collect();
    let mut chart = category_frame(
        root,
        &labels,
        padded_range(data.iter().map(|(_, v)| *v)),
        Orientation::Vertical,
        axes,
    )?;

    chart.draw_series(
        data.iter()
            .enumerate()
            .map(|(i, (_, value))| Circle::new((i as f64, *value), 6, color(0).filled())),
    )?;

    Ok(())
}

fn boxes(
    root: &Root<'_>,
    groups: &[(String, Vec<f64>)],
    axes: AxisNames<'_>,
) -> Result<(), ServerError> {
    let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
    let mut chart = category_frame(
        root,
        &labels,
        padded_range(groups.iter().flat_map(|(_, v)| v.iter().copied())),
        Orientation::Horizontal,
        axes,
    )?;

    let n = groups.len();
    for (i, (_, values)) in groups.iter().enumerate() {
        let Some(summary) = BoxSummary::from_values(values) else {
            continue;
        };
        let y = slot(i, n, Orientation::Horizontal);
        let outline = RGBColor(60, 60, 60).stroke_width(1);

        chart.draw_series([
            Rectangle::new([(summary.q1, y - 0.35), (summary.q3, y + 0.35)], color(i).filled()),
            Rectangle::new([(summary.q1, y - 0.35), (summary.q3, y + 0.35)], outline),
        ])?;
        chart.draw_series([
            PathElement::new(
                vec![(summary.median, y - 0.35), (summary.median, y + 0.35)],
                outline.stroke_width(2),
            ),
            PathElement::new(vec![(summary.whisker_low, y), (summary.q1, y)], outline),
            PathElement::new(vec![(summary.q3, y), (summary.whisker_high, y)], outline),
            PathElement::new(
                vec![(summary.whisker_low, y - 0.15), (summary.whisker_low, y + 0.15)],
                outline,
            ),
            PathElement::new(
                vec![(summary.whisker_high, y - 0.15), (summary.whisker_high, y + 0.15)],
                outline,
            ),
        ])?;
        chart.draw_series(
            summary
                .outliers
                .iter()
                .map(|v| Circle::new((*v, y), 3, outline)),
        )?;
    }

    Ok(())
}

fn violin(root: &Root<'_>, values: &[f64], axes: AxisNames<'_>) -> Result<(), ServerError> {
    let curve = kde(values, VIOLIN_POINTS);
    let x_range = if curve.is_empty() {
        0.0..1.0
    } else {
        curve[0].0..curve[curve.len() - 1].0
    };
    let blank = |_: &f64| String::new();

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(20)
        .build_cartesian_2d(x_range, -1.0..1.0)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&blank)
        .label_style(label_style(12))
        .axis_desc_style(label_style(15))
        .x_desc(axes.value)
        .draw()?;

    if curve.is_empty() {
        let (w, h) = root.dim_in_pixel();
        let style = label_style(18).pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new("No data", (w as i32 / 2, h as i32 / 2), style))?;
        return Ok(());
    }

    let peak = curve.iter().map(|(_, d)| *d).fold(0.0, f64::max);
    let scale = if peak > 0.0 { 0.8 / peak } else { 0.0 };
    let outline: Vec<(f64, f64)> = curve
        .iter()
        .map(|(x, d)| (*x, d * scale))
        .chain(curve.iter().rev().map(|(x, d)| (*x, -d * scale)))
        .collect();

    chart.draw_series(std::iter::once(Polygon::new(
        outline.clone(),
        color(0).mix(0.8).filled(),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        outline,
        RGBColor(60, 60, 60).stroke_width(1),
    )))?;

    if let Some(summary) = BoxSummary::from_values(values) {
        let (lo, hi) = (summary.whisker_low, summary.whisker_high);
        let (q1, median, q3) = (summary.q1, summary.median, summary.q3);
        chart.draw_series([
            PathElement::new(vec![(lo, 0.0), (hi, 0.0)], RGBColor(60, 60, 60).stroke_width(1)),
            PathElement::new(vec![(q1, 0.0), (q3, 0.0)], RGBColor(60, 60, 60).stroke_width(6)),
        ])?;
        chart.draw_series(std::iter::once(Circle::new((median, 0.0), 3, WHITE.filled())))?;
    }

    Ok(())
}
