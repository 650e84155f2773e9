use std::ops::RangeInclusive;

use eframe::egui::{Align2, RichText, Ui, Vec2, Vec2b};
use egui_plot::{Bar, BarChart, GridInput, GridMark, HLine, Plot, PlotPoint, PlotUi, Text};

use crate::color;
use crate::config::{ChartConfig, ReferenceLine};
use crate::data::model::{format_rate, PlottedPoint};
use crate::data::selection::SelectionEvent;
use crate::state::AppState;
use crate::ui::marker;

/// Vertical gap between a bar top and its value label, in plot units.
const VALUE_LABEL_GAP: f64 = 0.04;
/// Vertical gap between a reference line and its label, in plot units.
const REFERENCE_LABEL_GAP: f64 = 0.02;
/// Horizontal inset of reference labels from the left plot edge.
const REFERENCE_LABEL_INSET: f64 = 0.15;

// ---------------------------------------------------------------------------
// Birth-rate bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the bar chart and feed clicks through selection resolution.
///
/// The chart is static: panning and zooming are disabled and the axes are
/// pinned, so a bar's x coordinate is always its record index. A click inside
/// a bar's horizontal span becomes a [`SelectionEvent`]; a click anywhere
/// else inside the plot clears the selection.
pub fn birth_rate_chart(ui: &mut Ui, state: &mut AppState, config: &ChartConfig) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No birth-rate data to plot");
        });
        return;
    }

    let selected = state.selected;
    let names: Vec<String> = state
        .dataset
        .records()
        .iter()
        .map(|r| r.country.clone())
        .collect();
    let points: Vec<PlottedPoint> = state
        .dataset
        .records()
        .iter()
        .map(|r| r.plotted())
        .collect();
    let slots = points.len();

    let bars: Vec<Bar> = state
        .dataset
        .records()
        .iter()
        .map(|record| {
            let point = record.plotted();
            let fill = if selected == Some(record.index) {
                color::HIGHLIGHT
            } else {
                color::BAR
            };
            Bar::new(point.x, point.y)
                .name(&record.country)
                .width(config.bar_width)
                .fill(fill)
        })
        .collect();
    let chart = BarChart::new(bars);

    let response = Plot::new("birth_rate_chart")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .show_grid(Vec2b { x: false, y: true })
        .include_x(-0.5)
        .include_x(slots as f64 - 0.5)
        .include_y(config.y_min)
        .include_y(config.y_max)
        .set_margin_fraction(Vec2::ZERO)
        .x_grid_spacer(move |input: GridInput| country_grid_marks(slots, input))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            country_axis_label(&names, mark.value)
                .map(str::to_owned)
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);

            for line in &config.reference_lines {
                draw_reference_line(plot_ui, line);
            }

            if config.show_bar_values {
                for point in &points {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(point.x, point.y + VALUE_LABEL_GAP),
                            RichText::new(format_rate(point.y))
                                .color(color::VALUE_LABEL)
                                .size(11.0),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            }

            let clicked = plot_ui.response().clicked();
            let pointer = plot_ui.pointer_coordinate();
            let inside = pointer_inside_plot(plot_ui);
            (clicked, pointer, inside)
        });

    let (clicked, pointer, inside) = response.inner;
    if clicked {
        let slot = pointer
            .filter(|_| inside)
            .and_then(|p| bar_slot_at(p.x, config.bar_width));
        match slot {
            Some(entry_index) => state.apply_selection(SelectionEvent { entry_index }),
            None => state.clear_selection(),
        }
    }

    // Marker for the (possibly just-updated) selection, drawn over the plot.
    if let Some(overlay) = &state.marker {
        if let Some(record) = state
            .selected
            .and_then(|idx| state.dataset.records().iter().find(|r| r.index == idx))
        {
            let top = record.plotted();
            let anchor = response
                .transform
                .position_from_point(&PlotPoint::new(top.x, top.y));
            marker::draw(ui, *response.transform.frame(), anchor, overlay);
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Guide line with its inline label, pinned to the left edge.
fn draw_reference_line(plot_ui: &mut PlotUi, line: &ReferenceLine) {
    plot_ui.hline(HLine::new(line.value).color(line.color).width(2.0));

    let [x_min, _] = plot_ui.plot_bounds().min();
    let (anchor, y) = if line.label_above {
        (Align2::LEFT_BOTTOM, line.value + REFERENCE_LABEL_GAP)
    } else {
        (Align2::LEFT_TOP, line.value - REFERENCE_LABEL_GAP)
    };
    plot_ui.text(
        Text::new(
            PlotPoint::new(x_min + REFERENCE_LABEL_INSET, y),
            RichText::new(line.label.as_str()).color(line.color).size(10.5),
        )
        .anchor(anchor),
    );
}

/// Whether the pointer currently sits inside the plotted bounds rather than
/// on the axis margins.
fn pointer_inside_plot(plot_ui: &PlotUi) -> bool {
    if let Some(pointer) = plot_ui.pointer_coordinate() {
        let bounds = plot_ui.plot_bounds();
        return bounds.range_x().contains(&pointer.x) && bounds.range_y().contains(&pointer.y);
    }
    false
}

/// One grid mark per bar slot, so every country gets an axis label.
fn country_grid_marks(slots: usize, input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    (0..slots)
        .map(|slot| slot as f64)
        .filter(|&x| x >= min && x <= max)
        .map(|x| GridMark {
            value: x,
            step_size: 1.0,
        })
        .collect()
}

/// Country name for an x-axis grid mark; non-integer marks and marks outside
/// the table render empty.
fn country_axis_label(names: &[String], mark: f64) -> Option<&str> {
    let rounded = mark.round();
    if (mark - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    names.get(rounded as usize).map(String::as_str)
}

/// Map a plot-space x coordinate to the bar slot whose horizontal span
/// contains it. The hit test is geometric only: a slot just past the end of
/// the table is still reported, and resolution decides whether a record
/// exists for it.
fn bar_slot_at(x: f64, bar_width: f64) -> Option<usize> {
    let nearest = x.round();
    if nearest < 0.0 {
        return None;
    }
    ((x - nearest).abs() <= bar_width / 2.0).then_some(nearest as usize)
}
