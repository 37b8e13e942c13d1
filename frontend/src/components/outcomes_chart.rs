use std::error::Error;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::{OutcomeMetric, OUTCOMES};

const CANVAS_WIDTH: u32 = 720;
const CANVAS_HEIGHT: u32 = 288;

const BASELINE_COLOR: RGBColor = RGBColor(148, 163, 184);
const TARGET_COLOR: RGBColor = RGBColor(2, 132, 199);

/// Largest value plus 10% headroom, rounded up. Never below 1.
pub fn y_axis_max(metrics: &[OutcomeMetric]) -> u32 {
    let max = metrics
        .iter()
        .map(|m| m.baseline.max(m.target))
        .max()
        .unwrap_or(0);
    ((max * 11 + 9) / 10).max(1)
}

/// Horizontal extent of the (baseline, target) bars of group `index`.
/// Group `i` owns the slot `[i, i + 1)`.
pub fn group_bars(index: usize) -> [(f64, f64); 2] {
    let left = index as f64;
    [(left + 0.15, left + 0.5), (left + 0.5, left + 0.85)]
}

fn draw(canvas: HtmlCanvasElement, metrics: &[OutcomeMetric]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    if let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    {
        context.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..metrics.len() as f64, 0u32..y_axis_max(metrics))?;

    // Category names are placed by hand under each group below.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .draw()?;

    chart
        .draw_series(metrics.iter().enumerate().map(|(i, m)| {
            let [(x0, x1), _] = group_bars(i);
            Rectangle::new([(x0, 0), (x1, m.baseline)], BASELINE_COLOR.filled())
        }))?
        .label("Baseline")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BASELINE_COLOR.filled()));

    chart
        .draw_series(metrics.iter().enumerate().map(|(i, m)| {
            let [_, (x0, x1)] = group_bars(i);
            Rectangle::new([(x0, 0), (x1, m.target)], TARGET_COLOR.filled())
        }))?
        .label("Target")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], TARGET_COLOR.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.2))
        .draw()?;

    let label_style = TextStyle::from(("sans-serif", 12.0).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, m) in metrics.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64 + 0.5, 0));
        root.draw(&Text::new(m.metric, (x, y + 8), label_style.clone()))?;
    }

    root.present()?;
    Ok(())
}

#[function_component(OutcomesChart)]
pub fn outcomes_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(e) = draw(canvas, &OUTCOMES) {
                            log::error!("Failed to draw outcomes chart: {}", e);
                        }
                    }
                    None => log::warn!("Outcomes canvas not mounted"),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="outcomes-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="max-width: 100%;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{group_bars, y_axis_max};
    use crate::content::{OutcomeMetric, OUTCOMES};

    #[test]
    fn axis_has_headroom_over_largest_value() {
        assert_eq!(y_axis_max(&OUTCOMES), 40);
        assert_eq!(y_axis_max(&[]), 1);
        let flat = [OutcomeMetric { metric: "x", baseline: 10, target: 10 }];
        assert_eq!(y_axis_max(&flat), 11);
    }

    #[test]
    fn bars_stay_inside_their_group() {
        for i in 0..OUTCOMES.len() {
            let [(b0, b1), (t0, t1)] = group_bars(i);
            assert!(b0 > i as f64 && t1 < (i + 1) as f64);
            assert!(b1 <= t0);
        }
    }
}
