use crate::charts::Dataset;
use crate::services::logging::Logger;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub dataset: Dataset,
    pub kind: ChartKind,
    #[prop_or(480)]
    pub width: u32,
    #[prop_or(320)]
    pub height: u32,
}

pub enum Msg {}

/// Renders one chart-ready dataset onto a canvas. Purely
/// presentational: all numbers arrive pre-aggregated.
pub struct ChartCanvas {
    canvas_ref: NodeRef,
}

impl Component for ChartCanvas {
    type Message = Msg;
    type Properties = ChartCanvasProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().dataset != old_props.dataset {
            self.draw(ctx.props());
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                width={ctx.props().width.to_string()}
                height={ctx.props().height.to_string()}
            />
        }
    }
}

impl ChartCanvas {
    fn draw(&self, props: &ChartCanvasProps) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(e) = draw_dataset(canvas, &props.dataset, props.kind) {
            Logger::error_with_component("chart", &format!("chart draw failed: {}", e));
        }
    }
}

fn draw_dataset(
    canvas: HtmlCanvasElement,
    dataset: &Dataset,
    kind: ChartKind,
) -> anyhow::Result<()> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| anyhow::anyhow!("canvas backend unavailable"))?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{}", e))?;

    match kind {
        ChartKind::Pie => draw_pie(&root, dataset),
        ChartKind::Bar => draw_bar(&root, dataset),
        ChartKind::Line => draw_line(&root, dataset),
    }
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    root.present().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

type DrawResult = Result<(), Box<dyn std::error::Error>>;

fn draw_pie(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    dataset: &Dataset,
) -> DrawResult {
    if dataset.values.iter().all(|v| *v <= 0.0) {
        return Ok(());
    }
    let (w, h) = root.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = (w.min(h) as f64) * 0.4;
    let colors: Vec<RGBColor> = dataset.fill_colors.iter().map(|c| css_rgb(c)).collect();
    let pie = Pie::new(&center, &radius, &dataset.values, &colors, &dataset.labels);
    root.draw(&pie)?;
    Ok(())
}

fn draw_bar(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    dataset: &Dataset,
) -> DrawResult {
    let n = dataset.values.len();
    if n == 0 {
        return Ok(());
    }
    let max = dataset.values.iter().cloned().fold(1.0f64, f64::max) * 1.15;
    let labels = dataset.labels.clone();

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(&dataset.label, ("sans-serif", 16))
        .x_label_area_size(28)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..n as f64, 0f64..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&move |x| {
            let idx = x.floor() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(dataset.values.iter().enumerate().map(|(i, value)| {
        let fill = css_rgba(dataset.fill_colors.get(i).map(String::as_str).unwrap_or("#60a5fa"));
        Rectangle::new(
            [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, *value)],
            fill.filled(),
        )
    }))?;
    Ok(())
}

fn draw_line(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    dataset: &Dataset,
) -> DrawResult {
    let n = dataset.values.len();
    if n == 0 {
        return Ok(());
    }
    let max = dataset.values.iter().cloned().fold(1.0f64, f64::max) * 1.15;
    let labels = dataset.labels.clone();
    let color = css_rgb(
        dataset
            .border_colors
            .first()
            .map(String::as_str)
            .unwrap_or("#58a6ff"),
    );

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(&dataset.label, ("sans-serif", 16))
        .x_label_area_size(28)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..(n.max(2) - 1) as f64, 0f64..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.min(8))
        .x_label_formatter(&move |x| {
            let idx = x.round() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(LineSeries::new(
        dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v)),
        color.stroke_width(2),
    ))?;
    Ok(())
}

/// Parses the builder's `#rrggbb` / `rgba(...)` strings into plotters
/// colors; anything unparsable falls back to a neutral grey.
fn css_rgb(value: &str) -> RGBColor {
    let RGBAColor(r, g, b, _) = css_rgba(value);
    RGBColor(r, g, b)
}

fn css_rgba(value: &str) -> RGBAColor {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBAColor(r, g, b, 1.0);
            }
        }
    } else if let Some(inner) = value
        .strip_prefix("rgba(")
        .and_then(|v| v.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() == 4 {
            if let (Ok(r), Ok(g), Ok(b), Ok(a)) = (
                parts[0].parse::<u8>(),
                parts[1].parse::<u8>(),
                parts[2].parse::<u8>(),
                parts[3].parse::<f64>(),
            ) {
                return RGBAColor(r, g, b, a);
            }
        }
    }
    RGBAColor(148, 163, 184, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_parsing() {
        assert_eq!(css_rgb("#60a5fa"), RGBColor(96, 165, 250));
        let RGBAColor(r, g, b, a) = css_rgba("rgba(96, 165, 250, 0.7)");
        assert_eq!((r, g, b), (96, 165, 250));
        assert!((a - 0.7).abs() < f64::EPSILON);
        // Unparsable input falls back to grey instead of panicking
        assert_eq!(css_rgb("bogus"), RGBColor(148, 163, 184));
    }
}
