//! Offscreen-canvas exports of the wrapped story: a 1080x1920 PNG
//! story card and a two-page A4 PDF report.

use super::screens::wrap_text;
use crate::format::format_currency;
use crate::services::download;
use anyhow::{anyhow, Context};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use shared::WrappedStory;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const STORY_W: u32 = 1080;
const STORY_H: u32 = 1920;
const PAGE_W: u32 = 794;
const PAGE_H: u32 = 1123;
const PAGE_DPI: f32 = 96.0;

/// Renders the story card offscreen and saves it as a PNG download.
pub fn export_story_png(story: &WrappedStory, currency: &str) -> anyhow::Result<()> {
    let canvas = draw_story_card(story, currency).map_err(js_err)?;
    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(js_err)?;
    let filename = format!("money-wrapped-story-{}.png", slug(&story.period));
    download::save_data_url(&filename, &data_url).map_err(js_err)?;
    Ok(())
}

/// Renders a two-page report offscreen and saves it as a PDF download.
/// Each page is rasterized at 96 dpi so an A4 page maps 1:1 onto a
/// 794x1123 canvas.
pub fn export_report_pdf(story: &WrappedStory, currency: &str) -> anyhow::Result<()> {
    let page_one = draw_report_page_one(story, currency).map_err(js_err)?;
    let page_two = draw_report_page_two(story, currency).map_err(js_err)?;

    let (doc, first_page, first_layer) =
        PdfDocument::new("Money Wrapped Report", Mm(210.0), Mm(297.0), "page");
    place_canvas(&page_one, &doc.get_page(first_page).get_layer(first_layer))?;

    let (second_page, second_layer) = doc.add_page(Mm(210.0), Mm(297.0), "page");
    place_canvas(&page_two, &doc.get_page(second_page).get_layer(second_layer))?;

    let bytes = doc.save_to_bytes().context("pdf serialization failed")?;
    let filename = format!("Money-Wrapped-Report-{}.pdf", slug(&story.period));
    download::save_bytes(&filename, &bytes, "application/pdf").map_err(js_err)?;
    Ok(())
}

fn place_canvas(canvas: &HtmlCanvasElement, layer: &printpdf::PdfLayerReference) -> anyhow::Result<()> {
    let image = canvas_to_pdf_image(canvas)?;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            dpi: Some(PAGE_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

/// Pulls the canvas pixels through `ImageData` into printpdf's bundled
/// image crate, dropping the alpha channel PDF has no use for.
fn canvas_to_pdf_image(canvas: &HtmlCanvasElement) -> anyhow::Result<Image> {
    let ctx = context_2d(canvas).map_err(js_err)?;
    let width = canvas.width();
    let height = canvas.height();
    let image_data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    let pixels = image_data.data().0;

    let rgba = printpdf::image_crate::RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| anyhow!("canvas pixel buffer has unexpected size"))?;
    let dynamic =
        printpdf::image_crate::DynamicImage::ImageRgb8(
            printpdf::image_crate::DynamicImage::ImageRgba8(rgba).to_rgb8(),
        );
    Ok(Image::from_dynamic_image(&dynamic))
}

fn draw_story_card(
    story: &WrappedStory,
    currency: &str,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = make_canvas(STORY_W, STORY_H)?;
    let ctx = context_2d(&canvas)?;

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, STORY_H as f64);
    gradient.add_color_stop(0.0, "#0f172a")?;
    gradient.add_color_stop(1.0, "#1d4ed8")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, STORY_W as f64, STORY_H as f64);

    ctx.set_text_align("center");
    let cx = STORY_W as f64 / 2.0;

    ctx.set_fill_style_str("#93c5fd");
    ctx.set_font("64px sans-serif");
    ctx.fill_text("MONEY WRAPPED", cx, 260.0)?;
    ctx.fill_text(&story.period, cx, 360.0)?;

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 140px sans-serif");
    ctx.fill_text(&format_currency(story.total_spent, currency), cx, 640.0)?;
    ctx.set_font("56px sans-serif");
    ctx.fill_text("total spent", cx, 740.0)?;

    ctx.set_font("bold 72px sans-serif");
    ctx.fill_text(&story.personality.label, cx, 980.0)?;

    ctx.set_fill_style_str("#e2e8f0");
    ctx.set_font("48px sans-serif");
    let mut y = 1160.0;
    for pattern in story.patterns.iter().take(3) {
        for line in wrap_text(pattern, 38) {
            ctx.fill_text(&line, cx, y)?;
            y += 70.0;
        }
        y += 30.0;
    }

    ctx.set_fill_style_str("#93c5fd");
    ctx.set_font("44px sans-serif");
    ctx.fill_text("made with my expense dashboard", cx, STORY_H as f64 - 120.0)?;

    Ok(canvas)
}

fn draw_report_page_one(
    story: &WrappedStory,
    currency: &str,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = make_canvas(PAGE_W, PAGE_H)?;
    let ctx = context_2d(&canvas)?;
    fill_page(&ctx);

    let cx = PAGE_W as f64 / 2.0;
    ctx.set_text_align("center");
    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 42px sans-serif");
    ctx.fill_text("Money Wrapped Report", cx, 120.0)?;
    ctx.set_font("28px sans-serif");
    ctx.set_fill_style_str("#475569");
    ctx.fill_text(&story.period, cx, 170.0)?;

    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 64px sans-serif");
    ctx.fill_text(&format_currency(story.total_spent, currency), cx, 320.0)?;
    ctx.set_font("26px sans-serif");
    ctx.set_fill_style_str("#475569");
    ctx.fill_text("total spent this period", cx, 370.0)?;

    ctx.set_text_align("left");
    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 30px sans-serif");
    ctx.fill_text("Spending patterns", 80.0, 500.0)?;
    ctx.set_font("24px sans-serif");
    ctx.set_fill_style_str("#334155");
    let mut y = 550.0;
    for pattern in &story.patterns {
        for line in wrap_text(pattern, 58) {
            ctx.fill_text(&format!("• {}", line), 80.0, y)?;
            y += 38.0;
        }
        y += 12.0;
    }

    Ok(canvas)
}

fn draw_report_page_two(
    story: &WrappedStory,
    currency: &str,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = make_canvas(PAGE_W, PAGE_H)?;
    let ctx = context_2d(&canvas)?;
    fill_page(&ctx);

    ctx.set_text_align("left");
    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 30px sans-serif");
    ctx.fill_text("Spending personality", 80.0, 140.0)?;
    ctx.set_font("bold 26px sans-serif");
    ctx.fill_text(&story.personality.label, 80.0, 190.0)?;
    ctx.set_font("24px sans-serif");
    ctx.set_fill_style_str("#334155");
    let mut y = 235.0;
    for line in wrap_text(&story.personality.description, 58) {
        ctx.fill_text(&line, 80.0, y)?;
        y += 38.0;
    }

    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 30px sans-serif");
    ctx.fill_text("Outlook", 80.0, y + 60.0)?;
    ctx.set_font("24px sans-serif");
    ctx.set_fill_style_str("#334155");
    ctx.fill_text(
        &format!("Budget breaks in {} days", story.risk.days_left),
        80.0,
        y + 110.0,
    )?;
    ctx.fill_text(
        &format!(
            "Remaining buffer: {}",
            format_currency(story.risk.buffer, currency)
        ),
        80.0,
        y + 150.0,
    )?;

    ctx.set_fill_style_str("#0f172a");
    ctx.set_font("bold 30px sans-serif");
    ctx.fill_text("Recommendation", 80.0, y + 240.0)?;
    ctx.set_font("24px sans-serif");
    ctx.set_fill_style_str("#334155");
    let mut ry = y + 290.0;
    for line in wrap_text(&story.recommendation, 58) {
        ctx.fill_text(&line, 80.0, ry)?;
        ry += 38.0;
    }

    Ok(canvas)
}

fn fill_page(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, PAGE_W as f64, PAGE_H as f64);
}

fn make_canvas(width: u32, height: u32) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected context type"))
}

fn slug(period: &str) -> String {
    period.replace(' ', "-")
}

fn js_err(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_slug_is_filename_safe() {
        assert_eq!(slug("November 2026"), "November-2026");
    }
}
