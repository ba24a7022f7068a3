//! Canvas 2D backend
//!
//! Replays a draw list onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, DrawCmd, Paint};
use crate::sim::Rect;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub size: (u32, u32),
}

impl CanvasRenderer {
    /// Grab the 2D context of a canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            size: (canvas.width(), canvas.height()),
        })
    }

    /// Paint a full frame
    pub fn render(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            if let Err(e) = self.draw(cmd) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    fn draw(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::FillRect { rect, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(
                    rect.min.x as f64,
                    rect.min.y as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                );
            }
            DrawCmd::RoundRect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                self.round_rect_path(rect, *radius)?;
                self.set_fill(fill)?;
                ctx.fill();
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style_str(&stroke.to_css());
                    ctx.set_line_width(1.0);
                    ctx.stroke();
                }
            }
            DrawCmd::Ellipse {
                center,
                radii,
                color,
            } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
            DrawCmd::Circle {
                center,
                radius,
                fill,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                self.set_fill(fill)?;
                ctx.fill();
            }
            DrawCmd::DashedLine {
                from,
                to,
                width,
                dash,
                color,
            } => {
                let pattern = js_sys::Array::of2(
                    &JsValue::from_f64(dash[0] as f64),
                    &JsValue::from_f64(dash[1] as f64),
                );
                ctx.set_line_dash(&pattern)?;
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
            DrawCmd::Text {
                pos,
                text,
                size,
                bold,
                color,
            } => {
                let weight = if *bold { 700 } else { 400 };
                ctx.set_font(&format!("{} {}px Inter, Arial", weight, size));
                ctx.set_text_align("center");
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }

    fn set_fill(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear {
                from,
                to,
                start,
                end,
            } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                add_stops(&gradient, start, end)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner,
                outer,
                start,
                end,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let gradient = self
                    .ctx
                    .create_radial_gradient(x, y, *inner as f64, x, y, *outer as f64)?;
                add_stops(&gradient, start, end)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    /// Rounded rectangle path; the radius shrinks to fit small boxes
    fn round_rect_path(&self, rect: &Rect, radius: f32) -> Result<(), JsValue> {
        let r = radius.min(rect.size.x / 2.0).min(rect.size.y / 2.0) as f64;
        let (x, y) = (rect.min.x as f64, rect.min.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r)?;
        ctx.arc_to(x + w, y + h, x, y + h, r)?;
        ctx.arc_to(x, y + h, x, y, r)?;
        ctx.arc_to(x, y, x + w, y, r)?;
        ctx.close_path();
        Ok(())
    }
}

fn add_stops(gradient: &CanvasGradient, start: &Color, end: &Color) -> Result<(), JsValue> {
    gradient.add_color_stop(0.0, &start.to_css())?;
    gradient.add_color_stop(1.0, &end.to_css())?;
    Ok(())
}
