//! Rendering module
//!
//! `build_frame` projects a `GameState` into a flat list of draw commands;
//! it only reads the state. The wasm build replays that list onto a
//! `CanvasRenderingContext2d` (see `canvas`).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// sRGB colour with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string for canvas styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Two-stop gradient along the segment `from` -> `to`
    Linear { from: Vec2, to: Vec2, start: Color, end: Color },
    /// Two-stop gradient between concentric circles
    Radial { center: Vec2, inner: f32, outer: f32, start: Color, end: Color },
}

/// One primitive in absolute playfield coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: Color },
    RoundRect { rect: Rect, radius: f32, fill: Paint, stroke: Option<Color> },
    Ellipse { center: Vec2, radii: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, fill: Paint },
    DashedLine { from: Vec2, to: Vec2, width: f32, dash: [f32; 2], color: Color },
    /// Centred text
    Text { pos: Vec2, text: String, size: f32, bold: bool, color: Color },
}

pub mod palette {
    use super::Color;

    pub const BACKDROP: Color = Color::rgb(0x0b, 0x0f, 0x14);
    pub const ROAD: Color = Color::rgb(0x0f, 0x14, 0x1b);
    pub const CENTER_LINE: Color = Color::rgba(255, 255, 255, 0.28);
    pub const LANE_MARK: Color = Color::rgba(255, 255, 255, 0.08);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.5);
    pub const OVERLAY_TEXT: Color = Color::rgb(0xe8, 0xf1, 0xf8);
}

/// Road shoulder width on each side
const ROAD_INSET: f32 = 60.0;
/// Lane marker stripe inset and height
const LANE_MARK_INSET: f32 = 90.0;
const LANE_MARK_HEIGHT: f32 = 20.0;

pub const GAME_OVER_TITLE: &str = "Crash!";
pub const GAME_OVER_HINT: &str = "Press \u{201c}Restart\u{201d} to try again";

/// Build the draw list for one frame
pub fn build_frame(state: &GameState) -> Vec<DrawCmd> {
    let (w, h) = (state.width(), state.height());
    let mut cmds = Vec::with_capacity(
        8 + state.lane_markers.len() + state.obstacles.len() * 2 + state.pickups.len(),
    );

    // Road
    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(0.0, 0.0, w, h),
        color: palette::BACKDROP,
    });
    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(ROAD_INSET, 0.0, w - 2.0 * ROAD_INSET, h),
        color: palette::ROAD,
    });
    cmds.push(DrawCmd::DashedLine {
        from: Vec2::new(w / 2.0, 0.0),
        to: Vec2::new(w / 2.0, h),
        width: 4.0,
        dash: [28.0, 22.0],
        color: palette::CENTER_LINE,
    });
    for marker in &state.lane_markers {
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(
                LANE_MARK_INSET,
                marker.y,
                w - 2.0 * LANE_MARK_INSET,
                LANE_MARK_HEIGHT,
            ),
            color: palette::LANE_MARK,
        });
    }

    cmds.extend(shapes::car(state.player.pos));
    for cone in &state.obstacles {
        cmds.extend(shapes::cone(cone.pos));
    }
    for coin in &state.pickups {
        cmds.push(shapes::coin(coin.pos, coin.radius));
    }

    if state.game_over() {
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(0.0, 0.0, w, h),
            color: palette::OVERLAY,
        });
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(w / 2.0, h / 2.0 - 20.0),
            text: GAME_OVER_TITLE.to_string(),
            size: 36.0,
            bold: true,
            color: palette::OVERLAY_TEXT,
        });
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(w / 2.0, h / 2.0 + 18.0),
            text: GAME_OVER_HINT.to_string(),
            size: 18.0,
            bold: false,
            color: palette::OVERLAY_TEXT,
        });
    }

    cmds
}
