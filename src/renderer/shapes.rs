//! Shape generation for the car, cones and coins
//!
//! Each helper returns draw commands placed around an entity centre.

use glam::Vec2;

use super::{Color, DrawCmd, Paint};
use crate::consts::{CONE_SIZE, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::Rect;

pub const CAR_BODY_FRONT: Color = Color::rgb(0x1e, 0x89, 0xff);
pub const CAR_BODY_REAR: Color = Color::rgb(0x00, 0xff, 0xa3);
pub const CAR_OUTLINE: Color = Color::rgba(255, 255, 255, 0.35);
pub const CAR_SHADOW: Color = Color::rgba(0, 0, 0, 0.35);
pub const CAR_GLASS: Color = Color::rgba(10, 20, 30, 0.85);
pub const HEADLIGHT: Color = Color::rgb(0xff, 0xe3, 0x8a);
pub const TAILLIGHT: Color = Color::rgb(0xff, 0x6b, 0x6b);
pub const CONE_ORANGE: Color = Color::rgb(0xf9, 0x73, 0x16);
pub const CONE_STRIPE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const COIN_CORE: Color = Color::rgb(0xff, 0xf1, 0xa6);
pub const COIN_RIM: Color = Color::rgb(0xea, 0xb3, 0x08);

/// Rectangle relative to `origin`
#[inline]
fn local(origin: Vec2, x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(origin.x + x, origin.y + y, w, h)
}

/// Player car: shadow, gradient body, two windows, head- and taillights
pub fn car(center: Vec2) -> Vec<DrawCmd> {
    let (hw, hh) = (PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
    let mut cmds = Vec::with_capacity(9);

    cmds.push(DrawCmd::Ellipse {
        center: center + Vec2::new(0.0, 40.0),
        radii: Vec2::new(26.0, 10.0),
        color: CAR_SHADOW,
    });
    cmds.push(DrawCmd::RoundRect {
        rect: local(center, -hw, -hh, PLAYER_WIDTH, PLAYER_HEIGHT),
        radius: 8.0,
        fill: Paint::Linear {
            from: center + Vec2::new(-20.0, -40.0),
            to: center + Vec2::new(20.0, 40.0),
            start: CAR_BODY_FRONT,
            end: CAR_BODY_REAR,
        },
        stroke: Some(CAR_OUTLINE),
    });

    // Windscreen and rear window
    for (y, h) in [(-30.0, 20.0), (10.0, 16.0)] {
        cmds.push(DrawCmd::RoundRect {
            rect: local(center, -18.0, y, 36.0, h),
            radius: 4.0,
            fill: Paint::Solid(CAR_GLASS),
            stroke: None,
        });
    }

    for x in [-18.0, 8.0] {
        cmds.push(DrawCmd::FillRect {
            rect: local(center, x, -hh, 10.0, 6.0),
            color: HEADLIGHT,
        });
        cmds.push(DrawCmd::FillRect {
            rect: local(center, x, hh - 6.0, 10.0, 6.0),
            color: TAILLIGHT,
        });
    }

    cmds
}

/// Traffic cone: rounded orange block with a reflective band
pub fn cone(center: Vec2) -> [DrawCmd; 2] {
    let half = CONE_SIZE / 2.0;
    [
        DrawCmd::RoundRect {
            rect: local(center, -half, -half, CONE_SIZE, CONE_SIZE),
            radius: 6.0,
            fill: Paint::Solid(CONE_ORANGE),
            stroke: None,
        },
        DrawCmd::FillRect {
            rect: local(center, -half + 2.0, -2.0, CONE_SIZE - 4.0, 6.0),
            color: CONE_STRIPE,
        },
    ]
}

/// Coin with a radial shine
pub fn coin(center: Vec2, radius: f32) -> DrawCmd {
    DrawCmd::Circle {
        center,
        radius,
        fill: Paint::Radial {
            center,
            inner: 2.0,
            outer: radius,
            start: COIN_CORE,
            end: COIN_RIM,
        },
    }
}
