//! The canned icon compositions
//!
//! Each template turns a canvas size into an ordered shape list; later
//! shapes overpaint earlier ones. All geometry is a fixed ratio of the
//! canvas size with a one-pixel floor on derived dimensions so tiny
//! canvases still render legibly.

use crate::rendering::paint::{Rgba, Shape};
use crate::rendering::Canvas;
use crate::{IconSource, Result};

// Robot palette
const ROBOT_ACCENT: Rgba = (102, 126, 234, 255); // #667eea
const WHITE: Rgba = (255, 255, 255, 255);
const FOOD_GREEN: Rgba = (76, 175, 80, 255); // #4CAF50
const FOOD_ORANGE: Rgba = (255, 152, 0, 255); // #FF9800
const FOOD_RED: Rgba = (244, 67, 54, 255); // #F44336

// Sync-card palette
const CARD_INDIGO: Rgba = (79, 70, 229, 255); // #4F46E5
const STRIPE_GRAY: Rgba = (107, 114, 128, 255); // #6B7280
const LINE_GRAY: Rgba = (156, 163, 175, 255); // #9CA3AF

// Shared proportions
const DISC_RADIUS_RATIO: f32 = 0.4;
const THIN_RATIO: f32 = 1.0 / 32.0; // strokes, mouth, antenna, text lines
const DOT_RATIO: f32 = 1.0 / 16.0; // eyes and food dots

// Robot proportions
const HEAD_WIDTH_RATIO: f32 = 0.4;
const HEAD_HEIGHT_RATIO: f32 = 0.3;
const HEAD_LIFT_RATIO: f32 = 0.05;
const ANTENNA_HEIGHT_RATIO: f32 = 0.1;
const FOOD_SPREAD_RATIO: f32 = 0.3;
const FOOD_DROP_RATIO: f32 = 0.2;

// Sync-card proportions
const CARD_WIDTH_RATIO: f32 = 0.5;
const CARD_HEIGHT_RATIO: f32 = 0.3;
const CARD_INSET: f32 = 2.0;
const ARROW_RATIO: f32 = 1.0 / 8.0;

/// A named, fixed icon composition.
///
/// Templates are the procedural backends of the source chain: they always
/// succeed for any size of at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Robot mascot on an accent disc (the classic extension logo)
    Robot,
    /// Payment card with sync arrows on a gradient disc
    SyncCard,
}

impl Template {
    /// The ordered shape list for a canvas of side `size`.
    pub fn shapes(&self, size: u32) -> Vec<Shape> {
        match self {
            Template::Robot => robot_shapes(size as f32),
            Template::SyncCard => sync_card_shapes(size as f32),
        }
    }

    /// Render the composition onto a fresh transparent canvas.
    pub fn render(&self, size: u32) -> Result<Canvas> {
        let mut canvas = Canvas::new(size)?;
        for shape in self.shapes(size) {
            canvas.draw(&shape);
        }
        Ok(canvas)
    }
}

impl IconSource for Template {
    fn name(&self) -> &str {
        match self {
            Template::Robot => "robot",
            Template::SyncCard => "sync-card",
        }
    }

    fn render(&self, size: u32) -> Result<Canvas> {
        Template::render(self, size)
    }
}

/// Derived dimension with the legibility floor applied
fn at_least_1(v: f32) -> f32 {
    v.max(1.0)
}

fn robot_shapes(s: f32) -> Vec<Shape> {
    let cx = s / 2.0;
    let cy = s / 2.0;
    let thin = at_least_1(s * THIN_RATIO);
    let dot = (s * DOT_RATIO).max(2.0);

    let head_w = at_least_1(s * HEAD_WIDTH_RATIO);
    let head_h = at_least_1(s * HEAD_HEIGHT_RATIO);
    let head_x = cx - head_w / 2.0;
    let head_y = cy - head_h / 2.0 - s * HEAD_LIFT_RATIO;

    let eye_y = head_y + head_h * 0.3;
    let mouth_w = at_least_1(head_w * 0.3);
    let antenna_h = at_least_1(s * ANTENNA_HEIGHT_RATIO);
    let food_y = cy + s * FOOD_DROP_RATIO;

    vec![
        Shape::FillCircle {
            cx,
            cy,
            radius: at_least_1(s * DISC_RADIUS_RATIO),
            rgba: ROBOT_ACCENT,
        },
        Shape::StrokeCircle {
            cx,
            cy,
            radius: at_least_1(s * DISC_RADIUS_RATIO),
            stroke: thin,
            rgba: WHITE,
        },
        Shape::FillRect {
            x: head_x,
            y: head_y,
            width: head_w,
            height: head_h,
            rgba: WHITE,
        },
        Shape::FillCircle {
            cx: head_x + head_w * 0.25,
            cy: eye_y,
            radius: dot,
            rgba: ROBOT_ACCENT,
        },
        Shape::FillCircle {
            cx: head_x + head_w * 0.75,
            cy: eye_y,
            radius: dot,
            rgba: ROBOT_ACCENT,
        },
        Shape::FillRect {
            x: cx - mouth_w / 2.0,
            y: head_y + head_h * 0.7,
            width: mouth_w,
            height: thin,
            rgba: ROBOT_ACCENT,
        },
        // Antenna stalk rising from the head top, ball at the tip
        Shape::FillRect {
            x: cx - thin / 2.0,
            y: head_y - antenna_h,
            width: thin,
            height: antenna_h,
            rgba: WHITE,
        },
        Shape::FillCircle {
            cx,
            cy: head_y - antenna_h,
            radius: thin,
            rgba: WHITE,
        },
        Shape::FillCircle {
            cx: cx - s * FOOD_SPREAD_RATIO,
            cy: food_y,
            radius: dot,
            rgba: FOOD_GREEN,
        },
        Shape::FillCircle {
            cx: cx + s * FOOD_SPREAD_RATIO,
            cy: food_y,
            radius: dot,
            rgba: FOOD_ORANGE,
        },
        Shape::FillCircle {
            cx,
            cy: cy + s * FOOD_SPREAD_RATIO,
            radius: at_least_1(dot * 0.8),
            rgba: FOOD_RED,
        },
    ]
}

fn sync_card_shapes(s: f32) -> Vec<Shape> {
    let cx = s / 2.0;
    let cy = s / 2.0;
    let thin = at_least_1(s * THIN_RATIO);

    let card_w = at_least_1(s * CARD_WIDTH_RATIO);
    let card_h = at_least_1(s * CARD_HEIGHT_RATIO);
    let card_x = cx - card_w / 2.0;
    let card_y = cy - card_h / 2.0;
    let stripe_h = at_least_1(card_h * 0.2);

    let arrow = at_least_1(s * ARROW_RATIO);
    let quarter = s / 4.0;

    vec![
        Shape::GradientDisc {
            cx,
            cy,
            radius: at_least_1(s / 2.0),
            rgba: CARD_INDIGO,
        },
        Shape::FillRect {
            x: card_x,
            y: card_y,
            width: card_w,
            height: card_h,
            rgba: WHITE,
        },
        Shape::FillRect {
            x: card_x + CARD_INSET,
            y: card_y + CARD_INSET,
            width: at_least_1(card_w - 2.0 * CARD_INSET),
            height: at_least_1(stripe_h - CARD_INSET),
            rgba: STRIPE_GRAY,
        },
        // Two embossed "text" lines below the stripe
        Shape::FillRect {
            x: card_x + CARD_INSET,
            y: card_y + card_h / 2.0,
            width: at_least_1(card_w / 2.0 - CARD_INSET),
            height: thin,
            rgba: LINE_GRAY,
        },
        Shape::FillRect {
            x: card_x + CARD_INSET,
            y: card_y + card_h * 0.75,
            width: at_least_1(card_w / 3.0 - CARD_INSET),
            height: thin,
            rgba: LINE_GRAY,
        },
        // Sync arrows at the upper quarter points, facing each other
        Shape::FillPolygon {
            points: vec![
                (quarter, quarter),
                (quarter + arrow, quarter + arrow),
                (quarter, quarter + 2.0 * arrow),
            ],
            rgba: WHITE,
        },
        Shape::FillPolygon {
            points: vec![
                (3.0 * quarter, quarter),
                (3.0 * quarter - arrow, quarter + arrow),
                (3.0 * quarter, quarter + 2.0 * arrow),
            ],
            rgba: WHITE,
        },
    ]
}
