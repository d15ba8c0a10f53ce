//! Axis-aligned geometry and bounce math
//!
//! Screen coordinates: x grows right, y grows down. Angles are measured
//! with "up" as positive, so an upward velocity has a positive angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BOUNCE_ANGLE, MIN_VERTICAL_FRACTION};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// True when `x` lies strictly between the left and right edges
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.x && x < self.right()
    }

    /// Strict point containment (points on an edge are outside)
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.spans_x(p.x) && p.y > self.y && p.y < self.bottom()
    }

    /// Circle overlap: distance from the center to the nearest point of the
    /// rectangle is below the radius
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let nearest = Vec2::new(
            center.x.clamp(self.x, self.right()),
            center.y.clamp(self.y, self.bottom()),
        );
        (center - nearest).length_squared() < radius * radius
    }
}

/// Direction of a velocity with "up" as positive: `atan2(-dy, dx)`
#[inline]
pub fn upward_angle(vel: Vec2) -> f32 {
    (-vel.y).atan2(vel.x)
}

/// Signed impact offset from the paddle center, scaled so the paddle edges
/// sit at ±1 (positive when the ball is left of center)
///
/// Not clamped: impacts past an edge extrapolate beyond ±1.
#[inline]
pub fn normalized_impact(paddle: &Rect, ball_x: f32) -> f32 {
    (paddle.center_x() - ball_x) / (paddle.width / 2.0)
}

/// Velocity after the ball bounces off the paddle
///
/// The incoming angle is rotated by up to 60° depending on where the ball
/// struck, the speed is kept, and the result always points up with at least
/// a tenth of the speed on the vertical axis.
pub fn paddle_bounce(vel: Vec2, paddle: &Rect, ball_x: f32) -> Vec2 {
    let normalized = normalized_impact(paddle, ball_x);
    let bounce_angle = normalized * MAX_BOUNCE_ANGLE;
    let new_angle = upward_angle(vel) + bounce_angle;
    let speed = vel.length();

    let dx = speed * new_angle.cos();
    let mut dy = -(speed * new_angle.sin()).abs();

    let min_dy = MIN_VERTICAL_FRACTION * speed;
    if dy.abs() < min_dy {
        dy = min_dy.copysign(dy);
    }

    Vec2::new(dx, dy)
}
