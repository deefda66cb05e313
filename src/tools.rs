use nalgebra::{Point2, Vector2};

use std::f64::consts::PI;
use crate::{Float, TWO_PI};

#[inline]
pub fn distance_from(p: &Point2<Float>, op: &Point2<Float>) -> Float {
    ((p.x - op.x).powi(2) + (p.y - op.y).powi(2)).sqrt()
}

/// Bearing of `op` as seen from `p`, in `[0, 2pi)` with y pointing down.
///
/// Coincident points fall into the vertical branch and give `pi/2`.
#[inline]
pub fn direction_towards(p: &Point2<Float>, op: &Point2<Float>) -> Float {
    let dx = p.x - op.x;
    let dy = p.y - op.y;
    if dx == 0.0 {
        return if p.y > op.y { 3.0 * PI / 2.0 } else { PI / 2.0 };
    }

    let mut angle = (dy / dx).atan();
    if p.x > op.x {
        angle += PI;
    }
    angle.rem_euclid(TWO_PI)
}

#[inline]
pub fn get_components(magnitude: Float, angle: Float) -> Vector2<Float> {
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}
