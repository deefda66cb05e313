use nalgebra::{Point2, Vector2};
use rand::Rng;

use crate::{body::Body, playfield::Playfield};
use crate::{Float, MAXVEL, RADIUS};

#[derive(new, Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Point2<Float>,
    pub velocity: Vector2<Float>,
    pub mass: Float,
}

impl Ball {
    /// Unit mass ball at rest.
    pub fn at(x: Float, y: Float) -> Ball {
        Ball::new(Point2::new(x, y), Vector2::new(0.0, 0.0), 1.0)
    }

    /// A ball somewhere inside `field`, fully on screen, moving at `MAXVEL`.
    pub fn random<R: Rng>(rng: &mut R, field: &Playfield) -> Ball {
        let r = RADIUS as i64;
        let x = rng.random_range(r..=(field.width as i64 - r).max(r));
        let y = rng.random_range(r..=(field.height as i64 - r).max(r));
        Ball::new(Point2::new(x as Float, y as Float), random_velocity(rng), 1.0)
    }
}

/// Velocity of magnitude `MAXVEL`: integer x component, y fills the rest.
pub fn random_velocity<R: Rng>(rng: &mut R) -> Vector2<Float> {
    let vx = rng.random_range(-MAXVEL..=MAXVEL);
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let vy = sign * ((MAXVEL * MAXVEL - vx * vx) as Float).sqrt();
    Vector2::new(vx as Float, vy)
}

impl Body for Ball {
    default_body_gets!(position, velocity, mass);
}
