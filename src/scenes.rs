//! Preset starting layouts bound to the number keys.

use nalgebra::{Point2, Vector2};

use crate::ball::Ball;

/// Heavy ball rolling into a light one at rest.
pub fn scene1() -> Vec<Ball> {
    vec![
        Ball::new(Point2::new(200.0, 200.0), Vector2::new(5.0, 0.0), 2.0),
        Ball::new(Point2::new(500.0, 200.0), Vector2::new(0.0, 0.0), 1.0),
    ]
}

/// One ball meeting two that converge on it.
pub fn scene2() -> Vec<Ball> {
    vec![
        Ball::new(Point2::new(200.0, 200.0), Vector2::new(5.0, 0.0), 1.0),
        Ball::new(Point2::new(500.0, 150.0), Vector2::new(-5.0, 0.0), 1.0),
        Ball::new(Point2::new(500.0, 250.0), Vector2::new(-5.0, 0.0), 1.0),
    ]
}

/// One ball moving into two resting ones, Newton's cradle style.
pub fn scene3() -> Vec<Ball> {
    vec![
        Ball::new(Point2::new(200.0, 200.0), Vector2::new(5.0, 0.0), 1.0),
        Ball::at(450.0, 200.0),
        Ball::at(550.0, 200.0),
    ]
}

/// Scene for a number key, `1` to `3`.
pub fn by_number(n: u8) -> Option<Vec<Ball>> {
    match n {
        1 => Some(scene1()),
        2 => Some(scene2()),
        3 => Some(scene3()),
        _ => None,
    }
}
