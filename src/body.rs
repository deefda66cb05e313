use nalgebra::{Point2, Vector2};

use crate::playfield::Playfield;
use crate::tools;
use crate::{Float, RADIUS, REPULSION, WALL_BOUNCY};

/// A disc of radius [`RADIUS`] moving one velocity step per tick.
pub trait Body {
    fn position(&self) -> &Point2<Float>;
    fn position_mut(&mut self) -> &mut Point2<Float>;
    fn velocity(&self) -> &Vector2<Float>;
    fn velocity_mut(&mut self) -> &mut Vector2<Float>;
    fn mass(&self) -> &Float;

    fn tick(&mut self, walls: bool, field: &Playfield) {
        // x += v dt, dt = 1 tick
        let dr = *self.velocity();
        *self.position_mut() += dr;

        if walls {
            let dv = wall_force(self.position(), field);
            *self.velocity_mut() += dv;
        }
    }

    /// Whether the centre has left the playfield grown by one radius.
    fn should_die(&self, field: &Playfield) -> bool {
        let p = self.position();
        p.x < -RADIUS || p.x > field.width + RADIUS ||
            p.y < -RADIUS || p.y > field.height + RADIUS
    }

    fn interact(&mut self, other: &mut dyn Body) {
        let d = 2.0 * RADIUS - tools::distance_from(self.position(), other.position());
        if d <= 0.0 {
            return;
        }

        // Penalty force grows with the square of the overlap
        let f = REPULSION * d * d;
        let angle = tools::direction_towards(self.position(), other.position());
        let push = tools::get_components(f, angle);

        let m = *self.mass();
        *self.velocity_mut() -= push / m;
        let om = *other.mass();
        *other.velocity_mut() += push / om;
    }

    fn momentum(&self) -> Vector2<Float> {
        self.velocity() * *self.mass()
    }
}

/// Velocity change from the four walls for a disc centred at `pos`.
///
/// Each wall sits `RADIUS` inside the playfield edge and pushes back with
/// `WALL_BOUNCY * depth^2` once crossed. Nothing is clamped, so a fast disc
/// can be thrown back harder than it came in.
pub fn wall_force(pos: &Point2<Float>, field: &Playfield) -> Vector2<Float> {
    let mut dv = Vector2::new(0.0, 0.0);
    if pos.x < RADIUS {
        dv.x += WALL_BOUNCY * (pos.x - RADIUS).powi(2);
    }
    if pos.x > field.width - RADIUS {
        dv.x -= WALL_BOUNCY * (pos.x - field.width + RADIUS).powi(2);
    }
    if pos.y < RADIUS {
        dv.y += WALL_BOUNCY * (pos.y - RADIUS).powi(2);
    }
    if pos.y > field.height - RADIUS {
        dv.y -= WALL_BOUNCY * (pos.y - field.height + RADIUS).powi(2);
    }
    dv
}

// Macro for implementing simple functions for Body trait
macro_rules! default_body_gets {
    ($position:ident, $velocity:ident, $mass:ident) => {
        fn position(&self) -> &Point2<Float> { &self.$position }
        fn position_mut(&mut self) -> &mut Point2<Float> { &mut self.$position }
        fn velocity(&self) -> &Vector2<Float> { &self.$velocity }
        fn velocity_mut(&mut self) -> &mut Vector2<Float> { &mut self.$velocity }
        fn mass(&self) -> &Float { &self.$mass }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Ball;

    const EPS: Float = 1e-9;

    #[test]
    fn test_touching_balls_do_not_interact() {
        let mut a = Ball::at(100.0, 100.0);
        let mut b = Ball::at(100.0 + 2.0 * RADIUS, 100.0);
        a.interact(&mut b);
        assert_eq!(a.velocity, Vector2::new(0.0, 0.0));
        assert_eq!(b.velocity, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_overlap_pushes_apart() {
        let mut a = Ball::at(300.0, 300.0);
        let mut b = Ball::at(300.0 + 2.0 * RADIUS - 10.0, 300.0);
        a.interact(&mut b);
        assert!((a.velocity.x + 1.0).abs() < EPS);
        assert!((b.velocity.x - 1.0).abs() < EPS);
        assert!(a.velocity.y.abs() < EPS && b.velocity.y.abs() < EPS);
    }

    #[test]
    fn test_heavier_ball_moves_less() {
        let mut a = Ball::new(Point2::new(300.0, 300.0), Vector2::new(0.0, 0.0), 2.0);
        let mut b = Ball::at(300.0, 300.0 + 2.0 * RADIUS - 10.0);
        a.interact(&mut b);
        // b sits below a, so a goes up
        assert!((a.velocity.y + 0.5).abs() < EPS);
        assert!((b.velocity.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tick_is_linear_without_walls() {
        let field = Playfield::default();
        let mut a = Ball::new(Point2::new(10.0, 20.0), Vector2::new(3.0, -1.5), 1.0);
        for _ in 0..4 {
            a.tick(false, &field);
        }
        assert_eq!(a.position, Point2::new(22.0, 14.0));
        assert_eq!(a.velocity, Vector2::new(3.0, -1.5));
    }

    #[test]
    fn test_wall_pushes_back_after_crossing() {
        let field = Playfield::default();
        // Lands at x = 40, ten past the inset plane at RADIUS
        let mut a = Ball::new(Point2::new(44.0, 300.0), Vector2::new(-4.0, 0.0), 1.0);
        a.tick(true, &field);
        assert_eq!(a.position.x, 40.0);
        assert!((a.velocity.x - (-4.0 + WALL_BOUNCY * 100.0)).abs() < EPS);

        // Bottom wall
        let mut b = Ball::new(Point2::new(400.0, 555.0), Vector2::new(0.0, 5.0), 1.0);
        b.tick(true, &field);
        assert!((b.velocity.y - (5.0 - WALL_BOUNCY * 100.0)).abs() < EPS);

        // Top wall, landing at y = 30
        let mut c = Ball::new(Point2::new(400.0, 36.0), Vector2::new(1.0, -6.0), 1.0);
        c.tick(true, &field);
        assert_eq!(c.position, Point2::new(401.0, 30.0));
        assert!((c.velocity.y - (-6.0 + WALL_BOUNCY * 400.0)).abs() < EPS);
        assert_eq!(c.velocity.x, 1.0);
    }

    #[test]
    fn test_wall_inactive_inside() {
        let field = Playfield::default();
        assert_eq!(wall_force(&Point2::new(RADIUS, RADIUS), &field), Vector2::new(0.0, 0.0));
        assert_eq!(wall_force(&Point2::new(400.0, 300.0), &field), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_wall_force_is_not_clamped() {
        let field = Playfield::default();
        // 100 px deep into the right wall: 0.01 * 100^2
        let dv = wall_force(&Point2::new(field.width - RADIUS + 100.0, 300.0), &field);
        assert!((dv.x + 100.0).abs() < EPS);
    }

    #[test]
    fn test_should_die_boundary() {
        let field = Playfield::default();
        assert!(!Ball::at(-RADIUS, 300.0).should_die(&field));
        assert!(!Ball::at(field.width + RADIUS, field.height + RADIUS).should_die(&field));
        assert!(Ball::at(-RADIUS - 0.001, 300.0).should_die(&field));
        assert!(Ball::at(400.0, field.height + RADIUS + 0.001).should_die(&field));
        assert!(Ball::at(400.0, -RADIUS - 1.0).should_die(&field));
    }

    #[test]
    fn test_momentum() {
        let a = Ball::new(Point2::new(0.0, 0.0), Vector2::new(5.0, -1.0), 2.0);
        assert_eq!(a.momentum(), Vector2::new(10.0, -2.0));
    }
}
