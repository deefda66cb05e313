//! Simulation state and the per-frame step.
//!
//! Everything the frame loop mutates lives in [`Simulation`]; the loop owns
//! it and nothing else holds a reference between frames.

use nalgebra::Vector2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::ball::Ball;
use crate::body::Body;
use crate::controls::Command;
use crate::format;
use crate::playfield::Playfield;
use crate::{scenes, tools};
use crate::{Float, RADIUS, SPAWN_ATTEMPTS};

pub struct Simulation {
    balls: Vec<Ball>,
    field: Playfield,
    walls: bool,
    paused: bool,
    step_once: bool,
    seed: u64,
    rng: Pcg32,
}

impl Simulation {
    pub fn new(field: Playfield, seed: u64) -> Simulation {
        Simulation {
            balls: Vec::new(),
            field,
            walls: false,
            paused: false,
            step_once: false,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[inline]
    pub fn field(&self) -> &Playfield {
        &self.field
    }

    #[inline]
    pub fn walls(&self) -> bool {
        self.walls
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs a keyboard command. Returns `false` when the command asks to quit.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Spawn => {
                self.spawn_ball();
            }
            Command::ToggleWalls => self.toggle_walls(),
            Command::LoadScene(n) => {
                if let Some(balls) = scenes::by_number(n) {
                    log::info!("Loaded scene {} ({} balls)", n, balls.len());
                    self.load(balls);
                }
            }
            Command::Clear => self.clear(),
            Command::TogglePause => self.toggle_pause(),
            Command::Step => self.request_step(),
            Command::Quit => return false,
        }
        true
    }

    /// Tries a few random spots and keeps the first one clear of every ball.
    ///
    /// Returns whether a ball was added. Failing every attempt is not an error.
    pub fn spawn_ball(&mut self) -> bool {
        let field = self.field;
        let rng = &mut self.rng;
        let spawned = place_clear_of(&mut self.balls, || Ball::random(&mut *rng, &field));
        if !spawned {
            log::debug!("No free spot after {} attempts, nothing spawned", SPAWN_ATTEMPTS);
        }
        spawned
    }

    #[inline]
    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn load(&mut self, balls: Vec<Ball>) {
        self.balls = balls;
    }

    pub fn clear(&mut self) {
        log::info!("Cleared {} balls", self.balls.len());
        self.balls.clear();
    }

    pub fn toggle_walls(&mut self) {
        self.walls = !self.walls;
        log::debug!("Walls {}", if self.walls { "enabled" } else { "disabled" });
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Ask for exactly one tick on the next update, even while paused.
    pub fn request_step(&mut self) {
        self.step_once = true;
    }

    /// Advances one tick when running or when a single step was requested.
    /// Returns whether the world moved.
    pub fn update(&mut self) -> bool {
        if self.paused && !self.step_once {
            return false;
        }
        self.step_once = false;
        self.step();
        true
    }

    /// One tick regardless of pause state: move, cull, then push apart.
    pub fn step(&mut self) {
        for ball in self.balls.iter_mut() {
            ball.tick(self.walls, &self.field);
        }

        let before = self.balls.len();
        let field = self.field;
        self.balls.retain(|b| !b.should_die(&field));
        if self.balls.len() != before {
            log::debug!("Culled {} balls that left the field", before - self.balls.len());
        }

        // Each unordered pair exactly once
        let len = self.balls.len();
        for i in 0..len {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let ball = &mut head[i];
            for other in tail.iter_mut() {
                ball.interact(other);
            }
        }

        for ball in self.balls.iter() {
            log::trace!("x: {} y: {} vx: {} vy: {}",
                ball.position.x, ball.position.y, ball.velocity.x, ball.velocity.y);
        }
    }

    /// Total momentum, for display only.
    pub fn momentum(&self) -> Vector2<Float> {
        self.balls.iter()
            .fold(Vector2::new(0.0, 0.0), |total, b| total + b.momentum())
    }

    pub fn status_text(&self) -> String {
        status_line(&self.momentum(), self.walls, self.paused)
    }
}

/// Draws up to `SPAWN_ATTEMPTS` candidates and appends the first one lying
/// more than a diameter from every ball in `balls`.
pub fn place_clear_of<F>(balls: &mut Vec<Ball>, mut candidate: F) -> bool
    where F: FnMut() -> Ball
{
    for _ in 0..SPAWN_ATTEMPTS {
        let ball = candidate();
        let collides = balls.iter()
            .any(|b| tools::distance_from(&b.position, &ball.position) <= 2.0 * RADIUS);

        if !collides {
            log::debug!("Spawned ball at {:?} moving {:?}", ball.position, ball.velocity);
            balls.push(ball);
            return true;
        }
    }
    false
}

pub fn status_line(momentum: &Vector2<Float>, walls: bool, paused: bool) -> String {
    format!(
        "Px={} Py={} WALLS {}ABLED {}",
        format::general(momentum.x, 3),
        format::general(momentum.y, 3),
        if walls { "EN" } else { "DIS" },
        if paused { "PAUSED" } else { "" },
    )
}
