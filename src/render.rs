use graphics::character::CharacterCache;
use graphics::{clear, ellipse, text, Context, Transformed};
use opengl_graphics::{GlGraphics, GlyphCache, TextureSettings};
use piston::input::RenderArgs;

use std::path::PathBuf;

use crate::{Float, RADIUS};
use crate::ball::Ball;
use crate::sim::Simulation;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const BALL_COLOR: [f32; 4] = [0.1, 0.4, 0.8, 1.0];
const FONT_SIZE: u32 = 16;
const STATUS_OFFSET_FROM_BOTTOM: Float = 50.0;

/// Draws a [`Simulation`] into an OpenGL window.
pub struct Renderer {
    gl: GlGraphics,
    glyphs: Option<GlyphCache<'static>>,
}

impl Renderer {
    /// Uses the first font in `fonts` that loads.
    pub fn new(gl: GlGraphics, fonts: &[PathBuf]) -> Renderer {
        let mut glyphs = None;
        for font in fonts {
            match GlyphCache::new(font, (), TextureSettings::new()) {
                Ok(cache) => {
                    log::info!("Status font {:?}", font);
                    glyphs = Some(cache);
                    break;
                }
                Err(e) => log::debug!("Skipping font {:?}: {}", font, e),
            }
        }
        if glyphs.is_none() {
            log::warn!("No usable font, status goes to the window title");
        }

        Renderer { gl, glyphs }
    }

    #[inline]
    pub fn has_font(&self) -> bool {
        self.glyphs.is_some()
    }

    pub fn draw(&mut self, args: &RenderArgs, sim: &Simulation) {
        let status = sim.status_text();
        let status_y = sim.field().height - STATUS_OFFSET_FROM_BOTTOM;
        let centre_x = sim.field().centre_x();
        let glyphs = &mut self.glyphs;

        self.gl.draw(args.viewport(), |c, g| {
            clear(WHITE, g);

            for ball in sim.balls() {
                draw_ball(ball, &c, g);
            }

            if let Some(glyphs) = glyphs.as_mut() {
                // Centre the text box on (centre_x, status_y)
                let width = glyphs.width(FONT_SIZE, &status).unwrap_or(0.0);
                let x = centre_x - width / 2.0;
                let y = status_y + FONT_SIZE as Float / 2.0;
                let drawn = text::Text::new_color(BLACK, FONT_SIZE)
                    .draw(&status, glyphs, &c.draw_state, c.transform.trans(x, y), g);
                if drawn.is_err() {
                    log::warn!("Failed to draw status line");
                }
            }
        });
    }
}

/// Square the disc is drawn into: centre minus radius, two radii wide.
#[inline]
pub fn ball_rect(ball: &Ball) -> [Float; 4] {
    ellipse::circle(ball.position.x, ball.position.y, RADIUS)
}

fn draw_ball(ball: &Ball, c: &Context, g: &mut GlGraphics) {
    ellipse::Ellipse::new(BALL_COLOR)
        .draw(ball_rect(ball), &c.draw_state, c.transform, g);
}
