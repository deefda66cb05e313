use anyhow::{anyhow, Result};
use clap::Parser;
use glutin_window::GlutinWindow;
use opengl_graphics::{GlGraphics, OpenGL};
use piston::event_loop::{EventLoop, EventSettings, Events};
use piston::input::{Button, PressEvent, RenderEvent, UpdateEvent};
use piston::window::{AdvancedWindow, Window, WindowSettings};

use ball_sim::render::Renderer;
use ball_sim::{Command, Config, Simulation};

const TITLE: &str = "Ball Simulator";

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    log::info!("Ball Simulator starting");

    let opengl = OpenGL::V3_2;
    let mut window: GlutinWindow = WindowSettings::new(TITLE, [config.width, config.height])
        .graphics_api(opengl)
        .exit_on_esc(false)
        .resizable(false)
        .build()
        .map_err(|e| anyhow!("failed to create window: {}", e))?;

    let mut renderer = Renderer::new(GlGraphics::new(opengl), &config.font_candidates());
    let mut sim = Simulation::new(config.playfield(), config.seed_or_random());
    log::info!("Random seed {} (pass --seed to replay)", sim.seed());

    let mut events = Events::new(
        EventSettings::new()
            .max_fps(config.fps)
            .ups(config.fps)
    );

    while let Some(e) = events.next(&mut window) {
        if let Some(Button::Keyboard(key)) = e.press_args() {
            if let Some(command) = Command::from_key(key) {
                if !sim.apply(command) {
                    window.set_should_close(true);
                }
            }
        }

        if e.update_args().is_some() {
            sim.update();
        }

        if let Some(args) = e.render_args() {
            renderer.draw(&args, &sim);
            if !renderer.has_font() {
                window.set_title(format!("{} | {}", TITLE, sim.status_text()));
            }
        }
    }

    log::info!("Bye");
    Ok(())
}
