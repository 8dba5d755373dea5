mod backend;
pub mod types;

use std::time::Duration;

use log::{debug, info};

use cube_shooter::config::DisplayConfig;
use cube_shooter::geometry::{Scalar, Vector3};
use cube_shooter::input::{bindings, InputState};
use cube_shooter::projection::{Perspective, Projector};
use cube_shooter::render::{Color, Renderer, Surface};
use cube_shooter::world::{Status, World};
use cube_shooter::Result;

use backend::Backend;

pub use types::*;

pub struct Window {
	backend: Backend,
	input_state: InputState,
	projector: Projector,
	weapon_position: Vector3,
	pub should_exit: bool,
	tick: u64,
}

impl Window {
	pub fn new(config: &DisplayConfig) -> Result<Self> {
		let backend = Backend::new(config)?;

		let (viewport_width, viewport_height) = backend.viewport();
		info!(
			"opened {}x{} window, fov {} degrees",
			viewport_width, viewport_height, config.fov_degrees
		);

		let projector = Perspective::from_config(config)
			.projector(viewport_width as Scalar, viewport_height as Scalar);

		Ok(Self {
			backend,
			input_state: InputState::new(),
			projector,
			weapon_position: config.weapon_position,
			should_exit: false,
			tick: 0,
		})
	}

	/// Drains pending events into the input state and advances the world.
	pub fn tick(&mut self, world: &mut World) -> Status {
		while let Some(event) = self.backend.poll_event() {
			use WindowEvent::*;
			match event {
				Quit => self.should_exit = true,
				KeyDown(bindings::QUIT) => self.should_exit = true,
				KeyDown(keycode) => self.input_state.key_down_event(keycode),
				KeyUp(keycode) => self.input_state.key_up_event(keycode),
				PointerMotion(dx, dy) => {
					self.input_state.pointer_motion_event(dx, dy)
				}
			}
		}

		if self.should_exit {
			return world.status();
		}

		let status = world.tick(&self.input_state);
		self.input_state.clear_frame();
		self.tick += 1;
		status
	}

	pub fn render(&mut self, world: &World) -> Result<()> {
		self.backend.clear(Color::BLACK);

		Renderer::new(&mut self.backend, &self.projector)
			.draw_world(world, self.weapon_position)?;

		self.backend.present();
		Ok(())
	}
}

/// Runs until the player quits or the session ends, pausing `frame_delay`
/// after every presented frame. Returns the last world status.
pub fn begin_loop(
	mut window: Window,
	mut world: World,
	frame_delay: Duration,
) -> Result<Status> {
	loop {
		let status = window.tick(&mut world);

		if window.should_exit {
			debug!("quit after {} frames", window.tick);
			return Ok(status);
		}
		if status.is_over() {
			return Ok(status);
		}

		window.render(&world)?;
		std::thread::sleep(frame_delay);
	}
}
