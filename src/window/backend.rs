use sdl2::keyboard::Keycode as SdlKeycode;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Point as SdlPoint;
use sdl2::render::Canvas;
use sdl2::EventPump;

use cube_shooter::config::DisplayConfig;
use cube_shooter::input::Keycode;
use cube_shooter::projection::ScreenPoint;
use cube_shooter::render::{Color, Surface};
use cube_shooter::{Error, Result};

use super::WindowEvent;

pub struct Backend {
	// Dropping the context shuts SDL down, so it lives as long as the canvas.
	_sdl: sdl2::Sdl,
	canvas: Canvas<sdl2::video::Window>,
	event_pump: EventPump,
}

macro_rules! match_keycodes {
	(__parse $var:ident [$($path:pat => $out:expr,)*]) => {
		match $var {
			$($path => $out),*
		}
	};

	(__parse $var:ident [$($parsed:tt)*] ...($($key:ident),*), $($body:tt)*) => {
		match_keycodes!(__parse $var [$($parsed)*
			$(SdlKeycode::$key => Keycode::$key,)*] $($body)*)
	};

	(__parse $var:ident [$($parsed:tt)*] $a:pat => $b:expr, $($body:tt)*) => {
		match_keycodes!(__parse $var [$($parsed)* $a => $b,] $($body)*)
	};

	($var:ident { $($body:tt)* }) => {
		match_keycodes!(__parse $var [] $($body)*)
	};
}

fn keycode(sdl_keycode: SdlKeycode) -> Keycode {
	match_keycodes!(sdl_keycode {
		...(W, S, A, D, Space, Escape),
		_ => Keycode::Unknown,
	})
}

fn sdl_color(color: Color) -> SdlColor {
	SdlColor::RGB(color.r, color.g, color.b)
}

fn screen_point((x, y): ScreenPoint) -> SdlPoint {
	// Float to int casts saturate, so points clipped far off screen stay
	// representable.
	SdlPoint::new(x as i32, y as i32)
}

impl Backend {
	pub fn new(config: &DisplayConfig) -> Result<Self> {
		let sdl = sdl2::init().map_err(Error::Platform)?;
		let video_subsystem = sdl.video().map_err(Error::Platform)?;
		let window = video_subsystem
			.window(&config.title, config.width, config.height)
			.position_centered()
			.build()
			.map_err(|e| Error::Window(e.to_string()))?;
		let canvas = window
			.into_canvas()
			.accelerated()
			.build()
			.map_err(|e| Error::Window(e.to_string()))?;

		// Hide and capture the pointer so motion arrives as relative deltas.
		let mouse = sdl.mouse();
		mouse.show_cursor(false);
		mouse.set_relative_mouse_mode(true);

		let event_pump = sdl.event_pump().map_err(Error::Platform)?;

		Ok(Self {
			_sdl: sdl,
			canvas,
			event_pump,
		})
	}

	pub fn poll_event(&mut self) -> Option<WindowEvent> {
		use sdl2::event::Event as S;
		use super::WindowEvent as W;

		while let Some(sdl_event) = self.event_pump.poll_event() {
			let event = match sdl_event {
				S::Quit { .. } => W::Quit,
				S::KeyDown {
					keycode: Some(keycode),
					..
				} => W::KeyDown(self::keycode(keycode)),
				S::KeyUp {
					keycode: Some(keycode),
					..
				} => W::KeyUp(self::keycode(keycode)),
				S::MouseMotion { xrel, yrel, .. } => W::PointerMotion(xrel, yrel),
				_ => continue,
			};
			return Some(event);
		}

		None
	}
}

impl Surface for Backend {
	fn viewport(&self) -> (u32, u32) {
		let viewport = self.canvas.viewport();
		(viewport.width(), viewport.height())
	}

	fn clear(&mut self, color: Color) {
		self.canvas.set_draw_color(sdl_color(color));
		self.canvas.clear();
	}

	fn set_draw_color(&mut self, color: Color) {
		self.canvas.set_draw_color(sdl_color(color));
	}

	fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint) -> Result<()> {
		self.canvas
			.draw_line(screen_point(start), screen_point(end))
			.map_err(Error::Draw)
	}

	fn present(&mut self) {
		self.canvas.present();
	}
}
