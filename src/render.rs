use crate::error::Result;
use crate::geometry::{crosshair_segments, Vector3, Wireframe, UNIT_CUBE};
use crate::projection::{Projector, ScreenPoint};
use crate::world::World;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const RED: Self = Self::rgb(255, 0, 0);
	pub const GREEN: Self = Self::rgb(0, 255, 0);
	pub const YELLOW: Self = Self::rgb(255, 255, 0);
}

pub const WEAPON_COLOR: Color = Color::GREEN;
pub const OBSTACLE_COLOR: Color = Color::RED;
pub const PROJECTILE_COLOR: Color = Color::YELLOW;
pub const CROSSHAIR_COLOR: Color = Color::WHITE;

/// Anything that can put coloured lines on screen.
pub trait Surface {
	fn viewport(&self) -> (u32, u32);
	fn clear(&mut self, color: Color);
	fn set_draw_color(&mut self, color: Color);
	fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint) -> Result<()>;
	fn present(&mut self);
}

pub struct Renderer<'a, S: Surface> {
	surface: &'a mut S,
	projector: &'a Projector,
}

impl<'a, S: Surface> Renderer<'a, S> {
	pub fn new(surface: &'a mut S, projector: &'a Projector) -> Self {
		Self { surface, projector }
	}

	/// Weapon, obstacles, projectiles and crosshair, in that order.
	pub fn draw_world(&mut self, world: &World, weapon: Vector3) -> Result<()> {
		self.draw_wireframe(&UNIT_CUBE, weapon, WEAPON_COLOR)?;

		for obstacle in world.obstacles() {
			self.draw_wireframe(&UNIT_CUBE, obstacle.position, OBSTACLE_COLOR)?;
		}

		for projectile in world.projectiles() {
			self.draw_wireframe(
				&UNIT_CUBE,
				projectile.position,
				PROJECTILE_COLOR,
			)?;
		}

		self.draw_crosshair(world.crosshair_position())
	}

	pub fn draw_wireframe(
		&mut self,
		shape: &Wireframe,
		position: Vector3,
		color: Color,
	) -> Result<()> {
		self.surface.set_draw_color(color);
		for (start, end) in shape.segments(position) {
			self.draw_line(start, end)?;
		}
		Ok(())
	}

	pub fn draw_crosshair(&mut self, center: Vector3) -> Result<()> {
		self.surface.set_draw_color(CROSSHAIR_COLOR);
		for &(start, end) in crosshair_segments(center).iter() {
			self.draw_line(start, end)?;
		}
		Ok(())
	}

	fn draw_line(&mut self, start: Vector3, end: Vector3) -> Result<()> {
		match self.projector.project_segment(start, end) {
			Some((from, to)) => self.surface.draw_line(from, to),
			None => Ok(()),
		}
	}
}
