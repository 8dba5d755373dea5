//! Game constants, grouped the way the rest of the crate consumes them.
//!
//! There is no file or command-line layer: `GameConfig::default()` is the
//! configuration. Tests build variations of it directly.

use std::time::Duration;

use rand::Rng;

use crate::error::{Error, Result};
use crate::geometry::{vec3, Scalar, Vector3};

/// Closed interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
	pub min: Scalar,
	pub max: Scalar,
}

impl Span {
	pub const fn new(min: Scalar, max: Scalar) -> Self {
		Self { min, max }
	}

	pub fn contains(&self, value: Scalar) -> bool {
		value >= self.min && value <= self.max
	}

	pub fn clamp(&self, value: Scalar) -> Scalar {
		value.max(self.min).min(self.max)
	}

	pub fn sample<R: Rng>(&self, rng: &mut R) -> Scalar {
		rng.gen_range(self.min, self.max)
	}

	fn check(&self, name: &str) -> Result<()> {
		if self.min < self.max {
			Ok(())
		} else {
			Err(Error::Config(format!(
				"{} range [{}, {}] is empty",
				name, self.min, self.max
			)))
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnBounds {
	pub x: Span,
	pub y: Span,
	pub z: Span,
}

impl SpawnBounds {
	pub fn contains(&self, point: Vector3) -> bool {
		self.x.contains(point.x)
			&& self.y.contains(point.y)
			&& self.z.contains(point.z)
	}
}

#[derive(Clone, Debug)]
pub struct GameplayConfig {
	/// Obstacles created at startup. Never replenished.
	pub obstacle_count: usize,
	pub spawn_bounds: SpawnBounds,
	/// Depth change per frame while a drift key is held.
	pub drift_step: Scalar,
	/// Distance a projectile covers per frame, as a multiple of its direction.
	pub projectile_step: Scalar,
	/// Projectiles outside this depth range are discarded.
	pub projectile_depth: Span,
	/// Half-size of the axis-aligned box used for every collision test.
	pub hit_extent: Scalar,
	pub player_position: Vector3,
	/// Degrees of rotation per pixel of pointer motion.
	pub mouse_sensitivity: Scalar,
	/// Degrees of yaw per frame while a turn key is held.
	pub turn_step: Scalar,
	pub pitch_limit: Scalar,
	pub crosshair_radius: Scalar,
}

impl Default for GameplayConfig {
	fn default() -> Self {
		Self {
			obstacle_count: 20,
			spawn_bounds: SpawnBounds {
				x: Span::new(-10.0, 10.0),
				y: Span::new(-5.0, 5.0),
				z: Span::new(-100.0, -30.0),
			},
			drift_step: 0.1,
			projectile_step: 0.1,
			projectile_depth: Span::new(-150.0, 0.0),
			hit_extent: 1.0,
			player_position: vec3(0.0, 0.0, -5.0),
			mouse_sensitivity: 0.1,
			turn_step: 1.0,
			pitch_limit: 90.0,
			crosshair_radius: 5.0,
		}
	}
}

impl GameplayConfig {
	pub fn pitch_range(&self) -> Span {
		Span::new(-self.pitch_limit, self.pitch_limit)
	}
}

#[derive(Clone, Debug)]
pub struct DisplayConfig {
	pub title: String,
	pub width: u32,
	pub height: u32,
	/// Vertical field of view.
	pub fov_degrees: Scalar,
	pub near: Scalar,
	pub far: Scalar,
	/// Fixed pause after every frame. There is no delta-time integration.
	pub frame_delay: Duration,
	pub weapon_position: Vector3,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			title: String::from("cube shooter"),
			width: 1920,
			height: 1080,
			fov_degrees: 45.0,
			near: 0.1,
			far: 150.0,
			frame_delay: Duration::from_millis(10),
			weapon_position: vec3(0.0, 0.0, -1.0),
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct GameConfig {
	pub display: DisplayConfig,
	pub gameplay: GameplayConfig,
}

impl GameConfig {
	pub fn validate(&self) -> Result<()> {
		let g = &self.gameplay;
		g.spawn_bounds.x.check("spawn x")?;
		g.spawn_bounds.y.check("spawn y")?;
		g.spawn_bounds.z.check("spawn z")?;
		g.projectile_depth.check("projectile depth")?;

		let positive = [
			("drift step", g.drift_step),
			("projectile step", g.projectile_step),
			("hit extent", g.hit_extent),
			("pitch limit", g.pitch_limit),
			("field of view", self.display.fov_degrees),
			("near plane", self.display.near),
		];
		for &(name, value) in positive.iter() {
			if !(value > 0.0) {
				return Err(Error::Config(format!(
					"{} must be positive, got {}",
					name, value
				)));
			}
		}

		if g.pitch_limit > 90.0 {
			return Err(Error::Config(format!(
				"pitch limit {} exceeds 90 degrees",
				g.pitch_limit
			)));
		}

		let d = &self.display;
		Span::new(d.near, d.far).check("depth")?;
		if d.fov_degrees >= 180.0 {
			return Err(Error::Config(format!(
				"field of view {} must be below 180 degrees",
				d.fov_degrees
			)));
		}
		if d.width == 0 || d.height == 0 {
			return Err(Error::Config(format!(
				"window size {}x{} is empty",
				d.width, d.height
			)));
		}

		Ok(())
	}
}
