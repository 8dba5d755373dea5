use rand::Rng;

use crate::config::SpawnBounds;
use crate::geometry::{aim_direction, Scalar, Vector3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
	pub position: Vector3,
}

impl Obstacle {
	pub fn at(position: Vector3) -> Self {
		Self { position }
	}

	/// Uniformly random position inside `bounds`.
	pub fn generate<R: Rng>(rng: &mut R, bounds: &SpawnBounds) -> Self {
		let x = bounds.x.sample(rng);
		let y = bounds.y.sample(rng);
		let z = bounds.z.sample(rng);
		Self::at(Vector3::new(x, y, z))
	}

	pub fn drift(&mut self, dz: Scalar) {
		self.position.z += dz;
	}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projectile {
	pub position: Vector3,
	pub direction: Vector3,
}

impl Projectile {
	pub fn new(position: Vector3, direction: Vector3) -> Self {
		Self {
			position,
			direction,
		}
	}

	/// Leaves the weapon at the origin heading along the aim.
	pub fn fire(yaw: Scalar, pitch: Scalar) -> Self {
		Self::new(Vector3::zero(), aim_direction(yaw, pitch))
	}

	pub fn advance(&mut self, step: Scalar) {
		self.position += self.direction * step;
	}
}

/// Outcome of the latest tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
	Running,
	/// An obstacle reached the player. Terminal.
	GameOver { score: u32 },
}

impl Status {
	pub fn is_over(&self) -> bool {
		match self {
			Status::Running => false,
			Status::GameOver { .. } => true,
		}
	}
}
