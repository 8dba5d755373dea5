use crate::config::GameplayConfig;
use crate::geometry::{aim_direction, Scalar, Vector3};
use crate::input::{bindings, InputState};

/// Aim angles in degrees. The eye itself never moves.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
	pub yaw: Scalar,
	pub pitch: Scalar,
}

impl Camera {
	/// Pointer look first, then keyboard turning.
	pub fn apply_input(&mut self, input: &InputState, config: &GameplayConfig) {
		let (dx, dy) = input.pointer_delta;
		self.yaw += dx as Scalar * config.mouse_sensitivity;
		self.pitch -= dy as Scalar * config.mouse_sensitivity;
		self.pitch = config.pitch_range().clamp(self.pitch);

		if input.is_held(bindings::TURN_LEFT) {
			self.yaw -= config.turn_step;
		}
		if input.is_held(bindings::TURN_RIGHT) {
			self.yaw += config.turn_step;
		}
	}

	pub fn crosshair_position(&self, radius: Scalar) -> Vector3 {
		aim_direction(self.yaw, self.pitch) * radius
	}
}
