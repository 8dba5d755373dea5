use std::collections::HashSet;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Keycode {
	A,
	D,
	S,
	W,
	Space,
	Escape,

	Unknown,
}

/// Abstract actions the game reacts to.
pub mod bindings {
	use super::Keycode;

	pub const FIRE: Keycode = Keycode::Space;
	pub const DRIFT_TOWARD: Keycode = Keycode::W;
	pub const DRIFT_AWAY: Keycode = Keycode::S;
	pub const TURN_LEFT: Keycode = Keycode::A;
	pub const TURN_RIGHT: Keycode = Keycode::D;
	pub const QUIT: Keycode = Keycode::Escape;
}

#[derive(Default, Debug)]
pub struct InputState {
	// Keyboard keys that started being pressed this frame
	pub keys_pressed: HashSet<Keycode>,
	// Keyboard keys that have not yet been released, regardless of when
	// they started being pressed.
	pub keys_held: HashSet<Keycode>,
	// Relative pointer motion accumulated over this frame.
	pub pointer_delta: (i32, i32),
}

impl InputState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn key_down_event(&mut self, keycode: Keycode) {
		// SDL triggers this event on a key long-press, so handle that case.
		if !self.keys_held.contains(&keycode) {
			self.keys_held.insert(keycode);
			self.keys_pressed.insert(keycode);
		}
	}

	pub fn key_up_event(&mut self, keycode: Keycode) {
		self.keys_held.remove(&keycode);
	}

	pub fn pointer_motion_event(&mut self, dx: i32, dy: i32) {
		self.pointer_delta.0 += dx;
		self.pointer_delta.1 += dy;
	}

	pub fn is_held(&self, keycode: Keycode) -> bool {
		self.keys_held.contains(&keycode)
	}

	pub fn was_pressed(&self, keycode: Keycode) -> bool {
		self.keys_pressed.contains(&keycode)
	}

	// Run at the end of every frame to ensure keys in `keys_pressed`
	// no longer count as pressed in the next frame.
	pub fn clear_frame(&mut self) {
		self.keys_pressed.clear();
		self.pointer_delta = (0, 0);
	}
}
