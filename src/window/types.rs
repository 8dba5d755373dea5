use cube_shooter::input::Keycode;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WindowEvent {
	KeyDown(Keycode),
	KeyUp(Keycode),
	// Relative motion while the pointer is captured.
	PointerMotion(i32, i32),
	Quit,
}
