//! Errors surfaced by start-up and the draw path.

/// Everything that can stop the game loop early.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// SDL or one of its subsystems failed to start
	#[error("platform initialisation failed: {0}")]
	Platform(String),

	/// The window or its canvas could not be created
	#[error("window creation failed: {0}")]
	Window(String),

	/// A draw call was rejected by the backend
	#[error("draw failed: {0}")]
	Draw(String),

	/// A configuration value is out of range
	#[error("invalid configuration: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
