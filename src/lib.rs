//! A small first-person wireframe shooter.
//!
//! Everything here is platform independent: the simulation in [`world`], the
//! math in [`geometry`] and [`projection`], and the line-drawing layer in
//! [`render`], which talks to the screen through the [`render::Surface`]
//! trait. The SDL window lives in the binary.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod projection;
pub mod render;
pub mod world;

pub use error::{Error, Result};
