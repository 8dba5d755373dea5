use crate::config::DisplayConfig;
use crate::geometry::{Matrix4x4, Scalar, Vector3};

/// A fixed eye looking down -z from `position`.
pub struct Perspective {
	pub position: Vector3,
	pub fov_degrees: Scalar,
	pub near: Scalar,
	pub far: Scalar,
}

impl Perspective {
	pub fn new(
		position: Vector3,
		fov_degrees: Scalar,
		near: Scalar,
		far: Scalar,
	) -> Self {
		Self {
			position,
			fov_degrees,
			near,
			far,
		}
	}

	pub fn from_config(config: &DisplayConfig) -> Self {
		Self::new(Vector3::zero(), config.fov_degrees, config.near, config.far)
	}

	pub fn projector(
		&self,
		viewport_width: Scalar,
		viewport_height: Scalar,
	) -> Projector {
		let pmv_matrix = create_pmv_matrix(self, viewport_width, viewport_height);
		Projector {
			pmv_matrix,
			eye: self.position,
			near: self.near,
			far: self.far,
			viewport_width,
			viewport_height,
		}
	}
}

/// Maps world-space points and segments to viewport pixels.
pub struct Projector {
	pmv_matrix: Matrix4x4,
	eye: Vector3,
	near: Scalar,
	far: Scalar,
	viewport_width: Scalar,
	viewport_height: Scalar,
}

pub type ScreenPoint = (Scalar, Scalar);

impl Projector {
	/// Projects a point known to lie between the near and far planes.
	#[inline(always)]
	pub fn project_point(&self, point: Vector3) -> ScreenPoint {
		let (clip, w) = self.pmv_matrix.transform(point);
		let ndc = clip / w;

		let hw = self.viewport_width / 2.0;
		let hh = self.viewport_height / 2.0;

		// Screen y grows downwards.
		(ndc.x * hw + hw, hh - ndc.y * hh)
	}

	/// Clips the segment to the visible depth range and projects it. Returns
	/// `None` when nothing of the segment lies in front of the eye.
	pub fn project_segment(
		&self,
		start: Vector3,
		end: Vector3,
	) -> Option<(ScreenPoint, ScreenPoint)> {
		let (start, end) = self.clip_depth(start, end)?;
		Some((self.project_point(start), self.project_point(end)))
	}

	fn clip_depth(
		&self,
		mut start: Vector3,
		mut end: Vector3,
	) -> Option<(Vector3, Vector3)> {
		// Distances in front of the eye; the view never rotates.
		let depth = |p: Vector3| self.eye.z - p.z;

		for &(plane, keep_greater) in &[(self.near, true), (self.far, false)] {
			let inside = |d: Scalar| {
				if keep_greater {
					d >= plane
				} else {
					d <= plane
				}
			};

			let (ds, de) = (depth(start), depth(end));
			match (inside(ds), inside(de)) {
				(true, true) => {}
				(false, false) => return None,
				(true, false) => end = start.mix(end, (plane - ds) / (de - ds)),
				(false, true) => start = start.mix(end, (plane - ds) / (de - ds)),
			}
		}

		Some((start, end))
	}
}

fn create_pmv_matrix(
	perspective: &Perspective,
	viewport_width: Scalar,
	viewport_height: Scalar,
) -> Matrix4x4 {
	let aspect_ratio = viewport_width / viewport_height;

	let near = perspective.near;
	let far = perspective.far;

	let height = 2.0 * near * (perspective.fov_degrees.to_radians() / 2.0).tan();
	let width = aspect_ratio * height;

	#[rustfmt::skip]
	let projection_matrix = Matrix4x4::from_values([
		2.0 * near / width, 0.0, 0.0, 0.0,
		0.0, 2.0 * near / height, 0.0, 0.0,
		0.0, 0.0, (far + near) / (near - far), 2.0 * far * near / (near - far),
		0.0, 0.0, -1.0, 0.0,
	]);

	let model_view_matrix =
		Matrix4x4::identity().translated_by_vec3(-perspective.position);

	projection_matrix * model_view_matrix
}
