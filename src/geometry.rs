use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

pub type Scalar = f32;

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Vector3 {
	pub x: Scalar,
	pub y: Scalar,
	pub z: Scalar,
}

impl Vector3 {
	pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
		Self { x, y, z }
	}

	pub const fn zero() -> Self {
		Self::new(0.0, 0.0, 0.0)
	}

	pub fn len(&self) -> Scalar {
		(self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
	}

	pub fn mix(&self, other: Vector3, amount: Scalar) -> Self {
		*self * (1.0 - amount) + other * amount
	}

	/// True when every axis of `other` is strictly closer than `extent`.
	pub fn within_box(&self, other: Vector3, extent: Scalar) -> bool {
		(self.x - other.x).abs() < extent
			&& (self.y - other.y).abs() < extent
			&& (self.z - other.z).abs() < extent
	}
}

pub const fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vector3 {
	Vector3::new(x, y, z)
}

/// Unit vector pointing along the given yaw and pitch, both in degrees.
///
/// Yaw 0 / pitch 0 points along +x; yaw -90 points into the screen (-z).
pub fn aim_direction(yaw_degrees: Scalar, pitch_degrees: Scalar) -> Vector3 {
	let yaw = yaw_degrees.to_radians();
	let pitch = pitch_degrees.to_radians();

	vec3(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
}

impl Add for Vector3 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self {
			x: self.x + rhs.x,
			y: self.y + rhs.y,
			z: self.z + rhs.z,
		}
	}
}

impl Sub for Vector3 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self {
			x: self.x - rhs.x,
			y: self.y - rhs.y,
			z: self.z - rhs.z,
		}
	}
}

impl AddAssign for Vector3 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Mul<Scalar> for Vector3 {
	type Output = Self;

	fn mul(self, rhs: Scalar) -> Self {
		Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

impl Div<Scalar> for Vector3 {
	type Output = Self;

	fn div(self, rhs: Scalar) -> Self {
		Self {
			x: self.x / rhs,
			y: self.y / rhs,
			z: self.z / rhs,
		}
	}
}

impl Neg for Vector3 {
	type Output = Self;

	fn neg(self) -> Self {
		self * -1.0
	}
}

impl std::fmt::Display for Vector3 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "vec3 {{ {:8.3}, {:8.3}, {:8.3} }}", self.x, self.y, self.z)?;
		Ok(())
	}
}

/// Row-major 4x4 matrix acting on column vectors.
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
	values: [Scalar; 16],
}

impl Matrix4x4 {
	pub fn zero() -> Self {
		Self::from_values([0.0; 16])
	}

	pub fn identity() -> Self {
		#[rustfmt::skip]
		return Self::from_values([
			1.0, 0.0, 0.0, 0.0,
			0.0, 1.0, 0.0, 0.0,
			0.0, 0.0, 1.0, 0.0,
			0.0, 0.0, 0.0, 1.0,
		]);
	}

	pub fn from_values(values: [Scalar; 16]) -> Self {
		Self { values }
	}

	pub fn at(&self, i: usize, j: usize) -> &Scalar {
		&self.values[i * 4 + j]
	}

	pub fn at_mut(&mut self, i: usize, j: usize) -> &mut Scalar {
		&mut self.values[i * 4 + j]
	}

	pub fn translated_by_vec3(&self, vector: Vector3) -> Self {
		#[rustfmt::skip]
		let translation_matrix = Matrix4x4::from_values([
			1.0, 0.0, 0.0, vector.x,
			0.0, 1.0, 0.0, vector.y,
			0.0, 0.0, 1.0, vector.z,
			0.0, 0.0, 0.0, 1.0,
		]);

		*self * translation_matrix
	}

	/// Applies the matrix to `(point, 1)` and returns the homogeneous result
	/// as `(xyz, w)` without the perspective divide.
	pub fn transform(&self, point: Vector3) -> (Vector3, Scalar) {
		let row = |i: usize| {
			self.at(i, 0) * point.x
				+ self.at(i, 1) * point.y
				+ self.at(i, 2) * point.z
				+ self.at(i, 3)
		};

		(vec3(row(0), row(1), row(2)), row(3))
	}
}

impl Mul for Matrix4x4 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		let mut output = Matrix4x4::zero();

		for i in 0..4 {
			for j in 0..4 {
				let cell_value = (0..4)
					.map(|k| self.at(i, k) * rhs.at(k, j))
					.sum::<Scalar>();
				*output.at_mut(i, j) = cell_value;
			}
		}

		output
	}
}

/// A line-only model: vertices plus pairs of vertex indices.
pub struct Wireframe {
	pub vertices: &'static [Vector3],
	pub edges: &'static [(usize, usize)],
}

#[rustfmt::skip]
const CUBE_VERTICES: [Vector3; 8] = [
	// back
	vec3(1.0, 1.0, -1.0), vec3(1.0, -1.0, -1.0),
	vec3(-1.0, -1.0, -1.0), vec3(-1.0, 1.0, -1.0),
	// front
	vec3(1.0, 1.0, 1.0), vec3(1.0, -1.0, 1.0),
	vec3(-1.0, -1.0, 1.0), vec3(-1.0, 1.0, 1.0),
];

#[rustfmt::skip]
const CUBE_EDGES: [(usize, usize); 12] = [
	(0, 1), (1, 2), (2, 3), (3, 0),
	(4, 5), (5, 6), (6, 7), (7, 4),
	(0, 4), (1, 5), (2, 6), (3, 7),
];

/// Cube with corners at `(±1, ±1, ±1)`.
pub const UNIT_CUBE: Wireframe = Wireframe {
	vertices: &CUBE_VERTICES,
	edges: &CUBE_EDGES,
};

impl Wireframe {
	/// One segment per edge, translated by `offset`.
	pub fn segments(
		&self,
		offset: Vector3,
	) -> impl Iterator<Item = (Vector3, Vector3)> + '_ {
		self.edges.iter().map(move |&(start, end)| {
			(self.vertices[start] + offset, self.vertices[end] + offset)
		})
	}
}

pub const CROSSHAIR_HALF_LENGTH: Scalar = 0.05;

/// Horizontal then vertical segment of the reticle centred on `center`.
pub fn crosshair_segments(center: Vector3) -> [(Vector3, Vector3); 2] {
	let h = CROSSHAIR_HALF_LENGTH;
	[
		(center + vec3(-h, 0.0, 0.0), center + vec3(h, 0.0, 0.0)),
		(center + vec3(0.0, -h, 0.0), center + vec3(0.0, h, 0.0)),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn aim_direction_is_unit_length() {
		for &yaw in &[-720.0, -135.0, -90.0, 0.0, 17.5, 90.0, 359.0] {
			for &pitch in &[-90.0, -45.0, -1.0, 0.0, 30.0, 89.9, 90.0] {
				let direction = aim_direction(yaw, pitch);
				assert_relative_eq!(direction.len(), 1.0, epsilon = 1e-5);
			}
		}
	}

	#[test]
	fn aim_direction_axes() {
		let forward = aim_direction(0.0, 0.0);
		assert_relative_eq!(forward.x, 1.0, epsilon = 1e-6);
		assert_relative_eq!(forward.z, 0.0, epsilon = 1e-6);

		let into_screen = aim_direction(-90.0, 0.0);
		assert_relative_eq!(into_screen.x, 0.0, epsilon = 1e-6);
		assert_relative_eq!(into_screen.z, -1.0, epsilon = 1e-6);

		let up = aim_direction(0.0, 90.0);
		assert_relative_eq!(up.y, 1.0, epsilon = 1e-6);
	}

	#[test]
	fn within_box_is_strict() {
		let origin = Vector3::zero();
		assert!(origin.within_box(vec3(0.99, -0.99, 0.5), 1.0));
		assert!(!origin.within_box(vec3(1.0, 0.0, 0.0), 1.0));
		assert!(!origin.within_box(vec3(0.0, 0.0, -1.5), 1.0));
	}

	#[test]
	fn unit_cube_has_twelve_unit_edges() {
		assert_eq!(UNIT_CUBE.vertices.len(), 8);
		assert_eq!(UNIT_CUBE.edges.len(), 12);

		// Every edge of a cube with side 2 connects vertices differing in
		// exactly one axis.
		for (start, end) in UNIT_CUBE.segments(Vector3::zero()) {
			assert_relative_eq!((end - start).len(), 2.0);
		}
	}

	#[test]
	fn segments_follow_offset() {
		let offset = vec3(3.0, -2.0, -40.0);
		let segments: Vec<_> = UNIT_CUBE.segments(offset).collect();
		assert_eq!(segments.len(), 12);
		assert_eq!(segments[0].0, vec3(4.0, -1.0, -41.0));
		assert_eq!(segments[0].1, vec3(4.0, -3.0, -41.0));
	}

	#[test]
	fn crosshair_is_two_perpendicular_segments() {
		let center = vec3(0.0, 0.0, -5.0);
		let [horizontal, vertical] = crosshair_segments(center);
		let a = horizontal.1 - horizontal.0;
		let b = vertical.1 - vertical.0;
		assert_relative_eq!(a.x * b.x + a.y * b.y + a.z * b.z, 0.0);
		assert_relative_eq!(horizontal.0.mix(horizontal.1, 0.5).x, center.x);
		assert_relative_eq!(vertical.0.mix(vertical.1, 0.5).y, center.y);
	}

	#[test]
	fn translation_moves_points() {
		let m = Matrix4x4::identity().translated_by_vec3(vec3(1.0, 2.0, 3.0));
		let (p, w) = m.transform(vec3(1.0, 1.0, 1.0));
		assert_eq!(p, vec3(2.0, 3.0, 4.0));
		assert_relative_eq!(w, 1.0);
	}
}
