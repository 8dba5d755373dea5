pub mod camera;
pub mod types;

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameplayConfig;
use crate::geometry::Vector3;
use crate::input::{bindings, InputState};

pub use camera::Camera;
pub use types::{Obstacle, Projectile, Status};

/// All game state. Owned by the driver loop and advanced one tick per frame.
pub struct World {
	config: GameplayConfig,
	obstacles: Vec<Obstacle>,
	projectiles: Vec<Projectile>,
	camera: Camera,
	score: u32,
	status: Status,
	tick: u64,
}

impl World {
	/// Starts a session with the configured number of random obstacles.
	pub fn populate<R: Rng>(config: GameplayConfig, rng: &mut R) -> Self {
		let obstacles = (0..config.obstacle_count)
			.map(|_| Obstacle::generate(rng, &config.spawn_bounds))
			.collect();

		Self::with_obstacles(config, obstacles)
	}

	pub fn with_obstacles(
		config: GameplayConfig,
		obstacles: Vec<Obstacle>,
	) -> Self {
		info!("world starts with {} obstacles", obstacles.len());

		Self {
			config,
			obstacles,
			projectiles: Vec::new(),
			camera: Camera::default(),
			score: 0,
			status: Status::Running,
			tick: 0,
		}
	}

	pub fn tick(&mut self, input: &InputState) -> Status {
		if self.status.is_over() {
			return self.status;
		}
		self.tick += 1;

		// Fire with the aim the player saw when pressing the key.
		if input.was_pressed(bindings::FIRE) {
			self.fire();
		}

		self.camera.apply_input(input, &self.config);
		self.drift_obstacles(input);

		if self.obstacle_reached_player() {
			info!("obstacle reached the player, final score {}", self.score);
			self.status = Status::GameOver { score: self.score };
			return self.status;
		}

		self.step_projectiles();

		trace!(
			"tick {}: {} obstacles, {} projectiles, score {}",
			self.tick,
			self.obstacles.len(),
			self.projectiles.len(),
			self.score
		);

		self.status
	}

	/// Launches a projectile along the current aim.
	pub fn fire(&mut self) {
		let projectile = Projectile::fire(self.camera.yaw, self.camera.pitch);
		debug!(
			"fire at yaw {:.1} pitch {:.1}: {}",
			self.camera.yaw, self.camera.pitch, projectile.direction
		);
		self.projectiles.push(projectile);
	}

	pub fn add_projectile(&mut self, projectile: Projectile) {
		self.projectiles.push(projectile);
	}

	fn drift_obstacles(&mut self, input: &InputState) {
		let step = self.config.drift_step;

		// Both keys may be held at once; each applies.
		if input.is_held(bindings::DRIFT_TOWARD) {
			for obstacle in self.obstacles.iter_mut() {
				obstacle.drift(step);
			}
		}
		if input.is_held(bindings::DRIFT_AWAY) {
			for obstacle in self.obstacles.iter_mut() {
				obstacle.drift(-step);
			}
		}
	}

	fn obstacle_reached_player(&self) -> bool {
		let player = self.config.player_position;
		let extent = self.config.hit_extent;

		self.obstacles
			.iter()
			.any(|obstacle| player.within_box(obstacle.position, extent))
	}

	// Each projectile moves, then takes out at most the first obstacle in
	// list order that it overlaps. Removals happen immediately so later
	// projectiles in the same tick see the reduced obstacle list, and the
	// projectile following a removed one is not stepped until next tick.
	fn step_projectiles(&mut self) {
		let step = self.config.projectile_step;
		let extent = self.config.hit_extent;
		let depth = self.config.projectile_depth;

		let mut index = 0;
		while index < self.projectiles.len() {
			let projectile = &mut self.projectiles[index];
			projectile.advance(step);
			let position = projectile.position;

			let hit = self
				.obstacles
				.iter()
				.position(|obstacle| position.within_box(obstacle.position, extent));

			let removed = if let Some(obstacle_index) = hit {
				let obstacle = self.obstacles.remove(obstacle_index);
				self.score += 1;
				debug!(
					"hit obstacle at {}, score {}",
					obstacle.position, self.score
				);
				true
			} else {
				!depth.contains(position.z)
			};

			if removed {
				self.projectiles.remove(index);
			}

			// After a removal the next projectile has shifted into this slot.
			// It sits out the rest of the tick.
			index += 1;
		}
	}

	pub fn obstacles(&self) -> &[Obstacle] {
		&self.obstacles
	}

	pub fn projectiles(&self) -> &[Projectile] {
		&self.projectiles
	}

	pub fn camera(&self) -> &Camera {
		&self.camera
	}

	pub fn camera_mut(&mut self) -> &mut Camera {
		&mut self.camera
	}

	pub fn crosshair_position(&self) -> Vector3 {
		self.camera.crosshair_position(self.config.crosshair_radius)
	}

	pub fn score(&self) -> u32 {
		self.score
	}

	pub fn status(&self) -> Status {
		self.status
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::vec3;
	use approx::assert_abs_diff_eq;
	use crate::input::Keycode;

	fn world_with(obstacles: &[Vector3]) -> World {
		World::with_obstacles(
			GameplayConfig::default(),
			obstacles.iter().copied().map(Obstacle::at).collect(),
		)
	}

	fn holding(key: Keycode) -> InputState {
		let mut input = InputState::new();
		input.key_down_event(key);
		input.clear_frame();
		input
	}

	#[test]
	fn overlapping_projectile_and_obstacle_score_once() {
		let target = vec3(3.0, 1.0, -40.0);
		let mut world = world_with(&[target]);
		world.add_projectile(Projectile::new(target, Vector3::zero()));

		world.tick(&InputState::new());

		assert!(world.obstacles().is_empty());
		assert!(world.projectiles().is_empty());
		assert_eq!(world.score(), 1);
	}

	#[test]
	fn first_obstacle_in_list_order_wins() {
		// Both obstacles overlap the projectile; the nearer one is second.
		let mut world = world_with(&[vec3(0.0, 0.0, -40.9), vec3(0.0, 0.0, -40.0)]);
		world.add_projectile(Projectile::new(
			vec3(0.0, 0.0, -40.0),
			Vector3::zero(),
		));

		world.tick(&InputState::new());

		assert_eq!(world.score(), 1);
		assert_eq!(world.obstacles(), &[Obstacle::at(vec3(0.0, 0.0, -40.0))]);
	}

	#[test]
	fn later_projectiles_see_earlier_removals() {
		let target = vec3(0.0, 0.0, -40.0);
		let mut world = world_with(&[target]);
		world.add_projectile(Projectile::new(target, Vector3::zero()));
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -20.0), Vector3::zero()));
		world.add_projectile(Projectile::new(target, Vector3::zero()));

		world.tick(&InputState::new());

		// The third projectile found nothing left to hit and stays.
		assert_eq!(world.score(), 1);
		assert!(world.obstacles().is_empty());
		assert_eq!(world.projectiles().len(), 2);
		assert_eq!(world.projectiles()[1].position, target);
	}

	#[test]
	fn projectiles_leaving_depth_range_are_pruned() {
		let mut world = world_with(&[]);
		let forward = vec3(0.0, 0.0, 1.0);
		let backward = vec3(0.0, 0.0, -1.0);
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, 0.0), forward));
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -150.0), backward));
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -75.0), backward));

		world.tick(&InputState::new());

		// The first projectile leaves through the near bound. The one that
		// shifts into its slot waits until the next tick.
		let depths: Vec<_> = world.projectiles().iter().map(|p| p.position.z).collect();
		assert_eq!(depths.len(), 2);
		assert_eq!(depths[0], -150.0);
		assert_abs_diff_eq!(depths[1], -75.1, epsilon = 1e-4);

		// Pruning the head again shifts the last projectile past the end of
		// this tick's walk.
		world.tick(&InputState::new());

		assert_eq!(world.projectiles().len(), 1);
		assert_abs_diff_eq!(world.projectiles()[0].position.z, -75.1, epsilon = 1e-4);
		assert_eq!(world.score(), 0);
	}

	#[test]
	fn projectile_after_a_hit_waits_a_tick() {
		let target = vec3(0.0, 0.0, -40.0);
		let mut world = world_with(&[target]);
		world.add_projectile(Projectile::new(target, Vector3::zero()));
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -10.0), vec3(0.0, 0.0, -1.0)));

		world.tick(&InputState::new());

		assert_eq!(world.score(), 1);
		assert_eq!(world.projectiles().len(), 1);
		assert_eq!(world.projectiles()[0].position, vec3(0.0, 0.0, -10.0));

		world.tick(&InputState::new());

		assert_abs_diff_eq!(world.projectiles()[0].position.z, -10.1, epsilon = 1e-4);
	}

	#[test]
	fn projectile_after_a_pruned_one_waits_a_tick() {
		let mut world = world_with(&[vec3(0.0, 0.0, -50.0)]);
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -149.95), vec3(0.0, 0.0, -1.0)));
		// Already overlapping the obstacle, but not tested this tick.
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -50.0), Vector3::zero()));

		world.tick(&InputState::new());

		assert_eq!(world.projectiles().len(), 1);
		assert_eq!(world.obstacles().len(), 1);
		assert_eq!(world.score(), 0);

		world.tick(&InputState::new());

		assert!(world.projectiles().is_empty());
		assert!(world.obstacles().is_empty());
		assert_eq!(world.score(), 1);
	}

	#[test]
	fn fire_uses_aim_from_before_this_frame() {
		let mut world = world_with(&[]);
		let mut input = InputState::new();
		input.key_down_event(Keycode::Space);
		input.pointer_motion_event(-900, 0);

		world.tick(&input);

		let projectile = world.projectiles()[0];
		assert!(projectile.direction.x > 0.99);
		assert!((world.camera().yaw + 90.0).abs() < 1e-3);
	}

	#[test]
	fn holding_fire_only_fires_once() {
		let mut world = world_with(&[]);
		let mut input = InputState::new();
		input.key_down_event(Keycode::Space);

		for _ in 0..5 {
			world.tick(&input);
			input.clear_frame();
			input.key_down_event(Keycode::Space);
		}

		assert_eq!(world.projectiles().len(), 1);
	}

	#[test]
	fn drift_keys_move_every_obstacle() {
		let mut world = world_with(&[vec3(0.0, 0.0, -50.0), vec3(5.0, 0.0, -60.0)]);

		world.tick(&holding(Keycode::W));
		assert!((world.obstacles()[0].position.z + 49.9).abs() < 1e-4);
		assert!((world.obstacles()[1].position.z + 59.9).abs() < 1e-4);

		world.tick(&holding(Keycode::S));
		world.tick(&holding(Keycode::S));
		assert!((world.obstacles()[0].position.z + 50.1).abs() < 1e-4);
	}

	#[test]
	fn both_drift_keys_cancel_out() {
		let mut world = world_with(&[vec3(0.0, 0.0, -50.0)]);
		let mut input = InputState::new();
		input.key_down_event(Keycode::W);
		input.key_down_event(Keycode::S);

		world.tick(&input);

		assert!((world.obstacles()[0].position.z + 50.0).abs() < 1e-4);
	}

	#[test]
	fn game_over_is_terminal() {
		let mut world = world_with(&[vec3(0.5, -0.5, -5.0)]);
		world.add_projectile(Projectile::new(vec3(0.0, 0.0, -20.0), vec3(0.0, 0.0, -1.0)));

		assert_eq!(world.tick(&InputState::new()), Status::GameOver { score: 0 });

		// Nothing moves after the session ended.
		let before = world.projectiles()[0].position;
		assert!(world.tick(&holding(Keycode::W)).is_over());
		assert_eq!(world.projectiles()[0].position, before);
		assert_eq!(world.obstacles()[0].position.z, -5.0);
	}

	#[test]
	fn player_box_is_open() {
		let mut world = world_with(&[vec3(0.0, 0.0, -4.0), vec3(0.0, 1.0, -5.0)]);
		assert_eq!(world.tick(&InputState::new()), Status::Running);

		let mut world = world_with(&[vec3(0.0, 0.0, -6.0)]);
		assert_eq!(world.tick(&InputState::new()), Status::Running);
	}
}
