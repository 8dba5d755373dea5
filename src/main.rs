mod window;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cube_shooter::config::GameConfig;
use cube_shooter::world::{Status, World};
use cube_shooter::Result;

use window::Window;

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		error!("{}", err);
		eprintln!("error: {}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let config = GameConfig::default();
	config.validate()?;

	let window = Window::new(&config.display)?;

	let mut rng = StdRng::from_entropy();
	let world = World::populate(config.gameplay, &mut rng);

	match window::begin_loop(window, world, config.display.frame_delay)? {
		Status::GameOver { score } => println!("Game Over! Score: {}", score),
		Status::Running => info!("window closed"),
	}

	Ok(())
}
