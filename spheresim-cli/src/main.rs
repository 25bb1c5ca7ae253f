use clap::{Parser, Subcommand};
use spheresim_core::{Boundary, PhysicsError, Sphere, SphereHandle, Vec3, World};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "spheresim")]
#[command(about = "spheresim - a point-mass sphere simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop a column of spheres under gravity inside a spherical boundary
    Drop {
        /// Number of spheres
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// Number of simulation steps
        #[arg(long, default_value_t = 120)]
        steps: usize,
        /// Time step in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,
        /// Fluid density (0 disables drag)
        #[arg(long, default_value_t = 1.225)]
        density: f64,
        /// Boundary radius
        #[arg(long, default_value_t = 20.0)]
        boundary: f64,
        /// Print positions every N steps
        #[arg(long, default_value_t = 10)]
        every: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Drop {
            count,
            steps,
            dt,
            density,
            boundary,
            every,
        } => match run_drop(count, steps, dt, density, boundary, every) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn run_drop(
    count: usize,
    steps: usize,
    dt: f64,
    density: f64,
    boundary_radius: f64,
    every: usize,
) -> Result<(), PhysicsError> {
    let gravity = Vec3::new(0.0, -9.81, 0.0);
    let mut world = World::with_environment(gravity, density);
    world.set_dt(dt);
    world.set_boundary(Boundary::new(boundary_radius)?);

    // A vertical column of unit spheres, spaced so they start inside
    // the boundary.
    let mut spheres: Vec<SphereHandle> = Vec::with_capacity(count);
    for i in 0..count {
        let height = 2.0 + 3.0 * i as f64;
        let sphere = Sphere::new(1.0, 1.0, Vec3::new(0.0, height, 0.0))?;
        let handle = Rc::new(RefCell::new(sphere));
        world.add_sphere(&handle);
        spheres.push(handle);
    }

    for step in 0..steps {
        world.update()?;
        if every > 0 && step % every == 0 {
            for (i, sphere) in spheres.iter().enumerate() {
                let sphere = sphere.borrow();
                println!(
                    "step {:4}  sphere {}  pos {}  vel {}",
                    step,
                    i,
                    sphere.position(),
                    sphere.velocity()
                );
            }
        }
    }

    Ok(())
}
