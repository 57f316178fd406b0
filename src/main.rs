use std::fs::File;
use std::process::ExitCode;

use clap::Parser;

use pathtracer::demo_scenes;
use pathtracer::error::RenderError;
use pathtracer::renderer::{self, RenderConfig};
use pathtracer::rng::Rng;

/// An offline, physically-based path tracer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to render to (P3 PPM)
    file: String,

    /// How many threads to render with. Defaults to the number of logical CPUs.
    #[arg(short, long)]
    threads: Option<usize>,

    /// Which demo scene to render: 1 = random sphere field, 2 = hollow glass
    /// spheres, 3 = quad mesh
    #[arg(short = 'w', long, default_value_t = 1)]
    world: usize,

    /// Output image width in pixels; height follows the scene's aspect ratio
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 100)]
    samples: u32,

    /// Maximum ray bounce depth
    #[arg(short, long, default_value_t = 50)]
    depth: u32,

    /// RNG seed driving both scene construction and rendering
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn run(args: Args) -> Result<(), RenderError> {
    let threads = args.threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });

    let mut scene_rng = Rng::new(args.seed);
    let scene = match args.world {
        1 => demo_scenes::random_sphere_field(args.width, &mut scene_rng),
        2 => demo_scenes::hollow_glass_spheres(args.width),
        3 => demo_scenes::quad_mesh_scene(args.width, &mut scene_rng),
        other => {
            eprintln!("Unknown scene {other}, rendering scene 1 instead.");
            demo_scenes::random_sphere_field(args.width, &mut scene_rng)
        }
    };

    let width = scene.camera.image_width();
    let height = scene.camera.image_height();

    eprintln!(
        "Rendering {width}x{height} at {} samples/px, depth {}, on {threads} thread(s)...",
        args.samples, args.depth
    );

    let config = RenderConfig::new(width, height, args.samples, args.depth, threads, args.seed);

    let mut file = File::create(&args.file)
        .map_err(|e| RenderError::ArgumentError(format!("cannot open '{}': {e}", args.file)))?;

    renderer::render_to_writer(&scene, &config, &mut file)?;

    eprintln!("Render complete. Image written to {}\n", args.file);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
