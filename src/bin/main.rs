//! sphere-sdf CLI
//!
//! Render JSON scenes to PPM, inspect and generate scenes, and run the
//! size-sweep benchmark.

#![allow(clippy::uninlined_format_args, clippy::needless_pass_by_value)]

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use sphere_sdf::prelude::*;
#[cfg(feature = "cli")]
use std::fmt::Write as _;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "sphere-sdf")]
#[command(version = sphere_sdf::VERSION)]
#[command(about = "SIMD sphere tracer for SDF scenes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render a scene to a binary PPM image
    Render {
        /// Scene description (.json)
        scene: PathBuf,
        /// Output image (.ppm)
        #[arg(short, long, default_value = "out.ppm")]
        output: PathBuf,
        /// Image width
        #[arg(long, default_value = "800")]
        width: usize,
        /// Image height
        #[arg(long, default_value = "480")]
        height: usize,
        /// Render configuration (.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Render on a single thread
        #[arg(long)]
        serial: bool,
    },

    /// Print camera, light and shape counts of a scene
    Info {
        /// Scene description (.json)
        scene: PathBuf,
    },

    /// Generate a procedural scene
    Generate {
        /// Counts in the order: plane box sphere cone torus octahedron
        #[arg(short, long, num_args = 6, required = true)]
        shapes: Vec<usize>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render growing image sizes and report runtimes
    Bench {
        /// Scene description (.json)
        scene: PathBuf,
        /// Renders per image size
        #[arg(short, long, default_value = "3")]
        repetitions: usize,
        /// Number of image sizes
        #[arg(short, long, default_value = "3")]
        images: usize,
        /// Width of the first image
        #[arg(long, default_value = "100")]
        start_width: usize,
        /// Height of the first image
        #[arg(long, default_value = "60")]
        start_height: usize,
        /// Width increment per image
        #[arg(long, default_value = "100")]
        step_width: usize,
        /// Height increment per image
        #[arg(long, default_value = "60")]
        step_height: usize,
        /// CSV output (stdout if omitted)
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Report march counters instead of runtimes
        #[arg(long)]
        count: bool,
        /// Render configuration (.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            output,
            width,
            height,
            config,
            serial,
        } => cmd_render(scene, output, width, height, config, serial),
        Commands::Info { scene } => cmd_info(scene),
        Commands::Generate { shapes, output } => cmd_generate(shapes, output),
        Commands::Bench {
            scene,
            repetitions,
            images,
            start_width,
            start_height,
            step_width,
            step_height,
            csv,
            count,
            config,
        } => cmd_bench(
            scene,
            BenchSizes {
                repetitions,
                images,
                start: (start_width, start_height),
                step: (step_width, step_height),
            },
            csv,
            count,
            config,
        ),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, e);
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn load_scene(path: &Path) -> Scene {
    Scene::from_file(path).unwrap_or_else(|e| fail("Scene error", e))
}

#[cfg(feature = "cli")]
fn load_config(path: Option<&Path>) -> RenderConfig {
    let Some(path) = path else {
        return RenderConfig::default();
    };
    let file = std::fs::File::open(path).unwrap_or_else(|e| fail("Config error", e));
    serde_json::from_reader(std::io::BufReader::new(file))
        .unwrap_or_else(|e| fail("Config error", e))
}

#[cfg(feature = "cli")]
fn cmd_render(
    scene: PathBuf,
    output: PathBuf,
    width: usize,
    height: usize,
    config: Option<PathBuf>,
    serial: bool,
) {
    let scene = load_scene(&scene);
    let mut config = load_config(config.as_deref());
    if serial {
        config.parallel = false;
    }

    let start = Instant::now();
    let image = render(&scene, &config, width, height);
    let elapsed = start.elapsed();

    match save_ppm(&image, &output) {
        Ok(()) => println!(
            "Rendered {}x{} in {:.2?} -> {}",
            width,
            height,
            elapsed,
            output.display()
        ),
        Err(e) => fail("Write error", e),
    }
}

#[cfg(feature = "cli")]
fn cmd_info(path: PathBuf) {
    let scene = load_scene(&path);
    let camera = scene.camera();
    let light = scene.light();

    println!("=== Scene: {} ===", path.display());
    println!(
        "Camera:   fov {} at {:?} (rotation {:?})",
        camera.fov(),
        camera.position,
        camera.rotation
    );
    println!("Light:    {:?} emission {:?}", light.position, light.emission);
    println!("Shapes:   {}", scene.len());
    for kind in ShapeType::ALL {
        let count = scene.batches().count(kind);
        if count > 0 {
            println!("  {:<11} {}", kind.name(), count);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_generate(shapes: Vec<usize>, output: Option<PathBuf>) {
    let mut counts = [0usize; 6];
    for (c, s) in counts.iter_mut().zip(&shapes) {
        *c = *s;
    }
    let description = generate(&ShapeCounts::from_array(counts));

    match output {
        Some(path) => match description.save(&path) {
            Ok(()) => println!(
                "Wrote {} shapes to {}",
                description.objects.len(),
                path.display()
            ),
            Err(e) => fail("Write error", e),
        },
        None => match description.to_json_string() {
            Ok(json) => println!("{}", json),
            Err(e) => fail("Serialization error", e),
        },
    }
}

#[cfg(feature = "cli")]
struct BenchSizes {
    repetitions: usize,
    images: usize,
    start: (usize, usize),
    step: (usize, usize),
}

#[cfg(feature = "cli")]
fn cmd_bench(
    scene: PathBuf,
    sizes: BenchSizes,
    csv: Option<PathBuf>,
    count: bool,
    config: Option<PathBuf>,
) {
    let scene = load_scene(&scene);
    let config = load_config(config.as_deref());

    let mut out = String::new();
    if count {
        out.push_str("width,height,steps,full_resolves,shadow_rays\n");
    }

    for i in 0..sizes.images {
        let width = sizes.start.0 + i * sizes.step.0;
        let height = sizes.start.1 + i * sizes.step.1;
        let _ = write!(out, "{},{}", width, height);

        if count {
            let (_, stats) = render_with_stats(&scene, &config, width, height);
            let _ = write!(
                out,
                ",{},{},{}",
                stats.steps, stats.full_resolves, stats.shadow_rays
            );
        } else {
            for _ in 0..sizes.repetitions {
                let start = Instant::now();
                let image = render(&scene, &config, width, height);
                let ms = start.elapsed().as_secs_f64() * 1e3;
                std::hint::black_box(image);
                let _ = write!(out, ",{:.3}", ms);
            }
        }
        out.push('\n');
        eprintln!("Finished {}x{}", width, height);
    }

    match csv {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, out) {
                fail("Write error", e);
            }
            println!("Wrote {}", path.display());
        }
        None => print!("{}", out),
    }
}
