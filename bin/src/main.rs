#[macro_use]
extern crate log;

mod camera;
mod demo;
mod film;
mod renderer;

use pbrt_core::app::*;
use pbrt_core::pbrt::Float;
use demo::*;
use lights::QuadSampling;
use renderer::*;
use samplers::RandomSampler;

fn main() {
    // Initialize `env_logger`.
    if OPTIONS.quiet {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .init();
    } else {
        env_logger::init();
    }

    if let Err(e) = render_demo() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn render_demo() -> Result<(), String> {
    let sampling = match OPTIONS.sampling {
        SamplingOption::Parallelogram => QuadSampling::Parallelogram,
        SamplingOption::TrianglePair => QuadSampling::TrianglePair,
    };
    let shadow_samples = OPTIONS.shadow_samples();
    info!("Using {shadow_samples} shadow samples and {sampling:?} light sampling");

    let settings = RenderSettings {
        width: OPTIONS.width,
        height: OPTIONS.height,
        tile_size: OPTIONS.tile_size,
        n_threads: OPTIONS.threads(),
        seed: OPTIONS.seed,
        quiet: OPTIONS.quiet,
    };
    if settings.height == 0 {
        return Err(String::from("Image height must be positive"));
    }

    let scene = demo_scene(OPTIONS.light_intensity, sampling, shadow_samples);
    let camera = demo_camera(settings.width as Float / settings.height as Float)?;
    let sampler = RandomSampler::new(OPTIONS.spp, Some(OPTIONS.seed));

    let film = render(&scene, &camera, &sampler, &settings)?;
    film.write_png(&OPTIONS.image_file)
}
