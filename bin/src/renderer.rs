//! Tile Renderer

use crate::camera::*;
use crate::film::*;
use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::sampler::*;
use pbrt_core::scene::*;
use pbrt_core::spectrum::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;

/// Render settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Image width in pixels.
    pub width: usize,

    /// Image height in pixels.
    pub height: usize,

    /// Size in pixels of the square tiles handed to worker threads.
    pub tile_size: usize,

    /// Number of worker threads.
    pub n_threads: usize,

    /// Base seed. Tile `i` uses a sampler seeded with `seed + i`.
    pub seed: u64,

    /// Hide the progress bar.
    pub quiet: bool,
}

/// Renders the scene and returns the image.
///
/// The image is split into tiles that are handed to worker threads over a
/// channel. Every tile owns a sampler cloned from `sampler` with a seed
/// derived from the tile index so the result does not depend on the number of
/// threads.
///
/// * `scene`    - The scene.
/// * `camera`   - The camera.
/// * `sampler`  - Prototype for the per tile samplers.
/// * `settings` - Render settings.
pub fn render(
    scene: &Scene,
    camera: &PinholeCamera,
    sampler: &dyn Sampler,
    settings: &RenderSettings,
) -> Result<Film, String> {
    if settings.width == 0 || settings.height == 0 {
        return Err(format!(
            "Invalid image resolution {}x{}",
            settings.width, settings.height
        ));
    }
    if settings.tile_size == 0 {
        return Err(String::from("Tile size must be positive"));
    }

    // Compute number of tiles, `n_tiles`, to use for parallel rendering.
    let tile_size = settings.tile_size;
    let n_tiles = Point2::new(
        (settings.width + tile_size - 1) / tile_size,
        (settings.height + tile_size - 1) / tile_size,
    );
    let tile_count = n_tiles.x * n_tiles.y;
    let n_threads = max(1, settings.n_threads);

    info!(
        "Rendering {}x{} tiles on {} threads",
        n_tiles.x, n_tiles.y, n_threads
    );

    let progress = create_progress_reporter(tile_count as u64, settings.quiet);
    progress.set_message("Rendering scene");

    let mut film = Film::new(settings.width, settings.height);
    let film_ref = &mut film;
    let progress_ref = &progress;

    thread::scope(|scope| -> Result<(), String> {
        let (tx_worker, rx_worker) = crossbeam_channel::bounded::<(usize, Box<dyn Sampler>)>(n_threads);
        let (tx_collector, rx_collector) = crossbeam_channel::bounded::<FilmTile>(n_threads);

        // Spawn collector thread.
        scope.spawn(move || {
            for tile in rx_collector.iter() {
                film_ref.merge_film_tile(&tile);
                progress_ref.inc(1);
            }
        });

        // Spawn worker threads.
        for _ in 0..n_threads {
            let rx_worker = rx_worker.clone();
            let tx_collector = tx_collector.clone();
            scope.spawn(move || {
                for (tile_idx, mut tile_sampler) in rx_worker.iter() {
                    let tile = render_tile(
                        tile_idx,
                        n_tiles,
                        scene,
                        camera,
                        tile_sampler.as_mut(),
                        settings,
                    );
                    if tx_collector.send(tile).is_err() {
                        break;
                    }
                }
            });
        }
        // Drop extra channel ends since we've cloned one for each worker.
        drop(rx_worker);
        drop(tx_collector);

        // Send work.
        for tile_idx in 0..tile_count {
            let tile_sampler = sampler.clone_sampler(settings.seed.wrapping_add(tile_idx as u64));
            tx_worker
                .send((tile_idx, tile_sampler))
                .map_err(|e| format!("Unable to dispatch tile {tile_idx}: {e}"))?;
        }
        Ok(())
    })?;

    progress.finish_with_message("Render complete");
    Ok(film)
}

/// Render an image tile.
///
/// * `tile_idx` - Unique tile index.
/// * `n_tiles`  - Number of tiles in (x, y) direction.
/// * `scene`    - Scene.
/// * `camera`   - Camera.
/// * `sampler`  - Sampler owned by this tile.
/// * `settings` - Render settings.
fn render_tile(
    tile_idx: usize,
    n_tiles: Point2<usize>,
    scene: &Scene,
    camera: &PinholeCamera,
    sampler: &mut dyn Sampler,
    settings: &RenderSettings,
) -> FilmTile {
    // Get the x and y tile indices.
    let tile_x = tile_idx % n_tiles.x;
    let tile_y = tile_idx / n_tiles.x;

    // Compute pixel bounds for tile.
    let x0 = tile_x * settings.tile_size;
    let x1 = min(x0 + settings.tile_size, settings.width);
    let y0 = tile_y * settings.tile_size;
    let y1 = min(y0 + settings.tile_size, settings.height);

    debug!("Starting image tile ({tile_x}, {tile_y}) -> [{x0}, {x1}) x [{y0}, {y1})");

    let spp = sampler.samples_per_pixel();
    let inv_width = 1.0 / settings.width as Float;
    let inv_height = 1.0 / settings.height as Float;

    let mut tile = FilmTile::new(x0, y0, x1, y1);
    for y in y0..y1 {
        for x in x0..x1 {
            let mut l = Spectrum::ZERO;
            for sample in 0..spp {
                let jitter = sampler.get_2d();
                let s = (x as Float + jitter.x) * inv_width;
                let t = (y as Float + jitter.y) * inv_height;
                let mut ray = camera.generate_ray(s, t);

                let mut radiance = li(&mut ray, scene, sampler);
                if radiance.has_nans() {
                    error!(
                        "Not-a-number radiance value returned for pixel ({x}, {y}), sample {sample}. Setting to black."
                    );
                    radiance = Spectrum::ZERO;
                }
                l += radiance;
            }
            tile.pixels.push(l / spp as Float);
        }
    }
    tile
}

/// Returns the radiance arriving along a camera ray; black on a miss.
///
/// * `ray`     - The camera ray.
/// * `scene`   - Scene.
/// * `sampler` - Sampler.
fn li(ray: &mut Ray, scene: &Scene, sampler: &mut dyn Sampler) -> Spectrum {
    match scene.intersect(ray) {
        Some(isect) => match isect.shader.as_ref() {
            Some(shader) => shader.shade(ray, &isect, scene, sampler),
            None => Spectrum::ZERO,
        },
        None => Spectrum::ZERO,
    }
}

/// Returns a progress bar for the given number of steps, hidden when `quiet`.
///
/// * `count` - Number of steps.
/// * `quiet` - Hide the progress bar.
fn create_progress_reporter(count: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(count);
    match ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        Ok(style) => progress.set_style(style.progress_chars("=>-")),
        Err(err) => warn!("Invalid progress bar template: {err}"),
    }
    progress
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::*;
    use lights::QuadSampling;
    use samplers::RandomSampler;

    fn settings(n_threads: usize) -> RenderSettings {
        RenderSettings {
            width: 12,
            height: 9,
            tile_size: 4,
            n_threads,
            seed: 7,
            quiet: true,
        }
    }

    #[test]
    fn output_independent_of_thread_count() {
        let scene = demo_scene(60.0, QuadSampling::Parallelogram, 2);
        let camera = demo_camera(12.0 / 9.0).unwrap();
        let sampler = RandomSampler::new(1, None);

        let a = render(&scene, &camera, &sampler, &settings(1)).unwrap();
        let b = render(&scene, &camera, &sampler, &settings(3)).unwrap();
        for y in 0..9 {
            for x in 0..12 {
                assert_eq!(a.get_pixel(x, y), b.get_pixel(x, y), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn demo_scene_is_lit() {
        let scene = demo_scene(60.0, QuadSampling::TrianglePair, 2);
        let camera = demo_camera(12.0 / 9.0).unwrap();
        let sampler = RandomSampler::new(2, None);
        let film = render(&scene, &camera, &sampler, &settings(2)).unwrap();

        let lit = (0..9)
            .flat_map(|y| (0..12).map(move |x| (x, y)))
            .filter(|&(x, y)| film.get_pixel(x, y).max_component_value() > 0.05)
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn empty_scene_is_black() {
        let scene = Scene::default();
        let camera = demo_camera(1.0).unwrap();
        let sampler = RandomSampler::new(1, None);
        let film = render(&scene, &camera, &sampler, &settings(2)).unwrap();
        assert!(film.get_pixel(5, 5).is_black());
    }

    #[test]
    fn invalid_settings_are_errors() {
        let scene = Scene::default();
        let camera = demo_camera(1.0).unwrap();
        let sampler = RandomSampler::new(1, None);

        let mut s = settings(1);
        s.width = 0;
        assert!(render(&scene, &camera, &sampler, &s).is_err());

        let mut s = settings(1);
        s.tile_size = 0;
        assert!(render(&scene, &camera, &sampler, &s).is_err());
    }
}
