//! Multi-threaded sample-accumulation engine (spec.md §4.10, §5).
//!
//! Generalizes the teacher's per-pixel work-queue threading
//! (`camera/cpu_threading.rs`, `camera/ray_casting.rs`) into per-thread
//! independent sample batches: each worker owns a private pixel-sum buffer,
//! an RNG stream, and a scanline counter end-to-end, so no worker ever reads
//! another worker's mutable state during rendering (spec.md §5).

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::error::RenderError;
use crate::integrator::ray_color;
use crate::ppm;
use crate::rng::Rng;
use crate::scene::Scene;
use crate::vec3::Color;

/// Parameters for a single render (spec.md §4.10). `thread_count` is
/// clamped to a lower bound of 1 (spec.md §5).
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub thread_count: usize,
    pub seed: u64,
}

impl RenderConfig {
    pub fn new(
        width: u32,
        height: u32,
        samples_per_pixel: u32,
        max_depth: u32,
        thread_count: usize,
        seed: u64,
    ) -> RenderConfig {
        RenderConfig {
            width,
            height,
            samples_per_pixel,
            max_depth,
            thread_count: thread_count.max(1),
            seed,
        }
    }
}

/// Splits `total` samples across `threads` workers so `sum == total` and no
/// two workers differ by more than one sample, remainder going to the first
/// `total % threads` workers (spec.md §4.10).
fn partition_samples(total: u32, threads: usize) -> Vec<u32> {
    let threads = threads.max(1) as u32;
    let base = total / threads;
    let remainder = total % threads;

    (0..threads)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Renders `scene` under `config` and returns the averaged linear-light
/// pixel buffer, row-major, row `0` the top row (spec.md §6). Gamma
/// correction and quantization are deferred to `crate::ppm`.
pub fn render(scene: &Scene, config: &RenderConfig) -> Vec<Color> {
    let pixel_count = (config.width as usize) * (config.height as usize);
    let per_thread_samples = partition_samples(config.samples_per_pixel, config.thread_count);
    let thread_count = per_thread_samples.len();

    let progress = MultiProgress::new();
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
    )
    .expect("progress bar template is valid")
    .progress_chars("##-");

    // One scanline counter per worker (spec.md §3, "Lifecycles"): a plain
    // monotonic integer, read only by the main thread for progress
    // reporting. Spec.md §5 calls a torn read here benign; an atomic is
    // used anyway since Rust requires synchronized access to share mutable
    // state across threads soundly.
    let scanlines_done: Vec<AtomicU64> = (0..thread_count).map(|_| AtomicU64::new(0)).collect();

    let thread_buffers: Vec<Vec<Color>> = thread::scope(|scope| {
        let handles: Vec<_> = per_thread_samples
            .iter()
            .enumerate()
            .map(|(id, &samples)| {
                let bar = progress.add(ProgressBar::new(config.height as u64));
                bar.set_style(style.clone());
                bar.set_message(format!("thread {id}"));

                let counter = &scanlines_done[id];
                let seed = config.seed + id as u64;

                scope.spawn(move || render_worker(scene, config, samples, seed, counter, bar))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("render worker panicked"))
            .collect()
    });

    progress.clear().ok();

    let mut out = vec![Color::black(); pixel_count];
    for buffer in &thread_buffers {
        for (acc, &sample) in out.iter_mut().zip(buffer.iter()) {
            *acc += sample;
        }
    }
    for pixel in out.iter_mut() {
        *pixel = *pixel / thread_count as f64;
    }

    out
}

/// One worker's share of the image: `samples` independent samples per
/// pixel, accumulated into a private buffer and averaged before returning
/// (spec.md §4.10).
fn render_worker(
    scene: &Scene,
    config: &RenderConfig,
    samples: u32,
    seed: u64,
    scanlines_done: &AtomicU64,
    bar: ProgressBar,
) -> Vec<Color> {
    let mut rng = Rng::new(seed);
    let mut buffer = vec![Color::black(); (config.width as usize) * (config.height as usize)];

    if samples > 0 {
        for j in 0..config.height {
            for i in 0..config.width {
                let mut sum = Color::black();
                for _ in 0..samples {
                    let ray = scene.camera.sample_ray(i, j, &mut rng);
                    sum += ray_color(&ray, &scene.world, &scene.background, config.max_depth, &mut rng);
                }
                buffer[(j as usize) * (config.width as usize) + i as usize] = sum / samples as f64;
            }
            scanlines_done.fetch_add(1, Ordering::Relaxed);
            bar.inc(1);
        }
    }

    bar.finish_and_clear();
    buffer
}

/// Renders `scene` and writes the result as a P3 PPM to `writer` (spec.md §6).
pub fn render_to_writer<W: Write>(
    scene: &Scene,
    config: &RenderConfig,
    writer: &mut W,
) -> Result<(), RenderError> {
    let pixels = render(scene, config);
    ppm::write_ppm(writer, config.width, config.height, &pixels)?;
    Ok(())
}
