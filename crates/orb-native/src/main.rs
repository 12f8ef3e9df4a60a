use anyhow::Context;
use clap::Parser;
use orb_core::{
    DetectionMailbox, DetectionSample, DetectorError, DetectorEvent, EngineConfig, FrameDriver,
    Surface, TARGET_FPS,
};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

mod raster;
mod script;

use raster::PixelSurface;
use script::{parse_script, step_samples, ScriptStep};

/// Headless presence-orb: drives the orb from a scripted detector and writes
/// PNG snapshots.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,
    #[arg(long, default_value_t = 480)]
    height: u32,
    /// Frames to render at the target frame rate.
    #[arg(long, default_value_t = 900)]
    frames: u64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Detector script, e.g. "absent:30,present:400,flicker:60,absent:120".
    #[arg(long, default_value = "absent:30,present:400,flicker:60,fail,absent:120")]
    script: String,
    /// Detector results per second.
    #[arg(long, default_value_t = 30.0)]
    detector_hz: f64,
    /// Directory for PNG snapshots; nothing is written without it.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    #[arg(long, default_value_t = 120)]
    snapshot_every: u64,
    /// Treat this many frames without detector output as "no face".
    #[arg(long)]
    stale_after: Option<u32>,
}

fn spawn_scripted_detector(
    steps: Vec<ScriptStep>,
    detector_hz: f64,
    mailbox: DetectionMailbox,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let period = Duration::from_secs_f64(1.0 / detector_hz.max(1.0));
    thread::Builder::new()
        .name("scripted-detector".into())
        .spawn(move || {
            mailbox.post_event(DetectorEvent::Starting);
            for step in steps {
                match step {
                    ScriptStep::Fail => {
                        mailbox.post_event(DetectorEvent::Failed(DetectorError::Sample(
                            "scripted failure".into(),
                        )));
                    }
                    ScriptStep::Stop => {
                        mailbox.post_event(DetectorEvent::Stopped);
                        return;
                    }
                    _ => {
                        for faces_found in step_samples(step) {
                            mailbox.post_sample(DetectionSample::new(faces_found));
                            thread::sleep(period);
                        }
                    }
                }
            }
            log::info!("[detector] script finished; no further results");
        })
        .context("spawn detector thread")
}

fn save_snapshot(screen: &PixelSurface, dir: &std::path::Path, frame: u64) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_raw(screen.width(), screen.height(), screen.to_rgba8())
        .context("snapshot buffer size mismatch")?;
    let path = dir.join(format!("frame_{frame:05}.png"));
    img.save(&path)
        .with_context(|| format!("write {}", path.display()))?;
    log::info!("[snapshot] {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let steps = parse_script(&args.script)?;
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }

    let config = EngineConfig {
        stale_after_frames: args.stale_after,
        ..Default::default()
    };
    let mailbox = DetectionMailbox::new();
    let mut driver = FrameDriver::with_seed(
        config,
        PixelSurface::new(args.width, args.height),
        mailbox.clone(),
        args.seed,
    );
    let mut screen = PixelSurface::new(args.width, args.height);
    log::info!(
        "[init] {}x{}, {} particles, {} frames",
        args.width,
        args.height,
        driver.particles().len(),
        args.frames
    );

    let _detector = spawn_scripted_detector(steps, args.detector_hz, mailbox)?;

    let frame_period = Duration::from_secs_f64(1.0 / TARGET_FPS as f64);
    let mut next_frame = Instant::now();
    for frame in 0..args.frames {
        let summary = driver.frame(&mut screen);

        if args.snapshot_every > 0 && frame % args.snapshot_every == 0 {
            log::info!(
                "[frame {frame}] presence={} pct={:.3} radius={:.1}",
                summary.presence,
                summary.pct,
                summary.radius
            );
            if let Some(dir) = &args.out_dir {
                save_snapshot(&screen, dir, frame)?;
            }
        }

        next_frame += frame_period;
        if let Some(wait) = next_frame.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }
    }
    Ok(())
}
