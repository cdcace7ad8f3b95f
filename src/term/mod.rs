use ansi_term::Style;
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use zxbasic::mach::{Event, Runtime};
use zxbasic::screen::{Display, Frame, PointerReport};

mod preview;

/// ZX Spectrum flavoured BASIC
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Program to run
    program: PathBuf,

    /// Statements executed per quantum
    #[clap(long, default_value_t = 100)]
    speed: usize,

    /// Milliseconds to sleep between quanta
    #[clap(long, default_value_t = 0)]
    tick: u64,

    /// Give up after this many quanta
    #[clap(long)]
    quanta: Option<usize>,

    /// Start from random display memory instead of a clear screen
    #[clap(long)]
    noise: bool,

    /// Seed for RND and the power-on noise
    #[clap(long)]
    seed: Option<u64>,

    /// Write the final screen to a PNG file
    #[clap(long)]
    png: Option<PathBuf>,

    /// Show the final screen in the terminal
    #[clap(long)]
    preview: bool,

    /// Report display memory for the pixel at X Y
    #[clap(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    inspect: Option<Vec<f64>>,
}

pub fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("ZXBASIC_LOG", "warn");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let source = std::fs::read_to_string(&args.program)
        .with_context(|| format!("failed to read {:?}", args.program))?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .context("failed to set Ctrl-C handler")?;

    let display = if args.noise {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Display::with_noise(&mut rng)
    } else {
        Display::new()
    };
    let mut runtime = Runtime::with_display(&source, display);
    if let Some(seed) = args.seed {
        runtime.seed(seed);
    }

    let mut frame = Frame::new();
    let mut quanta = 0;
    let mut failed = false;
    let start = Instant::now();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let event = runtime.execute(args.speed);
        runtime.display_mut().redraw(&mut frame);
        quanta += 1;
        match event {
            Event::Running => {}
            Event::Stopped => break,
            Event::Errors(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                failed = true;
                break;
            }
        }
        if args.quanta.map_or(false, |limit| quanta >= limit) {
            warn!("still running after {} quanta", quanta);
            break;
        }
        if args.tick > 0 {
            std::thread::sleep(Duration::from_millis(args.tick));
        }
    }
    info!("ran {} quanta in {:?}", quanta, start.elapsed());

    if let Some(path) = &args.png {
        save_png(&frame, path)?;
        info!("wrote {:?}", path);
    }
    if args.preview {
        print!("{}", preview::render(&frame));
    }
    if let Some(point) = &args.inspect {
        let (x, y) = (point[0], point[1]);
        match runtime.display().inspect(x, y) {
            Some(report) => println!("{}", describe(&report)),
            None => println!("{},{} IS OFF SCREEN", x, y),
        }
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let image =
        image::RgbaImage::from_raw(frame.width() as u32, frame.height() as u32, frame.rgba())
            .context("frame does not fit an image")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {:?}", path))
}

fn describe(report: &PointerReport) -> String {
    let info = &report.info;
    format!(
        "PIXEL {},{} BLOCK {},{}\nBITMAP {} = {:#04x} BIT {:#04x} {}\nATTR {} = {:#04x} INK {} PAPER {}",
        info.x,
        info.y,
        info.block_x,
        info.block_y,
        info.bitmap_address,
        report.bitmap,
        info.bit,
        if report.lit { "SET" } else { "CLEAR" },
        info.attr_address,
        report.attribute,
        report.ink,
        report.paper,
    )
}
