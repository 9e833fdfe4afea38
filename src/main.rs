//! Hypercube - 4D vertex puzzle
//!
//! Runs one puzzle in real time and reads commands from standard input,
//! one per line. Type `status` to see the puzzle, `go` to stop the
//! rotation, a vertex name such as `zig-top-front-left` to pick a vertex,
//! `reset` to start over, `wait <seconds>` to fast-forward, `solve` to
//! finish automatically and `quit` to exit.

use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use hypercube::config::AppConfig;
use hypercube::input::{InputAction, InputMapper};
use hypercube::systems::{LoggingHost, SimulationSystem};
use hypercube_core::{Phase, PuzzleBuilder, PuzzleError, ShapeDescriptor, VERTEX_COUNT};

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.debug.log_level)).init();
    log::info!("Starting Hypercube");

    let mut builder = PuzzleBuilder::new()
        .with_instance_id(config.puzzle.instance_id)
        .with_rule_seed(config.puzzle.rule_seed)
        .with_timing(config.timing.clone());
    if let Some(seed) = config.puzzle.rng_seed {
        builder = builder.with_rng_seed(seed);
    }
    let puzzle = match builder.build() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            log::error!("Failed to create puzzle: {}", e);
            std::process::exit(1);
        }
    };

    let frame_dt = config.simulation.frame_dt();
    let mut sim = SimulationSystem::new(puzzle, config.projection, frame_dt);
    let mut host = LoggingHost::default();

    // Lines arrive on a reader thread so the puzzle keeps animating
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    let frame = Duration::from_secs_f32(frame_dt);
    let mut next_frame = Instant::now() + frame;
    loop {
        match rx.recv_timeout(next_frame.saturating_duration_since(Instant::now())) {
            Ok(line) => {
                if !handle_line(&line, &mut sim, &mut host) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Err(e) = sim.step(&mut host) {
                    log::error!("{}", e);
                }
                next_frame += frame;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    log::info!(
        "Exiting after {:.1}s: {} solve(s), {} strike(s)",
        sim.elapsed(),
        host.solved(),
        host.strikes()
    );
}

/// Carry out one input line. Returns `false` to quit.
fn handle_line(line: &str, sim: &mut SimulationSystem, host: &mut LoggingHost) -> bool {
    let action = match InputMapper::map_line(line, sim.puzzle().phase()) {
        Ok(Some(action)) => action,
        Ok(None) => return true,
        Err(e) => {
            println!("{}", e);
            return true;
        }
    };

    let result: Result<(), PuzzleError> = match action {
        InputAction::Quit => return false,
        InputAction::Status => {
            print_status(sim);
            Ok(())
        }
        InputAction::Tap(vertex) => sim.tap(vertex, host).map(|outcome| log::debug!("{:?}", outcome)),
        InputAction::Hold { vertex, seconds } => {
            sim.hold(vertex, seconds, host).map(|outcome| log::debug!("{:?}", outcome))
        }
        InputAction::Wait(seconds) => sim.run_for(seconds, host),
        InputAction::Solve => sim.force_solve(host).map(|solved| {
            if !solved {
                println!("Could not solve the puzzle.");
            }
        }),
    };
    if let Err(e) = result {
        log::error!("{}", e);
    }
    true
}

fn print_status(sim: &SimulationSystem) {
    let puzzle = sim.puzzle();
    println!("Hypercube #{}: {}", puzzle.id(), puzzle.phase());
    println!("  stages cleared: {}", puzzle.stage());
    let tint = puzzle.tint();
    println!(
        "  tint: h={:.2} s={:.2} v={:.2}",
        tint.hue, tint.saturation, tint.value
    );
    if let Phase::AwaitingInput { .. } = puzzle.phase() {
        for v in 0..VERTEX_COUNT {
            if let Some(color) = puzzle.vertex_color(v) {
                println!("  {:<24} {:?}", ShapeDescriptor::vertex(v).to_string(), color);
            }
        }
    }
}
