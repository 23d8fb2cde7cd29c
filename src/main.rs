//! Multiball Pong - headless native runner
//!
//! Usage: `multiball-pong [--config PATH] [--seed N] [--ticks N] [--frames]`
//!
//! Without a window layer the paddles stay idle; `--ticks` bounds the run and
//! `--frames` writes every frame to stdout as JSON lines.

use std::io::{self, BufWriter};

use anyhow::{Context, Result, bail};

use multiball_pong::platform::{IdleInput, JsonLinesSink, LogSink, PresentationSink};
use multiball_pong::{Game, SimConfig};

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    seed: Option<u64>,
    ticks: Option<u64>,
    frames: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(iter.next().context("--config needs a path")?);
            }
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = Some(value.parse().with_context(|| format!("bad seed `{value}`"))?);
            }
            "--ticks" => {
                let value = iter.next().context("--ticks needs a value")?;
                args.ticks = Some(
                    value
                        .parse()
                        .with_context(|| format!("bad tick count `{value}`"))?,
                );
            }
            "--frames" => args.frames = true,
            other => bail!("unknown argument `{other}`"),
        }
    }

    Ok(args)
}

fn run<P: PresentationSink>(
    config: SimConfig,
    seed: u64,
    ticks: Option<u64>,
    sink: P,
) -> Result<()> {
    let input = match ticks {
        Some(limit) => IdleInput::with_tick_limit(limit),
        None => IdleInput::new(),
    };
    let mut game = Game::new(config, seed, input, sink).context("failed to start simulation")?;
    let reason = game.run();
    log::info!("Stopped: {:?}, {} ball(s) left", reason, game.state().balls.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Multiball Pong (headless) starting...");

    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => {
            SimConfig::load(path).with_context(|| format!("failed to load config from {path}"))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Using seed: {}", seed);

    if args.frames {
        let sink = JsonLinesSink::new(BufWriter::new(io::stdout().lock()));
        run(config, seed, args.ticks, sink)?;
    } else {
        run(config, seed, args.ticks, LogSink::new())?;
    }

    Ok(())
}
