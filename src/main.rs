//! Brick Breaker entry point
//!
//! Runs a headless session driven by the autopilot at the fixed tick rate and
//! asks on stdin whether to play again after each round.
//!
//! Usage: `brick-breaker [CONFIG.json] [--ticks N]`

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use brick_breaker::GameConfig;
use brick_breaker::platform::FixedStep;
use brick_breaker::sim::{GamePhase, GameSession, steer};

/// Simulated render frame length (~60 fps)
const FRAME_MS: u32 = 16;
/// Default per-round tick budget (10 minutes of game time)
const DEFAULT_TICK_BUDGET: u64 = 60_000;

struct Options {
    config_path: Option<String>,
    tick_budget: u64,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Options {
            config_path: None,
            tick_budget: DEFAULT_TICK_BUDGET,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ticks" => {
                    let value = args.next().context("--ticks needs a value")?;
                    options.tick_budget = value
                        .parse()
                        .with_context(|| format!("invalid tick count `{value}`"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
                path => {
                    if options.config_path.replace(path.to_string()).is_some() {
                        bail!("only one config file may be given");
                    }
                }
            }
        }
        Ok(options)
    }
}

/// How a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    GameOver,
    BoardCleared,
    OutOfTime,
}

/// Drive the session until the ball drops, the board is empty, or the
/// budget runs out
fn play_round(session: &mut GameSession, tick_budget: u64) -> Result<RoundEnd> {
    let mut clock = FixedStep::default();

    loop {
        for _ in 0..clock.advance(FRAME_MS) {
            steer(session).apply(session);
            let events = session.tick()?;

            if events.paddle_hit {
                log::trace!("Paddle hit at tick {}", session.time_ticks());
            }
            if events.game_over {
                return Ok(RoundEnd::GameOver);
            }
            if session.bricks().all_destroyed() {
                log::info!("Board cleared in {} ticks", session.time_ticks());
                return Ok(RoundEnd::BoardCleared);
            }
            if session.time_ticks() >= tick_budget {
                return Ok(RoundEnd::OutOfTime);
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", serde_json::to_string(&session.snapshot())?);
        }
    }
}

/// Ask the player whether to go again; EOF counts as no
fn ask_play_again(input: &mut impl BufRead, score: u32) -> Result<bool> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Game Over! Your score: {score}")?;
    write!(stdout, "Would you like to play again? [y/N] ")?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn run() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;

    let config = match &options.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut session = GameSession::with_config(config)?;
    let mut stdin = io::stdin().lock();

    log::info!("Brick Breaker (headless) starting...");

    loop {
        let end = play_round(&mut session, options.tick_budget)?;
        log::info!("Round ended ({end:?}) with score {}", session.score());

        let again = ask_play_again(&mut stdin, session.score())?;
        match end {
            RoundEnd::GameOver => session.on_replay_decision(again)?,
            RoundEnd::BoardCleared | RoundEnd::OutOfTime if again => session.start()?,
            RoundEnd::BoardCleared | RoundEnd::OutOfTime => break,
        }

        if session.phase() == GamePhase::Exited {
            break;
        }
    }

    log::info!("Goodbye");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
