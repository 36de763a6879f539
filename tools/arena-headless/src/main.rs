//! arena-headless: run an autopiloted encounter without a renderer.
//!
//! Usage:
//!   arena-headless [--mode scripted|campaign|survival] [--config sim.json]
//!                  [--seed N] [--ticks N] [--dt MS] [--json]

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use arena_core::enums::BossPartId;
use arena_core::events::{DirectorEvent, Presentation};
use arena_core::types::{Color, PlayerId};
use arena_sim::{ArenaEngine, GameMode, SimConfig};

/// Damage of one autopilot shot.
const SHOT_DAMAGE: u32 = 100;

struct Options {
    mode: String,
    config: Option<PathBuf>,
    seed: Option<u64>,
    ticks: u64,
    dt_ms: u64,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: "scripted".to_string(),
            config: None,
            seed: None,
            ticks: 20_000,
            dt_ms: 50,
            json: false,
        }
    }
}

/// Presentation sink that writes everything to the log.
struct LogPresentation;

impl Presentation for LogPresentation {
    fn announce_wave(&mut self, text: &str, color: Option<Color>) {
        info!(?color, "{text}");
    }

    fn announce_boss_warning(&mut self, text: &str, color: Color) {
        warn!(?color, "{text}");
    }

    fn level_up(&mut self, player: PlayerId, level: u32) {
        info!(?player, level, "level up, perk choice pending");
    }

    fn diagnostic(&mut self, message: &str) {
        warn!("{message}");
    }

    fn observe(&mut self, event: &DirectorEvent) {
        debug!(?event, "event");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

/// `RUST_LOG` when set and valid, otherwise `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut config = match &options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SimConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }

    let mut engine = ArenaEngine::new(config).context("creating engine")?;
    match options.mode.as_str() {
        "scripted" => engine.start_opening_level(),
        "campaign" => engine.start(GameMode::Campaign { start_level: 1 }),
        "survival" => engine.start(GameMode::Survival),
        other => bail!("unknown mode {other:?}"),
    }

    let mut hud = LogPresentation;
    let mut last = engine.snapshot();
    for _ in 0..options.ticks {
        autopilot(&mut engine)?;
        last = engine.tick(options.dt_ms);
        for event in &last.events {
            event.present_to(&mut hud);
        }
        if last
            .events
            .iter()
            .any(|e| matches!(e, DirectorEvent::EncounterComplete))
        {
            info!(tick = last.tick, "encounter complete");
            break;
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&last)?);
    } else {
        let encounter = &last.encounter;
        info!(
            tick = last.tick,
            mode = ?encounter.mode,
            level = encounter.level,
            wave = encounter.runner.wave_index + 1,
            enemies = last.enemies.len(),
            "run finished"
        );
    }
    Ok(())
}

/// One shot per tick: the oldest tracked enemy, otherwise the healthier boss eye.
fn autopilot(engine: &mut ArenaEngine) -> Result<()> {
    let target = engine
        .snapshot()
        .enemies
        .iter()
        .map(|e| e.id)
        .find(|id| engine.director().state().runner.is_tracking(*id));
    if let Some(id) = target {
        engine.damage_enemy(id, SHOT_DAMAGE, Some(PlayerId(0)))?;
        return Ok(());
    }

    let Some(boss) = engine.director().boss() else {
        return Ok(());
    };
    if boss.is_defeated() {
        return Ok(());
    }
    let part = BossPartId::ALL
        .into_iter()
        .filter(|id| !boss.part(*id).is_destroyed())
        .max_by_key(|id| boss.part(*id).health().current());
    if let Some(part) = part {
        engine.damage_boss_part(part, SHOT_DAMAGE)?;
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => options.mode = next_value(&mut iter, arg)?.to_string(),
            "--config" => options.config = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--seed" => options.seed = Some(next_value(&mut iter, arg)?.parse()?),
            "--ticks" => options.ticks = next_value(&mut iter, arg)?.parse()?,
            "--dt" => options.dt_ms = next_value(&mut iter, arg)?.parse()?,
            "--json" => options.json = true,
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                print_usage();
                bail!("unknown argument {other:?}");
            }
        }
    }
    Ok(options)
}

fn next_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn print_usage() {
    eprintln!(
        "arena-headless: autopiloted arena encounter\n\
         \n\
           --mode <name>    scripted (default), campaign or survival\n\
           --config <path>  JSON SimConfig; missing fields keep defaults\n\
           --seed <N>       override the config seed\n\
           --ticks <N>      maximum ticks to run (default: 20000)\n\
           --dt <ms>        tick length in milliseconds (default: 50)\n\
           --json           print the final snapshot as JSON\n"
    );
}
