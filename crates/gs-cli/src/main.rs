//! GemSlot headless driver
//!
//! Usage:
//!   gemslot play --bet 5 --rounds 10      - Play rounds on a simulated frame clock
//!   gemslot simulate --rounds 1000000     - Batch RTP run (no animation)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gs_anim::{FrameClock, ManualClock};
use gs_core::{
    DEFAULT_SLOT_COUNT, GameConfig, OutcomeGenerator, SimulationParams, TimingConfig,
    TimingProfile, simulate,
};
use gs_event::{LogKind, NotificationBus, Notifier};
use gs_round::{INVALID_INPUT_MESSAGE, RoundMachine, parse_bet};

#[derive(Parser)]
#[command(name = "gemslot", about = "GemSlot round engine driver", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session against a simulated frame clock
    Play(PlayArgs),
    /// Run generator + evaluator in bulk and report RTP
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Bet per round, as typed by a player
    #[arg(short, long)]
    bet: String,

    /// Rounds to play
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Timing profile (normal, turbo, instant)
    #[arg(short, long)]
    profile: Option<TimingProfile>,

    /// Frame rate of the simulated clock
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// How long to let the idle wave run between rounds (ms)
    #[arg(long, default_value_t = 500.0)]
    idle_ms: f64,

    /// JSON or YAML game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting balance (overrides config)
    #[arg(long)]
    balance: Option<f64>,
}

#[derive(Args)]
struct SimulateArgs {
    /// Rounds to simulate
    #[arg(short, long, default_value_t = 1_000_000)]
    rounds: u64,

    /// Bet per round
    #[arg(short, long, default_value_t = 1.0)]
    bet: f64,

    /// RNG seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Slot count
    #[arg(long, default_value_t = DEFAULT_SLOT_COUNT)]
    slots: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Simulate(args) => run_simulation(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(profile) = args.profile {
        config.timing = TimingConfig::from_profile(profile);
    }
    if let Some(balance) = args.balance {
        config.starting_balance = balance;
    }

    let bus = Arc::new(NotificationBus::new());
    attach_console(&bus);

    let generator = match args.seed {
        Some(seed) => OutcomeGenerator::seeded(seed),
        None => OutcomeGenerator::from_entropy(),
    };
    let mut machine =
        RoundMachine::new(config, bus.clone(), generator).context("Invalid game config")?;

    let bet = match parse_bet(&args.bet) {
        Ok(bet) => bet,
        Err(err) => {
            log::debug!("{err}");
            bus.publish_log(LogKind::Error.entry(INVALID_INPUT_MESSAGE));
            return Ok(());
        }
    };

    let mut clock = ManualClock::new();
    let frame = ManualClock::frame_interval(args.fps);

    for _ in 0..args.rounds {
        let rejected_before = machine.stats().rejected_bets;
        machine.submit_bet(bet, clock.now_ms())?;

        while machine.state().is_busy() || machine.pending_bets() > 0 {
            machine.tick(clock.advance(frame));
        }
        if machine.stats().rejected_bets > rejected_before {
            break;
        }

        let idle_until = clock.now_ms() + args.idle_ms.max(0.0);
        while clock.now_ms() < idle_until {
            machine.tick(clock.advance(frame));
        }
        if let Some(banner) = machine.banner() {
            log::info!("[Banner] {}", banner.text);
        }
    }

    let stats = machine.stats();
    println!();
    println!("Session summary");
    println!("  Rounds played:  {}", stats.rounds_played);
    println!("  Rejected bets:  {}", stats.rejected_bets);
    println!("  Wins / losses:  {} / {}", stats.wins, stats.losses);
    println!("  Total wagered:  {:.2}", stats.total_wagered);
    println!("  Total won:      {:.2}", stats.total_won);
    println!("  RTP:            {:.2}%", stats.rtp());
    println!("  Final balance:  {:.2}", machine.balance());
    println!("  Simulated time: {:.0}ms", clock.now_ms());

    Ok(())
}

/// Print bus traffic through the logger
fn attach_console(bus: &NotificationBus) {
    bus.balance.register(|balance| log::info!("[Balance] {balance:.2}"));
    bus.bet.register(|bet| log::info!("[Bet] {bet:.2} accepted"));
    bus.log.register(|entry| match entry.kind {
        LogKind::Error => log::warn!("[Game] {}", entry.message),
        LogKind::Info | LogKind::Success => log::info!("[Game] {}", entry.message),
    });
    bus.round.register(|signal| log::debug!("[Signal] {}", signal.name()));
}

fn run_simulation(args: SimulateArgs) -> Result<()> {
    let params = SimulationParams {
        rounds: args.rounds,
        bet: args.bet,
        seed: args.seed,
        slot_count: args.slots,
    };

    log::info!(
        "Simulating {} rounds on {} slots (seed {})",
        params.rounds,
        params.slot_count,
        params.seed
    );
    let report = simulate(&params).context("Simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Rounds:         {}", report.rounds);
    println!("Total wagered:  {:.2}", report.total_wagered);
    println!("Total paid:     {:.2}", report.total_paid);
    println!("RTP:            {:.3}%", report.rtp());
    println!("Hit rate:       {:.3}%", report.hit_rate());
    println!("Max multiplier: x{}", report.max_multiplier);
    println!();
    println!("{:<18} {:>12} {:>10}", "Rule", "Hits", "Freq");
    for (rule, hits) in &report.rule_hits {
        let freq = if report.rounds > 0 {
            *hits as f64 / report.rounds as f64 * 100.0
        } else {
            0.0
        };
        println!("{rule:<18} {hits:>12} {freq:>9.4}%");
    }

    Ok(())
}
