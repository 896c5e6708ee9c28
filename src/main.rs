use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memory_match::{
    Advance, CardId, ChooseOutcome, GameConfig, GameRng, ManualClock, MemoryGame, MemoryGameBuilder,
};

/// Time the simulated player spends on each reveal.
const THINK_TIME: Duration = Duration::from_millis(400);

#[derive(Parser)]
#[command(name = "memory-match")]
#[command(about = "Play a memory-match campaign with a simulated player")]
struct Cli {
    /// RNG seed for decks and the simulated player
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pin the device pair limit
    #[arg(short, long)]
    device_limit: Option<usize>,

    /// JSON game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chance the player picks a wrong second card
    #[arg(short, long, default_value = "0.2")]
    mismatch_rate: f64,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "memory_match=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(limit) = cli.device_limit {
        config.device_limit = Some(limit);
    }
    config.validate()?;
    Ok(config)
}

fn hidden_cards(game: &MemoryGame) -> Vec<(CardId, String)> {
    game.cards()
        .iter()
        .filter(|c| !c.is_face_up() && !c.is_matched())
        .map(|c| (c.id(), c.content().to_string()))
        .collect()
}

/// Play the current level to completion.
fn play_round(game: &mut MemoryGame, clock: &ManualClock, player: &mut GameRng, mismatch_rate: f64) {
    while !game.is_game_over() {
        game.run_due_tasks();
        log_events(game);

        let Some((first, content)) = hidden_cards(game).into_iter().next() else {
            clock.advance(THINK_TIME);
            continue;
        };
        let outcome = game.choose(first);
        clock.advance(THINK_TIME);
        if !matches!(outcome, ChooseOutcome::Pending { .. }) {
            continue;
        }

        let candidates = hidden_cards(game);
        let partner = candidates.iter().find(|(_, c)| *c == content).map(|(id, _)| *id);
        let decoy = candidates.iter().find(|(_, c)| *c != content).map(|(id, _)| *id);
        let second = if player.gen_bool(mismatch_rate) {
            decoy.or(partner)
        } else {
            partner.or(decoy)
        };
        if let Some(second) = second {
            game.choose(second);
            clock.advance(THINK_TIME);
        }
    }

    clock.advance(game.config().match_flip_delay);
    game.run_due_tasks();
    log_events(game);
}

fn log_events(game: &mut MemoryGame) {
    for event in game.drain_events() {
        tracing::trace!(?event, "round event");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let clock = ManualClock::new();
    let mut game = MemoryGameBuilder::new()
        .config(config)
        .clock(clock.shared())
        .build()?;
    let mut player = GameRng::new(cli.seed.unwrap_or(0)).for_context("player");

    loop {
        tracing::info!(
            level = game.level_number(),
            title = game.level_title(),
            cards = game.cards().len(),
            "level started"
        );
        play_round(&mut game, &clock, &mut player, cli.mismatch_rate);
        println!(
            "Level {} of {} ({}): score {}, mismatches {}, {} stars",
            game.level_number(),
            game.total_levels(),
            game.theme().display_name,
            game.score(),
            game.mismatch_count(),
            game.projected_stars(),
        );

        if game.advance_level()? == Advance::DidNotMove {
            break;
        }
    }

    println!(
        "Journey complete: {} stars out of {}",
        game.earned_stars(),
        game.total_levels() * 3
    );
    Ok(())
}
