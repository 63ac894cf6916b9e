use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use warships::{format_coord, Bot, GameSession, LocalSession};

/// Play seeded matches of the targeting bot against a local opponent.
#[derive(Parser)]
struct Args {
    /// Base RNG seed; game i uses seed + i.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of matches to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
}

// a 10×10 board has 100 cells; any honest session resolves within that
const MAX_SHOTS: u32 = 100;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    warships::init_logging();
    let args = Args::parse();

    let mut games = Vec::new();
    let mut total_shots = 0u64;
    for game in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed + game);
        let mut session = LocalSession::new(&mut rng);
        let mut bot = Bot::new();

        while !bot.fleet_sunk() && bot.shots() < MAX_SHOTS {
            let target = bot.recommend().map_err(|e| anyhow::anyhow!(e))?;
            let result = session.fire(&format_coord(target)).await?;
            bot.apply_shot(target, result);
        }

        log::info!(
            "game {game}: {} shots, {:.2}% accuracy",
            bot.shots(),
            bot.accuracy()
        );
        total_shots += u64::from(bot.shots());
        games.push(json!({
            "seed": args.seed + game,
            "won": bot.fleet_sunk(),
            "shots": bot.shots(),
            "accuracy": bot.accuracy(),
        }));
    }

    let report = json!({
        "games": games,
        "avg_shots": total_shots as f64 / args.games as f64,
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
