//! Run a batch of heuristic self-play games and print score statistics.
//!
//! Usage: `yatzy-simulate [num_games] [num_players] [seed]`

use yatzy_game::game_session::GameConfig;
use yatzy_game::simulation::simulate_batch;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let num_games: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let num_players: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = GameConfig {
        num_players,
        ..GameConfig::default()
    };

    println!(
        "Simulating {} games ({} player(s), seed {})...",
        num_games, num_players, seed
    );
    let result = simulate_batch(&config, num_games, seed);

    println!("Completed in {:.2?}", result.elapsed);
    println!("  mean:    {:.2}", result.mean);
    println!("  std dev: {:.2}", result.std_dev);
    println!("  min:     {}", result.min);
    println!("  median:  {}", result.median);
    println!("  max:     {}", result.max);
}
