use clap::{Parser, Subcommand, ValueEnum};
use flotilla::{
    init_logging, AutomaticPlayer, Board, Game, ManualPlayer, Player, RandomPlayer, ShipFactory,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum OpponentType {
    Random,
    Automatic,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against an AI opponent.
    Play {
        #[arg(long, value_enum, default_value_t = OpponentType::Automatic)]
        opponent: OpponentType,
        #[arg(long, default_value_t = 10)]
        width: u32,
        #[arg(long, default_value_t = 10)]
        height: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run headless automatic-vs-random games and print a win tally.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, default_value_t = 10)]
        width: u32,
        #[arg(long, default_value_t = 10)]
        height: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            opponent,
            width,
            height,
            seed,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let factory = ShipFactory::standard(width, height);
            let own = Board::generate(&factory, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let enemy = Board::generate(&factory, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

            let human: Box<dyn Player> = Box::new(ManualPlayer::new("You", own));
            let ai: Box<dyn Player> = match opponent {
                OpponentType::Random => Box::new(RandomPlayer::new("Computer", enemy)),
                OpponentType::Automatic => Box::new(AutomaticPlayer::new("Computer", enemy)),
            };

            let mut game = Game::new(human, ai);
            let report = game.play(&mut rng);
            println!("\n{} wins after {} turns.", report.winner, report.turns);
        }
        Commands::Sim {
            games,
            width,
            height,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let factory = ShipFactory::standard(width, height);
            let mut automatic_wins = 0u32;
            let mut random_wins = 0u32;
            let mut total_turns = 0u64;
            for _ in 0..games {
                let b1 = Board::generate(&factory, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                let b2 = Board::generate(&factory, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                let mut game = Game::new(
                    Box::new(AutomaticPlayer::new("automatic", b1)),
                    Box::new(RandomPlayer::new("random", b2)),
                );
                let report = game.play(&mut rng);
                if report.winner == "automatic" {
                    automatic_wins += 1;
                } else {
                    random_wins += 1;
                }
                total_turns += u64::from(report.turns);
            }
            println!(
                "automatic: {} wins, random: {} wins, avg turns {:.1}",
                automatic_wins,
                random_wins,
                total_turns as f64 / f64::from(games.max(1)),
            );
        }
    }
    Ok(())
}
