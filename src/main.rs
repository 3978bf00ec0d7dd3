use clap::Parser;
use metalife::Engine;

#[derive(Parser)]
#[command(about = "Run a Game of Life whose cells are games of life")]
struct Args {
    /// Side of the macro grid and of every inner grid.
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Chance that a cell starts alive, at both levels.
    #[arg(long, default_value_t = 0.2)]
    probability: f64,

    /// Number of generations to run, fewer if the macro grid empties.
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Seed for a reproducible run; taken from entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the macro grid after every generation.
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), metalife::Error> {
    env_logger::init();
    let args = Args::parse();
    let mut engine = match args.seed {
        Some(seed) => Engine::with_seed(args.size, args.probability, seed)?,
        None => Engine::new(args.size, args.probability)?,
    };
    let config = engine.config();
    log::info!(
        "running {0}x{0} grid, alive probability {1}",
        config.size(),
        config.alive_probability()
    );
    if args.print {
        println!("{}\n", engine.grid());
    }
    for _ in 0..args.generations {
        let grid = engine.step();
        let densities = grid.densities();
        let mean = densities.iter().sum::<f64>() / densities.len() as f64;
        let (occupied, active) = (grid.occupied(), grid.active());
        if args.print {
            println!("{grid}\n");
        }
        log::info!(
            "generation {}: {} ({occupied} occupied, {active} active, mean density {mean:.3})",
            engine.generation(),
            engine.last_transitions(),
        );
        if occupied == 0 {
            log::info!("macro grid is empty, stopping");
            break;
        }
    }
    Ok(())
}
