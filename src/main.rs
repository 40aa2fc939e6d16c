use clap::Parser;
use colored::Color;
use mancala::agents::SlowAgent;
use mancala::algorithms::DEFAULT_DEPTH;
use mancala::*;

#[derive(Parser)]
#[command(author, version, about = "Play a series of mancala games", long_about = None)]
struct Args {
    /// Number of games in the series
    #[arg(long, default_value_t = 10)]
    games: usize,
    /// Seeds in each cup at the start of a game
    #[arg(long, default_value_t = 3)]
    seeds: u32,
    /// Cups on each side of the board
    #[arg(long, default_value_t = 6)]
    side_length: usize,
    /// human, random, improved-random, defensive or minimax
    #[arg(long, default_value = "defensive")]
    player1: AgentKind,
    #[arg(long, default_value = "human")]
    player2: AgentKind,
    /// Look-ahead of minimax players
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u16,
    /// Fixes the random choices of computer players
    #[arg(long)]
    rng_seed: Option<u64>,
    /// Pause before each computer move when a human is playing
    #[arg(long, default_value_t = 250)]
    delay_ms: u64,
    #[arg(short, long)]
    verbose: bool,
}

fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("could not start logger: {}", e);
    }
}

fn agent(kind: AgentKind, args: &Args, offset: u64, human_watching: bool) -> Box<dyn Agent> {
    let inner = match args.rng_seed {
        Some(seed) => kind.create_seeded(seed.wrapping_add(offset), args.depth),
        None => kind.create(args.depth),
    };
    if human_watching && kind != AgentKind::Human && args.delay_ms > 0 {
        Box::new(SlowAgent::new(inner, args.delay_ms))
    } else {
        inner
    }
}

fn main() {
    let args = Args::parse();
    log(args.verbose);

    let human_watching = args.player1 == AgentKind::Human || args.player2 == AgentKind::Human;
    let player1 = Player::new(
        "Player 1",
        Color::Red,
        agent(args.player1, &args, 0, human_watching),
    );
    let player2 = Player::new(
        "Player 2",
        Color::Blue,
        agent(args.player2, &args, 1, human_watching),
    );
    let config = SeriesConfig {
        side_length: args.side_length,
        initial_seeds: args.seeds,
        number_of_games: args.games,
    };

    let mut series = Series::new(player1, player2, config);
    if let Err(e) = series.run_games() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    let summary = series.final_results();
    println!();
    match summary.winner {
        Some(p) => println!("{} wins the series!", p.colored_name()),
        None => println!("Series ended in a tie"),
    }
    for p in summary.players.iter() {
        println!("\n{}", p);
    }
}
