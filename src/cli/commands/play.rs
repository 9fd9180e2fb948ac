//! Play command - play a full game on the in-process server

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::warn;

use crate::{
    app::{App, ClientConfig},
    cli::output::{print_kv, print_section},
    ports::NullObserver,
    render::ConsoleObserver,
    session::Session,
    strategy::PolicyKind,
};

#[derive(Parser, Debug)]
#[command(about = "Play a full game on the in-process server")]
pub struct PlayArgs {
    /// Player name
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Game id to join (hosted locally when it does not exist yet)
    #[arg(long, short = 'g')]
    pub game: Option<String>,

    /// Ask for a robot partner
    #[arg(long, short = 'a')]
    pub auto: bool,

    /// Policy the robot opponent plays with
    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    pub robot: PolicyKind,

    /// Policy our own player uses
    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    pub policy: PolicyKind,

    /// JSON configuration file (flags override its values)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Upper bound on loop iterations
    #[arg(long)]
    pub max_turns: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the final result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

fn build_config(args: &PlayArgs) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_json_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(player) = &args.player {
        config.player_name = player.clone();
    }
    if let Some(game) = &args.game {
        config.game_id = Some(game.clone());
    }
    if args.auto {
        config.auto_pair = true;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if config.player_name.is_empty() {
        return Err(anyhow!("a player name is required (--player or config file)"));
    }
    // Nobody else can reach the in-process server, so waiting between polls
    // only delays the turn limit.
    Ok(config.with_poll_interval_ms(0))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let app = App::builder()
        .with_robot(args.robot)
        .with_player(args.policy)
        .build();
    let mut server = app.create_server(&config);
    if let Some(game_id) = &config.game_id {
        server.open_game(game_id);
    }
    if !config.auto_pair {
        warn!("no robot partner requested (-a); the game cannot start without one");
    }
    let policy = app.create_policy();

    let mut session = Session::new(&mut server, policy.as_ref(), &config);
    let summary = if args.quiet {
        session.run(&mut NullObserver)?
    } else {
        session.run(&mut ConsoleObserver::stdout())?
    };

    print_section("Result");
    print_kv("Game", &summary.game_id);
    print_kv("State", &format!("{:?}", summary.state()));
    print_kv("Winner", summary.winner_name().unwrap_or("none"));
    print_kv("Moves played", &summary.moves_played.to_string());
    Ok(())
}
