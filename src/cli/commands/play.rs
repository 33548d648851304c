//! Play command - run an interactive or engine-vs-engine match

use std::{path::PathBuf, thread};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, MatchConfig, SourceKind},
    export::write_dot,
    game::{ModeKind, Player, build_game_tree},
    session::MatchSession,
};

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Game mode: classic, misere
    #[arg(short, long, default_value = "classic")]
    pub mode: String,

    /// Player 1 type: human, engine
    #[arg(long, default_value = "human")]
    pub player1: String,

    /// Player 2 type: human, engine
    #[arg(long, default_value = "engine")]
    pub player2: String,

    /// Explicit pile sizes, e.g. 3,4,2 (overrides --pile-count)
    #[arg(long)]
    pub piles: Option<String>,

    /// Number of piles to set up at random (2-4 when omitted)
    #[arg(long)]
    pub pile_count: Option<usize>,

    /// Largest randomly drawn pile size
    #[arg(long, default_value_t = 4)]
    pub max_pile_size: usize,

    /// Use alpha-beta pruning for engine seats
    #[arg(long)]
    pub pruning: bool,

    /// Seed for the random setup
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render the full game tree of the initial position to this DOT file
    #[arg(long)]
    pub tree_out: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mode_kind: ModeKind = args.mode.parse()?;
    let first_kind: SourceKind = args.player1.parse()?;
    let second_kind: SourceKind = args.player2.parse()?;

    let mut config = MatchConfig::new(mode_kind).with_pruning(args.pruning);
    if let Some(piles) = &args.piles {
        config = config.with_pile_sizes(super::parse_piles(piles)?);
    }
    if let Some(count) = args.pile_count {
        config = config.with_pile_count(count);
    }
    config = config.with_max_pile_size(args.max_pile_size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = App::new();
    let initial = app.initial_piles(&config)?;

    // render from a snapshot while the match runs on the live piles
    let renderer = args.tree_out.map(|path| {
        let snapshot = initial.clone();
        thread::spawn(move || -> crate::Result<PathBuf> {
            let tree = build_game_tree(&snapshot);
            write_dot(&tree, mode_kind.build().as_ref(), &path)?;
            Ok(path)
        })
    });

    let mut logger = app
        .create_logger(mode_kind)
        .context("failed to open session log")?;
    println!("Session log: {}", logger.path().display());

    let mode = mode_kind.build();
    let strategy = config.strategy();
    let mut first = app.create_source(first_kind, Player::One, mode_kind, strategy);
    let mut second = app.create_source(second_kind, Player::Two, mode_kind, strategy);

    let mut session = MatchSession::new(mode.as_ref(), initial, &mut logger);
    let outcome = session.play(first.as_mut(), second.as_mut())?;
    println!("Match over after {} moves.", outcome.turns);

    if let Some(renderer) = renderer {
        match renderer.join() {
            Ok(Ok(path)) => println!("Game tree written to {}", path.display()),
            Ok(Err(err)) => eprintln!("Game tree rendering failed: {err}"),
            Err(_) => eprintln!("Game tree rendering thread panicked"),
        }
    }

    Ok(())
}
