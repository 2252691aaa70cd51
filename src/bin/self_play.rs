//! Computer-vs-computer self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 3 --max-plies 60 --seed 7`
//! `cargo run --release --bin self_play -- --moves e2e3,e7e6 --verbose`
//!
//! Set `RUST_LOG=debug` to see controller statuses and search summaries.

use log::info;

use mailbox_chess::chess_errors::ChessResult;
use mailbox_chess::game_state::game_settings::{Difficulty, GameMode};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_status::MoveStatus;
use mailbox_chess::utils::algebraic::parse_long_algebraic;

struct Options {
    difficulty: Difficulty,
    max_plies: u32,
    seed: Option<u64>,
    opening: Vec<String>,
    verbose: bool,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_options() -> Result<Options, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let difficulty = match flag_value(&args, "--depth") {
        Some(value) => value.parse::<Difficulty>().map_err(|e| e.to_string())?,
        None => Difficulty::Depth(2),
    };
    let max_plies = match flag_value(&args, "--max-plies") {
        Some(value) => value
            .parse::<u32>()
            .map_err(|e| format!("--max-plies {value}: {e}"))?,
        None => 100,
    };
    let seed = flag_value(&args, "--seed")
        .map(|value| value.parse::<u64>().map_err(|e| format!("--seed {value}: {e}")))
        .transpose()?;
    let opening = flag_value(&args, "--moves")
        .map(|list| list.split(',').map(str::to_owned).collect())
        .unwrap_or_default();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    Ok(Options {
        difficulty,
        max_plies,
        seed,
        opening,
        verbose,
    })
}

fn play_opening(game: &mut GameState, moves: &[String]) -> ChessResult<Option<MoveStatus>> {
    for text in moves {
        let mv = parse_long_algebraic(text)?;
        let status = game.perform_move(mv)?;
        println!("{} plays {mv}: {status}", game.next_player());
        if status.is_game_over() {
            return Ok(Some(status));
        }
        game.advance_turn();
    }
    Ok(None)
}

fn main() -> Result<(), String> {
    env_logger::init();
    let options = parse_options()?;

    let mut game = match options.seed {
        Some(seed) => GameState::with_seed(seed),
        None => GameState::new(),
    };
    game.set_game_mode(GameMode::ComputerAi);
    game.set_difficulty(options.difficulty);

    let mut status = game.start_game().map_err(|e| e.to_string())?;
    info!(
        "self-play at difficulty {} for up to {} plies",
        options.difficulty, options.max_plies
    );

    if let Some(final_status) =
        play_opening(&mut game, &options.opening).map_err(|e| e.to_string())?
    {
        status = final_status;
    }

    let mut plies = 0u32;
    while !status.is_game_over() && plies < options.max_plies {
        let mover = game.next_player();
        let (mv, next_status) = game.perform_computer_move().map_err(|e| e.to_string())?;
        status = next_status;
        plies += 1;

        println!("{plies:>3}. {mover} plays {mv}: {status}");
        if options.verbose {
            println!("{}\n", game.board());
        }
    }

    println!("{}", game.board());
    println!("finished after {plies} plies: {status}");
    Ok(())
}
