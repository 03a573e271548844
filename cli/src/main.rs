mod config;
mod input;
mod render;

use std::io;
use std::time::Instant;

use clap::Parser;
use gomoku_engine::game::{
    GameStatus, GomokuSession, GomokuSessionSettings, Position, SessionRng,
};
use gomoku_engine::{log, logger};

use config::get_config_manager;
use input::parse_coordinates;
use render::render_board;

#[derive(Parser)]
#[command(name = "gomoku_cli")]
struct Args {
    /// Board side length, overriding the config file.
    #[arg(long)]
    board_size: Option<usize>,

    /// Search depth in plies, overriding the config file.
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for the first-player draw, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Gomoku".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager().get_config()?;

    let mut settings = GomokuSessionSettings::from(&config.game);
    if let Some(board_size) = args.board_size {
        settings.board_size = board_size;
    }
    if let Some(depth) = args.depth {
        settings.search_depth = depth;
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = GomokuSession::create(&settings, &mut rng)?;
    log!(
        "New game: {}x{} board, win length {}, search depth {}, seed {}",
        settings.board_size,
        settings.board_size,
        settings.win_length,
        settings.search_depth,
        rng.seed()
    );

    run_game(&mut session, config.log_move_times)?;
    Ok(())
}

fn run_game(session: &mut GomokuSession, log_move_times: bool) -> Result<(), String> {
    let stdin = io::stdin();

    loop {
        println!("{}", render_board(session.board()));
        println!("Insert coordinates: x,y");

        let mut line = String::new();
        let read = stdin
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            log!("Input closed, leaving game");
            return Ok(());
        }

        let (x, y) = match parse_coordinates(&line) {
            Ok(coordinates) => coordinates,
            Err(e) => {
                println!("Error: {}. Try again:", e);
                continue;
            }
        };

        if !session.place_stone(x, y, false) {
            println!("Error: coordinate is either out of range or occupied. Try again:");
            continue;
        }

        if session.did_win(x, y) {
            println!("{}", render_board(session.board()));
            log!("Human wins!");
            return Ok(());
        }
        if session.status() == GameStatus::Draw {
            println!("{}", render_board(session.board()));
            log!("Board is full, the game is a draw");
            return Ok(());
        }

        let search_start = Instant::now();
        let reply = session.computer_reply(Position::new(x, y))?;
        let elapsed = search_start.elapsed();

        log!(
            "Computer plays {},{} (value {})",
            reply.pos.x,
            reply.pos.y,
            reply.value
        );
        if log_move_times {
            log!("Move took {}ms", elapsed.as_millis());
        }

        if session.did_win(reply.pos.x, reply.pos.y) {
            println!("{}", render_board(session.board()));
            log!("Computer wins!");
            return Ok(());
        }
        if session.status() == GameStatus::Draw {
            println!("{}", render_board(session.board()));
            log!("Board is full, the game is a draw");
            return Ok(());
        }
    }
}
