//! Lightbox entry point
//!
//! Headless driver: builds a session from settings, plays a short scripted
//! round and prints the board. A windowed front end drives `GameSession`
//! the same way, one `frame` call per rendered frame.
//!
//! Run `lightbox --help` for options.

use std::path::PathBuf;

use clap::Parser;
use lightbox::board::{BoardType, CellKind};
use lightbox::{FrameInput, GameSession, Settings};

/// Frames the scripted round holds the pointer on the emitter
const HOLD_FRAMES: usize = 60;

/// Play one scripted round of Lightbox and print the board
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file (JSON); defaults are used when omitted
    settings: Option<PathBuf>,

    /// Board type to pick from the menu
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    board_type: u8,

    /// Print the final board as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    log::info!("Lightbox (headless) starting...");

    let args = Args::parse();
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    let mut session = GameSession::new(&settings);
    if let Err(err) = run(&mut session, args.board_type - 1) {
        log::error!("{err}");
        std::process::exit(1);
    }

    if args.json {
        match serde_json::to_string_pretty(session.grid()) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Could not serialize board: {err}"),
        }
        return;
    }

    print_board(&session);
}

/// Pick a board type, then hold the pointer on the first top-row emitter
fn run(session: &mut GameSession, board_type: u8) -> Result<(), lightbox::BoardError> {
    let button = session
        .layout()
        .mode_button_center(BoardType::try_from(board_type)?);
    session.frame(&FrameInput {
        pointer: Some(button),
        ..Default::default()
    })?;

    let target = session
        .grid()
        .iter()
        .find(|(_, row, cell)| *row == 0 && cell.kind == CellKind::Emitter)
        .map(|(col, row, _)| session.layout().cell_center(col, row));

    let Some(point) = target else {
        log::warn!("Board has no emitters");
        return Ok(());
    };
    for _ in 0..HOLD_FRAMES {
        session.frame(&FrameInput {
            pointer: Some(point),
            ..Default::default()
        })?;
    }
    Ok(())
}

fn print_board(session: &GameSession) {
    let grid = session.grid();
    println!(
        "{} | seed {} | {}x{}",
        session.board_type().label(),
        session.seed_text(),
        grid.size(),
        grid.size()
    );
    print!("{grid}");
    println!();
    for row in 0..grid.size() {
        let line: Vec<String> = (0..grid.size())
            .map(|col| match grid.get(col, row) {
                Ok(cell) if cell.charge > 1.0 => format!("{:>4.0}", cell.charge),
                _ => "   .".to_string(),
            })
            .collect();
        println!("{}", line.join(""));
    }
}
