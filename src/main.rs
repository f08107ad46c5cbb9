// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use fretnoter::fretboard::{format_tuning, parse_tuning, Board, BoardKind, STANDARD_TUNING};
use fretnoter::music::{build_chord, build_scale, catalog, chords_in_scale, detect_chord_text};
use fretnoter::music::note::join_notes;
use fretnoter::music::Note;
use fretnoter::state::State;
use std::env;
use tracing::{debug, Level};

fn print_usage() {
    println!("fretnoter - Scale and chord explorer");
    println!();
    println!("Usage: fretnoter [-v] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  query <NOTES>...                   Detect chords; each argument is a note list (\"C E G\")");
    println!("  scale <ROOT> <NAME>                Print the notes of a scale");
    println!("  chord <ROOT> <NAME>                Print the notes of a chord");
    println!("  chords <ROOT> <SCALE>              List chords playable within a scale");
    println!("  board <scale|chord> <ROOT> <NAME> [TUNING]");
    println!("                                     Draw a fretboard (default tuning {})", STANDARD_TUNING);
    println!("  save <scale|chord|list> <ROOT> <NAME> [TUNING]");
    println!("                                     Open a board and store it in the state file");
    println!("  saved                              Show the saved selection and boards");
    println!("  list [FILTER]                      List catalog scales and chords");
    println!();
    println!("Options:");
    println!("  -v, --verbose   Enable debug logging");
    println!("  --version       Show version");
    println!("  --help          Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Fetch the positional argument at `index` or explain what is missing
fn arg<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing {}", what))
}

fn query(inputs: &[String]) -> Result<()> {
    for input in inputs {
        let found = detect_chord_text(input)?;
        println!("{}:", input.trim());
        for chord in found {
            println!("{}", chord);
        }
    }
    Ok(())
}

fn print_board(board: &Board) {
    println!("{}", board.title());
    println!();
    if let Some(fretboard) = board.fretboard() {
        print!("{}", fretboard.render_text());
    }
    for (note, names) in board.rows() {
        println!("{}: {}", note, names.join(", "));
    }
}

/// Build the board described by `<kind> <root> <name> [tuning]`
fn board_from_args(args: &[String], allow_list: bool) -> Result<Board> {
    let kind = match arg(args, 0, "board type")? {
        "scale" => BoardKind::Scale,
        "chord" => BoardKind::Chord,
        "list" if allow_list => BoardKind::List,
        other => return Err(anyhow!("unknown board type '{}'", other)),
    };
    let root = Note::parse(arg(args, 1, "root note")?)?;
    let name = arg(args, 2, "scale or chord name")?;
    let tuning = parse_tuning(args.get(3).map(String::as_str).unwrap_or(STANDARD_TUNING))?;
    debug!("Building {} board {} {} in {}", kind, root, name, format_tuning(&tuning));

    Ok(Board::build(kind, &tuning, root, name)?)
}

fn board(args: &[String]) -> Result<()> {
    print_board(&board_from_args(args, false)?);
    Ok(())
}

fn save(args: &[String]) -> Result<()> {
    let board = board_from_args(args, true)?;
    let path = State::default_path()?;
    let mut state = State::load_or_default(&path)?;
    state.open_board(&board);
    state.save(&path)?;
    println!("Saved {} board '{} {}' to {}", board.kind(), board.root(), board.name(), path.display());
    Ok(())
}

fn saved() -> Result<()> {
    let path = State::default_path()?;
    let state = State::load(&path)?;
    match state.selection() {
        Some(selection) => println!("Selection: {}", selection),
        None => println!("Selection: '{}' is not in the catalog", state.scale_chord),
    }
    println!("Tuning: {}", state.tuning);
    println!("Columns: {}", state.columns);
    println!();
    for board in state.restore_boards() {
        print_board(&board);
        println!();
    }
    Ok(())
}

fn run(command: &str, args: &[String]) -> Result<()> {
    debug!("Running command '{}' with {:?}", command, args);
    match command {
        "query" | "q" => query(args)?,
        "scale" => {
            let notes = build_scale(arg(args, 0, "root note")?, arg(args, 1, "scale name")?)?;
            println!("{}", join_notes(&notes));
        }
        "chord" => {
            let notes = build_chord(arg(args, 0, "root note")?, arg(args, 1, "chord name")?)?;
            println!("{}", join_notes(&notes));
        }
        "chords" => {
            let map = chords_in_scale(arg(args, 0, "root note")?, arg(args, 1, "scale name")?)?;
            for (root, names) in map {
                println!("{}: {}", root, names.join(", "));
            }
        }
        "board" => board(args)?,
        "save" => save(args)?,
        "saved" => saved()?,
        "list" => {
            let filter = args.first().map(String::as_str).unwrap_or("");
            for entry in catalog::search(filter) {
                println!("{}", entry);
            }
        }
        "--version" => println!("fretnoter {}", env!("CARGO_PKG_VERSION")),
        "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = matches!(args.first().map(String::as_str), Some("-v" | "--verbose"));
    if verbose {
        args.remove(0);
    }
    init_logging(verbose);

    if args.is_empty() {
        println!("fretnoter - Scale and chord explorer");
        println!("Run with --help for usage information");
        return;
    }

    if let Err(e) = run(&args[0], &args[1..]) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
