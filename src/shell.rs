//! Line-driven text shell over a single `Game`.
//!
//! Commands:
//! - `new` / `load <pdn>` / `pdn`
//! - `moves [square]` / `play <move>` / `undo`
//! - `status` / `go <difficulty> [depth]` / `perft <depth>` / `quit`

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::board::search::is_mate_value;
use crate::board::{Difficulty, Move, SearchConfig, Square};
use crate::game::Game;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    New,
    Load(String),
    Pdn,
    Moves(Option<String>),
    Play(String),
    Undo,
    Status,
    Go {
        difficulty: String,
        depth: Option<String>,
    },
    Perft(Option<String>),
    Quit,
    Unknown(String),
}

pub fn parse_shell_command(line: &str) -> Option<ShellCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let head = parts.next()?;
    let arg = |s: Option<&str>| s.map(str::to_string);

    let cmd = match head {
        "new" => ShellCommand::New,
        "load" => ShellCommand::Load(parts.collect::<Vec<_>>().join(" ")),
        "pdn" => ShellCommand::Pdn,
        "moves" => ShellCommand::Moves(arg(parts.next())),
        "play" => match parts.next() {
            Some(mv) => ShellCommand::Play(mv.to_string()),
            None => ShellCommand::Unknown(trimmed.to_string()),
        },
        "undo" => ShellCommand::Undo,
        "status" => ShellCommand::Status,
        "go" => ShellCommand::Go {
            difficulty: parts.next().unwrap_or("3").to_string(),
            depth: arg(parts.next()),
        },
        "perft" => ShellCommand::Perft(arg(parts.next())),
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

fn format_moves(moves: &[Move]) -> String {
    let mut names: Vec<String> = moves.iter().map(ToString::to_string).collect();
    names.sort();
    names.join(" ")
}

fn parse_depth<T: FromStr>(text: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("error: depth must be a non-negative integer, got '{text}'"))
}

/// Execute one command against `game`, writing any reply to `out`.
/// Returns `false` once the shell should exit.
pub fn execute<W: Write>(game: &mut Game, command: ShellCommand, out: &mut W) -> io::Result<bool> {
    match command {
        ShellCommand::New => *game = Game::new(),
        ShellCommand::Load(pdn) => match Game::from_pdn(&pdn) {
            Ok(loaded) => *game = loaded,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ShellCommand::Pdn => writeln!(out, "{}", game.to_pdn())?,
        ShellCommand::Moves(None) => writeln!(out, "{}", format_moves(&game.legal_moves()))?,
        ShellCommand::Moves(Some(square)) => match square.parse::<Square>() {
            Ok(sq) => writeln!(out, "{}", format_moves(&game.legal_moves_for(sq)))?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ShellCommand::Play(text) => match game.play_notation(&text) {
            Ok(_) => writeln!(out, "{}", game.status())?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ShellCommand::Undo => match game.undo() {
            Some(mv) => writeln!(out, "undid {mv}")?,
            None => writeln!(out, "error: nothing to undo")?,
        },
        ShellCommand::Status => writeln!(out, "{}", game.status())?,
        ShellCommand::Go { difficulty, depth } => {
            let difficulty = match difficulty.parse::<Difficulty>() {
                Ok(d) => d,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    return Ok(true);
                }
            };
            let depth = match depth.as_deref().map(parse_depth::<u32>).transpose() {
                Ok(depth) => depth,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    return Ok(true);
                }
            };
            let result = game.search(&SearchConfig::new(difficulty).with_depth(depth));
            match result.best_move {
                Some(mv) if is_mate_value(result.value) => {
                    writeln!(out, "bestmove {mv} mate")?;
                }
                Some(mv) => writeln!(out, "bestmove {mv} value {}", result.value)?,
                None => writeln!(out, "bestmove none")?,
            }
        }
        ShellCommand::Perft(depth) => match depth.as_deref().map_or(Ok(1), parse_depth::<usize>) {
            Ok(depth) => writeln!(out, "{}", game.position().perft(depth))?,
            Err(e) => writeln!(out, "{e}")?,
        },
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Unknown(line) => writeln!(out, "error: unknown command '{line}'")?,
    }
    Ok(true)
}

/// Drive a game from `input` until it is exhausted or `quit` is read.
pub fn run_shell<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut game = Game::new();
    for line in input.lines() {
        let Some(command) = parse_shell_command(&line?) else {
            continue;
        };
        if !execute(&mut game, command, out)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

pub fn run_shell_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(stdin.lock(), &mut stdout)
}
