use director::{GameDirector, GameMode, GameResult, Phase};
use draughts_core::{coord_to_sq, legal_moves, sq_to_coord};
use std::io::{self, BufRead, Write};

fn main() {
    // The frontend talks to the director over stdin/stdout; all rules and
    // search live behind it.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut game = GameDirector::default();
    print_board(&mut stdout, &game);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "new" => {
                game.reset();
                print_board(&mut stdout, &game);
            }
            "show" => {
                print_board(&mut stdout, &game);
            }
            "moves" => {
                let set = legal_moves(game.board(), game.turn());
                for mv in set.moves() {
                    let tag = if mv.is_capture() { " (jump)" } else { "" };
                    writeln!(
                        stdout,
                        "{} {}{}",
                        sq_to_coord(mv.from),
                        sq_to_coord(mv.to),
                        tag
                    )
                    .ok();
                }
                stdout.flush().ok();
            }
            "move" => {
                // Example: move b6 a5
                if parts.len() < 3 {
                    writeln!(stdout, "usage: move <from> <to>").ok();
                    continue;
                }
                match (coord_to_sq(parts[1]), coord_to_sq(parts[2])) {
                    (Some(from), Some(to)) => {
                        if play_move(&mut game, from, to) {
                            print_board(&mut stdout, &game);
                        } else {
                            writeln!(stdout, "illegal move").ok();
                        }
                    }
                    _ => {
                        writeln!(stdout, "bad coordinates").ok();
                    }
                }
                stdout.flush().ok();
            }
            "ai" => {
                let depth = game.config().depth;
                match game.request_ai_move(depth) {
                    Some(mv) => {
                        writeln!(
                            stdout,
                            "ai plays {} {}",
                            sq_to_coord(mv.from),
                            sq_to_coord(mv.to)
                        )
                        .ok();
                        print_board(&mut stdout, &game);
                    }
                    None => {
                        writeln!(stdout, "no ai move").ok();
                    }
                }
                stdout.flush().ok();
            }
            "hint" => {
                let depth = game.config().depth;
                match game.request_hint(depth) {
                    Some(mv) => {
                        writeln!(
                            stdout,
                            "hint: {} {}",
                            sq_to_coord(mv.from),
                            sq_to_coord(mv.to)
                        )
                        .ok();
                    }
                    None => {
                        writeln!(stdout, "no hint").ok();
                    }
                }
                stdout.flush().ok();
            }
            "undo" => {
                if game.undo() {
                    print_board(&mut stdout, &game);
                } else {
                    writeln!(stdout, "nothing to undo").ok();
                }
                stdout.flush().ok();
            }
            "mode" => {
                // Example: mode training
                let mode = parts.get(1).and_then(|name| match *name {
                    "ai" => Some(GameMode::HumanVsAi),
                    "2p" => Some(GameMode::HumanVsHuman),
                    "training" => Some(GameMode::Training),
                    _ => None,
                });
                match mode {
                    Some(mode) => {
                        let mut config = game.config();
                        config.mode = mode;
                        game.set_config(config);
                    }
                    None => {
                        writeln!(stdout, "usage: mode <ai|2p|training>").ok();
                        stdout.flush().ok();
                    }
                }
            }
            "depth" => {
                // Example: depth 6
                if let Some(d) = parts.get(1).and_then(|v| v.parse::<u8>().ok()) {
                    let mut config = game.config();
                    config.depth = d.clamp(1, 8);
                    game.set_config(config);
                } else {
                    writeln!(stdout, "usage: depth <1-8>").ok();
                    stdout.flush().ok();
                }
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}

/// A human landing: select the origin (unless a jump chain already holds
/// the selection) and play the destination.
fn play_move(game: &mut GameDirector, from: u8, to: u8) -> bool {
    if game.phase() == Phase::AwaitingFurtherJump {
        return game.selected() == Some(from) && game.choose_destination(to);
    }
    // Re-selecting the already-selected piece would toggle it off.
    if game.selected() != Some(from) && !game.select_origin(from) {
        return false;
    }
    game.choose_destination(to)
}

fn print_board(out: &mut impl Write, game: &GameDirector) {
    write!(out, "{}", game.board()).ok();
    match game.result() {
        GameResult::RedWins => writeln!(out, "red wins").ok(),
        GameResult::BlackWins => writeln!(out, "black wins").ok(),
        GameResult::InProgress => {
            if game.phase() == Phase::AwaitingFurtherJump {
                writeln!(out, "{} must continue jumping", game.turn()).ok()
            } else {
                writeln!(out, "{} to move", game.turn()).ok()
            }
        }
    };
    out.flush().ok();
}
