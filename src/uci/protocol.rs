use crate::core::board::Position;
use crate::core::moves::Move;
use crate::engine::eval::{material_balance, relative_centipawns};
use crate::engine::search::{perft, Engine};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use vampirc_uci::{parser, UciMessage};

pub struct UCI {
    /// Position set by the last successful `position` command.
    pub position: Position,
    engine: Engine,
    /// Extra `info string` diagnostics (UCI `debug on`).
    debug: bool,
}

impl UCI {
    pub fn new() -> Self {
        UCI {
            position: Position::startpos(),
            engine: Engine::new(),
            debug: false,
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let keep_going = self.handle_line(&line, &mut stdout)?;
            stdout.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Process one command line. Returns `false` once `quit` is received.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::Debug(on) => self.debug = on,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, .. } => {
                writeln!(out, "info string no option named {}", name.trim())?;
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position {
                startpos,
                fen,
                moves,
            } => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let listed = parts.iter().skip_while(|&&t| t != "moves").skip(1).count();
                if listed != moves.len() {
                    // The UCI grammar stops at the first move written with a
                    // piece letter or capture mark, so reparse the whole line.
                    self.cmd_position(&parts, out)?;
                } else {
                    let fen_str = fen.as_ref().map(|f| f.as_str());
                    let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                    self.apply_position(startpos, fen_str, &refs, out)?;
                }
            }
            UciMessage::Go { .. } => self.do_go(out)?,
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first().copied() {
                    Some("d") | Some("display") => self.cmd_display(out)?,
                    Some("eval") => self.cmd_eval(out)?,
                    Some("perft") => self.cmd_perft(&parts, out)?,
                    Some("position") => self.cmd_position(&parts, out)?,
                    Some(other) => writeln!(out, "info string unknown command: {}", other)?,
                    None => {}
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name Greedy Chess {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author Greedy Chess Team")?;
        writeln!(out, "uciok")
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.engine = Engine::new();
        self.position = Position::startpos();
    }

    /// Hand-rolled `position` parsing for lines the UCI grammar cannot fully
    /// read, such as moves written "Ng1f3" or "e4xd5".
    fn cmd_position<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let mut idx = 1;
        let startpos = parts.get(idx) == Some(&"startpos");
        let mut fen_str: Option<String> = None;

        if startpos {
            idx += 1;
        } else if parts.get(idx) == Some(&"fen") {
            idx += 1;
            let mut fen_parts = Vec::new();
            while idx < parts.len() && parts[idx] != "moves" {
                fen_parts.push(parts[idx]);
                idx += 1;
            }
            fen_str = Some(fen_parts.join(" "));
        }

        let mut move_strs: &[&str] = &[];
        if parts.get(idx) == Some(&"moves") {
            move_strs = &parts[idx + 1..];
        } else if idx < parts.len() {
            return writeln!(out, "info string error: expected moves, found {}", parts[idx]);
        }

        self.apply_position(startpos, fen_str.as_deref(), move_strs, out)
    }

    /// Build the position and replay the moves. On any error the previous
    /// position is kept and the error is reported.
    fn apply_position<W: Write>(
        &mut self,
        startpos: bool,
        fen: Option<&str>,
        move_strs: &[&str],
        out: &mut W,
    ) -> io::Result<()> {
        match build_position(startpos, fen, move_strs) {
            Ok(position) => {
                self.position = position;
                if self.debug {
                    writeln!(out, "info string position {}", position.to_fen())?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "info string error: {}", e),
        }
    }

    fn do_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let start = Instant::now();
        self.engine.enter_position(&self.position);
        self.engine.start_search();

        let result = match self.engine.search() {
            Ok(result) => result,
            Err(e) => {
                writeln!(out, "info string error: {}", e)?;
                return writeln!(out, "bestmove 0000");
            }
        };

        if self.debug {
            writeln!(out, "info string checked {} candidates", result.nodes)?;
        }

        match result.best_move {
            Some(mv) => {
                writeln!(
                    out,
                    "info depth 1 score cp {} nodes {} time {} pv {}",
                    relative_centipawns(result.score, self.position.active_player),
                    result.nodes,
                    start.elapsed().as_millis(),
                    mv
                )?;
                writeln!(out, "bestmove {}", mv)
            }
            None => {
                if self.debug {
                    writeln!(out, "info string no legal move")?;
                }
                writeln!(out, "bestmove 0000")
            }
        }
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.position)
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let balance = material_balance(&self.position);
        writeln!(out, "Material: {} (White minus Black)", balance)?;
        writeln!(
            out,
            "Evaluation: {} cp for {}",
            relative_centipawns(balance, self.position.active_player),
            self.position.active_player
        )
    }

    fn cmd_perft<W: Write>(&self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth: u32 = match parts.get(1) {
            None => 1,
            Some(text) => match text.parse() {
                Ok(depth) => depth,
                Err(_) => return writeln!(out, "info string error: invalid perft depth '{}'", text),
            },
        };
        let start = Instant::now();
        match perft(&self.position, depth) {
            Ok(nodes) => {
                let elapsed = start.elapsed();
                writeln!(out, "Nodes: {} ({} ms)", nodes, elapsed.as_millis())
            }
            Err(e) => writeln!(out, "info string error: {}", e),
        }
    }
}

fn build_position(startpos: bool, fen: Option<&str>, move_strs: &[&str]) -> Result<Position, String> {
    let mut position = match (startpos, fen) {
        (true, _) => Position::startpos(),
        (false, Some(fen)) => Position::from_fen(fen)?,
        (false, None) => return Err("expected startpos or fen".to_string()),
    };
    for &text in move_strs {
        position.try_play_move(Move::from_notation(text)?)?;
    }
    Ok(position)
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}
