//! Drives an external xiangqi engine over UCCI or UCI.
//!
//! The engine runs as a child process with piped stdio. Each request sends the
//! position as FEN followed by a `go` command, then reads lines until the
//! `bestmove` reply. Replies that do not name a legal move are reported as
//! `NoUsableMove` instead of being played.

use std::ffi::OsStr;
use std::fmt;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::str::FromStr;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::board::Board;
use crate::chess_move::Move;
use crate::move_generator::is_legal_move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Ucci,
    Uci,
}

impl Protocol {
    fn greeting(&self) -> &'static str {
        match self {
            Protocol::Ucci => "ucci",
            Protocol::Uci => "uci",
        }
    }

    fn acknowledgement(&self) -> &'static str {
        match self {
            Protocol::Ucci => "ucciok",
            Protocol::Uci => "uciok",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.greeting())
    }
}

impl FromStr for Protocol {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ucci" => Ok(Protocol::Ucci),
            "uci" => Ok(Protocol::Uci),
            _ => Err("invalid protocol; options are: ucci, uci"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExternalEngineError {
    #[error("engine i/o failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("engine did not complete the {protocol} handshake")]
    Handshake { protocol: Protocol },
    #[error("engine process exited")]
    ProcessExited,
    #[error("engine reply has no usable move: {reply:?}")]
    NoUsableMove { reply: String },
}

pub struct ExternalEngine {
    process: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
    protocol: Protocol,
    go_command: String,
    name: String,
}

impl ExternalEngine {
    /// Starts `program` and completes the protocol handshake. `go_limits` is
    /// appended to every `go` command, e.g. `"time 1000"` or `"depth 8"`.
    pub fn spawn<S: AsRef<OsStr>>(
        program: &str,
        args: &[S],
        protocol: Protocol,
        go_limits: &str,
    ) -> Result<Self, ExternalEngineError> {
        let mut process = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        let (stdin, stdout) = match (process.stdin.take(), process.stdout.take()) {
            (Some(stdin), Some(stdout)) => (stdin, stdout),
            _ => {
                let _ = process.kill();
                return Err(ExternalEngineError::Handshake { protocol });
            }
        };

        let go_command = if go_limits.trim().is_empty() {
            "go".to_string()
        } else {
            format!("go {}", go_limits.trim())
        };

        let mut engine = Self {
            process,
            stdin,
            reader: BufReader::new(stdout),
            protocol,
            go_command,
            name: program.to_string(),
        };
        engine.handshake()?;
        debug!("external engine {} ready ({})", engine.name, protocol);
        Ok(engine)
    }

    pub fn engine_name(&self) -> &str {
        &self.name
    }

    fn handshake(&mut self) -> Result<(), ExternalEngineError> {
        let protocol = self.protocol;
        self.exchange_greetings().map_err(|error| {
            warn!("{} handshake failed: {}", protocol, error);
            ExternalEngineError::Handshake { protocol }
        })
    }

    fn exchange_greetings(&mut self) -> Result<(), ExternalEngineError> {
        let protocol = self.protocol;
        self.send_command(protocol.greeting())?;
        loop {
            let line = self.read_line()?;
            if let Some(name) = line.strip_prefix("id name ") {
                self.name = name.trim().to_string();
            }
            if line == protocol.acknowledgement() {
                break;
            }
        }

        self.send_command("isready")?;
        while self.read_line()? != "readyok" {}
        Ok(())
    }

    fn send_command(&mut self, command: &str) -> Result<(), ExternalEngineError> {
        trace!(">> {}", command);
        writeln!(self.stdin, "{}", command)?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ExternalEngineError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ExternalEngineError::ProcessExited);
        }
        let line = line.trim().to_string();
        trace!("<< {}", line);
        Ok(line)
    }

    /// Asks the engine for a move in `board` and checks it is legal there.
    pub fn best_move(&mut self, board: &Board) -> Result<Move, ExternalEngineError> {
        self.send_command(&format!("position fen {}", board.to_fen()))?;
        let go_command = self.go_command.clone();
        self.send_command(&go_command)?;

        let reply = loop {
            let line = self.read_line()?;
            if line.starts_with("bestmove") || line.starts_with("nobestmove") {
                break line;
            }
        };

        let mv = parse_bestmove(&reply)?;
        let mut position = board.clone();
        if !is_legal_move(&mut position, mv) {
            warn!("{} suggested illegal move {} in {}", self.name, mv, board.to_fen());
            return Err(ExternalEngineError::NoUsableMove { reply });
        }
        Ok(mv)
    }
}

/// Extracts the move from a `bestmove` reply. `nobestmove`, `bestmove (none)`
/// and anything that is not four coordinate characters are unusable.
pub fn parse_bestmove(reply: &str) -> Result<Move, ExternalEngineError> {
    let unusable = || ExternalEngineError::NoUsableMove {
        reply: reply.to_string(),
    };

    let mut tokens = reply.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return Err(unusable());
    }
    let text = tokens.next().ok_or_else(unusable)?;
    Move::from_text(text).map_err(|_| unusable())
}

impl Drop for ExternalEngine {
    fn drop(&mut self) {
        let _ = self.send_command("quit");
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        Move::from_text(text).unwrap()
    }

    #[test]
    fn test_parse_bestmove() {
        assert_eq!(parse_bestmove("bestmove h2e2").unwrap(), mv("h2e2"));
        assert_eq!(
            parse_bestmove("bestmove b0c2 ponder h9g7").unwrap(),
            mv("b0c2")
        );
    }

    #[test]
    fn test_parse_unusable_replies() {
        for reply in [
            "nobestmove",
            "bestmove (none)",
            "bestmove",
            "bestmove e2",
            "bestmove z9z8",
            "info depth 3",
        ]
        .iter()
        {
            assert!(
                matches!(
                    parse_bestmove(reply),
                    Err(ExternalEngineError::NoUsableMove { .. })
                ),
                "{} should be unusable",
                reply
            );
        }
    }

    #[test]
    fn test_protocol_from_str() {
        assert_eq!(Protocol::from_str("ucci"), Ok(Protocol::Ucci));
        assert_eq!(Protocol::from_str("uci"), Ok(Protocol::Uci));
        assert!(Protocol::from_str("xboard").is_err());
        assert_eq!(Protocol::Uci.to_string(), "uci");
    }

    #[cfg(unix)]
    fn scripted_engine(on_go: &str) -> Result<ExternalEngine, ExternalEngineError> {
        let script = format!(
            r#"while read line; do
                case "$line" in
                    ucci) echo "id name scripted"; echo ucciok ;;
                    isready) echo readyok ;;
                    go*) {} ;;
                    quit) exit 0 ;;
                esac
            done"#,
            on_go
        );
        ExternalEngine::spawn("sh", &["-c", script.as_str()], Protocol::Ucci, "time 100")
    }

    #[cfg(unix)]
    #[test]
    fn test_scripted_engine_move() {
        let mut engine = scripted_engine("echo 'info depth 1'; echo 'bestmove h2e2'").unwrap();
        assert_eq!(engine.engine_name(), "scripted");
        let best = engine.best_move(&Board::starting_position()).unwrap();
        assert_eq!(best, mv("h2e2"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scripted_engine_illegal_move() {
        let mut engine = scripted_engine("echo 'bestmove e0e2'").unwrap();
        assert!(matches!(
            engine.best_move(&Board::starting_position()),
            Err(ExternalEngineError::NoUsableMove { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_scripted_engine_no_move() {
        let mut engine = scripted_engine("echo nobestmove").unwrap();
        assert!(matches!(
            engine.best_move(&Board::starting_position()),
            Err(ExternalEngineError::NoUsableMove { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_scripted_engine_exits_mid_search() {
        let mut engine = scripted_engine("exit 0").unwrap();
        assert!(matches!(
            engine.best_move(&Board::starting_position()),
            Err(ExternalEngineError::ProcessExited)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_handshake_failure() {
        let result = ExternalEngine::spawn("sh", &["-c", "exit 0"], Protocol::Ucci, "");
        assert!(matches!(
            result,
            Err(ExternalEngineError::Handshake { .. })
        ));
    }
}
