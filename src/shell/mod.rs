//! Line-oriented terminal front end.
//!
//! The shell is a view: it turns input lines into session operations and
//! leaves all rendering of results to the session's display sink. Session
//! errors have already been reported there, so the loop just moves on.
//! Lines that do not parse are answered on the output stream.

mod command;
mod render;

pub use command::{toggle_names, Command, CommandError, HELP};
pub use render::{Palette, TerminalDisplay};

use crate::session::{DisplaySink, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Read commands from `input` until it ends or `quit` is entered.
///
/// Listings (`history`, `totals`, `help`) go to `out`.
pub fn run<D, R, W>(session: &mut Session<D>, input: R, out: &mut W) -> io::Result<()>
where
    D: DisplaySink,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(%err, "Rejected command");
                writeln!(out, "error: {err}")?;
                out.flush()?;
                continue;
            }
        };
        debug!(?command, "Handling command");

        match command {
            Command::Add(text) => {
                let participation = session.live_participation();
                let _ = session.submit_price(&text, &participation);
            }
            Command::Toggle(text) => {
                let names =
                    toggle_names(&text, |name| session.ledger().participant(name).is_some());
                for name in names {
                    let _ = session.toggle(&name);
                }
            }
            Command::Select(key) => {
                let _ = session.select_history(&key);
            }
            Command::Clear => {
                let key = session.selected().to_string();
                let _ = session.request_clear(&key);
            }
            Command::History => {
                for key in session.history_keys() {
                    let marker = if key == session.selected() { ">" } else { " " };
                    writeln!(out, "{marker} {key}")?;
                }
            }
            Command::Totals { json: true } => {
                let json = serde_json::to_string_pretty(&session.totals())
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
                writeln!(out, "{json}")?;
            }
            Command::Totals { json: false } => {
                let totals = session.totals();
                writeln!(out, "Total: {}", totals.total_price)?;
                for p in &totals.participants {
                    writeln!(out, "  {}: {}", p.name, p.total_share)?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}
