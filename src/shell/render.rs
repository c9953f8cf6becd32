//! Text rendering of display updates.

use crate::config::Theme;
use crate::session::{DisplaySink, DisplayUpdate, SelectionView, TotalsView};
use colored::{Color, ColoredString, Colorize};
use std::io::{self, Write};
use tracing::warn;

/// Colors used for each kind of output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub heading: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Palette {
    /// Palette matching a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                heading: Color::BrightWhite,
                text: Color::White,
                highlight: Color::TrueColor {
                    r: 42,
                    g: 130,
                    b: 218,
                },
                error: Color::BrightRed,
            },
            Theme::Light => Self {
                heading: Color::Black,
                text: Color::TrueColor {
                    r: 10,
                    g: 10,
                    b: 10,
                },
                highlight: Color::TrueColor {
                    r: 42,
                    g: 130,
                    b: 218,
                },
                error: Color::Red,
            },
        }
    }
}

/// Writes each display update as a few lines of text.
pub struct TerminalDisplay<W: Write> {
    out: W,
    palette: Palette,
    color: bool,
}

impl<W: Write> TerminalDisplay<W> {
    /// Colored output to `out` in the palette of `theme`.
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            palette: Palette::for_theme(theme),
            color: true,
        }
    }

    /// Write plain text without escape codes.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.color {
            text.color(color)
        } else {
            ColoredString::from(text)
        }
    }

    fn render(&mut self, update: &DisplayUpdate) -> io::Result<()> {
        match update {
            DisplayUpdate::Totals(totals) => self.render_totals(totals),
            DisplayUpdate::History(keys) => {
                let line = self.paint(&keys.join(" | "), self.palette.text);
                writeln!(self.out, "History: {line}")
            }
            DisplayUpdate::Selection(view) => self.render_selection(view),
            DisplayUpdate::PriceField(text) => {
                let text = self.paint(text, self.palette.highlight);
                writeln!(self.out, "Price: {text}")
            }
            DisplayUpdate::Toggled { name, checked } => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                let line = self.paint(&format!("{mark} {name}"), self.palette.text);
                writeln!(self.out, "{line}")
            }
            DisplayUpdate::Error(err) => {
                let line = self.paint(&format!("error: {err}"), self.palette.error);
                writeln!(self.out, "{line}")
            }
        }
    }

    fn render_totals(&mut self, totals: &TotalsView) -> io::Result<()> {
        let heading = self.paint(&format!("Total: {}", totals.total_price), self.palette.heading);
        writeln!(self.out, "{heading}")?;
        for p in &totals.participants {
            let row = self.paint(&format!("  {}: {}", p.name, p.total_share), self.palette.text);
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }

    fn render_selection(&mut self, view: &SelectionView) -> io::Result<()> {
        let heading = self.paint(&format!("[{}]", view.key), self.palette.highlight);
        writeln!(self.out, "{heading}")?;
        for p in &view.participants {
            let mark = if p.checked { "[x]" } else { "[ ]" };
            let row = self.paint(
                &format!("  {mark} {}: {}", p.name, p.share_text),
                self.palette.text,
            );
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn notify(&mut self, update: DisplayUpdate) {
        if let Err(err) = self.render(&update).and_then(|_| self.out.flush()) {
            warn!(error = %err, "Failed to write display update");
        }
    }
}
