//! Terminal rendering of the chat transcript.
//!
//! Output is append-only: a reply entry can only be cleared while its
//! placeholder is still the last thing on screen, which holds because
//! turns run one at a time.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use medchat_chat::{EntryId, Surface, Word};
use tracing::warn;

pub struct TerminalSurface<W: Write> {
    out: W,
    next_entry: usize,
    /// Reply entry whose placeholder is on the current line.
    placeholder: Option<EntryId>,
    /// Cursor is not at column 0.
    line_open: bool,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_entry: 0,
            placeholder: None,
            line_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the input prompt on a fresh line.
    pub fn prompt(&mut self) {
        self.end_line();
        self.emit(|out| {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print("> "),
                ResetColor
            )
        });
        self.flush();
    }

    /// Print a banner line.
    pub fn notice(&mut self, message: &str) {
        self.end_line();
        self.emit(|out| {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(message),
                SetAttribute(Attribute::Reset),
                Print("\n")
            )
        });
        self.flush();
    }

    /// Close any open reply line and flush.
    pub fn finish(&mut self) {
        self.end_line();
        self.flush();
    }

    fn end_line(&mut self) {
        if self.line_open {
            self.emit(|out| queue!(out, Print("\n")));
            self.line_open = false;
        }
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(e) = f(&mut self.out) {
            warn!(error = %e, "terminal write failed");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "terminal flush failed");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn append_user_message(&mut self, text: &str) {
        self.end_line();
        self.emit(|out| {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print("you: "),
                ResetColor,
                Print(text),
                Print("\n")
            )
        });
    }

    fn append_placeholder(&mut self, placeholder: &str) -> EntryId {
        self.end_line();
        let entry = EntryId(self.next_entry);
        self.next_entry += 1;
        self.emit(|out| {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print("  "),
                Print(placeholder),
                SetAttribute(Attribute::Reset)
            )
        });
        self.placeholder = Some(entry);
        self.line_open = true;
        entry
    }

    fn clear_entry(&mut self, entry: EntryId) {
        if self.placeholder == Some(entry) {
            self.emit(|out| queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine)));
            self.placeholder = None;
            self.line_open = false;
        }
    }

    fn open_slot(&mut self, _entry: EntryId) {
        self.end_line();
        self.emit(|out| {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                Print("  • "),
                ResetColor
            )
        });
        self.line_open = true;
    }

    fn append_word(&mut self, _entry: EntryId, word: &Word) {
        let text = word.text.as_str();
        if word.emphasized {
            self.emit(|out| {
                queue!(
                    out,
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::NormalIntensity),
                    Print(" ")
                )
            });
        } else {
            self.emit(|out| queue!(out, Print(text), Print(" ")));
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.flush();
    }

    fn alert(&mut self, message: &str) {
        self.end_line();
        self.emit(|out| {
            queue!(
                out,
                SetForegroundColor(Color::Yellow),
                SetAttribute(Attribute::Bold),
                Print("! "),
                Print(message),
                Print("\n"),
                SetAttribute(Attribute::Reset),
                ResetColor
            )
        });
        self.flush();
    }
}
