//! Input surface: turns typed lines and voice results into turn submissions.

use std::path::PathBuf;

/// User-initiated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line typed and submitted with Enter.
    Enter(String),
    /// `/send <text>`: the send control.
    Send(String),
    /// `/voice <file>`: start a single-shot capture from a recording.
    Voice(PathBuf),
    /// A capture finished with this transcript.
    VoiceCaptured(String),
    /// `/close` or end of input.
    Close,
}

impl InputEvent {
    /// Parse one line read from the terminal.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        if let Some(rest) = command_arg(trimmed, "/send") {
            return InputEvent::Send(rest.to_string());
        }
        if let Some(rest) = command_arg(trimmed, "/voice") {
            return InputEvent::Voice(PathBuf::from(rest));
        }
        if trimmed == "/close" || trimmed == "/quit" {
            return InputEvent::Close;
        }
        InputEvent::Enter(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// `"/cmd arg"` -> `Some("arg")`, `"/cmd"` -> `Some("")`.
fn command_arg<'a>(line: &'a str, command: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(command)?;
    if rest.is_empty() {
        Some("")
    } else if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceAction {
    Submit(String),
    Capture(PathBuf),
    Close,
    /// A voice request arrived without a recording path.
    MissingRecording,
}

/// Single-line text field.
#[derive(Debug, Default)]
pub struct InputField {
    content: String,
}

impl InputField {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
    }

    /// Take the content, leaving the field empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.content)
    }
}

/// The chat window's input controls.
#[derive(Debug)]
pub struct InputSurface {
    field: InputField,
    visible: bool,
}

impl InputSurface {
    pub fn new() -> Self {
        Self {
            field: InputField::default(),
            visible: true,
        }
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, event: InputEvent) -> SurfaceAction {
        match event {
            InputEvent::Enter(text) | InputEvent::Send(text) => {
                self.field.set_content(&text);
                SurfaceAction::Submit(self.field.take())
            }
            InputEvent::Voice(path) if path.as_os_str().is_empty() => SurfaceAction::MissingRecording,
            InputEvent::Voice(path) => SurfaceAction::Capture(path),
            InputEvent::VoiceCaptured(transcript) => {
                // The transcript stays in the field after submission.
                self.field.set_content(&transcript);
                SurfaceAction::Submit(self.field.content().to_string())
            }
            InputEvent::Close => {
                self.visible = false;
                SurfaceAction::Close
            }
        }
    }
}

impl Default for InputSurface {
    fn default() -> Self {
        Self::new()
    }
}
