//! Scripted editing session
//!
//! Drives one masked field against an in-memory host the way a page would:
//! the session owns the value, forwards native intents to the editor, applies
//! change callbacks, and lets deferred cursor corrections run after every
//! step. Scripts are one command per line; `#` starts a comment.

use anyhow::{bail, Context, Result};

use crate::editable::{
    EditIntent, EditorOptions, HostWidget, InterceptEdits, MaskedInput, MemoryHost, RenderMode,
};
use crate::palette::EmojiPalette;
use crate::recent_emojis::RecentEmojis;

/// One scripted step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Paste(String),
    Backspace(usize),
    Delete(usize),
    /// Raw host intent: `input <inputType> [data]`
    Input(String, Option<String>),
    Select(usize, usize),
    Cursor(usize),
    Emoji(String),
    Toggle,
    Picker,
    /// Palette close button
    Close,
    Focus,
    Blur,
    Reset,
    Show,
}

impl Command {
    /// Parse one script line; blank lines and comments yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match trimmed.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (trimmed, ""),
        };

        let command = match name {
            "type" => Command::Type(required_text(name, rest)?),
            "paste" => Command::Paste(required_text(name, rest)?),
            "backspace" => Command::Backspace(optional_count(rest)?),
            "delete" => Command::Delete(optional_count(rest)?),
            "input" => {
                let mut parts = rest.splitn(2, ' ');
                let input_type = parts
                    .next()
                    .filter(|s| !s.is_empty())
                    .context("input needs an inputType")?;
                Command::Input(input_type.to_string(), parts.next().map(str::to_string))
            }
            "select" => {
                let mut nums = rest.split_whitespace().map(parse_offset);
                match (nums.next(), nums.next(), nums.next()) {
                    (Some(anchor), Some(head), None) => Command::Select(anchor?, head?),
                    _ => bail!("select needs <anchor> <head>"),
                }
            }
            "cursor" => Command::Cursor(parse_offset(rest.trim())?),
            "emoji" => Command::Emoji(required_text(name, rest.trim())?),
            "toggle" => Command::Toggle,
            "picker" => Command::Picker,
            "close" => Command::Close,
            "focus" => Command::Focus,
            "blur" => Command::Blur,
            "reset" => Command::Reset,
            "show" => Command::Show,
            other => bail!("unknown command `{}`", other),
        };
        Ok(Some(command))
    }
}

fn required_text(name: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("{} needs text", name);
    }
    Ok(rest.to_string())
}

fn optional_count(rest: &str) -> Result<usize> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(1);
    }
    rest.parse()
        .with_context(|| format!("invalid repeat count `{}`", rest))
}

fn parse_offset(s: &str) -> Result<usize> {
    s.parse().with_context(|| format!("invalid offset `{}`", s))
}

/// A field, its host, and the value the page owns
#[derive(Debug, Clone)]
pub struct Session {
    value: String,
    host: MemoryHost,
    input: MaskedInput,
    palette: EmojiPalette,
    changes: usize,
}

impl Session {
    pub fn new(options: EditorOptions, recent: RecentEmojis) -> Self {
        let mut host = MemoryHost::focused();
        let mut input = MaskedInput::new(options);
        input.mount(&mut host, "");
        Self {
            value: String::new(),
            host,
            input,
            palette: EmojiPalette::new(recent),
            changes: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn host(&self) -> &MemoryHost {
        &self.host
    }

    pub fn input(&self) -> &MaskedInput {
        &self.input
    }

    pub fn palette(&self) -> &EmojiPalette {
        &self.palette
    }

    /// Number of change callbacks received
    pub fn changes(&self) -> usize {
        self.changes
    }

    pub fn into_recent(self) -> RecentEmojis {
        self.palette.into_recent()
    }

    /// Run one command; `show` returns a state line
    pub fn apply(&mut self, command: &Command) -> Option<String> {
        match command {
            Command::Type(text) => {
                self.on_edit_intent(&EditIntent::InsertText(text.clone()));
            }
            Command::Paste(text) => {
                self.on_edit_intent(&EditIntent::InsertFromPaste(text.clone()));
            }
            Command::Backspace(n) => {
                for _ in 0..*n {
                    self.on_edit_intent(&EditIntent::DeleteBackward);
                }
            }
            Command::Delete(n) => {
                for _ in 0..*n {
                    self.on_edit_intent(&EditIntent::DeleteForward);
                }
            }
            Command::Input(input_type, data) => {
                let intent = EditIntent::from_input_type(input_type, data.as_deref());
                if !self.on_edit_intent(&intent) {
                    tracing::info!(input_type = %input_type, "intent left to the host");
                }
            }
            Command::Select(anchor, head) => self.host.select(*anchor, *head),
            Command::Cursor(offset) => self.host.place_caret(*offset),
            Command::Emoji(symbol) => self.pick_emoji(symbol),
            Command::Toggle => {
                self.input.toggle_mode(&mut self.host, &self.value);
                self.input.run_deferred(&mut self.host, &self.value);
            }
            Command::Picker => {
                self.input.toggle_picker(&mut self.host);
            }
            Command::Close => self.input.close_picker(),
            Command::Focus => self.host.focus(),
            Command::Blur => self.host.blur(),
            Command::Reset => {
                if !self.value.is_empty() {
                    self.value.clear();
                    self.changes += 1;
                }
                self.input.reset(&mut self.host);
            }
            Command::Show => return Some(self.describe()),
        }
        None
    }

    /// Run a whole script, collecting `show` output
    pub fn run_script(&mut self, script: &str) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for (idx, line) in script.lines().enumerate() {
            let command = Command::parse(line).with_context(|| format!("line {}", idx + 1))?;
            if let Some(command) = command {
                tracing::debug!(line = idx + 1, ?command, "session step");
                output.extend(self.apply(&command));
            }
        }
        Ok(output)
    }

    /// One-line summary of the field
    pub fn describe(&self) -> String {
        let caret = match self.host.selection() {
            Some(sel) if sel.is_empty() => sel.head.to_string(),
            Some(sel) => format!("{}..{}", sel.start(), sel.end()),
            None => "-".to_string(),
        };
        let mode = match self.input.mode() {
            RenderMode::Plaintext => "plaintext",
            RenderMode::Masked => "masked",
        };
        format!(
            "value={:?} display={:?} caret={} mode={} picker={}",
            self.value,
            self.host.displayed_text(),
            caret,
            mode,
            if self.input.picker_visible() { "open" } else { "closed" },
        )
    }

    fn pick_emoji(&mut self, symbol: &str) {
        let suppress = self.input.options().suppress_recent;
        let symbol = self.palette.select(symbol, suppress);
        let current = self.value.clone();
        let mut next = None;
        self.input
            .insert_symbol_at_cursor(&mut self.host, &current, symbol, &mut |v| next = Some(v));
        self.accept(next);
        self.input.run_deferred(&mut self.host, &self.value);
    }

    fn accept(&mut self, next: Option<String>) {
        if let Some(value) = next {
            self.value = value;
            self.changes += 1;
        }
    }
}

impl InterceptEdits for Session {
    fn on_edit_intent(&mut self, intent: &EditIntent) -> bool {
        let current = self.value.clone();
        let mut next = None;
        let handled =
            self.input
                .handle_native_edit(&mut self.host, &current, intent, &mut |v| next = Some(v));
        self.accept(next);
        self.input.run_deferred(&mut self.host, &self.value);
        handled
    }
}
