//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use emojipass::editable::{EditIntent, EditorOptions, MaskedInput, MemoryHost, RenderMode};

/// A mounted field: the page's value, the editor, and its host widget
pub struct Field {
    pub value: String,
    pub input: MaskedInput,
    pub host: MemoryHost,
    pub changes: Vec<String>,
}

impl Field {
    /// Dispatch a native intent and let deferred corrections run
    pub fn edit(&mut self, intent: EditIntent) -> bool {
        let current = self.value.clone();
        let mut next = None;
        let handled = self
            .input
            .handle_native_edit(&mut self.host, &current, &intent, &mut |v| next = Some(v));
        self.accept(next);
        self.input.run_deferred(&mut self.host, &self.value);
        handled
    }

    /// Palette insertion at the host's caret
    pub fn insert(&mut self, symbol: &str) {
        let current = self.value.clone();
        let mut next = None;
        self.input
            .insert_symbol_at_cursor(&mut self.host, &current, symbol, &mut |v| next = Some(v));
        self.accept(next);
        self.input.run_deferred(&mut self.host, &self.value);
    }

    pub fn toggle(&mut self) -> RenderMode {
        let mode = self.input.toggle_mode(&mut self.host, &self.value);
        self.input.run_deferred(&mut self.host, &self.value);
        mode
    }

    /// Caret head reported by the host
    pub fn caret(&self) -> Option<usize> {
        use emojipass::editable::HostWidget;
        self.host.selection().map(|sel| sel.head)
    }

    pub fn displayed(&self) -> String {
        use emojipass::editable::HostWidget;
        self.host.displayed_text()
    }

    fn accept(&mut self, next: Option<String>) {
        if let Some(value) = next {
            self.changes.push(value.clone());
            self.value = value;
        }
    }
}

/// Mount a focused field with `value` in `mode`
pub fn field(value: &str, mode: RenderMode) -> Field {
    field_with(
        value,
        EditorOptions {
            initial_mode: mode,
            ..EditorOptions::default()
        },
    )
}

pub fn field_with(value: &str, options: EditorOptions) -> Field {
    let mut input = MaskedInput::new(options);
    let mut host = MemoryHost::focused();
    input.mount(&mut host, value);
    Field {
        value: value.to_string(),
        input,
        host,
        changes: Vec::new(),
    }
}

/// Sample values covering the cluster shapes users type
pub const SAMPLES: &[&str] = &[
    "",
    "abc",
    "ab👍cd",
    "👍🏽",
    "🇳🇴🇸🇪",
    "👨‍👩‍👧‍👦x",
    "e\u{301}t\u{e9}",
    "❤️🔑",
    "a\r\nb",
];
