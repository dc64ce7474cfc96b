//! MaskedInput - the editor state wrapped around a host text widget.
//!
//! The parent owns the Logical Value. Every operation here takes the current
//! value, reports a new one through the parent's change callback, and keeps
//! the host's displayed text and selection in step with it.

use crate::grapheme::GraphemeCache;
use crate::tracing::CursorSnapshot;

use super::cursor::Cursor;
use super::deferred::CorrectionQueue;
use super::edit::{self, apply_edit, insert_symbol, EditResult};
use super::host::HostWidget;
use super::messages::EditIntent;
use super::mode::{render, RenderMode};
use super::options::{EditorOptions, RefocusPolicy};
use super::selection::Selection;

/// Grapheme-aware masked input editor for a single field.
#[derive(Debug, Clone)]
pub struct MaskedInput {
    options: EditorOptions,
    mode: RenderMode,
    picker_visible: bool,
    /// Caret the editor last decided on
    cursor: Cursor,
    corrections: CorrectionQueue,
    cache: GraphemeCache,
}

impl Default for MaskedInput {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl MaskedInput {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            mode: options.initial_mode,
            options,
            picker_visible: false,
            cursor: Cursor::zero(),
            corrections: CorrectionQueue::new(),
            cache: GraphemeCache::new(),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn picker_visible(&self) -> bool {
        self.picker_visible
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    /// Latest edit generation
    pub fn generation(&self) -> u64 {
        self.corrections.generation()
    }

    /// Scheduled cursor corrections not yet run
    pub fn pending_corrections(&self) -> usize {
        self.corrections.pending()
    }

    /// Text the host should display for `value`
    pub fn display_text(&self, value: &str) -> String {
        render(value, self.mode, self.options.effective_mask())
    }

    /// Grapheme count of `value`, memoized across calls with the same value
    pub fn grapheme_count(&mut self, value: &str) -> usize {
        self.cache.count(value)
    }

    /// Initial sync of the host with the parent's value
    pub fn mount<H: HostWidget>(&mut self, host: &mut H, value: &str) {
        host.set_displayed_text(&self.display_text(value));
        self.cursor = Cursor::new(self.cache.count(value));
    }

    /// Handle a native edit intent from the host.
    ///
    /// Returns `true` when the intent was handled: the host must not apply
    /// its own mutation, which would work on code units and could split a
    /// cluster. Unknown intents return `false` and change nothing.
    pub fn handle_native_edit<H: HostWidget>(
        &mut self,
        host: &mut H,
        value: &str,
        intent: &EditIntent,
        on_change: &mut dyn FnMut(String),
    ) -> bool {
        let before = CursorSnapshot::from_input(self);
        let selection = self.host_selection_or_end(host, value);

        if let Some(text) = intent.inserted_text() {
            if self.insertion_exceeds_limit(value, selection, text) {
                tracing::debug!(
                    max = ?self.options.max_graphemes,
                    "insertion rejected, field is at its grapheme limit"
                );
                return true;
            }
        }

        let Some(result) = apply_edit(intent, value, selection, self.mode) else {
            return false;
        };

        tracing::debug!(
            ?intent,
            anchor = selection.anchor,
            head = selection.head,
            mode = ?self.mode,
            "applied native edit"
        );
        self.commit(host, value, result, on_change);

        if let Some(diff) = before.diff(&CursorSnapshot::from_input(self)) {
            tracing::trace!(target: "cursor", "{}", diff);
        }
        true
    }

    /// Insert a symbol from outside the native edit pipeline (palette click).
    ///
    /// The host's selection is read once as the insertion point; an unfocused
    /// host inserts at the end. The new caret is set on the host explicitly
    /// because no native event will do it.
    pub fn insert_symbol_at_cursor<H: HostWidget>(
        &mut self,
        host: &mut H,
        value: &str,
        symbol: &str,
        on_change: &mut dyn FnMut(String),
    ) {
        let caret = host.selection().map(|sel| sel.start());

        let current = self.cache.count(value);
        if self
            .options
            .would_exceed_max_length(current, usize::from(!symbol.is_empty()))
        {
            tracing::debug!("symbol insertion rejected, field is at its grapheme limit");
            return;
        }

        let result = insert_symbol(symbol, value, caret, self.mode);
        let display_cursor = result.display_cursor(self.mode);
        tracing::debug!(symbol, ?caret, cursor = result.cursor.grapheme, "inserted symbol");

        self.commit(host, value, result, on_change);
        host.set_selection(Selection::collapsed(display_cursor));

        if self.options.refocus == RefocusPolicy::Refocus {
            host.focus();
        }
    }

    /// Flip between plaintext and masked rendering.
    ///
    /// The value is untouched; the caret is translated into the new mode's
    /// coordinate space so it stays on the same grapheme boundary.
    pub fn toggle_mode<H: HostWidget>(&mut self, host: &mut H, value: &str) -> RenderMode {
        let caret = host.selection().map(|sel| sel.head);
        let (next, corrected) = edit::toggle_mode(self.mode, value, caret);

        self.mode = next;
        host.set_displayed_text(&self.display_text(value));

        if let Some(offset) = corrected {
            let spans = self.cache.spans(value);
            self.cursor = Cursor::from_display(spans, offset, next);
            host.set_selection(Selection::collapsed(offset));
            self.corrections.schedule();
        }

        tracing::debug!(mode = ?next, ?corrected, "toggled render mode");
        next
    }

    /// Open or close the emoji picker; returns the new visibility.
    ///
    /// Opening blurs the host so an on-screen keyboard does not cover the
    /// picker.
    pub fn toggle_picker<H: HostWidget>(&mut self, host: &mut H) -> bool {
        self.picker_visible = !self.picker_visible;
        if self.picker_visible {
            host.blur();
        }
        self.picker_visible
    }

    pub fn close_picker(&mut self) {
        self.picker_visible = false;
    }

    /// Parent cleared the value: drop pending work and resync the host
    pub fn reset<H: HostWidget>(&mut self, host: &mut H) {
        self.corrections.cancel();
        self.cursor = Cursor::zero();
        self.picker_visible = false;
        self.cache.clear();
        host.set_displayed_text("");
        host.set_selection(Selection::collapsed(0));
    }

    /// Run scheduled cursor corrections after the host has re-rendered.
    ///
    /// Uses `value` and the editor's state as they are now, so superseded
    /// corrections and stale values never reach the host. Returns `true` when
    /// a correction was applied.
    pub fn run_deferred<H: HostWidget>(&mut self, host: &mut H, value: &str) -> bool {
        if !self.corrections.drain() {
            return false;
        }

        let text = self.display_text(value);
        if host.displayed_text() != text {
            host.set_displayed_text(&text);
        }

        let spans = self.cache.spans(value);
        self.cursor = self.cursor.clamped(spans.len());
        let offset = self.cursor.to_display(spans, self.mode);
        host.set_selection(Selection::collapsed(offset));
        tracing::trace!(target: "cursor", offset, grapheme = self.cursor.grapheme, "cursor corrected");
        true
    }

    fn commit<H: HostWidget>(
        &mut self,
        host: &mut H,
        previous: &str,
        result: EditResult,
        on_change: &mut dyn FnMut(String),
    ) {
        self.cursor = result.cursor;
        host.set_displayed_text(&self.display_text(&result.value));
        self.corrections.schedule();
        if result.changed(previous) {
            on_change(result.value);
        }
    }

    fn host_selection_or_end<H: HostWidget>(&mut self, host: &H, value: &str) -> Selection {
        host.selection().unwrap_or_else(|| {
            let spans = self.cache.spans(value);
            Selection::collapsed(Cursor::end(spans).to_display(spans, self.mode))
        })
    }

    fn insertion_exceeds_limit(&mut self, value: &str, selection: Selection, text: &str) -> bool {
        if self.options.max_graphemes.is_none() {
            return false;
        }
        let spans = self.cache.spans(value);
        let replaced = selection.grapheme_range(spans, self.mode).len();
        let remaining = spans.len() - replaced;
        self.options
            .would_exceed_max_length(remaining, crate::grapheme::count_graphemes(text))
    }
}
