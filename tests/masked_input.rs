//! Masked input editing tests - native intents, palette insertion, mode toggle

mod common;

use common::{field, field_with, SAMPLES};
use emojipass::editable::{
    apply_edit, code_unit_offset_for_grapheme_index, grapheme_index_for_code_unit_offset,
    insert_symbol, EditIntent, EditorOptions, HostWidget, RefocusPolicy, RenderMode, Selection,
};
use emojipass::grapheme::{count_graphemes, split_graphemes};

// ========================================================================
// Backward / forward delete
// ========================================================================

#[test]
fn test_backspace_after_emoji_removes_whole_cluster() {
    let mut f = field("ab👍cd", RenderMode::Masked);
    f.host.place_caret(3);

    assert!(f.edit(EditIntent::DeleteBackward));
    assert_eq!(f.value, "abcd");
    assert_eq!(f.displayed(), "••••");
    assert_eq!(f.caret(), Some(2));
}

#[test]
fn test_backspace_plaintext_caret_inside_cluster() {
    let mut f = field("ab👍cd", RenderMode::Plaintext);
    // Offset 3 sits between the surrogates and resolves after the cluster
    f.host.place_caret(3);

    f.edit(EditIntent::DeleteBackward);
    assert_eq!(f.value, "abcd");
    assert_eq!(f.caret(), Some(2));
}

#[test]
fn test_backspace_never_orphans_code_units() {
    for value in ["🇳🇴x", "👨‍👩‍👧‍👦x", "👍🏽x", "e\u{301}x"] {
        let mut f = field(value, RenderMode::Masked);
        f.host.place_caret(1);
        f.edit(EditIntent::DeleteBackward);
        assert_eq!(f.value, "x", "{value:?}");
    }
}

#[test]
fn test_delete_forward_removes_next_cluster() {
    let mut f = field("a🇳🇴b", RenderMode::Masked);
    f.host.place_caret(1);

    f.edit(EditIntent::DeleteForward);
    assert_eq!(f.value, "ab");
    assert_eq!(f.caret(), Some(1));
}

#[test]
fn test_delete_at_boundaries_is_noop() {
    let mut f = field("ab", RenderMode::Masked);
    f.host.place_caret(0);
    f.edit(EditIntent::DeleteBackward);
    f.host.place_caret(2);
    f.edit(EditIntent::DeleteForward);

    assert_eq!(f.value, "ab");
    assert!(f.changes.is_empty());
}

#[test]
fn test_delete_selection_in_masked_mode() {
    let mut f = field("a👍🏽🐶b", RenderMode::Masked);
    f.host.select(3, 1);

    f.edit(EditIntent::DeleteBackward);
    assert_eq!(f.value, "ab");
    assert_eq!(f.caret(), Some(1));
}

// ========================================================================
// Insertion
// ========================================================================

#[test]
fn test_typing_replaces_selection() {
    let mut f = field("abcd", RenderMode::Plaintext);
    f.host.select(1, 3);

    f.edit(EditIntent::InsertText("🐶".into()));
    assert_eq!(f.value, "a🐶d");
    assert_eq!(f.caret(), Some(3));
}

#[test]
fn test_paste_counts_graphemes_for_cursor() {
    let mut f = field("ad", RenderMode::Masked);
    f.host.place_caret(1);

    f.edit(EditIntent::InsertFromPaste("b🇳🇴c".into()));
    assert_eq!(f.value, "ab🇳🇴cd");
    assert_eq!(f.caret(), Some(4));
    assert_eq!(f.displayed(), "•••••");
}

#[test]
fn test_insert_symbol_worked_example() {
    let result = insert_symbol("🙂", "abcd", Some(2), RenderMode::Masked);
    assert_eq!(result.value, "ab🙂cd");
    assert_eq!(result.cursor.grapheme, 3);
}

#[test]
fn test_insertion_preserves_surrounding_graphemes() {
    for value in SAMPLES {
        let graphemes = split_graphemes(value);
        for g in 0..=graphemes.len() {
            let result = insert_symbol("🔑", value, Some(g), RenderMode::Masked);
            let mut expected = graphemes.clone();
            expected.insert(g, "🔑");
            assert_eq!(split_graphemes(&result.value), expected, "{value:?} at {g}");
            assert_eq!(result.cursor.grapheme, g + 1);
        }
    }
}

#[test]
fn test_joining_insertion_keeps_caret_on_boundary() {
    // A skin tone picked right after 👍 merges into it
    let mut f = field("👍ab", RenderMode::Masked);
    f.host.place_caret(1);
    f.insert("\u{1F3FD}");
    assert_eq!(f.value, "👍🏽ab");
    assert_eq!(f.displayed(), "•••");
    assert_eq!(f.caret(), Some(1));

    // Second regional indicator completes the flag
    let mut f = field("🇳ab", RenderMode::Masked);
    f.host.place_caret(1);
    f.insert("🇴");
    assert_eq!(f.value, "🇳🇴ab");
    assert_eq!(f.caret(), Some(1));

    // Combining accent typed in plaintext after a
    let mut f = field("ab", RenderMode::Plaintext);
    f.host.place_caret(1);
    assert!(f.edit(EditIntent::InsertText("\u{301}".into())));
    assert_eq!(f.value, "a\u{301}b");
    let caret = f.caret().unwrap();
    assert_eq!(caret, 2);
    let index = grapheme_index_for_code_unit_offset(&f.value, caret);
    assert_eq!(code_unit_offset_for_grapheme_index(&f.value, index), caret);
}

#[test]
fn test_joining_insertion_then_typing_appends_after_cluster() {
    let mut f = field("👍ab", RenderMode::Masked);
    f.host.place_caret(1);
    f.insert("\u{1F3FD}");
    f.edit(EditIntent::InsertText("x".into()));
    assert_eq!(f.value, "👍🏽xab");
    assert_eq!(f.caret(), Some(2));
}

#[test]
fn test_palette_insert_at_caret_then_keep_typing() {
    let mut f = field("abcd", RenderMode::Masked);
    f.host.place_caret(2);

    f.insert("🙂");
    f.edit(EditIntent::InsertText("x".into()));
    assert_eq!(f.value, "ab🙂xcd");
    assert_eq!(f.caret(), Some(4));
}

#[test]
fn test_palette_insert_unfocused_appends() {
    let mut f = field("ab", RenderMode::Masked);
    f.host.blur();

    f.insert("🐶");
    f.insert("🐱");
    assert_eq!(f.value, "ab🐶🐱");
    assert!(!f.host.is_focused());
}

#[test]
fn test_palette_insert_refocus_policy() {
    let mut f = field_with(
        "",
        EditorOptions {
            refocus: RefocusPolicy::Refocus,
            ..EditorOptions::default()
        },
    );
    f.host.blur();

    f.insert("🐶");
    assert!(f.host.is_focused());
    assert_eq!(f.caret(), Some(1));
}

// ========================================================================
// Mode toggle
// ========================================================================

#[test]
fn test_toggle_round_trip_restores_grapheme_position() {
    for value in SAMPLES {
        for g in 0..=count_graphemes(value) {
            let mut f = field(value, RenderMode::Masked);
            f.host.place_caret(g);

            assert_eq!(f.toggle(), RenderMode::Plaintext);
            assert_eq!(f.toggle(), RenderMode::Masked);
            assert_eq!(f.caret(), Some(g), "{value:?} at {g}");
            assert_eq!(f.value, *value);
        }
    }
}

#[test]
fn test_toggle_shows_plaintext_offset() {
    let mut f = field("👍🏽ab", RenderMode::Masked);
    f.host.place_caret(1);

    f.toggle();
    assert_eq!(f.displayed(), "👍🏽ab");
    assert_eq!(f.caret(), Some(4));
}

// ========================================================================
// Unknown intents and pure edits
// ========================================================================

#[test]
fn test_unknown_intent_is_left_alone() {
    let mut f = field("abc", RenderMode::Masked);
    f.host.place_caret(2);

    let intent = EditIntent::from_input_type("historyUndo", None);
    assert!(!f.edit(intent));
    assert_eq!(f.value, "abc");
    assert!(f.changes.is_empty());
}

#[test]
fn test_apply_edit_unknown_returns_none() {
    let intent = EditIntent::Unknown("formatBold".into());
    assert!(apply_edit(&intent, "abc", Selection::collapsed(1), RenderMode::Plaintext).is_none());
}

#[test]
fn test_input_type_mapping() {
    assert_eq!(
        EditIntent::from_input_type("insertText", Some("a")),
        EditIntent::InsertText("a".into())
    );
    assert_eq!(
        EditIntent::from_input_type("insertFromPaste", Some("🐶")),
        EditIntent::InsertFromPaste("🐶".into())
    );
    assert_eq!(
        EditIntent::from_input_type("deleteContentBackward", None),
        EditIntent::DeleteBackward
    );
    assert_eq!(
        EditIntent::from_input_type("deleteContentForward", None),
        EditIntent::DeleteForward
    );
}

#[test]
fn test_rapid_edits_apply_latest_correction_only() {
    let mut f = field("", RenderMode::Masked);
    let mut value = String::new();
    for text in ["a", "👍", "b"] {
        let current = value.clone();
        f.input
            .handle_native_edit(&mut f.host, &current, &EditIntent::InsertText(text.into()), &mut |v| {
                value = v
            });
    }
    assert_eq!(f.input.pending_corrections(), 3);

    assert!(f.input.run_deferred(&mut f.host, &value));
    assert_eq!(f.input.pending_corrections(), 0);
    assert_eq!(value, "a👍b");
    assert_eq!(f.caret(), Some(3));
}
