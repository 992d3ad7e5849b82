//! Cell binding layer
//!
//! Maps a table's column definitions onto the engine: for each cell the
//! renderer asks [`cell_view`] whether to draw a static presentation from
//! the mirror or the configured editor wired to the session, and routes
//! input through the message constructors here. The engine stays free of
//! rendering concerns; this module is the whole contract with the table
//! feature.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messages::Msg;
use crate::model::{EngineState, RowId};

/// Which editor a column uses while its cells are being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorKind {
    /// Free text input
    Text,
    /// Numeric input
    Number,
    /// Date input
    Date,
    /// Single choice from a fixed option list
    Choice,
}

/// Column metadata supplied by the table feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub field: String,
    pub editor: EditorKind,
    /// Options for [`EditorKind::Choice`]; empty for other kinds
    #[serde(default)]
    pub choices: Vec<Value>,
}

impl ColumnSpec {
    pub fn text(field: impl Into<String>) -> Self {
        Self::plain(field, EditorKind::Text)
    }

    pub fn number(field: impl Into<String>) -> Self {
        Self::plain(field, EditorKind::Number)
    }

    pub fn date(field: impl Into<String>) -> Self {
        Self::plain(field, EditorKind::Date)
    }

    pub fn choice(field: impl Into<String>, choices: Vec<Value>) -> Self {
        Self {
            field: field.into(),
            editor: EditorKind::Choice,
            choices,
        }
    }

    fn plain(field: impl Into<String>, editor: EditorKind) -> Self {
        Self {
            field: field.into(),
            editor,
            choices: Vec::new(),
        }
    }
}

/// The field names of a column set, in render order.
///
/// Feed this to `DataMsg::SetVisibleFields` whenever columns change.
pub fn visible_fields(columns: &[ColumnSpec]) -> Vec<String> {
    columns.iter().map(|c| c.field.clone()).collect()
}

/// What a table renderer should draw for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellView<'a> {
    /// Static presentation of the mirror's value; a pointer action on it
    /// should send [`display_cell_msg`]
    Display { value: Option<&'a Value> },
    /// The active editor, wired to update/commit/cancel/advance
    Editor {
        kind: EditorKind,
        value: Option<&'a Value>,
        choices: &'a [Value],
    },
}

/// Decide how to render `(row_id, field)`.
///
/// The cell matching the active session renders its column's editor bound
/// to the session value; every other cell renders from the optimistic
/// mirror. A session cell whose column vanished from the set falls back to
/// display.
pub fn cell_view<'a>(
    state: &'a EngineState,
    columns: &'a [ColumnSpec],
    row_id: &RowId,
    field: &str,
) -> CellView<'a> {
    let is_active = state
        .current_session()
        .is_some_and(|s| s.row_id == *row_id && s.field == field);

    if is_active {
        if let Some(column) = columns.iter().find(|c| c.field == field) {
            return CellView::Editor {
                kind: column.editor,
                value: state.current_edit_value(),
                choices: &column.choices,
            };
        }
    }

    CellView::Display {
        value: state.mirror.value(row_id, field),
    }
}

/// Structural key presses an active editor routes to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Persist the pending changes (e.g. Enter)
    Confirm,
    /// Move to the next editable target (e.g. Tab)
    Advance,
    /// Abort the session and revert (e.g. Escape)
    Abort,
}

/// Map a structural key press to its engine message.
///
/// `at` is the wall-clock time of the key event; only `Advance` uses it.
pub fn editor_key_msg(key: EditorKey, at: Instant) -> Msg {
    match key {
        EditorKey::Confirm => Msg::commit(),
        EditorKey::Advance => Msg::advance(at),
        EditorKey::Abort => Msg::cancel(),
    }
}

/// Message for a pointer action on a display cell.
///
/// `fallback` seeds the editor when the mirror has no value for the cell;
/// renderers pass the value they just displayed.
pub fn display_cell_msg(row_id: RowId, field: impl Into<String>, fallback: Value) -> Msg {
    Msg::start_editing(row_id, field, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::messages::{NavMsg, SessionMsg};
    use crate::model::Record;
    use serde_json::json;

    fn engine() -> EngineState {
        let config = EngineConfig::new(vec!["title".into(), "stage".into()]);
        let records = vec![Record::new().with("id", "1").with("title", "Alpha")];
        EngineState::new(config, records)
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::text("title"),
            ColumnSpec::choice("stage", vec![json!("Lead"), json!("Won")]),
        ]
    }

    #[test]
    fn test_inactive_cell_renders_display() {
        let engine = engine();
        let cols = columns();
        let view = cell_view(&engine, &cols, &RowId::new("1"), "title");
        assert_eq!(
            view,
            CellView::Display {
                value: Some(&json!("Alpha"))
            }
        );
    }

    #[test]
    fn test_active_cell_renders_editor() {
        let mut engine = engine();
        engine.start_editing(RowId::new("1"), "title", json!(""));
        engine.update_value(json!("Al"));

        let cols = columns();
        let view = cell_view(&engine, &cols, &RowId::new("1"), "title");
        assert_eq!(
            view,
            CellView::Editor {
                kind: EditorKind::Text,
                value: Some(&json!("Al")),
                choices: &[],
            }
        );
    }

    #[test]
    fn test_choice_editor_carries_options() {
        let mut engine = engine();
        engine.start_editing(RowId::new("1"), "stage", json!("Lead"));

        let cols = columns();
        let view = cell_view(&engine, &cols, &RowId::new("1"), "stage");
        match view {
            CellView::Editor { kind, choices, .. } => {
                assert_eq!(kind, EditorKind::Choice);
                assert_eq!(choices, [json!("Lead"), json!("Won")]);
            }
            other => panic!("expected editor view, got {:?}", other),
        }
    }

    #[test]
    fn test_other_rows_render_display_while_editing() {
        let mut engine = engine();
        engine.start_editing(RowId::new("1"), "title", json!(""));

        let cols = columns();
        let view = cell_view(&engine, &cols, &RowId::new("2"), "title");
        assert!(matches!(view, CellView::Display { .. }));
    }

    #[test]
    fn test_editor_key_routing() {
        let at = Instant::now();
        assert_eq!(editor_key_msg(EditorKey::Confirm, at), Msg::commit());
        assert_eq!(editor_key_msg(EditorKey::Abort, at), Msg::cancel());
        assert_eq!(
            editor_key_msg(EditorKey::Advance, at),
            Msg::Nav(NavMsg::Advance { at })
        );
    }

    #[test]
    fn test_display_cell_msg_starts_session() {
        let msg = display_cell_msg(RowId::new("1"), "title", json!("Alpha"));
        assert!(matches!(msg, Msg::Session(SessionMsg::Start { .. })));
    }

    #[test]
    fn test_visible_fields_from_columns() {
        assert_eq!(
            visible_fields(&columns()),
            vec!["title".to_string(), "stage".to_string()]
        );
    }
}
