//! External data update functions
//!
//! The authoritative record collection is fetched and refreshed outside
//! the engine. A refresh arriving while no session is open resyncs the
//! mirror immediately; mid-session it only replaces the source snapshot
//! and the resync waits for the session to close, so in-progress input is
//! never destroyed.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::DataMsg;
use crate::model::EngineState;

/// Handle external data messages
pub fn update_data(state: &mut EngineState, msg: DataMsg) -> Option<Cmd> {
    match msg {
        DataMsg::SourceRefreshed(records) => {
            state.mirror.replace_source(records);
            if state.is_editing() {
                debug!("source refresh deferred: session open");
                state.refresh_deferred = true;
                None
            } else {
                state.mirror.reset_to_source();
                Some(Cmd::Redraw)
            }
        }
        DataMsg::SetVisibleFields(fields) => {
            state.set_visible_fields(fields);
            Some(Cmd::Redraw)
        }
        DataMsg::SetEditorRegion(surfaces) => {
            state.canceller.set_region(surfaces);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::model::{Record, RowId};
    use serde_json::json;

    fn engine() -> EngineState {
        let config = EngineConfig::new(vec!["title".into()]);
        let records = vec![Record::new().with("id", "1").with("title", "Alpha")];
        EngineState::new(config, records)
    }

    fn refreshed() -> Vec<Record> {
        vec![Record::new().with("id", "1").with("title", "Fresh")]
    }

    #[test]
    fn test_refresh_applies_immediately_when_idle() {
        let mut engine = engine();
        let cmd = update_data(&mut engine, DataMsg::SourceRefreshed(refreshed()));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(
            engine.mirror.value(&RowId::new("1"), "title"),
            Some(&json!("Fresh"))
        );
    }

    #[test]
    fn test_refresh_deferred_while_editing() {
        let mut engine = engine();
        engine.start_editing(RowId::new("1"), "title", json!(""));
        engine.update_value(json!("Beta"));

        update_data(&mut engine, DataMsg::SourceRefreshed(refreshed()));
        // In-progress input survives the refresh
        assert_eq!(
            engine.mirror.value(&RowId::new("1"), "title"),
            Some(&json!("Beta"))
        );

        // The resync lands when the session closes
        engine.cancel();
        assert_eq!(
            engine.mirror.value(&RowId::new("1"), "title"),
            Some(&json!("Fresh"))
        );
    }

    #[test]
    fn test_set_visible_fields() {
        let mut engine = engine();
        let cmd = update_data(&mut engine, DataMsg::SetVisibleFields(vec![]));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(engine.visible_fields().is_empty());
    }
}
