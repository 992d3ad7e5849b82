//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Once;

use gridedit::commands::Cmd;
use gridedit::messages::{Msg, PointerMsg};
use gridedit::model::{EngineState, PendingChanges, Record, RowId};
use gridedit::{update, EngineConfig, SaveError};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route engine tracing through the test harness.
///
/// Silent by default; `RUST_LOG=gridedit=debug cargo test -- --nocapture`
/// shows the engine's transition logs for a failing scenario.
fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Minimal host driving the engine the way a real table feature would:
/// runs `update`, queues emitted persistence requests, and resolves them
/// on demand so tests control when the asynchronous boundary settles.
pub struct TestHost {
    pub engine: EngineState,
    /// Persistence requests emitted but not yet resolved, oldest first
    pub in_flight: Vec<(RowId, PendingChanges)>,
    /// An ArmOutsideCanceller is waiting for the next tick
    arm_requested: bool,
}

impl TestHost {
    pub fn new(config: EngineConfig, records: Vec<Record>) -> Self {
        init_tracing();
        Self {
            engine: EngineState::new(config, records),
            in_flight: Vec::new(),
            arm_requested: false,
        }
    }

    /// Run one message through the engine, collecting its side effects
    pub fn send(&mut self, msg: Msg) -> Cmd {
        let cmd = Cmd::from(update(&mut self.engine, msg));
        self.collect(&cmd);
        cmd
    }

    fn collect(&mut self, cmd: &Cmd) {
        match cmd {
            Cmd::PersistRow { row_id, changes } => {
                self.in_flight.push((row_id.clone(), changes.clone()));
            }
            Cmd::ArmOutsideCanceller => self.arm_requested = true,
            Cmd::DisarmOutsideCanceller => self.arm_requested = false,
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.collect(c);
                }
            }
            Cmd::None | Cmd::Redraw => {}
        }
    }

    /// The cooperative tick that arms the outside canceller
    pub fn tick(&mut self) {
        if self.arm_requested {
            self.arm_requested = false;
            self.send(Msg::Pointer(PointerMsg::Armed));
        }
    }

    /// Resolve the oldest in-flight save with the given outcome
    pub fn resolve_oldest(&mut self, result: Result<(), SaveError>) -> Cmd {
        assert!(!self.in_flight.is_empty(), "no save in flight");
        let (row_id, _) = self.in_flight.remove(0);
        self.send(Msg::save_resolved(row_id, result))
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}

/// Three-row sales pipeline slice used across the suites
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", "1")
            .with("title", "Alpha")
            .with("stage", "Lead")
            .with("value", 100),
        Record::new()
            .with("id", "2")
            .with("title", "Bravo")
            .with("stage", "Won")
            .with("value", 200),
        Record::new()
            .with("id", "3")
            .with("title", "Charlie")
            .with("stage", "Lost")
            .with("value", 300),
    ]
}

/// Host over the sample records with title/stage/value editable
pub fn pipeline_host() -> TestHost {
    let config = EngineConfig::new(vec![
        "title".to_string(),
        "stage".to_string(),
        "value".to_string(),
    ]);
    TestHost::new(config, sample_records())
}

/// Current mirror value of a cell, for assertions
pub fn mirror_value(host: &TestHost, row: &str, field: &str) -> Option<serde_json::Value> {
    host.engine.mirror.value(&RowId::new(row), field).cloned()
}
