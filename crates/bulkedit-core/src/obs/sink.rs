//! Event sink boundary.
//!
//! All instrumentation flows through `EngineEvent` and `EventSink`. This
//! module is the only bridge between engine logic and the counter state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn EventSink>>> = RefCell::new(None);
}

///
/// EngineEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineEvent {
    Flatten {
        emitted: u64,
        excluded: u64,
    },
    SelectionChange {
        selected: u64,
        removed: u64,
        repaired: bool,
    },
    ColumnToggle,
    ColumnMove,
    ColumnRejected,
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: EngineEvent);
}

/// GlobalEventSink
/// Default thread-local sink that writes into the counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalEventSink;

impl EventSink for GlobalEventSink {
    fn record(&self, event: EngineEvent) {
        metrics::with_state_mut(|m| match event {
            EngineEvent::Flatten { emitted, excluded } => {
                m.ops.flatten_calls = m.ops.flatten_calls.saturating_add(1);
                m.ops.fields_emitted = m.ops.fields_emitted.saturating_add(emitted);
                m.ops.fields_excluded = m.ops.fields_excluded.saturating_add(excluded);
            }
            EngineEvent::SelectionChange {
                removed, repaired, ..
            } => {
                m.ops.selection_changes = m.ops.selection_changes.saturating_add(1);
                if repaired {
                    m.ops.repair_passes = m.ops.repair_passes.saturating_add(1);
                }
                m.ops.form_removals = m.ops.form_removals.saturating_add(removed);
            }
            EngineEvent::ColumnToggle => {
                m.ops.column_toggles = m.ops.column_toggles.saturating_add(1);
            }
            EngineEvent::ColumnMove => {
                m.ops.column_moves = m.ops.column_moves.saturating_add(1);
            }
            EngineEvent::ColumnRejected => {
                m.ops.column_rejections = m.ops.column_rejections.saturating_add(1);
            }
        });
    }
}

pub(crate) fn record(event: EngineEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GlobalEventSink.record(event),
    }
}

/// Snapshot the current counters for test and diagnostics plumbing.
#[must_use]
pub fn events_report() -> crate::obs::EventReport {
    metrics::report()
}

/// Reset all counters.
pub fn events_reset() {
    metrics::reset();
}

/// Run a closure with a temporary sink override.
pub fn with_event_sink<T>(sink: Rc<dyn EventSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn EventSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::Cell,
        panic::{AssertUnwindSafe, catch_unwind},
    };

    #[derive(Default)]
    struct CountingSink {
        calls: Cell<usize>,
    }

    impl EventSink for CountingSink {
        fn record(&self, _: EngineEvent) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn global_sink_accumulates_counters() {
        events_reset();

        record(EngineEvent::Flatten {
            emitted: 3,
            excluded: 1,
        });
        record(EngineEvent::SelectionChange {
            selected: 1,
            removed: 2,
            repaired: true,
        });
        record(EngineEvent::SelectionChange {
            selected: 2,
            removed: 0,
            repaired: false,
        });
        record(EngineEvent::ColumnRejected);

        let ops = events_report().ops;
        assert_eq!(ops.flatten_calls, 1);
        assert_eq!(ops.fields_emitted, 3);
        assert_eq!(ops.fields_excluded, 1);
        assert_eq!(ops.selection_changes, 2);
        assert_eq!(ops.repair_passes, 1);
        assert_eq!(ops.form_removals, 2);
        assert_eq!(ops.column_rejections, 1);

        events_reset();
        assert_eq!(events_report(), crate::obs::EventReport::default());
    }

    #[test]
    fn with_event_sink_routes_and_restores_nested_overrides() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let outer = Rc::new(CountingSink::default());
        let inner = Rc::new(CountingSink::default());

        with_event_sink(outer.clone(), || {
            record(EngineEvent::ColumnMove);

            with_event_sink(inner.clone(), || {
                record(EngineEvent::ColumnMove);
            });

            // inner override was restored to outer
            record(EngineEvent::ColumnToggle);
        });

        assert_eq!(outer.calls.get(), 2);
        assert_eq!(inner.calls.get(), 1);

        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }

    #[test]
    fn with_event_sink_restores_override_on_panic() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let sink = Rc::new(CountingSink::default());
        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_event_sink(sink.clone(), || {
                record(EngineEvent::ColumnToggle);
                panic!("boom");
            });
        }))
        .is_err();

        assert!(panicked);
        assert_eq!(sink.calls.get(), 1);
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }
}
