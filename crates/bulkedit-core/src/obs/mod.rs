//! Observability: in-process counters and the sink boundary.
//!
//! Engine code never touches `metrics` directly; every instrumentation point
//! records an `EngineEvent` through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{EngineEvent, EventSink, events_report, events_reset, with_event_sink};
