//! Recording subscriber for asserting on emitted log events.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
pub(crate) struct RecordedEvents(Arc<Mutex<Vec<(Level, String)>>>);

impl RecordedEvents {
    pub(crate) fn contains(&self, level: Level, needle: &str) -> bool {
        self.0
            .lock()
            .unwrap()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    pub(crate) fn count(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|(l, _)| *l == level).count()
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for RecordedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push((*event.metadata().level(), visitor.0));
    }
}

/// Install a recording subscriber for the current thread.
///
/// Events are recorded until the returned guard is dropped.
pub(crate) fn record_events() -> (RecordedEvents, DefaultGuard) {
    let events = RecordedEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (events, guard)
}
