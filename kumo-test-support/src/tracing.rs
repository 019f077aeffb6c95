//! Recording layer for asserting on spans and events in tests.
//!
//! Install it with [`RecordingLayer::install`] for the duration of a test;
//! the returned guard restores the previous default subscriber on drop.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::dispatcher::DefaultGuard;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Field name under which tracing stores an event's message.
const MESSAGE_FIELD: &str = "message";

/// Captures closed spans and emitted events.
#[derive(Clone, Default)]
pub struct RecordingLayer {
    store: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    /// Installs a fresh layer as the thread-local default subscriber.
    ///
    /// # Examples
    /// ```
    /// use kumo_test_support::tracing::RecordingLayer;
    ///
    /// let (layer, _guard) = RecordingLayer::install();
    /// tracing::info_span!("demo").in_scope(|| tracing::info!("inside"));
    /// assert_eq!(layer.spans_named("demo").len(), 1);
    /// assert_eq!(layer.events_with_message("inside")[0].span.as_deref(), Some("demo"));
    /// ```
    #[must_use]
    pub fn install() -> (Self, DefaultGuard) {
        let layer = Self::default();
        let guard = tracing_subscriber::registry()
            .with(layer.clone())
            .set_default();
        (layer, guard)
    }

    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.store().spans.clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.store().events.clone()
    }

    /// Returns the closed spans called `name`.
    #[must_use]
    pub fn spans_named(&self, name: &str) -> Vec<SpanRecord> {
        self.store()
            .spans
            .iter()
            .filter(|span| span.name == name)
            .cloned()
            .collect()
    }

    /// Returns the events whose message equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
        self.store()
            .events
            .iter()
            .filter(|event| event.message() == Some(message))
            .cloned()
            .collect()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Snapshot of a closed span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Fields recorded at creation and through later `record` calls.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the rendered value of `field`, if recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Snapshot of an emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Level the event was emitted at.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Name of the innermost span the event was emitted in.
    pub span: Option<String>,
    /// Structured fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the event message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field(MESSAGE_FIELD)
    }

    /// Returns the rendered value of `field`, if recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

struct PendingSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRecorder(&mut record.fields));
        span.extensions_mut().insert(PendingSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().get_mut::<PendingSpan>() {
            values.record(&mut FieldRecorder(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
            self.store().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        let span = ctx.event_span(event).map(|span| span.name().to_owned());
        self.store().events.push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            span,
            fields,
        });
    }
}

/// Renders every field kind to a string keyed by field name.
struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl FieldRecorder<'_> {
    fn insert(&mut self, field: &Field, value: impl ToString) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value);
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }
}
