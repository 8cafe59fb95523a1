//! Bridge from `slog` into a redacting sink chain.
//!
//! [`SinkDrain`] implements `slog::Drain` by converting each record into a
//! [`LogEntry`] plus an ordered [`Field`] sequence and handing both to any
//! [`Sink`]. Layer a [`RedactingSink`](crate::RedactingSink) underneath and
//! every `info!`/`warn!` key-value pair flows through the rule table before
//! it reaches the output:
//!
//! ```
//! use logveil::{CaptureSink, RedactingSink, RuleSet, slog::SinkDrain};
//! use slog::{Drain, info, o};
//!
//! let captured = CaptureSink::new();
//! let drain = SinkDrain::new(RedactingSink::new(captured.clone(), RuleSet::with_defaults()));
//! let logger = slog::Logger::root(drain.fuse(), o!());
//!
//! info!(logger, "sms sent"; "phone" => "13800138000");
//!
//! let writes = captured.writes();
//! assert_eq!(writes[0].fields[0].value().as_str(), Some("138****8000"));
//! ```
//!
//! Logger-bound context pairs are collected before the statement's own
//! pairs, so both pass through the same rules. Value kinds are preserved
//! for strings, booleans, integers and floats; anything slog renders
//! through `emit_arguments` (units, errors, custom Display values) arrives
//! as a string field.

use std::fmt::Arguments;

use slog::{Drain, KV, Key, OwnedKVList, Record};

use crate::{
    entry::{Level, Location, LogEntry},
    field::Field,
    sink::{Sink, WriteError},
};

/// A `slog::Drain` that writes every record to a [`Sink`].
#[derive(Clone, Debug)]
pub struct SinkDrain<S> {
    sink: S,
}

impl<S> SinkDrain<S> {
    /// Wraps a sink. Pass a redacting chain to mask on the way through.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The wrapped sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: Sink> Drain for SinkDrain<S> {
    type Ok = ();
    type Err = WriteError;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<(), WriteError> {
        let mut collector = FieldCollector::default();
        values
            .serialize(record, &mut collector)
            .map_err(WriteError::sink)?;
        record
            .kv()
            .serialize(record, &mut collector)
            .map_err(WriteError::sink)?;

        let entry = LogEntry::new(level_from_slog(record.level()), record.msg().to_string())
            .with_location(Location::new(
                record.file(),
                record.line(),
                record.module(),
            ));
        self.sink.write(entry, collector.fields)
    }
}

fn level_from_slog(level: slog::Level) -> Level {
    match level {
        slog::Level::Critical | slog::Level::Error => Level::Error,
        slog::Level::Warning => Level::Warn,
        slog::Level::Info => Level::Info,
        slog::Level::Debug => Level::Debug,
        slog::Level::Trace => Level::Trace,
    }
}

/// Collects slog key-value pairs into owned [`Field`]s, keeping kinds.
#[derive(Default)]
struct FieldCollector {
    fields: Vec<Field>,
}

impl slog::Serializer for FieldCollector {
    fn emit_arguments(&mut self, key: Key, val: &Arguments<'_>) -> slog::Result {
        self.fields.push(Field::new(key, val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: Key, val: &str) -> slog::Result {
        self.fields.push(Field::new(key, val.to_string()));
        Ok(())
    }

    fn emit_bool(&mut self, key: Key, val: bool) -> slog::Result {
        self.fields.push(Field::new(key, val));
        Ok(())
    }

    fn emit_i64(&mut self, key: Key, val: i64) -> slog::Result {
        self.fields.push(Field::new(key, val));
        Ok(())
    }

    fn emit_u64(&mut self, key: Key, val: u64) -> slog::Result {
        self.fields.push(Field::new(key, val));
        Ok(())
    }

    fn emit_f64(&mut self, key: Key, val: f64) -> slog::Result {
        self.fields.push(Field::new(key, val));
        Ok(())
    }

    fn emit_i32(&mut self, key: Key, val: i32) -> slog::Result {
        self.fields.push(Field::new(key, i64::from(val)));
        Ok(())
    }

    fn emit_u32(&mut self, key: Key, val: u32) -> slog::Result {
        self.fields.push(Field::new(key, u64::from(val)));
        Ok(())
    }

    fn emit_usize(&mut self, key: Key, val: usize) -> slog::Result {
        self.fields.push(Field::new(key, val as u64));
        Ok(())
    }

    fn emit_isize(&mut self, key: Key, val: isize) -> slog::Result {
        self.fields.push(Field::new(key, val as i64));
        Ok(())
    }
}
