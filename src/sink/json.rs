//! JSON-lines output over any writer.

use std::{
    io,
    sync::{Mutex, PoisonError},
};

use chrono::SecondsFormat;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Sink, WriteError};
use crate::{entry::LogEntry, field::Field};

/// A sink that writes one JSON object per log event, newline-terminated.
///
/// Entry metadata and fields are flattened into a single object:
///
/// ```json
/// {"ts":"2026-08-07T09:15:02.412Z","level":"info","msg":"sms sent","phone":"138****8000"}
/// ```
///
/// Field names are emitted as-is and in order; duplicate names produce
/// duplicate keys, which JSON tolerates and which keeps this sink from ever
/// dropping a field. Writer access is serialized with an internal mutex so
/// concurrent writes cannot interleave bytes within a line.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: io::Write + Send> JsonSink<W> {
    /// Wraps a writer. Buffering is the caller's choice; pass a
    /// `BufWriter` when writing to a file or pipe.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwraps the sink, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: io::Write + Send> Sink for JsonSink<W> {
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError> {
        // Encode outside the lock; only the byte write is serialized.
        let mut line = serde_json::to_vec(&EventObject {
            entry: &entry,
            fields: &fields,
        })?;
        line.push(b'\n');

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&line)?;
        Ok(())
    }
}

/// Flattened view of an entry plus its fields, serialized as one map.
struct EventObject<'a> {
    entry: &'a LogEntry,
    fields: &'a [Field],
}

impl Serialize for EventObject<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(
            "ts",
            &self
                .entry
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        map.serialize_entry("level", &self.entry.level())?;
        map.serialize_entry("msg", self.entry.message())?;
        if let Some(location) = self.entry.location() {
            map.serialize_entry("file", location.file())?;
            map.serialize_entry("line", &location.line())?;
            map.serialize_entry("module", location.module())?;
        }
        for field in self.fields {
            map.serialize_entry(field.name(), field.value())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::JsonSink;
    use crate::{
        entry::{Level, Location, LogEntry},
        field::Field,
        sink::Sink,
    };

    fn written_lines(sink: JsonSink<Vec<u8>>) -> Vec<Value> {
        let bytes = sink.into_inner();
        String::from_utf8(bytes)
            .expect("sink output is UTF-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
            .collect()
    }

    #[test]
    fn one_flat_object_per_line() {
        let sink = JsonSink::new(Vec::new());
        sink.write(
            LogEntry::new(Level::Info, "sms sent"),
            vec![
                Field::new("phone", "138****8000"),
                Field::new("attempts", 2_i64),
            ],
        )
        .expect("vec writer never fails");
        sink.write(LogEntry::new(Level::Warn, "retrying"), Vec::new())
            .expect("vec writer never fails");

        let lines = written_lines(sink);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "info");
        assert_eq!(lines[0]["msg"], "sms sent");
        assert_eq!(lines[0]["phone"], "138****8000");
        assert_eq!(lines[0]["attempts"], 2);
        assert!(lines[0]["ts"].is_string());
        assert_eq!(lines[1]["msg"], "retrying");
    }

    #[test]
    fn location_is_emitted_when_present() {
        let sink = JsonSink::new(Vec::new());
        sink.write(
            LogEntry::new(Level::Debug, "tick")
                .with_location(Location::new("src/worker.rs", 17, "worker")),
            Vec::new(),
        )
        .expect("vec writer never fails");

        let lines = written_lines(sink);
        assert_eq!(lines[0]["file"], "src/worker.rs");
        assert_eq!(lines[0]["line"], 17);
        assert_eq!(lines[0]["module"], "worker");
    }

    #[test]
    fn io_failures_surface_as_write_errors() {
        struct BrokenWriter;

        impl std::io::Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "pipe closed",
                ))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = JsonSink::new(BrokenWriter);
        let error = sink
            .write(LogEntry::new(Level::Error, "event"), Vec::new())
            .expect_err("broken writer always fails");
        assert!(matches!(error, crate::sink::WriteError::Io(_)));
    }
}
