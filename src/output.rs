//! JSON rendering of the changelog payload.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::changelog::Payload;
use crate::error::OutputError;

/// Single-line JSON with `", "` between items and `": "` after keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedCompactFormatter;

impl Formatter for SpacedCompactFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Render the payload as JSON.
///
/// Pretty output is indented by two spaces and ends with a single newline.
/// Compact output stays on one line with no trailing newline. Non-ASCII
/// text is kept as UTF-8.
pub fn render_payload(payload: &Payload, pretty: bool) -> Result<String, OutputError> {
    if pretty {
        let mut json = serde_json::to_string_pretty(payload).map_err(OutputError::Serialize)?;
        json.push('\n');
        return Ok(json);
    }

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedCompactFormatter);
    payload
        .serialize(&mut ser)
        .map_err(OutputError::Serialize)?;
    String::from_utf8(buf).map_err(OutputError::Encoding)
}

/// Render the payload and write it to `writer`.
pub fn write_payload<W: Write>(
    writer: &mut W,
    payload: &Payload,
    pretty: bool,
) -> Result<(), OutputError> {
    let json = render_payload(payload, pretty)?;
    writer
        .write_all(json.as_bytes())
        .map_err(OutputError::Write)?;
    writer.flush().map_err(OutputError::Write)
}
