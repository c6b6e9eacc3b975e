//! Encoding and decoding of [`Record`] values. Pure and stateless.

use tracing::{debug, warn};

use crate::error::CodecError;
use crate::format::{header, FORMAT_VERSION, HEADER_SIZE, VERSION_SIZE};
use crate::Record;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

pub fn encode(record: &Record) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(encoded_len(record));
    encode_to(record, &mut buf)?;
    Ok(buf)
}

/// Append the encoded form of `record` to `buf`.
///
/// On error `buf` is left as it was.
pub fn encode_to(record: &Record, buf: &mut Vec<u8>) -> Result<()> {
    let text = record.text_value().as_bytes();
    let text_length = length_prefix(text.len())?;

    let start = buf.len();
    buf.resize(start + HEADER_SIZE, 0);
    let mut view = header::View::new(&mut buf[start..]);
    view.format_version_mut().write(FORMAT_VERSION);
    view.int_value_mut().write(record.int_value());
    view.text_length_mut().write(text_length);
    buf.extend_from_slice(text);

    debug!(bytes = buf.len() - start, text_length, "Encoded record");
    Ok(())
}

pub fn encoded_len(record: &Record) -> usize {
    HEADER_SIZE + record.text_value().len()
}

fn length_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        CodecError::Encoding(format!("text of {len} bytes does not fit the length prefix"))
    })
}

/// Decode exactly one record.
///
/// Checks run in order: version marker, header length, declared text length,
/// UTF-8, trailing bytes. Nothing past a failed check is interpreted.
pub fn decode(bytes: &[u8]) -> Result<Record> {
    let (record, consumed) = decode_prefix(bytes)?;
    if consumed != bytes.len() {
        return Err(CodecError::MalformedInput(format!(
            "{} trailing bytes after record",
            bytes.len() - consumed
        )));
    }
    Ok(record)
}

/// Decode one record from the front of `bytes`, returning it together with
/// the number of bytes consumed.
pub fn decode_prefix(bytes: &[u8]) -> Result<(Record, usize)> {
    let (int_value, text_length) = read_header(bytes)?;
    let end = HEADER_SIZE
        .checked_add(text_length)
        .ok_or_else(|| CodecError::MalformedInput("text length overflows".to_owned()))?;
    if bytes.len() < end {
        return Err(CodecError::truncated(end, bytes.len()));
    }

    let text = decode_text(&bytes[HEADER_SIZE..end])?;
    debug!(bytes = end, text_length, "Decoded record");
    Ok((Record::new(int_value, text), end))
}

// The version is checked whenever its eight bytes are present, even if the
// rest of the header is missing.
pub(crate) fn read_header(bytes: &[u8]) -> Result<(i32, usize)> {
    if bytes.len() < VERSION_SIZE {
        return Err(CodecError::truncated(VERSION_SIZE, bytes.len()));
    }
    let mut version = [0u8; VERSION_SIZE];
    version.copy_from_slice(&bytes[..VERSION_SIZE]);
    let found = u64::from_be_bytes(version);
    if found != FORMAT_VERSION {
        warn!(expected = FORMAT_VERSION, found, "Rejecting encoded record");
        return Err(CodecError::FormatVersionMismatch {
            expected: FORMAT_VERSION,
            found,
        });
    }

    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::truncated(HEADER_SIZE, bytes.len()));
    }
    let view = header::View::new(&bytes[..HEADER_SIZE]);
    let text_length = usize::try_from(view.text_length().read())
        .map_err(|_| CodecError::MalformedInput("text length exceeds address space".to_owned()))?;
    Ok((view.int_value().read(), text_length))
}

pub(crate) fn decode_text(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| CodecError::MalformedInput(format!("text is not valid UTF-8: {e}")))
}
