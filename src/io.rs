//! Reading and writing encoded records over async byte streams and files.
//!
//! Every handle opened here is owned by the call that opened it and is
//! dropped on all exit paths, error returns included.

use std::path::Path;

use tokio::{
    fs::File,
    io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter},
};
use tracing::{debug, info};

use crate::codec::{self, decode_text, read_header, Result};
use crate::error::CodecError;
use crate::format::HEADER_SIZE;
use crate::Record;

pub async fn write_record<W>(writer: &mut W, record: &Record) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let buf = codec::encode(record)?;
    writer.write_all(&buf).await?;
    Ok(())
}

/// Read exactly one record from `reader`.
///
/// The version marker is checked before the text is read. A stream that ends
/// before the declared length yields [`CodecError::TruncatedInput`].
pub async fn read_record<R>(reader: &mut R) -> Result<Record>
where
    R: AsyncRead + Unpin,
{
    let mut header_buf = [0u8; HEADER_SIZE];
    let filled = read_full(reader, &mut header_buf).await?;
    let (int_value, text_length) = read_header(&header_buf[..filled])?;

    // grows only with bytes that actually arrive
    let mut text_buf = Vec::new();
    (&mut *reader)
        .take(text_length as u64)
        .read_to_end(&mut text_buf)
        .await?;
    if text_buf.len() < text_length {
        return Err(CodecError::truncated(
            HEADER_SIZE + text_length,
            HEADER_SIZE + text_buf.len(),
        ));
    }

    let text = decode_text(&text_buf)?;
    debug!(bytes = HEADER_SIZE + text_length, "Read record");
    Ok(Record::new(int_value, text))
}

/// Write `record` to the file at `path`, replacing any previous contents.
/// The file is left untouched if encoding fails.
pub async fn save(path: impl AsRef<Path>, record: &Record) -> Result<()> {
    let path = path.as_ref();
    let buf = codec::encode(record)?;
    let mut writer = BufWriter::new(File::create(path).await?);
    writer.write_all(&buf).await?;
    writer.flush().await?;
    info!(path = %path.display(), "Saved record");
    Ok(())
}

pub async fn load(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path).await?);
    let record = read_record(&mut reader).await?;

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).await?;
    if !rest.is_empty() {
        return Err(CodecError::MalformedInput(format!(
            "{} trailing bytes after record",
            rest.len()
        )));
    }

    info!(path = %path.display(), "Loaded record");
    Ok(record)
}

// Stops early only at end of stream.
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
