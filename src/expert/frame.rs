//! # Expert-001 Frame Synchronization
//!
//! This module locates and validates frame boundaries in the raw byte
//! stream emitted by an Expert-001 device. A frame is a 3-byte header
//! (reserved byte, marker `0xA5`, declared payload length) followed by a
//! 16-byte payload. Frames with an invalid declared length are skipped by
//! consuming a fixed 3-byte window, which realigns the stream for the
//! next read.

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_MARKER, PAYLOAD_DECLARED_LEN, PAYLOAD_LEN, RESYNC_SKIP_LEN,
};
use crate::error::ExpertError;
use log::{debug, warn};
use std::io::{ErrorKind, Read};

/// Outcome of one frame-boundary search on the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// A well-formed frame; carries the complete 16-byte payload.
    Payload([u8; PAYLOAD_LEN]),
    /// A frame with an invalid declared length was skipped. No data is
    /// produced; the caller should read again.
    Resync,
    /// The transport produced no further bytes.
    EndOfStream,
}

/// Reads one frame from the transport.
///
/// Consumes bytes in every branch and never leaves a partially-read frame
/// behind. A zero-length first read, or a transport timeout before any
/// header byte arrives, is a clean [`FrameEvent::EndOfStream`].
///
/// # Errors
/// Returns [`ExpertError::UnexpectedHeader`] when the header marker byte is
/// not `0xA5`, and passes transport failures through as [`ExpertError::Io`].
pub fn read_frame<R: Read>(transport: &mut R) -> Result<FrameEvent, ExpertError> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    let first = loop {
        match transport.read(&mut header) {
            Ok(0) => return Ok(FrameEvent::EndOfStream),
            Ok(n) => break n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(ref e) if e.kind() == ErrorKind::TimedOut => return Ok(FrameEvent::EndOfStream),
            Err(e) => return Err(e.into()),
        }
    };
    if first < FRAME_HEADER_LEN {
        transport.read_exact(&mut header[first..])?;
    }

    // header[0] is reserved and carries no information
    if header[1] != FRAME_MARKER {
        return Err(ExpertError::UnexpectedHeader(header[1]));
    }

    let declared = header[2];
    if declared != PAYLOAD_DECLARED_LEN {
        warn!(
            "invalid declared payload length {declared}, skipping {RESYNC_SKIP_LEN} bytes to resync"
        );
        skip_resync_window(transport)?;
        return Ok(FrameEvent::Resync);
    }

    let mut payload = [0u8; PAYLOAD_LEN];
    transport.read_exact(&mut payload)?;
    debug!("payload: {}", hex::encode(payload));
    Ok(FrameEvent::Payload(payload))
}

/// Consumes the fixed resynchronization window. Best-effort at end of
/// stream: a transport that runs dry mid-skip still counts as a resync.
fn skip_resync_window<R: Read>(transport: &mut R) -> Result<(), ExpertError> {
    let mut skip = [0u8; RESYNC_SKIP_LEN];
    let mut consumed = 0;
    while consumed < RESYNC_SKIP_LEN {
        match transport.read(&mut skip[consumed..]) {
            Ok(0) => break,
            Ok(n) => consumed += n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(ref e) if e.kind() == ErrorKind::TimedOut => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Packs a payload into a complete frame, header included.
pub fn encode_frame(payload: &[u8; PAYLOAD_LEN]) -> Vec<u8> {
    let mut data = Vec::with_capacity(FRAME_HEADER_LEN + PAYLOAD_LEN);
    data.push(0x00);
    data.push(FRAME_MARKER);
    data.push(PAYLOAD_DECLARED_LEN);
    data.extend_from_slice(payload);
    data
}
