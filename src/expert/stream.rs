//! # Reading Stream
//!
//! Composes frame synchronization and payload decoding into a lazy,
//! forward-only sequence of [`Reading`] values pulled from a transport.

use crate::error::ExpertError;
use crate::expert::frame::{read_frame, FrameEvent};
use crate::payload::reading::{decode_payload, ClockMode, Reading};
use log::debug;
use std::io::Read;

/// A pull-based stream of readings decoded from a transport-backed byte
/// source. Resynchronization events are absorbed internally and never
/// surface to the caller.
///
/// Each call to `next()` blocks until a frame arrives, the transport
/// timeout elapses, or the transport is closed. The internal resync loop
/// is unbounded: a transport that keeps producing frames with invalid
/// declared lengths blocks `next()` indefinitely. Cancellation is
/// external, by closing the transport.
pub struct ReadingStream<R> {
    transport: R,
    clock: ClockMode,
}

impl<R: Read> ReadingStream<R> {
    /// Creates a stream over a transport. The stream owns the transport
    /// exclusively for its lifetime.
    pub fn new(transport: R, clock: ClockMode) -> Self {
        ReadingStream { transport, clock }
    }

    /// Releases the transport back to the owner.
    pub fn into_inner(self) -> R {
        self.transport
    }
}

impl<R: Read> Iterator for ReadingStream<R> {
    type Item = Result<Reading, ExpertError>;

    /// Pulls the next reading. `None` signals clean end-of-stream; a fatal
    /// protocol or transport error is yielded as `Some(Err(_))`. The stream
    /// does not fuse after an error: polling again searches for the next
    /// frame boundary, with no realignment guarantee.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_frame(&mut self.transport) {
                Ok(FrameEvent::Payload(payload)) => {
                    return Some(decode_payload(&payload, self.clock));
                }
                Ok(FrameEvent::Resync) => {
                    debug!("resync event absorbed, searching for next frame");
                }
                Ok(FrameEvent::EndOfStream) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
