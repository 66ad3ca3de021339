//! The expert module contains the components responsible for the core
//! Expert-001 protocol implementation, including frame synchronization and
//! serial communication.

pub mod frame;
pub mod serial;
pub mod stream;

pub use frame::{encode_frame, read_frame, FrameEvent};
pub use serial::{ExpertDeviceHandle, SerialConfig};
pub use stream::ReadingStream;
