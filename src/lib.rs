//! h2wire - HTTP/2 frame codec
//!
//! This crate serializes and deserializes the binary frames of HTTP/2's
//! wire protocol (RFC 7540 Sections 4 and 6). Given a byte source it
//! reconstructs structured [`frames::Frame`] values; given a frame value it
//! produces the canonical byte sequence. It is the substrate for a
//! higher-level HTTP/2 engine: stream state, flow control, HPACK and
//! connection dispatch all live above it and header block fragments pass
//! through as opaque bytes.
//!
//! # Features
//!
//! - **All frame types**: DATA, HEADERS, PRIORITY, RST_STREAM, SETTINGS,
//!   PUSH_PROMISE, PING, GOAWAY, WINDOW_UPDATE, CONTINUATION
//! - **Exact wire fidelity**: big-endian fields, 24-bit lengths, reserved
//!   bits cleared on emit and masked on receive, padding accounted for
//! - **Stateless operation**: one frame in, one frame out; sequencing and
//!   resumption belong to the caller
//! - **Typed errors**: short reads, size violations and structural protocol
//!   errors are classified for the connection layer to act on
//! - **Diagnostic rendering**: plain or ANSI-colored frame summaries for
//!   operator logs
//!
//! # Example
//!
//! ```
//! use h2wire::codec::FrameCodec;
//! use h2wire::frames::{DataFrame, Frame};
//! use bytes::Bytes;
//!
//! let frame = Frame::Data(DataFrame::new(1, Bytes::from_static(b"hello"), true));
//!
//! let mut wire = Vec::new();
//! FrameCodec::write_frame(&mut wire, &frame).unwrap();
//!
//! let decoded = FrameCodec::read_frame(&mut wire.as_slice()).unwrap();
//! assert_eq!(decoded, frame);
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod frames;
pub mod settings;

pub use codec::{FrameCodec, FRAME_HEADER_SIZE, MAX_FRAME_SIZE};
pub use error::{Error, ErrorCode, Result};
pub use frames::{
    ContinuationFrame, DataFrame, Frame, FrameFlags, FrameHeader, FrameType, GoawayFrame,
    HeadersFrame, PingFrame, PriorityFrame, PrioritySpec, PushPromiseFrame, RstStreamFrame,
    SettingsFrame, WindowUpdateFrame,
};
pub use settings::{Setting, SettingId, Settings, SettingsBuilder};

/// Maximum stream ID value (2^31 - 1)
pub const MAX_STREAM_ID: u32 = 0x7FFF_FFFF;

/// Stream ID 0 (connection-level)
pub const CONNECTION_STREAM_ID: u32 = 0;
