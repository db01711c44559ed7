//! HTTP/2 frame types
//!
//! This module defines the frame header, the per-type payload structures and
//! the tagged [`Frame`] value covering the frame types specified in RFC 7540
//! Section 6. Each payload struct carries its own header by value; the codec
//! recomputes the header length from the payload when a frame is written.

use crate::error::ErrorCode;
use crate::settings::Setting;
use bytes::Bytes;
use std::fmt;

/// HTTP/2 frame types (RFC 7540 Section 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameType {
    /// DATA frame (0x0) - Conveys arbitrary, variable-length sequences of octets
    Data = 0x0,
    /// HEADERS frame (0x1) - Opens a stream and carries header block fragment
    Headers = 0x1,
    /// PRIORITY frame (0x2) - Specifies sender-advised priority of a stream
    Priority = 0x2,
    /// RST_STREAM frame (0x3) - Allows immediate termination of a stream
    RstStream = 0x3,
    /// SETTINGS frame (0x4) - Conveys configuration parameters
    Settings = 0x4,
    /// PUSH_PROMISE frame (0x5) - Used to notify peer of intent to initiate stream
    PushPromise = 0x5,
    /// PING frame (0x6) - Mechanism for measuring round-trip time
    Ping = 0x6,
    /// GOAWAY frame (0x7) - Initiates shutdown of connection
    Goaway = 0x7,
    /// WINDOW_UPDATE frame (0x8) - Implements flow control
    WindowUpdate = 0x8,
    /// CONTINUATION frame (0x9) - Continues sequence of header block fragments
    Continuation = 0x9,
}

impl FrameType {
    /// Convert frame type to u8
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create frame type from u8
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x0 => Some(FrameType::Data),
            0x1 => Some(FrameType::Headers),
            0x2 => Some(FrameType::Priority),
            0x3 => Some(FrameType::RstStream),
            0x4 => Some(FrameType::Settings),
            0x5 => Some(FrameType::PushPromise),
            0x6 => Some(FrameType::Ping),
            0x7 => Some(FrameType::Goaway),
            0x8 => Some(FrameType::WindowUpdate),
            0x9 => Some(FrameType::Continuation),
            _ => None,
        }
    }

    /// Get frame type name
    pub fn name(&self) -> &'static str {
        match self {
            FrameType::Data => "DATA",
            FrameType::Headers => "HEADERS",
            FrameType::Priority => "PRIORITY",
            FrameType::RstStream => "RST_STREAM",
            FrameType::Settings => "SETTINGS",
            FrameType::PushPromise => "PUSH_PROMISE",
            FrameType::Ping => "PING",
            FrameType::Goaway => "GOAWAY",
            FrameType::WindowUpdate => "WINDOW_UPDATE",
            FrameType::Continuation => "CONTINUATION",
        }
    }

    /// Flag bits defined for this frame type
    ///
    /// The encoder never emits bits outside this mask; the decoder keeps
    /// whatever bits arrived but parses only against these.
    pub fn flag_mask(self) -> u8 {
        match self {
            FrameType::Data => FrameFlags::END_STREAM | FrameFlags::PADDED,
            FrameType::Headers => {
                FrameFlags::END_STREAM
                    | FrameFlags::END_HEADERS
                    | FrameFlags::PADDED
                    | FrameFlags::PRIORITY
            }
            FrameType::Priority => 0,
            FrameType::RstStream => 0,
            FrameType::Settings => FrameFlags::ACK,
            FrameType::PushPromise => FrameFlags::END_HEADERS | FrameFlags::PADDED,
            FrameType::Ping => FrameFlags::ACK,
            FrameType::Goaway => 0,
            FrameType::WindowUpdate => 0,
            FrameType::Continuation => FrameFlags::END_HEADERS,
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u8())
    }
}

/// HTTP/2 frame flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameFlags(u8);

impl FrameFlags {
    /// Create empty flags
    pub fn empty() -> Self {
        FrameFlags(0)
    }

    /// Create from u8
    pub fn from_u8(flags: u8) -> Self {
        FrameFlags(flags)
    }

    /// Get raw u8 value
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Set a flag
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Check if a flag is set
    pub fn is_set(&self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    // Common flags

    /// END_STREAM flag (0x1)
    pub const END_STREAM: u8 = 0x1;

    /// ACK flag (0x1) - used for SETTINGS and PING
    pub const ACK: u8 = 0x1;

    /// END_HEADERS flag (0x4)
    pub const END_HEADERS: u8 = 0x4;

    /// PADDED flag (0x8)
    pub const PADDED: u8 = 0x8;

    /// PRIORITY flag (0x20)
    pub const PRIORITY: u8 = 0x20;

    /// Check if END_STREAM is set
    pub fn is_end_stream(&self) -> bool {
        self.is_set(Self::END_STREAM)
    }

    /// Check if ACK is set
    pub fn is_ack(&self) -> bool {
        self.is_set(Self::ACK)
    }

    /// Check if END_HEADERS is set
    pub fn is_end_headers(&self) -> bool {
        self.is_set(Self::END_HEADERS)
    }

    /// Check if PADDED is set
    pub fn is_padded(&self) -> bool {
        self.is_set(Self::PADDED)
    }

    /// Check if PRIORITY is set
    pub fn is_priority(&self) -> bool {
        self.is_set(Self::PRIORITY)
    }
}

/// The 9-byte prefix common to all frames (RFC 7540 Section 4.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Payload length in bytes (24 bits on the wire)
    pub length: u32,
    /// Frame type discriminator; kept raw so unknown codes survive decoding
    pub frame_type: u8,
    /// Frame flags
    pub flags: FrameFlags,
    /// Stream identifier (31 bits; the reserved bit is cleared)
    pub stream_id: u32,
}

impl FrameHeader {
    /// Create a new frame header
    pub fn new(length: u32, frame_type: u8, flags: FrameFlags, stream_id: u32) -> Self {
        FrameHeader {
            length,
            frame_type,
            flags,
            stream_id,
        }
    }
}

/// Priority specification (RFC 7540 Section 6.3)
///
/// Five bytes on the wire: exclusive bit, 31-bit stream dependency, weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySpec {
    /// Exclusive flag
    pub exclusive: bool,
    /// Stream dependency
    pub stream_dependency: u32,
    /// Weight (the wire value; add one for the effective 1-256 weight)
    pub weight: u8,
}

impl PrioritySpec {
    /// Create a new priority specification
    pub fn new(exclusive: bool, stream_dependency: u32, weight: u8) -> Self {
        PrioritySpec {
            exclusive,
            stream_dependency,
            weight,
        }
    }
}

/// DATA frame (RFC 7540 Section 6.1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Data payload, with any padding already removed
    pub data: Bytes,
    /// Padding length (if the PADDED flag is set)
    pub padding: Option<u8>,
}

impl DataFrame {
    /// Create a new DATA frame
    pub fn new(stream_id: u32, data: Bytes, end_stream: bool) -> Self {
        let mut flags = FrameFlags::empty();
        if end_stream {
            flags.set(FrameFlags::END_STREAM);
        }
        let mut frame = DataFrame {
            header: FrameHeader::new(0, FrameType::Data.as_u8(), flags, stream_id),
            data,
            padding: None,
        };
        frame.header.length = frame.payload_len() as u32;
        frame
    }

    /// Set padding
    pub fn with_padding(mut self, pad_len: u8) -> Self {
        self.padding = Some(pad_len);
        self.header.flags.set(FrameFlags::PADDED);
        self.header.length = self.payload_len() as u32;
        self
    }

    /// Payload size on the wire, including the pad length field and padding
    pub fn payload_len(&self) -> usize {
        let mut len = self.data.len();
        if let Some(pad_len) = self.padding {
            len += 1 + pad_len as usize;
        }
        len
    }
}

/// HEADERS frame (RFC 7540 Section 6.2)
///
/// The header block fragment is carried as opaque bytes; HPACK expansion is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Priority information (if the PRIORITY flag is set)
    pub priority: Option<PrioritySpec>,
    /// Header block fragment
    pub header_block: Bytes,
    /// Padding length (if the PADDED flag is set)
    pub padding: Option<u8>,
}

impl HeadersFrame {
    /// Create a new HEADERS frame
    pub fn new(stream_id: u32, header_block: Bytes, end_stream: bool, end_headers: bool) -> Self {
        let mut flags = FrameFlags::empty();
        if end_stream {
            flags.set(FrameFlags::END_STREAM);
        }
        if end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }
        let mut frame = HeadersFrame {
            header: FrameHeader::new(0, FrameType::Headers.as_u8(), flags, stream_id),
            priority: None,
            header_block,
            padding: None,
        };
        frame.header.length = frame.payload_len() as u32;
        frame
    }

    /// Set priority
    pub fn with_priority(mut self, priority: PrioritySpec) -> Self {
        self.priority = Some(priority);
        self.header.flags.set(FrameFlags::PRIORITY);
        self.header.length = self.payload_len() as u32;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, pad_len: u8) -> Self {
        self.padding = Some(pad_len);
        self.header.flags.set(FrameFlags::PADDED);
        self.header.length = self.payload_len() as u32;
        self
    }

    /// Payload size on the wire
    pub fn payload_len(&self) -> usize {
        let mut len = self.header_block.len();
        if self.priority.is_some() {
            len += 5;
        }
        if let Some(pad_len) = self.padding {
            len += 1 + pad_len as usize;
        }
        len
    }
}

/// PRIORITY frame (RFC 7540 Section 6.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Priority specification
    pub priority: PrioritySpec,
}

impl PriorityFrame {
    /// Create a new PRIORITY frame
    pub fn new(stream_id: u32, priority: PrioritySpec) -> Self {
        PriorityFrame {
            header: FrameHeader::new(5, FrameType::Priority.as_u8(), FrameFlags::empty(), stream_id),
            priority,
        }
    }
}

/// RST_STREAM frame (RFC 7540 Section 6.4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStreamFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Error code
    pub error_code: ErrorCode,
}

impl RstStreamFrame {
    /// Create a new RST_STREAM frame
    pub fn new(stream_id: u32, error_code: ErrorCode) -> Self {
        RstStreamFrame {
            header: FrameHeader::new(4, FrameType::RstStream.as_u8(), FrameFlags::empty(), stream_id),
            error_code,
        }
    }
}

/// SETTINGS frame (RFC 7540 Section 6.5)
///
/// Entries are kept in wire order, unknown identifiers included; collapsing
/// duplicates is left to the semantic layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Settings parameters in wire order
    pub settings: Vec<Setting>,
}

impl SettingsFrame {
    /// Create a new SETTINGS frame; always on stream 0
    pub fn new(settings: Vec<Setting>) -> Self {
        let length = (settings.len() * 6) as u32;
        SettingsFrame {
            header: FrameHeader::new(length, FrameType::Settings.as_u8(), FrameFlags::empty(), 0),
            settings,
        }
    }

    /// Create a SETTINGS ACK frame
    pub fn ack() -> Self {
        SettingsFrame {
            header: FrameHeader::new(
                0,
                FrameType::Settings.as_u8(),
                FrameFlags::from_u8(FrameFlags::ACK),
                0,
            ),
            settings: Vec::new(),
        }
    }

    /// Check if this is an ACK frame
    pub fn is_ack(&self) -> bool {
        self.header.flags.is_ack()
    }
}

/// PUSH_PROMISE frame (RFC 7540 Section 6.6)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPromiseFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Promised stream ID (31 bits; the reserved bit is cleared)
    pub promised_stream_id: u32,
    /// Header block fragment
    pub header_block: Bytes,
    /// Padding length (if the PADDED flag is set)
    pub padding: Option<u8>,
}

impl PushPromiseFrame {
    /// Create a new PUSH_PROMISE frame
    pub fn new(
        stream_id: u32,
        promised_stream_id: u32,
        header_block: Bytes,
        end_headers: bool,
    ) -> Self {
        let mut flags = FrameFlags::empty();
        if end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }
        let mut frame = PushPromiseFrame {
            header: FrameHeader::new(0, FrameType::PushPromise.as_u8(), flags, stream_id),
            promised_stream_id,
            header_block,
            padding: None,
        };
        frame.header.length = frame.payload_len() as u32;
        frame
    }

    /// Set padding
    pub fn with_padding(mut self, pad_len: u8) -> Self {
        self.padding = Some(pad_len);
        self.header.flags.set(FrameFlags::PADDED);
        self.header.length = self.payload_len() as u32;
        self
    }

    /// Payload size on the wire
    pub fn payload_len(&self) -> usize {
        let mut len = 4 + self.header_block.len();
        if let Some(pad_len) = self.padding {
            len += 1 + pad_len as usize;
        }
        len
    }
}

/// PING frame (RFC 7540 Section 6.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Opaque data (8 bytes)
    pub opaque: [u8; 8],
}

impl PingFrame {
    /// Create a new PING frame; always on stream 0
    pub fn new(opaque: [u8; 8]) -> Self {
        PingFrame {
            header: FrameHeader::new(8, FrameType::Ping.as_u8(), FrameFlags::empty(), 0),
            opaque,
        }
    }

    /// Create a PING ACK frame
    pub fn ack(opaque: [u8; 8]) -> Self {
        PingFrame {
            header: FrameHeader::new(
                8,
                FrameType::Ping.as_u8(),
                FrameFlags::from_u8(FrameFlags::ACK),
                0,
            ),
            opaque,
        }
    }

    /// Check if this is an ACK frame
    pub fn is_ack(&self) -> bool {
        self.header.flags.is_ack()
    }
}

/// GOAWAY frame (RFC 7540 Section 6.8)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoawayFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Last stream ID (31 bits; the reserved bit is cleared)
    pub last_stream_id: u32,
    /// Error code
    pub error_code: ErrorCode,
    /// Additional debug data
    pub debug_data: Bytes,
}

impl GoawayFrame {
    /// Create a new GOAWAY frame; always on stream 0
    pub fn new(last_stream_id: u32, error_code: ErrorCode, debug_data: Bytes) -> Self {
        let length = (8 + debug_data.len()) as u32;
        GoawayFrame {
            header: FrameHeader::new(length, FrameType::Goaway.as_u8(), FrameFlags::empty(), 0),
            last_stream_id,
            error_code,
            debug_data,
        }
    }
}

/// WINDOW_UPDATE frame (RFC 7540 Section 6.9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowUpdateFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Window size increment (31 bits, non-zero)
    pub window_size_increment: u32,
}

impl WindowUpdateFrame {
    /// Create a new WINDOW_UPDATE frame (stream 0 for connection-level)
    pub fn new(stream_id: u32, window_size_increment: u32) -> Self {
        WindowUpdateFrame {
            header: FrameHeader::new(
                4,
                FrameType::WindowUpdate.as_u8(),
                FrameFlags::empty(),
                stream_id,
            ),
            window_size_increment,
        }
    }
}

/// CONTINUATION frame (RFC 7540 Section 6.10)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationFrame {
    /// Frame header
    pub header: FrameHeader,
    /// Header block fragment
    pub header_block: Bytes,
}

impl ContinuationFrame {
    /// Create a new CONTINUATION frame
    pub fn new(stream_id: u32, header_block: Bytes, end_headers: bool) -> Self {
        let mut flags = FrameFlags::empty();
        if end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }
        let length = header_block.len() as u32;
        ContinuationFrame {
            header: FrameHeader::new(length, FrameType::Continuation.as_u8(), flags, stream_id),
            header_block,
        }
    }
}

/// A complete HTTP/2 frame: one header plus its typed payload
///
/// The frame universe is closed by the protocol, so the variants are matched
/// exhaustively throughout the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// DATA frame
    Data(DataFrame),
    /// HEADERS frame
    Headers(HeadersFrame),
    /// PRIORITY frame
    Priority(PriorityFrame),
    /// RST_STREAM frame
    RstStream(RstStreamFrame),
    /// SETTINGS frame
    Settings(SettingsFrame),
    /// PUSH_PROMISE frame
    PushPromise(PushPromiseFrame),
    /// PING frame
    Ping(PingFrame),
    /// GOAWAY frame
    Goaway(GoawayFrame),
    /// WINDOW_UPDATE frame
    WindowUpdate(WindowUpdateFrame),
    /// CONTINUATION frame
    Continuation(ContinuationFrame),
}

impl Frame {
    /// Get the frame header
    pub fn header(&self) -> &FrameHeader {
        match self {
            Frame::Data(f) => &f.header,
            Frame::Headers(f) => &f.header,
            Frame::Priority(f) => &f.header,
            Frame::RstStream(f) => &f.header,
            Frame::Settings(f) => &f.header,
            Frame::PushPromise(f) => &f.header,
            Frame::Ping(f) => &f.header,
            Frame::Goaway(f) => &f.header,
            Frame::WindowUpdate(f) => &f.header,
            Frame::Continuation(f) => &f.header,
        }
    }

    /// Get the frame type
    pub fn frame_type(&self) -> FrameType {
        match self {
            Frame::Data(_) => FrameType::Data,
            Frame::Headers(_) => FrameType::Headers,
            Frame::Priority(_) => FrameType::Priority,
            Frame::RstStream(_) => FrameType::RstStream,
            Frame::Settings(_) => FrameType::Settings,
            Frame::PushPromise(_) => FrameType::PushPromise,
            Frame::Ping(_) => FrameType::Ping,
            Frame::Goaway(_) => FrameType::Goaway,
            Frame::WindowUpdate(_) => FrameType::WindowUpdate,
            Frame::Continuation(_) => FrameType::Continuation,
        }
    }

    /// Get the stream ID
    pub fn stream_id(&self) -> u32 {
        self.header().stream_id
    }
}
