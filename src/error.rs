//! Codec error types
//!
//! This module defines the failures the codec can surface while reading or
//! writing frames, together with the error codes defined in RFC 7540
//! Section 7 that RST_STREAM and GOAWAY frames carry on the wire.

use std::fmt;

/// Errors surfaced by frame encoding and decoding
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error reported by the underlying source or sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte source ended before a full header or declared payload was read
    #[error("short read: needed {expected} bytes, got {got}")]
    ShortRead {
        /// Bytes required to complete the header or payload
        expected: usize,
        /// Bytes actually available
        got: usize,
    },

    /// Frame length inconsistent with the fixed or minimum size for its type
    #[error("frame size error: {0}")]
    FrameSize(String),

    /// Structural violation detected while decoding a payload
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Header type outside the defined range; the payload was still consumed
    #[error("unknown frame type: 0x{0:x}")]
    UnknownFrameType(u8),
}

/// HTTP/2 error codes as defined in RFC 7540 Section 7
///
/// Codes outside the defined range are carried verbatim in
/// [`ErrorCode::Unknown`]; an unrecognized code is not a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Graceful shutdown
    NoError,
    /// Protocol error detected
    ProtocolError,
    /// Implementation fault
    InternalError,
    /// Flow-control limits exceeded
    FlowControlError,
    /// Settings not acknowledged
    SettingsTimeout,
    /// Frame received for closed stream
    StreamClosed,
    /// Frame size incorrect
    FrameSizeError,
    /// Stream not processed
    RefusedStream,
    /// Stream cancelled
    Cancel,
    /// Compression state not updated
    CompressionError,
    /// TCP connection error for CONNECT method
    ConnectError,
    /// Processing capacity exceeded
    EnhanceYourCalm,
    /// Negotiated TLS parameters not acceptable
    InadequateSecurity,
    /// Code outside the defined range, preserved verbatim
    Unknown(u32),
}

impl ErrorCode {
    /// Convert error code to u32
    pub fn as_u32(self) -> u32 {
        match self {
            ErrorCode::NoError => 0x0,
            ErrorCode::ProtocolError => 0x1,
            ErrorCode::InternalError => 0x2,
            ErrorCode::FlowControlError => 0x3,
            ErrorCode::SettingsTimeout => 0x4,
            ErrorCode::StreamClosed => 0x5,
            ErrorCode::FrameSizeError => 0x6,
            ErrorCode::RefusedStream => 0x7,
            ErrorCode::Cancel => 0x8,
            ErrorCode::CompressionError => 0x9,
            ErrorCode::ConnectError => 0xa,
            ErrorCode::EnhanceYourCalm => 0xb,
            ErrorCode::InadequateSecurity => 0xc,
            ErrorCode::Unknown(code) => code,
        }
    }

    /// Create error code from u32
    ///
    /// Values outside the defined range come back as
    /// [`ErrorCode::Unknown`], never as a failure.
    pub fn from_u32(code: u32) -> Self {
        match code {
            0x0 => ErrorCode::NoError,
            0x1 => ErrorCode::ProtocolError,
            0x2 => ErrorCode::InternalError,
            0x3 => ErrorCode::FlowControlError,
            0x4 => ErrorCode::SettingsTimeout,
            0x5 => ErrorCode::StreamClosed,
            0x6 => ErrorCode::FrameSizeError,
            0x7 => ErrorCode::RefusedStream,
            0x8 => ErrorCode::Cancel,
            0x9 => ErrorCode::CompressionError,
            0xa => ErrorCode::ConnectError,
            0xb => ErrorCode::EnhanceYourCalm,
            0xc => ErrorCode::InadequateSecurity,
            other => ErrorCode::Unknown(other),
        }
    }

    /// Get error name
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::NoError => "NO_ERROR",
            ErrorCode::ProtocolError => "PROTOCOL_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::FlowControlError => "FLOW_CONTROL_ERROR",
            ErrorCode::SettingsTimeout => "SETTINGS_TIMEOUT",
            ErrorCode::StreamClosed => "STREAM_CLOSED",
            ErrorCode::FrameSizeError => "FRAME_SIZE_ERROR",
            ErrorCode::RefusedStream => "REFUSED_STREAM",
            ErrorCode::Cancel => "CANCEL",
            ErrorCode::CompressionError => "COMPRESSION_ERROR",
            ErrorCode::ConnectError => "CONNECT_ERROR",
            ErrorCode::EnhanceYourCalm => "ENHANCE_YOUR_CALM",
            ErrorCode::InadequateSecurity => "INADEQUATE_SECURITY",
            ErrorCode::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u32())
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(ErrorCode::NoError.as_u32(), 0x0);
        assert_eq!(ErrorCode::ProtocolError.as_u32(), 0x1);
        assert_eq!(ErrorCode::InadequateSecurity.as_u32(), 0xc);

        assert_eq!(ErrorCode::from_u32(0x0), ErrorCode::NoError);
        assert_eq!(ErrorCode::from_u32(0x8), ErrorCode::Cancel);
    }

    #[test]
    fn test_error_code_unknown_preserved() {
        let code = ErrorCode::from_u32(0xff);
        assert_eq!(code, ErrorCode::Unknown(0xff));
        assert_eq!(code.as_u32(), 0xff);
        assert_eq!(code.name(), "UNKNOWN");
    }

    #[test]
    fn test_error_code_name() {
        assert_eq!(ErrorCode::NoError.name(), "NO_ERROR");
        assert_eq!(ErrorCode::RefusedStream.name(), "REFUSED_STREAM");
        assert_eq!(ErrorCode::EnhanceYourCalm.name(), "ENHANCE_YOUR_CALM");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NoError.to_string(), "NO_ERROR (0x0)");
        assert_eq!(
            ErrorCode::FrameSizeError.to_string(),
            "FRAME_SIZE_ERROR (0x6)"
        );
        assert_eq!(ErrorCode::Unknown(0xff).to_string(), "UNKNOWN (0xff)");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Protocol("padding exceeds payload".to_string());
        assert_eq!(err.to_string(), "protocol error: padding exceeds payload");

        let err = Error::ShortRead {
            expected: 9,
            got: 3,
        };
        assert_eq!(err.to_string(), "short read: needed 9 bytes, got 3");

        let err = Error::UnknownFrameType(0xbe);
        assert_eq!(err.to_string(), "unknown frame type: 0xbe");
    }
}
