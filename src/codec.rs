//! HTTP/2 frame encoding and decoding
//!
//! This module provides the wire-level frame codec: the 9-byte header
//! serializer and parser, one payload codec per frame type, and the
//! [`FrameCodec::read_frame`] / [`FrameCodec::write_frame`] dispatcher that
//! ties them together. The codec holds no state between frames; callers own
//! sequencing and must serialize access to a source or sink.
//!
//! Every multi-byte integer is big-endian. The encoder recomputes each
//! header length from the payload it actually writes and clears reserved
//! bits; the decoder masks reserved bits and surfaces structural violations
//! as [`Error`] values without consuming past the offending frame.

use crate::error::{Error, ErrorCode, Result};
use crate::frames::*;
use crate::settings::Setting;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::{self, Read, Write};

/// HTTP/2 frame header size (9 bytes)
pub const FRAME_HEADER_SIZE: usize = 9;

/// Maximum frame payload size (16MB - 1)
pub const MAX_FRAME_SIZE: usize = 0x00FF_FFFF;

/// Frame codec for encoding/decoding HTTP/2 frames
///
/// All operations are associated functions; the codec keeps no per-frame or
/// per-connection state.
pub struct FrameCodec;

impl FrameCodec {
    /// Encode a frame header into its 9-byte wire form
    pub fn encode_header(header: &FrameHeader) -> [u8; FRAME_HEADER_SIZE] {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];

        // Length (24 bits, big-endian)
        bytes[0] = ((header.length >> 16) & 0xFF) as u8;
        bytes[1] = ((header.length >> 8) & 0xFF) as u8;
        bytes[2] = (header.length & 0xFF) as u8;

        // Type (8 bits)
        bytes[3] = header.frame_type;

        // Flags (8 bits)
        bytes[4] = header.flags.as_u8();

        // Stream ID (31 bits, big-endian, reserved bit cleared)
        let stream_id = header.stream_id & 0x7FFF_FFFF;
        bytes[5] = ((stream_id >> 24) & 0xFF) as u8;
        bytes[6] = ((stream_id >> 16) & 0xFF) as u8;
        bytes[7] = ((stream_id >> 8) & 0xFF) as u8;
        bytes[8] = (stream_id & 0xFF) as u8;

        bytes
    }

    /// Decode a frame header from its 9-byte wire form
    ///
    /// The reserved bit of the stream identifier is silently masked off.
    pub fn decode_header(bytes: &[u8; FRAME_HEADER_SIZE]) -> FrameHeader {
        // Length (24 bits, big-endian)
        let length =
            ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32);

        let frame_type = bytes[3];
        let flags = FrameFlags::from_u8(bytes[4]);

        // Stream ID (31 bits, ignore reserved bit)
        let stream_id = ((bytes[5] as u32 & 0x7F) << 24)
            | ((bytes[6] as u32) << 16)
            | ((bytes[7] as u32) << 8)
            | (bytes[8] as u32);

        FrameHeader::new(length, frame_type, flags, stream_id)
    }

    /// Write a frame header to a byte sink
    pub fn write_header<W: Write>(writer: &mut W, header: &FrameHeader) -> Result<()> {
        writer.write_all(&Self::encode_header(header))?;
        Ok(())
    }

    /// Read a frame header from a byte source
    pub fn read_header<R: Read>(reader: &mut R) -> Result<FrameHeader> {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        Self::read_full(reader, &mut bytes)?;
        Ok(Self::decode_header(&bytes))
    }

    /// Fill `buf` from the reader, classifying a premature end of stream
    fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
        let mut read = 0;
        while read < buf.len() {
            match reader.read(&mut buf[read..]) {
                Ok(0) => {
                    return Err(Error::ShortRead {
                        expected: buf.len(),
                        got: read,
                    })
                }
                Ok(n) => read += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(Error::ShortRead {
                        expected: buf.len(),
                        got: read,
                    })
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(())
    }

    /// Reject payloads that cannot be described by a 24-bit length field
    fn checked_payload_len(frame_type: FrameType, len: usize) -> Result<u32> {
        if len > MAX_FRAME_SIZE {
            return Err(Error::FrameSize(format!(
                "{} payload of {} bytes exceeds the maximum frame size",
                frame_type.name(),
                len
            )));
        }
        Ok(len as u32)
    }

    /// Read one complete frame from a byte source
    ///
    /// Exactly one header plus its declared payload is consumed. A frame of
    /// unknown type still has its payload consumed before
    /// [`Error::UnknownFrameType`] is returned, so the source stays aligned
    /// on a frame boundary and the caller can skip and continue reading.
    pub fn read_frame<R: Read>(reader: &mut R) -> Result<Frame> {
        let header = Self::read_header(reader)?;

        let mut payload = vec![0u8; header.length as usize];
        Self::read_full(reader, &mut payload)?;

        let frame_type = match FrameType::from_u8(header.frame_type) {
            Some(frame_type) => frame_type,
            None => return Err(Error::UnknownFrameType(header.frame_type)),
        };

        match frame_type {
            FrameType::Data => Self::decode_data_frame(header, &payload).map(Frame::Data),
            FrameType::Headers => {
                Self::decode_headers_frame(header, &payload).map(Frame::Headers)
            }
            FrameType::Priority => {
                Self::decode_priority_frame(header, &payload).map(Frame::Priority)
            }
            FrameType::RstStream => {
                Self::decode_rst_stream_frame(header, &payload).map(Frame::RstStream)
            }
            FrameType::Settings => {
                Self::decode_settings_frame(header, &payload).map(Frame::Settings)
            }
            FrameType::PushPromise => {
                Self::decode_push_promise_frame(header, &payload).map(Frame::PushPromise)
            }
            FrameType::Ping => Self::decode_ping_frame(header, &payload).map(Frame::Ping),
            FrameType::Goaway => Self::decode_goaway_frame(header, &payload).map(Frame::Goaway),
            FrameType::WindowUpdate => {
                Self::decode_window_update_frame(header, &payload).map(Frame::WindowUpdate)
            }
            FrameType::Continuation => {
                Self::decode_continuation_frame(header, &payload).map(Frame::Continuation)
            }
        }
    }

    /// Write one frame to a byte sink
    pub fn write_frame<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
        let bytes = Self::encode_frame(frame)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode one frame into a contiguous buffer
    pub fn encode_frame(frame: &Frame) -> Result<Bytes> {
        match frame {
            Frame::Data(f) => Self::encode_data_frame(f),
            Frame::Headers(f) => Self::encode_headers_frame(f),
            Frame::Priority(f) => Self::encode_priority_frame(f),
            Frame::RstStream(f) => Self::encode_rst_stream_frame(f),
            Frame::Settings(f) => Self::encode_settings_frame(f),
            Frame::PushPromise(f) => Self::encode_push_promise_frame(f),
            Frame::Ping(f) => Self::encode_ping_frame(f),
            Frame::Goaway(f) => Self::encode_goaway_frame(f),
            Frame::WindowUpdate(f) => Self::encode_window_update_frame(f),
            Frame::Continuation(f) => Self::encode_continuation_frame(f),
        }
    }

    /// Carry over the flags defined for this frame type, dropping the rest
    fn masked_flags(frame_type: FrameType, flags: FrameFlags) -> FrameFlags {
        FrameFlags::from_u8(flags.as_u8() & frame_type.flag_mask())
    }

    /// Split off the pad length byte when PADDED is set
    ///
    /// Returns the payload after the pad length field plus the declared pad
    /// length. Trimming the trailing pad bytes is left to the caller, which
    /// knows where the type-specific fields end.
    fn split_pad_length<'a>(
        frame_type: FrameType,
        flags: FrameFlags,
        payload: &'a [u8],
    ) -> Result<(&'a [u8], Option<u8>)> {
        if !flags.is_padded() {
            return Ok((payload, None));
        }
        if payload.is_empty() {
            return Err(Error::Protocol(format!(
                "{} frame has PADDED set but a zero-length payload",
                frame_type.name()
            )));
        }
        Ok((&payload[1..], Some(payload[0])))
    }

    // DATA (RFC 7540 Section 6.1)

    /// Encode a DATA frame
    pub fn encode_data_frame(frame: &DataFrame) -> Result<Bytes> {
        let length = Self::checked_payload_len(FrameType::Data, frame.payload_len())?;

        let mut flags = Self::masked_flags(FrameType::Data, frame.header.flags);
        match frame.padding {
            Some(_) => flags.set(FrameFlags::PADDED),
            None => flags.clear(FrameFlags::PADDED),
        }

        let header = FrameHeader::new(
            length,
            FrameType::Data.as_u8(),
            flags,
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        if let Some(pad_len) = frame.padding {
            buf.put_u8(pad_len);
        }
        buf.put_slice(&frame.data);
        if let Some(pad_len) = frame.padding {
            buf.put_bytes(0, pad_len as usize);
        }

        Ok(buf.freeze())
    }

    /// Decode a DATA frame payload
    pub fn decode_data_frame(header: FrameHeader, payload: &[u8]) -> Result<DataFrame> {
        let (rest, padding) = Self::split_pad_length(FrameType::Data, header.flags, payload)?;

        let data_len = match padding {
            Some(pad_len) => {
                let pad_len = pad_len as usize;
                if pad_len >= rest.len() {
                    return Err(Error::Protocol(format!(
                        "DATA pad length {} consumes the whole remaining payload of {} bytes",
                        pad_len,
                        rest.len()
                    )));
                }
                rest.len() - pad_len
            }
            None => rest.len(),
        };

        Ok(DataFrame {
            header,
            data: Bytes::copy_from_slice(&rest[..data_len]),
            padding,
        })
    }

    // HEADERS (RFC 7540 Section 6.2)

    /// Encode a HEADERS frame
    pub fn encode_headers_frame(frame: &HeadersFrame) -> Result<Bytes> {
        let length = Self::checked_payload_len(FrameType::Headers, frame.payload_len())?;

        let mut flags = Self::masked_flags(FrameType::Headers, frame.header.flags);
        match frame.padding {
            Some(_) => flags.set(FrameFlags::PADDED),
            None => flags.clear(FrameFlags::PADDED),
        }
        match frame.priority {
            Some(_) => flags.set(FrameFlags::PRIORITY),
            None => flags.clear(FrameFlags::PRIORITY),
        }

        let header = FrameHeader::new(
            length,
            FrameType::Headers.as_u8(),
            flags,
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        if let Some(pad_len) = frame.padding {
            buf.put_u8(pad_len);
        }
        if let Some(priority) = &frame.priority {
            Self::put_priority_spec(&mut buf, priority);
        }
        buf.put_slice(&frame.header_block);
        if let Some(pad_len) = frame.padding {
            buf.put_bytes(0, pad_len as usize);
        }

        Ok(buf.freeze())
    }

    /// Decode a HEADERS frame payload
    pub fn decode_headers_frame(header: FrameHeader, payload: &[u8]) -> Result<HeadersFrame> {
        let (mut rest, padding) =
            Self::split_pad_length(FrameType::Headers, header.flags, payload)?;

        let priority = if header.flags.is_priority() {
            if rest.len() < 5 {
                return Err(Error::FrameSize(format!(
                    "HEADERS frame with PRIORITY needs 5 more bytes, {} remain",
                    rest.len()
                )));
            }
            let spec = Self::get_priority_spec(&rest[..5]);
            rest = &rest[5..];
            Some(spec)
        } else {
            None
        };

        let pad_len = padding.unwrap_or(0) as usize;
        let fragment_len = rest.len().checked_sub(pad_len).ok_or_else(|| {
            Error::Protocol(format!(
                "HEADERS pad length {} exceeds the remaining payload of {} bytes",
                pad_len,
                rest.len()
            ))
        })?;

        Ok(HeadersFrame {
            header,
            priority,
            header_block: Bytes::copy_from_slice(&rest[..fragment_len]),
            padding,
        })
    }

    // PRIORITY (RFC 7540 Section 6.3)

    /// Encode a PRIORITY frame
    pub fn encode_priority_frame(frame: &PriorityFrame) -> Result<Bytes> {
        let header = FrameHeader::new(
            5,
            FrameType::Priority.as_u8(),
            FrameFlags::empty(),
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 5);
        buf.put_slice(&Self::encode_header(&header));
        Self::put_priority_spec(&mut buf, &frame.priority);

        Ok(buf.freeze())
    }

    /// Decode a PRIORITY frame payload
    pub fn decode_priority_frame(header: FrameHeader, payload: &[u8]) -> Result<PriorityFrame> {
        if payload.len() != 5 {
            return Err(Error::FrameSize(format!(
                "PRIORITY frame length must be 5, got {}",
                payload.len()
            )));
        }

        Ok(PriorityFrame {
            header,
            priority: Self::get_priority_spec(payload),
        })
    }

    fn put_priority_spec(buf: &mut BytesMut, priority: &PrioritySpec) {
        let mut dependency = priority.stream_dependency & 0x7FFF_FFFF;
        if priority.exclusive {
            dependency |= 0x8000_0000;
        }
        buf.put_u32(dependency);
        buf.put_u8(priority.weight);
    }

    fn get_priority_spec(bytes: &[u8]) -> PrioritySpec {
        let word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        PrioritySpec {
            exclusive: word & 0x8000_0000 != 0,
            stream_dependency: word & 0x7FFF_FFFF,
            weight: bytes[4],
        }
    }

    // RST_STREAM (RFC 7540 Section 6.4)

    /// Encode a RST_STREAM frame
    pub fn encode_rst_stream_frame(frame: &RstStreamFrame) -> Result<Bytes> {
        let header = FrameHeader::new(
            4,
            FrameType::RstStream.as_u8(),
            FrameFlags::empty(),
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 4);
        buf.put_slice(&Self::encode_header(&header));
        buf.put_u32(frame.error_code.as_u32());

        Ok(buf.freeze())
    }

    /// Decode a RST_STREAM frame payload
    pub fn decode_rst_stream_frame(
        header: FrameHeader,
        payload: &[u8],
    ) -> Result<RstStreamFrame> {
        if payload.len() != 4 {
            return Err(Error::FrameSize(format!(
                "RST_STREAM frame length must be 4, got {}",
                payload.len()
            )));
        }

        let raw = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);

        Ok(RstStreamFrame {
            header,
            error_code: ErrorCode::from_u32(raw),
        })
    }

    // SETTINGS (RFC 7540 Section 6.5)

    /// Encode a SETTINGS frame
    pub fn encode_settings_frame(frame: &SettingsFrame) -> Result<Bytes> {
        let flags = Self::masked_flags(FrameType::Settings, frame.header.flags);

        if flags.is_ack() && !frame.settings.is_empty() {
            return Err(Error::FrameSize(
                "SETTINGS ACK must have an empty payload".to_string(),
            ));
        }

        let length = Self::checked_payload_len(FrameType::Settings, frame.settings.len() * 6)?;

        // SETTINGS always applies to the connection, stream 0
        let header = FrameHeader::new(length, FrameType::Settings.as_u8(), flags, 0);

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        for setting in &frame.settings {
            buf.put_u16(setting.id);
            buf.put_u32(setting.value);
        }

        Ok(buf.freeze())
    }

    /// Decode a SETTINGS frame payload
    ///
    /// Entries are collected in wire order; identifiers outside the defined
    /// range are preserved verbatim for the caller to ignore.
    pub fn decode_settings_frame(header: FrameHeader, payload: &[u8]) -> Result<SettingsFrame> {
        if header.flags.is_ack() {
            if !payload.is_empty() {
                return Err(Error::FrameSize(format!(
                    "SETTINGS ACK frame length must be 0, got {}",
                    payload.len()
                )));
            }
            return Ok(SettingsFrame {
                header,
                settings: Vec::new(),
            });
        }

        if payload.len() % 6 != 0 {
            return Err(Error::FrameSize(format!(
                "SETTINGS frame length {} is not a multiple of 6",
                payload.len()
            )));
        }

        let mut buf = payload;
        let mut settings = Vec::with_capacity(payload.len() / 6);
        while buf.remaining() >= 6 {
            let id = buf.get_u16();
            let value = buf.get_u32();
            settings.push(Setting::new(id, value));
        }

        Ok(SettingsFrame { header, settings })
    }

    // PUSH_PROMISE (RFC 7540 Section 6.6)

    /// Encode a PUSH_PROMISE frame
    pub fn encode_push_promise_frame(frame: &PushPromiseFrame) -> Result<Bytes> {
        let length = Self::checked_payload_len(FrameType::PushPromise, frame.payload_len())?;

        let mut flags = Self::masked_flags(FrameType::PushPromise, frame.header.flags);
        match frame.padding {
            Some(_) => flags.set(FrameFlags::PADDED),
            None => flags.clear(FrameFlags::PADDED),
        }

        let header = FrameHeader::new(
            length,
            FrameType::PushPromise.as_u8(),
            flags,
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        if let Some(pad_len) = frame.padding {
            buf.put_u8(pad_len);
        }
        buf.put_u32(frame.promised_stream_id & 0x7FFF_FFFF);
        buf.put_slice(&frame.header_block);
        if let Some(pad_len) = frame.padding {
            buf.put_bytes(0, pad_len as usize);
        }

        Ok(buf.freeze())
    }

    /// Decode a PUSH_PROMISE frame payload
    pub fn decode_push_promise_frame(
        header: FrameHeader,
        payload: &[u8],
    ) -> Result<PushPromiseFrame> {
        let (rest, padding) =
            Self::split_pad_length(FrameType::PushPromise, header.flags, payload)?;

        if rest.len() < 4 {
            return Err(Error::FrameSize(format!(
                "PUSH_PROMISE frame needs 4 bytes for the promised stream ID, {} remain",
                rest.len()
            )));
        }
        let promised_stream_id =
            u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) & 0x7FFF_FFFF;
        let rest = &rest[4..];

        let pad_len = padding.unwrap_or(0) as usize;
        let fragment_len = rest.len().checked_sub(pad_len).ok_or_else(|| {
            Error::Protocol(format!(
                "PUSH_PROMISE pad length {} exceeds the remaining payload of {} bytes",
                pad_len,
                rest.len()
            ))
        })?;

        Ok(PushPromiseFrame {
            header,
            promised_stream_id,
            header_block: Bytes::copy_from_slice(&rest[..fragment_len]),
            padding,
        })
    }

    // PING (RFC 7540 Section 6.7)

    /// Encode a PING frame
    pub fn encode_ping_frame(frame: &PingFrame) -> Result<Bytes> {
        let flags = Self::masked_flags(FrameType::Ping, frame.header.flags);

        // PING always applies to the connection, stream 0, 8-byte payload
        let header = FrameHeader::new(8, FrameType::Ping.as_u8(), flags, 0);

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 8);
        buf.put_slice(&Self::encode_header(&header));
        buf.put_slice(&frame.opaque);

        Ok(buf.freeze())
    }

    /// Decode a PING frame payload
    pub fn decode_ping_frame(header: FrameHeader, payload: &[u8]) -> Result<PingFrame> {
        if payload.len() != 8 {
            return Err(Error::FrameSize(format!(
                "PING frame length must be 8, got {}",
                payload.len()
            )));
        }

        let mut opaque = [0u8; 8];
        opaque.copy_from_slice(payload);

        Ok(PingFrame { header, opaque })
    }

    // GOAWAY (RFC 7540 Section 6.8)

    /// Encode a GOAWAY frame
    pub fn encode_goaway_frame(frame: &GoawayFrame) -> Result<Bytes> {
        let length =
            Self::checked_payload_len(FrameType::Goaway, 8 + frame.debug_data.len())?;

        // GOAWAY always applies to the connection, stream 0
        let header = FrameHeader::new(length, FrameType::Goaway.as_u8(), FrameFlags::empty(), 0);

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        buf.put_u32(frame.last_stream_id & 0x7FFF_FFFF);
        buf.put_u32(frame.error_code.as_u32());
        buf.put_slice(&frame.debug_data);

        Ok(buf.freeze())
    }

    /// Decode a GOAWAY frame payload
    pub fn decode_goaway_frame(header: FrameHeader, payload: &[u8]) -> Result<GoawayFrame> {
        if payload.len() < 8 {
            return Err(Error::FrameSize(format!(
                "GOAWAY frame length must be at least 8, got {}",
                payload.len()
            )));
        }

        let last_stream_id =
            u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]) & 0x7FFF_FFFF;
        let raw = u32::from_be_bytes([payload[4], payload[5], payload[6], payload[7]]);

        Ok(GoawayFrame {
            header,
            last_stream_id,
            error_code: ErrorCode::from_u32(raw),
            debug_data: Bytes::copy_from_slice(&payload[8..]),
        })
    }

    // WINDOW_UPDATE (RFC 7540 Section 6.9)

    /// Encode a WINDOW_UPDATE frame
    pub fn encode_window_update_frame(frame: &WindowUpdateFrame) -> Result<Bytes> {
        let header = FrameHeader::new(
            4,
            FrameType::WindowUpdate.as_u8(),
            FrameFlags::empty(),
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 4);
        buf.put_slice(&Self::encode_header(&header));
        buf.put_u32(frame.window_size_increment & 0x7FFF_FFFF);

        Ok(buf.freeze())
    }

    /// Decode a WINDOW_UPDATE frame payload
    pub fn decode_window_update_frame(
        header: FrameHeader,
        payload: &[u8],
    ) -> Result<WindowUpdateFrame> {
        if payload.len() != 4 {
            return Err(Error::FrameSize(format!(
                "WINDOW_UPDATE frame length must be 4, got {}",
                payload.len()
            )));
        }

        let window_size_increment =
            u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]) & 0x7FFF_FFFF;
        if window_size_increment == 0 {
            return Err(Error::Protocol(
                "WINDOW_UPDATE with a zero window size increment".to_string(),
            ));
        }

        Ok(WindowUpdateFrame {
            header,
            window_size_increment,
        })
    }

    // CONTINUATION (RFC 7540 Section 6.10)

    /// Encode a CONTINUATION frame
    pub fn encode_continuation_frame(frame: &ContinuationFrame) -> Result<Bytes> {
        let length =
            Self::checked_payload_len(FrameType::Continuation, frame.header_block.len())?;

        let flags = Self::masked_flags(FrameType::Continuation, frame.header.flags);
        let header = FrameHeader::new(
            length,
            FrameType::Continuation.as_u8(),
            flags,
            frame.header.stream_id,
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + length as usize);
        buf.put_slice(&Self::encode_header(&header));
        buf.put_slice(&frame.header_block);

        Ok(buf.freeze())
    }

    /// Decode a CONTINUATION frame payload
    pub fn decode_continuation_frame(
        header: FrameHeader,
        payload: &[u8],
    ) -> Result<ContinuationFrame> {
        Ok(ContinuationFrame {
            header,
            header_block: Bytes::copy_from_slice(payload),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_header() {
        let header = FrameHeader::new(
            1234,
            FrameType::Headers.as_u8(),
            FrameFlags::from_u8(FrameFlags::END_STREAM | FrameFlags::END_HEADERS),
            42,
        );

        let bytes = FrameCodec::encode_header(&header);
        let decoded = FrameCodec::decode_header(&bytes);

        assert_eq!(decoded, header);
    }

    #[test]
    fn test_header_reserved_bit_masked() {
        let mut bytes = FrameCodec::encode_header(&FrameHeader::new(
            0,
            FrameType::Data.as_u8(),
            FrameFlags::empty(),
            1,
        ));
        bytes[5] |= 0x80; // set the reserved bit on the wire
        let decoded = FrameCodec::decode_header(&bytes);
        assert_eq!(decoded.stream_id, 1);
    }

    #[test]
    fn test_header_reserved_bit_cleared_on_encode() {
        let header = FrameHeader::new(0, FrameType::Data.as_u8(), FrameFlags::empty(), 0xFFFF_FFFF);
        let bytes = FrameCodec::encode_header(&header);
        assert_eq!(bytes[5] & 0x80, 0);
        assert_eq!(FrameCodec::decode_header(&bytes).stream_id, 0x7FFF_FFFF);
    }

    #[test]
    fn test_encode_data_frame() {
        let frame = DataFrame::new(1, Bytes::from("Hello"), true);
        let encoded = FrameCodec::encode_data_frame(&frame).unwrap();

        assert_eq!(encoded[0..3], [0, 0, 5]); // Length = 5
        assert_eq!(encoded[3], FrameType::Data.as_u8());
        assert_eq!(encoded[4], FrameFlags::END_STREAM);
        assert_eq!(&encoded[5..9], &[0, 0, 0, 1]); // Stream ID = 1
        assert_eq!(&encoded[9..], b"Hello");
    }

    #[test]
    fn test_encode_data_frame_with_padding() {
        let frame = DataFrame::new(1, Bytes::from("Hi"), false).with_padding(10);
        let encoded = FrameCodec::encode_data_frame(&frame).unwrap();

        // Length: 1 (pad length) + 2 (data) + 10 (padding) = 13
        assert_eq!(encoded[0..3], [0, 0, 13]);
        assert_eq!(encoded[4] & FrameFlags::PADDED, FrameFlags::PADDED);
        assert_eq!(encoded[9], 10);
        assert_eq!(&encoded[10..12], b"Hi");
        assert_eq!(&encoded[12..22], &[0u8; 10]);
    }

    #[test]
    fn test_decode_data_frame_trims_padding() {
        let frame = DataFrame::new(5, Bytes::from("payload"), false).with_padding(4);
        let encoded = FrameCodec::encode_data_frame(&frame).unwrap();
        let decoded = FrameCodec::read_frame(&mut encoded.as_ref()).unwrap();

        match decoded {
            Frame::Data(f) => {
                assert_eq!(f.data, Bytes::from("payload"));
                assert_eq!(f.padding, Some(4));
            }
            other => panic!("expected DATA, got {:?}", other),
        }
    }

    #[test]
    fn test_data_padding_too_large() {
        // length 3: pad length byte 5, then only 2 payload bytes
        let mut wire = Vec::new();
        wire.extend_from_slice(&FrameCodec::encode_header(&FrameHeader::new(
            3,
            FrameType::Data.as_u8(),
            FrameFlags::from_u8(FrameFlags::PADDED),
            1,
        )));
        wire.extend_from_slice(&[5, 0xaa, 0xbb]);

        let err = FrameCodec::read_frame(&mut wire.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_encode_settings_frame() {
        let frame = SettingsFrame::new(vec![
            Setting::new(0x1, 8192),
            Setting::new(0x2, 0),
            Setting::new(0x4, 65535),
        ]);
        let encoded = FrameCodec::encode_settings_frame(&frame).unwrap();

        assert_eq!(encoded[3], FrameType::Settings.as_u8());
        assert_eq!(&encoded[5..9], &[0, 0, 0, 0]); // Stream ID must be 0
        assert_eq!(encoded[0..3], [0, 0, 18]); // 3 settings * 6 bytes
    }

    #[test]
    fn test_encode_settings_ack() {
        let frame = SettingsFrame::ack();
        let encoded = FrameCodec::encode_settings_frame(&frame).unwrap();

        assert_eq!(encoded[0..3], [0, 0, 0]);
        assert_eq!(encoded[4], FrameFlags::ACK);
    }

    #[test]
    fn test_settings_length_not_multiple_of_six() {
        let mut wire = Vec::new();
        wire.extend_from_slice(&FrameCodec::encode_header(&FrameHeader::new(
            5,
            FrameType::Settings.as_u8(),
            FrameFlags::empty(),
            0,
        )));
        wire.extend_from_slice(&[0, 3, 0, 0, 0]);

        let err = FrameCodec::read_frame(&mut wire.as_slice()).unwrap_err();
        assert!(matches!(err, Error::FrameSize(_)));
    }

    #[test]
    fn test_encode_ping_frame() {
        let opaque = [1, 2, 3, 4, 5, 6, 7, 8];
        let frame = PingFrame::new(opaque);
        let encoded = FrameCodec::encode_ping_frame(&frame).unwrap();

        assert_eq!(encoded[0..3], [0, 0, 8]);
        assert_eq!(encoded[3], FrameType::Ping.as_u8());
        assert_eq!(&encoded[9..17], &opaque);
    }

    #[test]
    fn test_encode_window_update() {
        let frame = WindowUpdateFrame::new(42, 1000);
        let encoded = FrameCodec::encode_window_update_frame(&frame).unwrap();

        assert_eq!(encoded[0..3], [0, 0, 4]);
        assert_eq!(encoded[3], FrameType::WindowUpdate.as_u8());
        assert_eq!(&encoded[5..9], &[0, 0, 0, 42]);

        let increment = u32::from_be_bytes([encoded[9], encoded[10], encoded[11], encoded[12]]);
        assert_eq!(increment, 1000);
    }

    #[test]
    fn test_window_update_zero_increment() {
        let mut wire = Vec::new();
        wire.extend_from_slice(&FrameCodec::encode_header(&FrameHeader::new(
            4,
            FrameType::WindowUpdate.as_u8(),
            FrameFlags::empty(),
            1,
        )));
        wire.extend_from_slice(&[0, 0, 0, 0]);

        let err = FrameCodec::read_frame(&mut wire.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_priority_frame_round_trip() {
        let frame = PriorityFrame::new(9, PrioritySpec::new(true, 7, 200));
        let encoded = FrameCodec::encode_priority_frame(&frame).unwrap();
        assert_eq!(encoded[0..3], [0, 0, 5]);
        assert_eq!(encoded[9] & 0x80, 0x80); // exclusive bit

        let decoded = FrameCodec::read_frame(&mut encoded.as_ref()).unwrap();
        assert_eq!(decoded, Frame::Priority(frame));
    }

    #[test]
    fn test_encoder_drops_undefined_flags() {
        let mut frame = PingFrame::new([0; 8]);
        frame.header.flags = FrameFlags::from_u8(0xFF);
        let encoded = FrameCodec::encode_ping_frame(&frame).unwrap();
        assert_eq!(encoded[4], FrameFlags::ACK);
    }

    #[test]
    fn test_short_read_on_header() {
        let wire = [0u8, 0, 4, 3];
        let err = FrameCodec::read_frame(&mut wire.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortRead {
                expected: 9,
                got: 4
            }
        ));
    }

    #[test]
    fn test_short_read_on_payload() {
        let mut wire = Vec::new();
        wire.extend_from_slice(&FrameCodec::encode_header(&FrameHeader::new(
            8,
            FrameType::Ping.as_u8(),
            FrameFlags::empty(),
            0,
        )));
        wire.extend_from_slice(&[1, 2, 3]);

        let err = FrameCodec::read_frame(&mut wire.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortRead {
                expected: 8,
                got: 3
            }
        ));
    }
}
