//! Diagnostic rendering for frames
//!
//! Human-readable summaries for operator logs: frame type name, header
//! metadata, the flag bits that are set, and a short payload preview. The
//! output is not part of the wire contract. Color is injected through the
//! [`Palette`] trait so the same renderer serves terminals and plain log
//! sinks.

use crate::frames::*;
use std::fmt;

/// How many payload bytes a preview shows before truncating
const PREVIEW_LEN: usize = 8;

/// Colorizer hooks for rendered frame summaries
///
/// The default implementations pass text through unchanged.
pub trait Palette {
    /// Style a frame type name
    fn frame_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Style a field name
    fn field_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Style an error code
    fn error_code(&self, code: &str) -> String {
        code.to_string()
    }
}

/// No styling; for log files and non-terminal sinks
pub struct Plain;

impl Palette for Plain {}

/// ANSI escape styling for terminals
pub struct Ansi;

impl Palette for Ansi {
    fn frame_name(&self, name: &str) -> String {
        format!("\x1b[36m{}\x1b[0m", name)
    }

    fn field_name(&self, name: &str) -> String {
        format!("\x1b[34m{}\x1b[0m", name)
    }

    fn error_code(&self, code: &str) -> String {
        format!("\x1b[31m{}\x1b[0m", code)
    }
}

/// Render a frame summary with the given palette
pub fn render(frame: &Frame, palette: &dyn Palette) -> String {
    let header = frame.header();
    let mut out = palette.frame_name(frame.frame_type().name());
    out += &format!(
        " frame <length={}, flags={:#x}, stream_id={}>",
        header.length,
        header.flags.as_u8(),
        header.stream_id
    );
    out += &flag_lines(frame.frame_type(), header.flags);

    match frame {
        Frame::Data(f) => {
            if !f.data.is_empty() {
                out += &format!("\n{}...", preview(&f.data));
            }
        }
        Frame::Headers(f) => {
            if let Some(priority) = &f.priority {
                out += &priority_line(priority);
            }
            out += &format!(
                "\n({}={} bytes)",
                palette.field_name("header_block"),
                f.header_block.len()
            );
        }
        Frame::Priority(f) => {
            out += &priority_line(&f.priority);
        }
        Frame::RstStream(f) => {
            out += &format!(
                "\n(error_code={})",
                palette.error_code(&f.error_code.to_string())
            );
        }
        Frame::Settings(f) => {
            out += &format!("\n(niv={})", f.settings.len());
            for setting in &f.settings {
                out += &format!("\n{}", setting);
            }
        }
        Frame::PushPromise(f) => {
            out += &format!("\n(promised_stream_id={})", f.promised_stream_id);
            out += &format!(
                "\n({}={} bytes)",
                palette.field_name("header_block"),
                f.header_block.len()
            );
        }
        Frame::Ping(f) => {
            let hex: String = f.opaque.iter().map(|b| format!("{:02x}", b)).collect();
            out += &format!("\n(opaque_data=0x{})", hex);
        }
        Frame::Goaway(f) => {
            out += &format!(
                "\n(last_stream_id={}, error_code={}, debug_data({}))",
                f.last_stream_id,
                palette.error_code(&f.error_code.to_string()),
                preview(&f.debug_data)
            );
        }
        Frame::WindowUpdate(f) => {
            out += &format!("\n(window_size_increment={})", f.window_size_increment);
        }
        Frame::Continuation(f) => {
            out += &format!(
                "\n({}={} bytes)",
                palette.field_name("header_block"),
                f.header_block.len()
            );
        }
    }

    out
}

/// One `; FLAG_NAME` line per set flag defined for the type
fn flag_lines(frame_type: FrameType, flags: FrameFlags) -> String {
    let named: &[(u8, &str)] = match frame_type {
        FrameType::Data => &[
            (FrameFlags::END_STREAM, "END_STREAM"),
            (FrameFlags::PADDED, "PADDED"),
        ],
        FrameType::Headers => &[
            (FrameFlags::END_STREAM, "END_STREAM"),
            (FrameFlags::END_HEADERS, "END_HEADERS"),
            (FrameFlags::PRIORITY, "PRIORITY"),
            (FrameFlags::PADDED, "PADDED"),
        ],
        FrameType::Settings | FrameType::Ping => &[(FrameFlags::ACK, "ACK")],
        FrameType::PushPromise => &[
            (FrameFlags::END_HEADERS, "END_HEADERS"),
            (FrameFlags::PADDED, "PADDED"),
        ],
        FrameType::Continuation => &[(FrameFlags::END_HEADERS, "END_HEADERS")],
        _ => &[],
    };

    let mut out = String::new();
    for (bit, name) in named {
        if flags.is_set(*bit) {
            out += &format!("\n; {}", name);
        }
    }
    out
}

fn priority_line(priority: &PrioritySpec) -> String {
    format!(
        "\n(exclusive={}, stream_dependency={}, weight={})",
        priority.exclusive, priority.stream_dependency, priority.weight
    )
}

/// Escaped preview of at most the first eight payload bytes
fn preview(data: &[u8]) -> String {
    let window = data.len().min(PREVIEW_LEN);
    format!("\"{}\"", data[..window].escape_ascii())
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, &Plain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bytes::Bytes;

    #[test]
    fn test_render_data_frame() {
        let frame = Frame::Data(DataFrame::new(1, Bytes::from("hello world"), true));
        let out = render(&frame, &Plain);

        assert!(out.starts_with("DATA frame <length=11, flags=0x1, stream_id=1>"));
        assert!(out.contains("; END_STREAM"));
        assert!(out.contains("\"hello wo\"...")); // preview stops at 8 bytes
    }

    #[test]
    fn test_render_rst_stream() {
        let frame = Frame::RstStream(RstStreamFrame::new(5, ErrorCode::RefusedStream));
        let out = render(&frame, &Plain);

        assert!(out.starts_with("RST_STREAM frame <length=4, flags=0x0, stream_id=5>"));
        assert!(out.contains("(error_code=REFUSED_STREAM (0x7))"));
    }

    #[test]
    fn test_render_settings() {
        let frame = Frame::Settings(SettingsFrame::new(vec![
            crate::settings::Setting::new(0x3, 100),
            crate::settings::Setting::new(0x4, 65535),
        ]));
        let out = render(&frame, &Plain);

        assert!(out.contains("(niv=2)"));
        assert!(out.contains("[SETTINGS_MAX_CONCURRENT_STREAMS(3):100]"));
        assert!(out.contains("[SETTINGS_INITIAL_WINDOW_SIZE(4):65535]"));
    }

    #[test]
    fn test_ansi_palette_wraps_names() {
        let frame = Frame::Ping(PingFrame::new([0xde, 0xad, 0xbe, 0xef, 1, 2, 3, 4]));
        let out = render(&frame, &Ansi);

        assert!(out.starts_with("\x1b[36mPING\x1b[0m"));
        assert!(out.contains("(opaque_data=0xdeadbeef01020304)"));

        // Plain output for the same frame carries no escapes
        let plain = render(&frame, &Plain);
        assert!(!plain.contains('\x1b'));
    }

    #[test]
    fn test_display_uses_plain_palette() {
        let frame = Frame::WindowUpdate(WindowUpdateFrame::new(1, 4096));
        let shown = frame.to_string();
        assert_eq!(
            shown,
            "WINDOW_UPDATE frame <length=4, flags=0x0, stream_id=1>\n(window_size_increment=4096)"
        );
    }
}
