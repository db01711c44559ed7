//! HTTP/2 settings parameters
//!
//! This module covers the SETTINGS payload vocabulary from RFC 7540
//! Section 6.5: the raw (identifier, value) pair the codec moves on the
//! wire, the known identifiers, and a typed aggregate for callers that
//! want named access with protocol defaults.

use crate::error::{Error, Result};
use std::fmt;

/// Default header table size (4096 bytes)
pub const DEFAULT_HEADER_TABLE_SIZE: u32 = 4096;

/// Default initial window size (65535 bytes)
pub const DEFAULT_INITIAL_WINDOW_SIZE: u32 = 65535;

/// Default maximum frame size (16384 bytes)
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16384;

/// HTTP/2 settings identifiers (RFC 7540 Section 6.5.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SettingId {
    /// SETTINGS_HEADER_TABLE_SIZE (0x1)
    /// Allows the sender to inform the remote endpoint of the maximum size
    /// of the header compression table
    HeaderTableSize = 0x1,

    /// SETTINGS_ENABLE_PUSH (0x2)
    /// Used to disable server push
    EnablePush = 0x2,

    /// SETTINGS_MAX_CONCURRENT_STREAMS (0x3)
    /// Indicates the maximum number of concurrent streams
    MaxConcurrentStreams = 0x3,

    /// SETTINGS_INITIAL_WINDOW_SIZE (0x4)
    /// Indicates the sender's initial window size for stream-level flow control
    InitialWindowSize = 0x4,

    /// SETTINGS_MAX_FRAME_SIZE (0x5)
    /// Indicates the size of the largest frame payload
    MaxFrameSize = 0x5,

    /// SETTINGS_MAX_HEADER_LIST_SIZE (0x6)
    /// Advises peer of the maximum size of header list
    MaxHeaderListSize = 0x6,
}

impl SettingId {
    /// Convert to u16
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Create from u16
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x1 => Some(SettingId::HeaderTableSize),
            0x2 => Some(SettingId::EnablePush),
            0x3 => Some(SettingId::MaxConcurrentStreams),
            0x4 => Some(SettingId::InitialWindowSize),
            0x5 => Some(SettingId::MaxFrameSize),
            0x6 => Some(SettingId::MaxHeaderListSize),
            _ => None,
        }
    }

    /// Get parameter name
    pub fn name(&self) -> &'static str {
        match self {
            SettingId::HeaderTableSize => "SETTINGS_HEADER_TABLE_SIZE",
            SettingId::EnablePush => "SETTINGS_ENABLE_PUSH",
            SettingId::MaxConcurrentStreams => "SETTINGS_MAX_CONCURRENT_STREAMS",
            SettingId::InitialWindowSize => "SETTINGS_INITIAL_WINDOW_SIZE",
            SettingId::MaxFrameSize => "SETTINGS_MAX_FRAME_SIZE",
            SettingId::MaxHeaderListSize => "SETTINGS_MAX_HEADER_LIST_SIZE",
        }
    }
}

impl fmt::Display for SettingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.as_u16())
    }
}

/// One SETTINGS entry as carried on the wire
///
/// The identifier stays a raw u16 so entries outside the defined range are
/// preserved verbatim through a decode and re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Settings identifier
    pub id: u16,
    /// Parameter value
    pub value: u32,
}

impl Setting {
    /// Create a new settings entry
    pub fn new(id: u16, value: u32) -> Self {
        Setting { id, value }
    }

    /// The known identifier for this entry, if it is one
    pub fn known_id(&self) -> Option<SettingId> {
        SettingId::from_u16(self.id)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_id() {
            Some(id) => write!(f, "[{}:{}]", id, self.value),
            None => write!(f, "[SETTINGS_UNKNOWN({}):{}]", self.id, self.value),
        }
    }
}

/// Typed view over a set of HTTP/2 settings
///
/// A `None` field means the parameter was not present and the protocol
/// default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Header table size (default: 4096)
    pub header_table_size: Option<u32>,

    /// Enable server push (default: true)
    pub enable_push: Option<bool>,

    /// Maximum concurrent streams (default: unlimited)
    pub max_concurrent_streams: Option<u32>,

    /// Initial window size (default: 65535)
    pub initial_window_size: Option<u32>,

    /// Maximum frame size (default: 16384, range: 16384-16777215)
    pub max_frame_size: Option<u32>,

    /// Maximum header list size (default: unlimited)
    pub max_header_list_size: Option<u32>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Settings::default()
    }

    /// Create settings with the protocol defaults filled in
    pub fn default_settings() -> Self {
        Settings {
            header_table_size: Some(DEFAULT_HEADER_TABLE_SIZE),
            enable_push: Some(true),
            max_concurrent_streams: None, // Unlimited
            initial_window_size: Some(DEFAULT_INITIAL_WINDOW_SIZE),
            max_frame_size: Some(DEFAULT_MAX_FRAME_SIZE),
            max_header_list_size: None, // Unlimited
        }
    }

    /// Fold an ordered entry list into a typed view
    ///
    /// Later occurrences of an identifier shadow earlier ones; entries with
    /// unknown identifiers are ignored, as RFC 7540 Section 6.5.2 requires.
    pub fn from_entries(entries: &[Setting]) -> Self {
        let mut settings = Settings::new();
        settings.apply(entries);
        settings
    }

    /// Apply an ordered entry list on top of the current values
    pub fn apply(&mut self, entries: &[Setting]) {
        for entry in entries {
            match entry.known_id() {
                Some(SettingId::HeaderTableSize) => self.header_table_size = Some(entry.value),
                Some(SettingId::EnablePush) => self.enable_push = Some(entry.value != 0),
                Some(SettingId::MaxConcurrentStreams) => {
                    self.max_concurrent_streams = Some(entry.value)
                }
                Some(SettingId::InitialWindowSize) => {
                    self.initial_window_size = Some(entry.value)
                }
                Some(SettingId::MaxFrameSize) => self.max_frame_size = Some(entry.value),
                Some(SettingId::MaxHeaderListSize) => {
                    self.max_header_list_size = Some(entry.value)
                }
                None => {}
            }
        }
    }

    /// Emit the present parameters as an ordered entry list
    pub fn to_entries(&self) -> Vec<Setting> {
        let mut entries = Vec::new();
        if let Some(val) = self.header_table_size {
            entries.push(Setting::new(SettingId::HeaderTableSize.as_u16(), val));
        }
        if let Some(val) = self.enable_push {
            entries.push(Setting::new(
                SettingId::EnablePush.as_u16(),
                if val { 1 } else { 0 },
            ));
        }
        if let Some(val) = self.max_concurrent_streams {
            entries.push(Setting::new(SettingId::MaxConcurrentStreams.as_u16(), val));
        }
        if let Some(val) = self.initial_window_size {
            entries.push(Setting::new(SettingId::InitialWindowSize.as_u16(), val));
        }
        if let Some(val) = self.max_frame_size {
            entries.push(Setting::new(SettingId::MaxFrameSize.as_u16(), val));
        }
        if let Some(val) = self.max_header_list_size {
            entries.push(Setting::new(SettingId::MaxHeaderListSize.as_u16(), val));
        }
        entries
    }

    /// Get header table size (with default)
    pub fn get_header_table_size(&self) -> u32 {
        self.header_table_size.unwrap_or(DEFAULT_HEADER_TABLE_SIZE)
    }

    /// Get enable push (with default)
    pub fn get_enable_push(&self) -> bool {
        self.enable_push.unwrap_or(true)
    }

    /// Get max concurrent streams (None = unlimited)
    pub fn get_max_concurrent_streams(&self) -> Option<u32> {
        self.max_concurrent_streams
    }

    /// Get initial window size (with default)
    pub fn get_initial_window_size(&self) -> u32 {
        self.initial_window_size
            .unwrap_or(DEFAULT_INITIAL_WINDOW_SIZE)
    }

    /// Get max frame size (with default)
    pub fn get_max_frame_size(&self) -> u32 {
        self.max_frame_size.unwrap_or(DEFAULT_MAX_FRAME_SIZE)
    }

    /// Get max header list size (None = unlimited)
    pub fn get_max_header_list_size(&self) -> Option<u32> {
        self.max_header_list_size
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        // SETTINGS_INITIAL_WINDOW_SIZE must not exceed 2^31-1
        if let Some(initial_window_size) = self.initial_window_size {
            if initial_window_size > 0x7FFF_FFFF {
                return Err(Error::Protocol(format!(
                    "initial window size {} exceeds maximum (2^31-1)",
                    initial_window_size
                )));
            }
        }

        // SETTINGS_MAX_FRAME_SIZE must stay within 16384..=16777215
        if let Some(max_frame_size) = self.max_frame_size {
            if !(16384..=16777215).contains(&max_frame_size) {
                return Err(Error::Protocol(format!(
                    "max frame size {} outside valid range (16384-16777215)",
                    max_frame_size
                )));
            }
        }

        Ok(())
    }
}

/// Builder for HTTP/2 settings
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Create a new settings builder
    pub fn new() -> Self {
        SettingsBuilder {
            settings: Settings::new(),
        }
    }

    /// Set header table size
    pub fn header_table_size(mut self, size: u32) -> Self {
        self.settings.header_table_size = Some(size);
        self
    }

    /// Set enable push
    pub fn enable_push(mut self, enable: bool) -> Self {
        self.settings.enable_push = Some(enable);
        self
    }

    /// Set max concurrent streams
    pub fn max_concurrent_streams(mut self, max: u32) -> Self {
        self.settings.max_concurrent_streams = Some(max);
        self
    }

    /// Set initial window size
    pub fn initial_window_size(mut self, size: u32) -> Self {
        self.settings.initial_window_size = Some(size);
        self
    }

    /// Set max frame size
    pub fn max_frame_size(mut self, size: u32) -> Self {
        self.settings.max_frame_size = Some(size);
        self
    }

    /// Set max header list size
    pub fn max_header_list_size(mut self, size: u32) -> Self {
        self.settings.max_header_list_size = Some(size);
        self
    }

    /// Build the settings
    pub fn build(self) -> Result<Settings> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_id_conversion() {
        assert_eq!(SettingId::HeaderTableSize.as_u16(), 0x1);
        assert_eq!(SettingId::MaxHeaderListSize.as_u16(), 0x6);

        assert_eq!(SettingId::from_u16(0x1), Some(SettingId::HeaderTableSize));
        assert_eq!(SettingId::from_u16(0x4), Some(SettingId::InitialWindowSize));
        assert_eq!(SettingId::from_u16(0xff), None);
    }

    #[test]
    fn test_setting_display() {
        let known = Setting::new(0x3, 100);
        assert_eq!(
            known.to_string(),
            "[SETTINGS_MAX_CONCURRENT_STREAMS(3):100]"
        );

        let unknown = Setting::new(0xa0, 7);
        assert_eq!(unknown.to_string(), "[SETTINGS_UNKNOWN(160):7]");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default_settings();
        assert_eq!(settings.get_header_table_size(), 4096);
        assert!(settings.get_enable_push());
        assert_eq!(settings.get_initial_window_size(), 65535);
        assert_eq!(settings.get_max_frame_size(), 16384);
    }

    #[test]
    fn test_settings_builder() {
        let settings = SettingsBuilder::new()
            .header_table_size(8192)
            .enable_push(false)
            .max_concurrent_streams(100)
            .initial_window_size(65535)
            .build()
            .unwrap();

        assert_eq!(settings.get_header_table_size(), 8192);
        assert!(!settings.get_enable_push());
        assert_eq!(settings.get_max_concurrent_streams(), Some(100));
        assert_eq!(settings.get_initial_window_size(), 65535);
    }

    #[test]
    fn test_settings_validation() {
        let settings = SettingsBuilder::new()
            .initial_window_size(65535)
            .max_frame_size(16384)
            .build();
        assert!(settings.is_ok());

        let settings = SettingsBuilder::new()
            .initial_window_size(0x8000_0000) // 2^31
            .build();
        assert!(settings.is_err());

        let settings = SettingsBuilder::new()
            .max_frame_size(1024) // < 16384
            .build();
        assert!(settings.is_err());

        let settings = SettingsBuilder::new()
            .max_frame_size(16777216) // > 16777215
            .build();
        assert!(settings.is_err());
    }

    #[test]
    fn test_settings_round_trip_entries() {
        let settings = SettingsBuilder::new()
            .max_concurrent_streams(100)
            .initial_window_size(65535)
            .build()
            .unwrap();

        let entries = settings.to_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Setting::new(0x3, 100));
        assert_eq!(entries[1], Setting::new(0x4, 65535));

        assert_eq!(Settings::from_entries(&entries), settings);
    }

    #[test]
    fn test_settings_shadowing() {
        // Later occurrences of the same identifier win
        let entries = [
            Setting::new(0x4, 1000),
            Setting::new(0x3, 50),
            Setting::new(0x4, 2000),
        ];
        let settings = Settings::from_entries(&entries);
        assert_eq!(settings.get_initial_window_size(), 2000);
        assert_eq!(settings.get_max_concurrent_streams(), Some(50));
    }

    #[test]
    fn test_settings_unknown_ids_ignored() {
        let entries = [Setting::new(0xbeef, 1), Setting::new(0x1, 8192)];
        let settings = Settings::from_entries(&entries);
        assert_eq!(settings.get_header_table_size(), 8192);
        assert_eq!(settings, Settings::from_entries(&[Setting::new(0x1, 8192)]));
    }
}
