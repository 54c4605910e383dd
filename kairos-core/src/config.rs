//! Runtime settings.
//!
//! Compiled-in defaults today; the `serde` feature keeps the struct
//! ready for an external configuration channel.

use heapless::String;

/// Tunable behavior of the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Timer wakes between telemetry refreshes
    pub update_interval: u16,
    /// NTP server hostname
    pub ntp_server: String<48>,
    /// Telemetry endpoint URL
    pub telemetry_url: String<96>,
    /// Timezone offset from UTC in seconds
    pub gmt_offset_s: i32,
    /// Additional daylight-saving offset in seconds
    pub dst_offset_s: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut ntp_server = String::new();
        let mut telemetry_url = String::new();
        // Both literals fit their buffers. push_str only fails on
        // overflow, so the results can be ignored.
        let _ = ntp_server.push_str("pool.ntp.org");
        let _ = telemetry_url.push_str("http://api.openweathermap.org/data/2.5/weather");
        Self {
            update_interval: 60,
            ntp_server,
            telemetry_url,
            gmt_offset_s: 0,
            dst_offset_s: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_populated() {
        let settings = Settings::default();
        assert_eq!(settings.update_interval, 60);
        assert!(!settings.ntp_server.is_empty());
        assert!(settings.telemetry_url.starts_with("http"));
    }
}
