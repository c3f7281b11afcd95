// --- File: crates/pluview_config/src/models.rs ---

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORGANIZER_EMAIL: &str = "fhservicesofc@gmail.com";
pub const DEFAULT_LOCATION: &str = "Google Meet";

// --- Scheduling Config ---
// Everything the booking modal hard-codes; each field falls back to the site value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Team address that receives every invite (also the first attendee).
    pub organizer_email: String,
    /// Zone used to read "now" from the system clock.
    pub time_zone: Tz,
    /// Minimum minutes between now and a bookable slot on the current day.
    pub lead_time_minutes: u32,
    pub meeting_duration_minutes: u32,
    /// Truncation applied to every sanitized free-text field.
    pub max_field_length: usize,
    pub max_email_length: usize,
    pub tick_interval_seconds: u64,
    pub location: String,
    pub interests: Vec<String>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            organizer_email: DEFAULT_ORGANIZER_EMAIL.to_string(),
            time_zone: chrono_tz::America::Sao_Paulo,
            lead_time_minutes: 30,
            meeting_duration_minutes: 30,
            max_field_length: 500,
            max_email_length: 254,
            tick_interval_seconds: 60,
            location: DEFAULT_LOCATION.to_string(),
            interests: vec![
                "Parceria Comercial".to_string(),
                "Investimento".to_string(),
                "Conhecer o Projeto".to_string(),
                "Demonstração Técnica".to_string(),
                "Outro".to_string(),
            ],
        }
    }
}

// --- Theme Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// First hour (inclusive) of the light theme.
    pub light_start_hour: u32,
    /// First hour (inclusive) of the dark theme.
    pub dark_start_hour: u32,
    pub theme_key: String,
    pub manual_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_start_hour: 6,
            dark_start_hour: 18,
            theme_key: "pluview-theme".to_string(),
            manual_key: "pluview-manual-theme".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}
