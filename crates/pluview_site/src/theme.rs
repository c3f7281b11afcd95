// --- File: crates/pluview_site/src/theme.rs ---
//! Day/night theme: follows the clock until the visitor toggles it by hand,
//! after which the manual choice sticks across visits.

use crate::preferences::PreferenceStore;
use chrono::{NaiveDateTime, Timelike};
use pluview_common::{parse_error, PluviewError};
use pluview_config::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PluviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(parse_error(format!("unknown theme {other:?}"))),
        }
    }
}

/// Light from `light_start_hour` (inclusive) until `dark_start_hour` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSchedule {
    pub light_start_hour: u32,
    pub dark_start_hour: u32,
}

impl Default for ThemeSchedule {
    fn default() -> Self {
        Self {
            light_start_hour: 6,
            dark_start_hour: 18,
        }
    }
}

impl ThemeSchedule {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            light_start_hour: config.light_start_hour,
            dark_start_hour: config.dark_start_hour,
        }
    }

    pub fn theme_at(&self, hour: u32) -> Theme {
        if hour >= self.light_start_hour && hour < self.dark_start_hour {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

/// Theme at `hour` with the site's 06:00–18:00 light window.
pub fn time_based_theme(hour: u32) -> Theme {
    ThemeSchedule::default().theme_at(hour)
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    schedule: ThemeSchedule,
    theme_key: String,
    manual_key: String,
    theme: Theme,
    manual: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restores the saved choice if the visitor set one by hand, otherwise follows the clock.
    pub fn load(store: S, config: &ThemeConfig, now: NaiveDateTime) -> Result<Self, PluviewError> {
        let schedule = ThemeSchedule::from_config(config);
        let manual = store.get(&config.manual_key)?.as_deref() == Some("true");
        let saved = match store.get(&config.theme_key)? {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!("Ignoring saved theme: {}", err);
                    None
                }
            },
            None => None,
        };
        let theme = match saved {
            Some(theme) if manual => theme,
            _ => schedule.theme_at(now.hour()),
        };

        let mut controller = Self {
            store,
            schedule,
            theme_key: config.theme_key.clone(),
            manual_key: config.manual_key.clone(),
            theme,
            manual,
        };
        controller.persist_theme()?;
        debug!("Theme loaded: {} (manual: {})", theme, manual);
        Ok(controller)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flips the theme and pins it: the clock no longer drives it.
    pub fn toggle(&mut self) -> Result<Theme, PluviewError> {
        self.manual = true;
        self.store.set(&self.manual_key, "true")?;
        self.theme = self.theme.toggled();
        self.persist_theme()?;
        Ok(self.theme)
    }

    /// Periodic re-evaluation; ignored once the theme was picked by hand.
    /// Returns true when the theme changed.
    pub fn tick(&mut self, now: NaiveDateTime) -> Result<bool, PluviewError> {
        if self.manual {
            return Ok(false);
        }
        let next = self.schedule.theme_at(now.hour());
        if next == self.theme {
            return Ok(false);
        }
        self.theme = next;
        self.persist_theme()?;
        Ok(true)
    }

    fn persist_theme(&mut self) -> Result<(), PluviewError> {
        self.store.set(&self.theme_key, self.theme.as_str())
    }
}
