// --- File: crates/pluview_site/src/lib.rs ---
pub mod preferences;
pub mod route_map;
pub mod theme;

pub use preferences::{JsonFileStore, MemoryStore, PreferenceStore};
pub use route_map::{GeoPoint, RouteAnimation};
pub use theme::{time_based_theme, Theme, ThemeController, ThemeSchedule};
