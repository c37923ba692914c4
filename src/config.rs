/// Page contract and tuning knobs for the directory layer

/// Storage keys shared with the static page
pub const THEME_KEY: &str = "theme";
pub const PREFERENCES_KEY: &str = "aiToolsPreferences";
pub const CLICKS_KEY: &str = "toolClicks";
pub const SEARCHES_KEY: &str = "searchHistory";

/// Selectors for the markup the page must already contain
pub const THEME_TOGGLE_SELECTOR: &str = "#theme-toggle";
pub const CARD_SELECTOR: &str = ".tool-card";
pub const INTRO_SELECTOR: &str = ".intro";
pub const GRID_SELECTOR: &str = ".tools-grid";
pub const TOOL_LINK_SELECTOR: &str = ".tool-link";

/// Limits and timings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub click_history_limit: usize,
    pub search_history_limit: usize,
    pub search_debounce_ms: u32,
    /// Terms must be strictly longer than this to be tracked
    pub min_tracked_term_len: usize,
    pub restore_delay_ms: u32,
    pub popular_tools_default: usize,
    pub reveal_stagger_secs: f64,
    pub tag_stagger_ms: u32,
    pub pulse_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            click_history_limit: 100,
            search_history_limit: 50,
            search_debounce_ms: 1000,
            min_tracked_term_len: 2,
            restore_delay_ms: 100,
            popular_tools_default: 5,
            reveal_stagger_secs: 0.1,
            tag_stagger_ms: 50,
            pulse_ms: 150,
        }
    }
}
