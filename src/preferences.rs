/// Theme mode and the persisted preference record

use serde::{Deserialize, Deserializer, Serialize};

use crate::card::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "dark" is light. Tolerates JSON-quoted values.
    pub fn parse(raw: Option<&str>) -> Theme {
        match raw.map(|s| s.trim().trim_matches('"')) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: the mode a click switches to
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Any JSON value is accepted so a bad theme never discards the record
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Theme::parse(raw.as_str()))
    }
}

/// Last-used filter and theme, written on unload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_filter")]
    pub last_filter: String,
    #[serde(default)]
    pub theme: Theme,
}

fn default_filter() -> String {
    Category::All.value().to_string()
}

impl Preferences {
    pub fn new(last_filter: &str, theme: Theme) -> Preferences {
        Preferences {
            last_filter: last_filter.to_string(),
            theme,
        }
    }

    /// The filter to re-apply on load, if any
    pub fn restorable_filter(&self) -> Option<&str> {
        let filter = self.last_filter.as_str();
        if filter.is_empty() || filter == Category::All.value() {
            None
        } else {
            Some(filter)
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences::new(Category::All.value(), Theme::Light)
    }
}
