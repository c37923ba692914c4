/// Click and search history, and the aggregates read from them
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::{CLICKS_KEY, SEARCHES_KEY, Settings};
use crate::storage::{KeyValueStore, load_json, save_json};

/// One outbound tool-link activation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub tool: String,
    pub url: String,
    pub timestamp: String,
    #[serde(default)]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub term: String,
    pub timestamp: String,
}

/// Entry of the most-clicked ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCount {
    pub tool: String,
    pub count: usize,
}

/// Append and drop the oldest entries beyond `limit`
pub fn push_bounded<T>(log: &mut Vec<T>, entry: T, limit: usize) {
    log.push(entry);
    if log.len() > limit {
        let excess = log.len() - limit;
        log.drain(..excess);
    }
}

/// Count clicks per tool and return the `n` most clicked.
///
/// Tools with equal counts keep the order in which they were first clicked.
pub fn top_tools(clicks: &[ClickRecord], n: usize) -> Vec<ToolCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ToolCount> = Vec::new();

    for click in clicks {
        match positions.get(click.tool.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(&click.tool, counts.len());
                counts.push(ToolCount {
                    tool: click.tool.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-occurrence order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.into_iter().take(n).collect()
}

/// Whether a typed term is long enough to be worth recording
pub fn is_trackable(term: &str, min_len: usize) -> bool {
    term.chars().count() > min_len
}

/// Reads and appends to the persisted click and search logs
pub struct UsageTracker {
    store: Rc<dyn KeyValueStore>,
    clock: Box<dyn Fn() -> String>,
    user_agent: String,
    settings: Settings,
}

impl UsageTracker {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        settings: Settings,
        clock: Box<dyn Fn() -> String>,
        user_agent: String,
    ) -> Self {
        UsageTracker {
            store,
            clock,
            user_agent,
            settings,
        }
    }

    /// Tracker stamped with the browser clock and navigator user agent
    pub fn in_browser(store: Rc<dyn KeyValueStore>, settings: Settings) -> Self {
        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        let clock = Box::new(|| String::from(js_sys::Date::new_0().to_iso_string()));
        UsageTracker::new(store, settings, clock, user_agent)
    }

    pub fn record_click(&self, tool: &str, url: &str) {
        let mut clicks = self.click_history();
        let record = ClickRecord {
            tool: tool.to_string(),
            url: url.to_string(),
            timestamp: (self.clock)(),
            user_agent: self.user_agent.clone(),
        };
        push_bounded(&mut clicks, record, self.settings.click_history_limit);
        save_json(self.store.as_ref(), CLICKS_KEY, &clicks);
        log::debug!("Tracked click: {}", tool);
    }

    pub fn record_search(&self, term: &str) {
        let mut searches = self.search_history();
        let record = SearchRecord {
            term: term.to_string(),
            timestamp: (self.clock)(),
        };
        push_bounded(&mut searches, record, self.settings.search_history_limit);
        save_json(self.store.as_ref(), SEARCHES_KEY, &searches);
        log::debug!("Tracked search: {}", term);
    }

    /// Record the term if it passes the minimum length
    pub fn record_search_if_trackable(&self, term: &str) -> bool {
        let trackable = is_trackable(term, self.settings.min_tracked_term_len);
        if trackable {
            self.record_search(term);
        }
        trackable
    }

    pub fn top_tools(&self, n: usize) -> Vec<ToolCount> {
        top_tools(&self.click_history(), n)
    }

    pub fn search_history(&self) -> Vec<SearchRecord> {
        load_json(self.store.as_ref(), SEARCHES_KEY)
    }

    pub fn click_history(&self) -> Vec<ClickRecord> {
        load_json(self.store.as_ref(), CLICKS_KEY)
    }
}
