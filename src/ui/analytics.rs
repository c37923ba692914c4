/// Tool-link click tracking and debounced search tracking

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::{CARD_SELECTOR, TOOL_LINK_SELECTOR};
use crate::schedule::Debouncer;
use crate::ui::context::{AppContext, html_elements};
use crate::usage::UsageTracker;

/// Records a search term once typing pauses
pub struct SearchTracking {
    tracker: Rc<UsageTracker>,
    debouncer: Debouncer,
}

impl SearchTracking {
    pub fn new(tracker: Rc<UsageTracker>, delay_ms: u32) -> Self {
        SearchTracking {
            tracker,
            debouncer: Debouncer::new(delay_ms),
        }
    }

    /// Restart the quiet period with the latest term
    pub fn on_typed(&self, term: String) {
        let tracker = self.tracker.clone();
        self.debouncer.schedule(move || {
            tracker.record_search_if_trackable(&term);
        });
    }

    /// Drop a pending term, e.g. when the field is cleared
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}

/// Listeners recording every outbound tool-link activation
pub struct ClickTracking {
    _listeners: Vec<EventListener>,
}

impl ClickTracking {
    pub fn install(ctx: &AppContext, tracker: Rc<UsageTracker>) -> Self {
        let links = ctx
            .document
            .query_selector_all(TOOL_LINK_SELECTOR)
            .map(html_elements)
            .unwrap_or_default();

        let listeners = links
            .into_iter()
            .map(|link| {
                let tracker = tracker.clone();
                let target = link.clone();
                EventListener::new(&link, "click", move |_| {
                    let tool = target
                        .closest(CARD_SELECTOR)
                        .ok()
                        .flatten()
                        .and_then(|card| card.query_selector("h3").ok().flatten())
                        .and_then(|heading| heading.text_content())
                        .map(|name| name.trim().to_string())
                        .unwrap_or_default();
                    let url = match target.dyn_ref::<HtmlAnchorElement>() {
                        Some(anchor) => anchor.href(),
                        None => target.get_attribute("href").unwrap_or_default(),
                    };
                    tracker.record_click(&tool, &url);
                })
            })
            .collect();

        ClickTracking { _listeners: listeners }
    }
}
