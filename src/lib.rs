/// AI Tools Directory - interactive layer for the static directory page
/// Built with Rust + WASM + Yew

pub mod card;
pub mod config;
pub mod error;
pub mod filter;
pub mod preferences;
pub mod schedule;
pub mod storage;
pub mod ui;
pub mod usage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::config::Settings;
use crate::storage::BrowserStore;
use crate::ui::Directory;
use crate::usage::UsageTracker;

thread_local! {
    // Keeps the mounted controller (and its listeners) alive for the page's lifetime
    static DIRECTORY: RefCell<Option<Directory>> = const { RefCell::new(None) };
}

// Set up panic hook and logging, then mount once the DOM is parsed
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document; directory layer not started");
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
}

fn mount() {
    let already_mounted = DIRECTORY.with(|slot| slot.borrow().is_some());
    if already_mounted {
        return;
    }

    match Directory::mount(Settings::default()) {
        Ok(directory) => DIRECTORY.with(|slot| *slot.borrow_mut() = Some(directory)),
        Err(e) => log::error!("Directory layer not mounted: {}", e),
    }
}

fn browser_tracker() -> UsageTracker {
    UsageTracker::in_browser(Rc::new(BrowserStore::new()), Settings::default())
}

/// Most-clicked tools as `[{tool, count}]`, five by default
#[wasm_bindgen]
pub fn popular_tools(limit: Option<usize>) -> JsValue {
    let limit = limit.unwrap_or(Settings::default().popular_tools_default);
    serde_wasm_bindgen::to_value(&browser_tracker().top_tools(limit)).unwrap_or(JsValue::NULL)
}

/// Persisted search log as `[{term, timestamp}]`
#[wasm_bindgen]
pub fn search_history() -> JsValue {
    serde_wasm_bindgen::to_value(&browser_tracker().search_history()).unwrap_or(JsValue::NULL)
}
