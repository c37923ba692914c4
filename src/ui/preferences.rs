/// Saving and restoring the last-used filter

use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::HtmlElement;

use crate::card::Category;
use crate::config::{PREFERENCES_KEY, THEME_KEY};
use crate::preferences::{Preferences, Theme};
use crate::schedule;
use crate::storage::{KeyValueStore, load_json, save_json};
use crate::ui::context::{AppContext, html_elements};

const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";

/// Snapshot the active filter and theme into storage
pub fn save(ctx: &AppContext) {
    let last_filter = ctx
        .document
        .query_selector(".filter-btn.active")
        .ok()
        .flatten()
        .and_then(|button| button.get_attribute("data-filter"))
        .unwrap_or_else(|| Category::All.value().to_string());
    let theme = Theme::parse(ctx.store.read(THEME_KEY).as_deref());

    save_json(ctx.store.as_ref(), PREFERENCES_KEY, &Preferences::new(&last_filter, theme));
}

/// Re-apply a saved filter by clicking its button once the panel has rendered
pub fn restore(ctx: &Rc<AppContext>) {
    let prefs: Preferences = load_json(ctx.store.as_ref(), PREFERENCES_KEY);
    let Some(filter) = prefs.restorable_filter().map(str::to_string) else {
        return;
    };
    if Category::from_value(&filter).is_none() {
        log::debug!("Saved filter {} is not a known category", filter);
        return;
    }

    let ctx = ctx.clone();
    schedule::after(ctx.settings.restore_delay_ms, move || {
        match filter_button(&ctx, &filter) {
            Some(button) => {
                log::info!("Restoring filter {}", filter);
                button.click();
            }
            None => log::debug!("Saved filter {} has no button", filter),
        }
    });
}

fn filter_button(ctx: &AppContext, value: &str) -> Option<HtmlElement> {
    ctx.document
        .query_selector_all(FILTER_BUTTON_SELECTOR)
        .map(html_elements)
        .unwrap_or_default()
        .into_iter()
        .find(|button| button.get_attribute("data-filter").as_deref() == Some(value))
}

/// Saves preferences when the page is torn down
pub struct PreferenceStore {
    _on_unload: EventListener,
}

impl PreferenceStore {
    pub fn install(ctx: &Rc<AppContext>) -> Self {
        restore(ctx);

        let ctx_unload = ctx.clone();
        let listener = EventListener::new(&ctx.window, "beforeunload", move |_| {
            save(&ctx_unload);
        });

        PreferenceStore { _on_unload: listener }
    }
}
