/// Light/dark theme toggle

use std::rc::Rc;

use gloo::events::EventListener;

use crate::config::THEME_KEY;
use crate::preferences::Theme;
use crate::schedule;
use crate::storage::KeyValueStore;
use crate::ui::context::{AppContext, set_style};

const THEME_ATTRIBUTE: &str = "data-theme";

pub struct ThemeManager {
    _listener: EventListener,
}

impl ThemeManager {
    /// Apply the persisted theme and listen for toggle clicks
    pub fn install(ctx: &Rc<AppContext>) -> Self {
        let saved = Theme::parse(ctx.store.read(THEME_KEY).as_deref());
        set_theme(ctx, saved);

        let ctx_click = ctx.clone();
        let listener = EventListener::new(&ctx.theme_toggle, "click", move |_| {
            toggle(&ctx_click);

            let control = ctx_click.theme_toggle.clone();
            set_style(&control, "transform", "scale(0.9)");
            schedule::after(ctx_click.settings.pulse_ms, move || {
                set_style(&control, "transform", "scale(1)");
            });
        });

        ThemeManager { _listener: listener }
    }
}

/// Effective theme: the root attribute decides
pub fn current_theme(ctx: &AppContext) -> Theme {
    match ctx.root().and_then(|root| root.get_attribute(THEME_ATTRIBUTE)) {
        Some(_) => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn set_theme(ctx: &AppContext, theme: Theme) {
    if let Some(root) = ctx.root() {
        let _ = match theme {
            Theme::Dark => root.set_attribute(THEME_ATTRIBUTE, "dark"),
            Theme::Light => root.remove_attribute(THEME_ATTRIBUTE),
        };
    }

    if let Ok(Some(icon)) = ctx.theme_toggle.query_selector("i") {
        icon.set_class_name(theme.icon_class());
    }

    ctx.store.write(THEME_KEY, theme.as_str());
}

pub fn toggle(ctx: &AppContext) -> Theme {
    let next = current_theme(ctx).toggled();
    set_theme(ctx, next);
    log::info!("Theme switched to {}", next.as_str());
    next
}
