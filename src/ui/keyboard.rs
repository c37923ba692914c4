/// Global keyboard shortcuts

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::ui::context::AppContext;
use crate::ui::search::{CLEAR_SEARCH_ID, SEARCH_INPUT_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    ToggleTheme,
    ClearSearch,
}

/// Map a key press to a shortcut. Ctrl and Cmd are interchangeable.
pub fn classify_shortcut(key: &str, ctrl: bool, meta: bool, shift: bool) -> Option<Shortcut> {
    let command = ctrl || meta;
    match key {
        "k" if command => Some(Shortcut::FocusSearch),
        "T" if command && shift => Some(Shortcut::ToggleTheme),
        "Escape" => Some(Shortcut::ClearSearch),
        _ => None,
    }
}

pub struct KeyboardShortcuts {
    _listener: EventListener,
}

impl KeyboardShortcuts {
    pub fn install(ctx: &Rc<AppContext>) -> Self {
        let ctx_key = ctx.clone();
        // Non-passive so the browser's own Ctrl+K / Ctrl+Shift+T can be suppressed
        let listener = EventListener::new_with_options(
            &ctx.document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let shortcut =
                    classify_shortcut(&event.key(), event.ctrl_key(), event.meta_key(), event.shift_key());
                if let Some(shortcut) = shortcut {
                    run(&ctx_key, shortcut, event);
                }
            },
        );

        KeyboardShortcuts { _listener: listener }
    }
}

fn run(ctx: &AppContext, shortcut: Shortcut, event: &KeyboardEvent) {
    let search_input = ctx
        .document
        .get_element_by_id(SEARCH_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    match shortcut {
        Shortcut::FocusSearch => {
            event.prevent_default();
            if let Some(input) = search_input {
                let _ = input.focus();
            }
        }
        Shortcut::ToggleTheme => {
            event.prevent_default();
            ctx.theme_toggle.click();
        }
        Shortcut::ClearSearch => {
            let Some(input) = search_input.filter(|input| !input.value().is_empty()) else {
                return;
            };
            let Some(clear) = ctx
                .document
                .get_element_by_id(CLEAR_SEARCH_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            // The clear button focuses the field; Escape leaves focus where it was
            let focused = ctx.document.active_element();
            clear.click();
            let _ = input.blur();
            if let Some(previous) = focused.and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                let _ = previous.focus();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_search_with_ctrl_or_cmd() {
        assert_eq!(classify_shortcut("k", true, false, false), Some(Shortcut::FocusSearch));
        assert_eq!(classify_shortcut("k", false, true, false), Some(Shortcut::FocusSearch));
        assert_eq!(classify_shortcut("k", false, false, false), None);
    }

    #[test]
    fn test_toggle_theme_needs_shift() {
        assert_eq!(classify_shortcut("T", true, false, true), Some(Shortcut::ToggleTheme));
        assert_eq!(classify_shortcut("T", false, true, true), Some(Shortcut::ToggleTheme));
        assert_eq!(classify_shortcut("t", true, false, false), None);
        assert_eq!(classify_shortcut("T", false, false, true), None);
    }

    #[test]
    fn test_escape_without_modifiers() {
        assert_eq!(classify_shortcut("Escape", false, false, false), Some(Shortcut::ClearSearch));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(classify_shortcut("a", true, false, false), None);
        assert_eq!(classify_shortcut("Enter", false, false, false), None);
    }
}
