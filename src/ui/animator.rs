/// Card entrance reveal and hover/click feedback

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::TOOL_LINK_SELECTOR;
use crate::error::MountError;
use crate::schedule::{self, TimerGroup};
use crate::ui::context::{AppContext, html_elements, set_style};

const LIFTED: &str = "translateY(-8px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

pub struct CardAnimator {
    _observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    _listeners: Vec<EventListener>,
}

impl CardAnimator {
    pub fn install(ctx: &Rc<AppContext>) -> Result<Self, MountError> {
        // Reveal once, then stop watching the card
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(card) = target.dyn_ref::<HtmlElement>() {
                        set_style(card, "opacity", "1");
                        set_style(card, "transform", "translateY(0)");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;

        let mut listeners = Vec::new();
        for (index, card) in ctx.cards().into_iter().enumerate() {
            let delay = index as f64 * ctx.settings.reveal_stagger_secs;
            set_style(&card, "opacity", "0");
            set_style(&card, "transform", "translateY(30px)");
            set_style(
                &card,
                "transition",
                &format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s"),
            );
            observer.observe(&card);

            listeners.extend(hover_feedback(ctx, &card));
            listeners.push(click_pulse(ctx, &card));
        }

        Ok(CardAnimator {
            _observer: observer,
            _on_intersect: on_intersect,
            _listeners: listeners,
        })
    }
}

fn hover_feedback(ctx: &AppContext, card: &HtmlElement) -> [EventListener; 2] {
    let tag_timers = Rc::new(TimerGroup::default());
    let stagger = ctx.settings.tag_stagger_ms;

    let enter = {
        let target = card.clone();
        let tag_timers = tag_timers.clone();
        EventListener::new(card, "mouseenter", move |_| {
            let card = &target;
            set_style(card, "transform", LIFTED);
            if let Some(icon) = icon_of(card) {
                set_style(&icon, "transform", "rotate(360deg) scale(1.1)");
            }
            tag_timers.cancel_all();
            for (index, tag) in tags_of(card).into_iter().enumerate() {
                tag_timers.add(index as u32 * stagger, move || {
                    set_style(&tag, "transform", "scale(1.05)");
                });
            }
        })
    };

    let leave = {
        let target = card.clone();
        EventListener::new(card, "mouseleave", move |_| {
            let card = &target;
            tag_timers.cancel_all();
            set_style(card, "transform", RESTING);
            if let Some(icon) = icon_of(card) {
                set_style(&icon, "transform", "rotate(0deg) scale(1)");
            }
            for tag in tags_of(card) {
                set_style(&tag, "transform", "scale(1)");
            }
        })
    };

    [enter, leave]
}

/// Compress then lift, unless the click landed on the outbound link
fn click_pulse(ctx: &AppContext, card: &HtmlElement) -> EventListener {
    let pulse_ms = ctx.settings.pulse_ms;
    let target_card = card.clone();
    EventListener::new(card, "click", move |event| {
        let on_link = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(TOOL_LINK_SELECTOR).ok().flatten())
            .is_some();
        if on_link {
            return;
        }

        set_style(&target_card, "transform", "scale(0.98)");
        let card = target_card.clone();
        schedule::after(pulse_ms, move || set_style(&card, "transform", LIFTED));
    })
}

fn icon_of(card: &HtmlElement) -> Option<HtmlElement> {
    card.query_selector(".tool-icon")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn tags_of(card: &HtmlElement) -> Vec<HtmlElement> {
    card.query_selector_all(".tag").map(html_elements).unwrap_or_default()
}
