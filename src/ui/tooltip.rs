/// Floating hint that follows the pointer over a card

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::ui::context::{AppContext, read_card, set_style};

/// Distance kept from the viewport edges and from the pointer
const MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Top-left corner for a tooltip of `size` near `pointer`.
///
/// Horizontally the tooltip starts at the pointer and is clamped to
/// `[MARGIN, viewport.x - size.x - MARGIN]`. Vertically it sits above the
/// pointer unless that would put it closer than `MARGIN` to the top edge, in
/// which case it drops below.
pub fn place_tooltip(pointer: Point, size: Point, viewport: Point) -> Point {
    let x = pointer.x.min(viewport.x - size.x - MARGIN).max(MARGIN);

    let above = pointer.y - size.y - MARGIN;
    let y = if above < MARGIN { pointer.y + MARGIN } else { above };

    Point { x, y }
}

enum TooltipState {
    Hidden,
    Shown(HtmlElement),
}

struct Tooltip {
    window: Window,
    document: Document,
    state: RefCell<TooltipState>,
}

impl Tooltip {
    fn show(&self, event: &MouseEvent, text: &str) {
        self.hide();

        let Ok(element) = self.document.create_element("div") else {
            return;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        element.set_class_name("tooltip show");
        element.set_text_content(Some(text));

        if let Some(body) = self.document.body() {
            let _ = body.append_child(&element);
        }

        *self.state.borrow_mut() = TooltipState::Shown(element);
        self.track(event);
    }

    fn track(&self, event: &MouseEvent) {
        let state = self.state.borrow();
        let TooltipState::Shown(element) = &*state else {
            return;
        };

        let rect = element.get_bounding_client_rect();
        let viewport = Point {
            x: self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            y: self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        };
        let pointer = Point {
            x: event.client_x() as f64,
            y: event.client_y() as f64,
        };

        let at = place_tooltip(pointer, Point { x: rect.width(), y: rect.height() }, viewport);
        set_style(element, "left", &format!("{}px", at.x));
        set_style(element, "top", &format!("{}px", at.y));
    }

    fn hide(&self) {
        if let TooltipState::Shown(element) = self.state.replace(TooltipState::Hidden) {
            element.remove();
        }
    }
}

pub struct TooltipController {
    _listeners: Vec<EventListener>,
}

impl TooltipController {
    pub fn install(ctx: &Rc<AppContext>) -> Self {
        let tooltip = Rc::new(Tooltip {
            window: ctx.window.clone(),
            document: ctx.document.clone(),
            state: RefCell::new(TooltipState::Hidden),
        });

        let mut listeners = Vec::new();
        for card in ctx.cards() {
            let Some(hint) = read_card(&card).hint else {
                continue;
            };

            let enter = tooltip.clone();
            listeners.push(EventListener::new(&card, "mouseenter", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    enter.show(event, &hint);
                }
            }));

            let leave = tooltip.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_| {
                leave.hide();
            }));

            let mouse_move = tooltip.clone();
            listeners.push(EventListener::new(&card, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    mouse_move.track(event);
                }
            }));
        }

        TooltipController { _listeners: listeners }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Point = Point { x: 1000.0, y: 800.0 };
    const SIZE: Point = Point { x: 200.0, y: 40.0 };

    #[test]
    fn test_places_above_pointer() {
        let at = place_tooltip(Point { x: 300.0, y: 400.0 }, SIZE, VIEWPORT);
        assert_eq!(at, Point { x: 300.0, y: 350.0 });
    }

    #[test]
    fn test_clamps_right_edge() {
        let at = place_tooltip(Point { x: 950.0, y: 400.0 }, SIZE, VIEWPORT);
        assert_eq!(at.x, 790.0);
    }

    #[test]
    fn test_clamps_left_edge() {
        let at = place_tooltip(Point { x: 2.0, y: 400.0 }, SIZE, VIEWPORT);
        assert_eq!(at.x, 10.0);
    }

    #[test]
    fn test_drops_below_when_top_would_clip() {
        let at = place_tooltip(Point { x: 300.0, y: 30.0 }, SIZE, VIEWPORT);
        assert_eq!(at.y, 40.0);
    }

    #[test]
    fn test_exact_top_margin_stays_above() {
        let at = place_tooltip(Point { x: 300.0, y: 60.0 }, SIZE, VIEWPORT);
        assert_eq!(at.y, 10.0);
    }

    #[test]
    fn test_narrow_viewport_prefers_left_margin() {
        let at = place_tooltip(Point { x: 100.0, y: 400.0 }, SIZE, Point { x: 150.0, y: 800.0 });
        assert_eq!(at.x, 10.0);
    }
}
