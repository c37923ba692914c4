/// Application context: DOM handles, storage and settings shared by every feature

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::card::CardRecord;
use crate::config::{
    CARD_SELECTOR, GRID_SELECTOR, INTRO_SELECTOR, Settings, THEME_TOGGLE_SELECTOR,
};
use crate::error::MountError;
use crate::storage::KeyValueStore;

pub struct AppContext {
    pub window: Window,
    pub document: Document,
    pub theme_toggle: HtmlElement,
    pub intro: Element,
    pub grid: Element,
    pub store: Rc<dyn KeyValueStore>,
    pub settings: Settings,
}

impl AppContext {
    /// Resolve the page elements the layer needs. Fails if any is missing.
    pub fn from_page(store: Rc<dyn KeyValueStore>, settings: Settings) -> Result<Rc<Self>, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let theme_toggle = require(&document, THEME_TOGGLE_SELECTOR)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::MissingElement(THEME_TOGGLE_SELECTOR))?;
        let intro = require(&document, INTRO_SELECTOR)?;
        let grid = require(&document, GRID_SELECTOR)?;

        Ok(Rc::new(AppContext {
            window,
            document,
            theme_toggle,
            intro,
            grid,
            store,
            settings,
        }))
    }

    /// `<html>`, which carries the theme attribute
    pub fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    /// Current card elements, queried fresh on each call
    pub fn cards(&self) -> Vec<HtmlElement> {
        self.document
            .query_selector_all(CARD_SELECTOR)
            .map(html_elements)
            .unwrap_or_default()
    }

    /// Card records read from the live DOM
    pub fn card_records(&self) -> Vec<CardRecord> {
        self.cards().iter().map(|card| read_card(card)).collect()
    }
}

fn require(document: &Document, selector: &'static str) -> Result<Element, MountError> {
    document
        .query_selector(selector)?
        .ok_or(MountError::MissingElement(selector))
}

/// Extract title, description, tags and hint from a card element
pub fn read_card(card: &Element) -> CardRecord {
    let text_of = |selector: &str| {
        card.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    };

    let tags = card
        .query_selector_all(".tag")
        .map(html_elements)
        .unwrap_or_default()
        .iter()
        .filter_map(|tag| tag.text_content())
        .collect();

    CardRecord {
        title: text_of("h3").trim().to_string(),
        description: text_of("p"),
        tags,
        hint: card.get_attribute("data-tooltip").filter(|hint| !hint.is_empty()),
    }
}

pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set one inline style property. Style writes are cosmetic; failures are ignored.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
