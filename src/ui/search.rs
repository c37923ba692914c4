/// Search panel and the filter engine that applies it to the card grid

use std::rc::Rc;

use web_sys::{Element, HtmlInputElement, Node};
use yew::AppHandle;
use yew::prelude::*;

use crate::card::Category;
use crate::error::MountError;
use crate::filter::{FilterPass, results_label, visibility, visible_count};
use crate::ui::analytics::SearchTracking;
use crate::ui::components::{ClearButton, FilterButton};
use crate::ui::context::{AppContext, set_style};

pub const SEARCH_INPUT_ID: &str = "search-input";
pub const CLEAR_SEARCH_ID: &str = "clear-search";

/// What the user did in the search panel
#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    Typed(String),
    Cleared,
    Filter(Category),
}

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub on_event: Callback<SearchEvent>,
}

#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let term = use_state(String::new);
    let active = use_state(|| Category::All);
    let input_ref = use_node_ref();

    let on_input = {
        let term = term.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                term.set(value.clone());
                on_event.emit(SearchEvent::Typed(value));
            }
        })
    };

    let on_clear = {
        let term = term.clone();
        let input_ref = input_ref.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            term.set(String::new());
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
                let _ = input.focus();
            }
            on_event.emit(SearchEvent::Cleared);
        })
    };

    let on_filter = {
        let active = active.clone();
        let on_event = props.on_event.clone();
        move |category: Category| {
            let active = active.clone();
            let on_event = on_event.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(category);
                on_event.emit(SearchEvent::Filter(category));
            })
        }
    };

    html! {
        <>
            <div class="search-wrapper">
                <i class="fas fa-search search-icon"></i>
                <input
                    type="text"
                    id={SEARCH_INPUT_ID}
                    class="search-input"
                    placeholder="Search AI tools..."
                    ref={input_ref}
                    value={(*term).clone()}
                    oninput={on_input}
                />
                <ClearButton visible={!term.is_empty()} onclick={on_clear} />
            </div>
            <div class="search-filters">
                {for Category::ALL.iter().map(|category| html! {
                    <FilterButton
                        key={category.value()}
                        category={*category}
                        active={*active == *category}
                        onclick={on_filter(*category)}
                    />
                })}
            </div>
        </>
    }
}

/// Recomputes card visibility from scratch and renders it
pub struct FilterEngine {
    ctx: Rc<AppContext>,
}

impl FilterEngine {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        FilterEngine { ctx }
    }

    /// Apply a pass to every card and refresh the results line
    pub fn run(&self, pass: &FilterPass) -> usize {
        let cards = self.ctx.cards();
        let records = self.ctx.card_records();
        let visible = visibility(&records, pass);

        for (card, shown) in cards.iter().zip(&visible) {
            if *shown {
                set_style(card, "display", "block");
                if matches!(pass, FilterPass::Search(_)) {
                    set_style(card, "animation", "fadeInUp 0.3s ease forwards");
                }
            } else {
                set_style(card, "display", "none");
            }
        }

        let count = visible_count(&visible);
        self.show_count(count);
        count
    }

    fn show_count(&self, count: usize) {
        let label = results_label(count);
        match self.results_line() {
            Ok(line) => line.set_text_content(Some(&label)),
            Err(e) => log::warn!("Results line unavailable: {}", e),
        }
    }

    /// The results line, created before the grid on first use
    fn results_line(&self) -> Result<Element, MountError> {
        if let Some(line) = self.ctx.document.query_selector(".results-info")? {
            return Ok(line);
        }

        let line = self.ctx.document.create_element("div")?;
        line.set_class_name("results-info");
        let parent = self
            .ctx
            .grid
            .parent_node()
            .ok_or(MountError::MissingElement("parent of .tools-grid"))?;
        let grid: &Node = &self.ctx.grid;
        parent.insert_before(&line, Some(grid))?;
        Ok(line)
    }
}

/// The injected search panel, wired to the filter engine and search tracking
pub struct SearchFeature {
    _app: AppHandle<SearchPanel>,
}

impl SearchFeature {
    pub fn install(ctx: &Rc<AppContext>, tracking: Rc<SearchTracking>) -> Result<Self, MountError> {
        let container = ctx.document.create_element("div")?;
        container.set_class_name("search-container");
        let parent = ctx
            .intro
            .parent_node()
            .ok_or(MountError::MissingElement("parent of .intro"))?;
        parent.insert_before(&container, ctx.intro.next_sibling().as_ref())?;

        let engine = FilterEngine::new(ctx.clone());
        let on_event = Callback::from(move |event: SearchEvent| match event {
            SearchEvent::Typed(term) => {
                engine.run(&FilterPass::Search(term.clone()));
                tracking.on_typed(term);
            }
            SearchEvent::Cleared => {
                tracking.cancel();
                engine.run(&FilterPass::Search(String::new()));
            }
            SearchEvent::Filter(category) => {
                engine.run(&FilterPass::Category(category));
            }
        });

        let app = yew::Renderer::<SearchPanel>::with_root_and_props(
            container,
            SearchPanelProps { on_event },
        )
        .render();

        Ok(SearchFeature { _app: app })
    }
}
