/// Reusable UI components

use yew::prelude::*;

use crate::card::Category;

#[derive(Properties, PartialEq)]
pub struct FilterButtonProps {
    pub category: Category,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FilterButton)]
pub fn filter_button(props: &FilterButtonProps) -> Html {
    let class = classes!("filter-btn", props.active.then_some("active"));

    html! {
        <button
            class={class}
            data-filter={props.category.value()}
            onclick={props.onclick.clone()}
        >
            {props.category.label()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClearButtonProps {
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ClearButton)]
pub fn clear_button(props: &ClearButtonProps) -> Html {
    let style = if props.visible { "display: block;" } else { "display: none;" };

    html! {
        <button id="clear-search" class="clear-search" style={style} onclick={props.onclick.clone()}>
            <i class="fas fa-times"></i>
        </button>
    }
}
