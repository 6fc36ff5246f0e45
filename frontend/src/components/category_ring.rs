use shared::{RingLayout, RingPoint, CATEGORIES};
use yew::prelude::*;

use super::icons::category_icon;

#[derive(Properties, PartialEq)]
pub struct CategoryRingProps {
    /// Rendered in the middle of the ring
    #[prop_or_default]
    pub children: Html,
}

/// Category links laid out evenly around a circle
#[function_component(CategoryRing)]
pub fn category_ring(props: &CategoryRingProps) -> Html {
    let items = use_memo((), |_| RingLayout::default().place(&CATEGORIES));

    html! {
        <div class="ring">
            <div class="ring-center">
                {props.children.clone()}
            </div>
            <div class="ring-track" />
            {for items.iter().map(|item| {
                let RingPoint { x, y } = item.position;
                let style = format!("left: {:.2}px; top: {:.2}px;", x, y);
                html! {
                    <a key={item.slug.clone()} class="ring-item" href={item.href()} {style}>
                        <span class="ring-item-icon">{category_icon(&item.slug)}</span>
                        {item.label.clone()}
                    </a>
                }
            })}
        </div>
    }
}
