use shared::{CircleItem, MediaItem, SectionIcon};
use yew::prelude::*;

use super::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    pub title: AttrValue,
    pub icon: SectionIcon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SectionCard)]
pub fn section_card(props: &SectionCardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-title">
                <span class="card-icon"><Icon icon={props.icon} /></span>
                <span>{props.title.clone()}</span>
            </div>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PosterRowProps {
    pub items: Vec<MediaItem>,
}

#[function_component(PosterRow)]
pub fn poster_row(props: &PosterRowProps) -> Html {
    html! {
        <div class="poster-row">
            {for props.items.iter().map(|item| html! {
                <div key={item.title} class="poster">
                    <div class="poster-art"><span>{item.emoji}</span></div>
                    <div class="poster-title">{item.title}</div>
                    {if let Some(subtitle) = item.subtitle {
                        html! { <div class="poster-subtitle">{subtitle}</div> }
                    } else { html! {} }}
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CircleCardProps {
    pub item: CircleItem,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CircleCard)]
pub fn circle_card(props: &CircleCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-title">
                <span class="card-icon"><Icon icon={item.icon} /></span>
                <span>{item.title}</span>
            </div>
            <div class={classes!("circle", item.tint)}>
                <span>{item.emoji}</span>
            </div>
        </div>
    }
}
