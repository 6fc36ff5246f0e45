use shared::SectionIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: SectionIcon,
}

/// Shared 24x24 stroked frame for every line icon
fn line_icon(class: Classes, body: Html) -> Html {
    html! {
        <svg
            class={classes!("icon", class)}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.6"
        >
            {body}
        </svg>
    }
}

/// Line icon for a dashboard section or category
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let body = match props.icon {
        SectionIcon::News => html! {
            <>
                <rect x="3" y="4" width="18" height="16" rx="2" />
                <line x1="7" y1="8" x2="17" y2="8" />
                <line x1="7" y1="12" x2="13" y2="12" />
                <line x1="7" y1="16" x2="11" y2="16" />
            </>
        },
        SectionIcon::Movie => html! {
            <>
                <rect x="3" y="6" width="18" height="12" rx="2" />
                <circle cx="8" cy="9" r="1.3" />
                <circle cx="12" cy="9" r="1.3" />
                <circle cx="16" cy="9" r="1.3" />
            </>
        },
        SectionIcon::Music => html! {
            <>
                <path d="M9 18a3 3 0 1 0 0-6 3 3 0 0 0 0 6Zm6-10v10" />
                <polyline points="15 8 21 6 21 16" />
            </>
        },
        SectionIcon::Fashion => html! {
            <path d="M8 5l4 2 4-2 2 3-3 2v9H9V10L6 8l2-3z" />
        },
        SectionIcon::Astronomy => html! {
            <>
                <circle cx="12" cy="12" r="5" />
                <path d="M2 12c4-6 16-6 20 0" />
            </>
        },
        SectionIcon::Chart => html! {
            <>
                <rect x="3" y="11" width="4" height="8" rx="1" />
                <rect x="10" y="8" width="4" height="11" rx="1" />
                <rect x="17" y="5" width="4" height="14" rx="1" />
            </>
        },
    };

    line_icon(Classes::new(), body)
}

/// Icon for a landing screen category, by slug
pub fn category_icon(slug: &str) -> Html {
    match slug {
        "news" => html! { <Icon icon={SectionIcon::News} /> },
        "movie" => html! { <Icon icon={SectionIcon::Movie} /> },
        "fashion" => html! { <Icon icon={SectionIcon::Fashion} /> },
        "astronomy" => html! { <Icon icon={SectionIcon::Astronomy} /> },
        "billboard" => line_icon(
            Classes::new(),
            html! {
                <>
                    <rect x="3" y="4" width="18" height="10" rx="2" />
                    <line x1="7" y1="18" x2="7" y2="22" />
                    <line x1="17" y1="18" x2="17" y2="22" />
                </>
            },
        ),
        "drama" => line_icon(
            Classes::new(),
            html! {
                <>
                    <path d="M4 6h16v9c0 1.66-1.34 3-3 3H7c-1.66 0-3-1.34-3-3V6z" />
                    <path d="M9 10h.01M15 10h.01" />
                    <path d="M8 13c1.2.9 2.8.9 4 0" />
                </>
            },
        ),
        _ => html! {},
    }
}

#[function_component(StarLogo)]
pub fn star_logo() -> Html {
    line_icon(
        classes!("icon-small"),
        html! {
            <path d="M12 2l2.7 5.5L20 9l-4 3.9L17.4 19 12 16.3 6.6 19 8 12.9 4 9l5.3-1.5L12 2z" />
        },
    )
}
