use yew::prelude::*;

use super::icons::StarLogo;
use crate::services::navigation::LANDING_PATH;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Client-side navigation for the logo link
    pub on_navigate: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logo_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(LANDING_PATH.to_string());
        })
    };

    html! {
        <header class="site-header">
            <a href={LANDING_PATH} class="brand" onclick={on_logo_click}>
                <div class="brand-badge">
                    <StarLogo />
                </div>
                <span>{"BIRTHDAY UNIVERSE"}</span>
            </a>
            <nav class="site-nav">
                <a href="#home">{"HOME"}</a>
                <a href="#themes">{"THEMES"}</a>
                <a href="#about">{"ABOUT"}</a>
                <a class="login-link" href="#login">{"LOGIN"}</a>
            </nav>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <a href="#">{"Terms of Service"}</a>
            <a href="#">{"Privacy Policy"}</a>
            <a href="#">{"Contact Us"}</a>
        </footer>
    }
}
