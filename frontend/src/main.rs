use gloo::events::EventListener;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::confetti::Confetti;
use components::dashboard::Dashboard;
use components::landing::Landing;
use hooks::use_celebration::use_celebration;
use services::logging::Logger;
use services::navigation::{self, PageLocation, Route, LANDING_PATH};

#[function_component(App)]
fn app() -> Html {
    let location = use_state(PageLocation::current);
    let celebration = use_celebration();

    // Keep the rendered screen in sync with back/forward buttons
    {
        let location = location.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    location.set(PageLocation::current());
                })
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let location = location.clone();
        Callback::from(move |href: String| {
            if let Err(e) = navigation::push(&href) {
                let message = format!("Failed to navigate to {}: {:?}", href, e);
                Logger::error_with_component("router", &message);
                return;
            }
            location.set(PageLocation::current());
        })
    };

    let route = location.route();

    // Unknown paths go back to the landing screen, replacing the history entry
    {
        let location = location.clone();
        use_effect_with(route, move |route| {
            if route.is_none() {
                let message = format!("Unknown path {}, redirecting", location.path);
                Logger::info_with_component("router", &message);
                if navigation::replace(LANDING_PATH).is_ok() {
                    location.set(PageLocation::current());
                }
            }
            || ()
        });
    }

    let screen = match route {
        Some(Route::Dashboard) => html! {
            <Dashboard location={(*location).clone()} on_navigate={on_navigate.clone()} />
        },
        Some(Route::Landing) | None => html! {
            <Landing
                on_navigate={on_navigate.clone()}
                on_celebrate={celebration.celebrate.clone()}
            />
        },
    };

    html! {
        <>
            {screen}
            <Confetti pieces={celebration.pieces.clone()} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
