use chrono::Datelike;
use shared::{BirthdayFormError, BirthdayFormInput, Clock, SubmitOutcome};
use yew::prelude::*;

use super::birthday_form::BirthdayForm;
use super::category_ring::CategoryRing;
use super::header::{Footer, Header};
use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;
use crate::services::navigation::dashboard_href;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_navigate: Callback<String>,
    /// Fired when the submitted birthday is today
    pub on_celebrate: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let input = use_state(|| {
        let today = BrowserClock.today();
        BirthdayFormInput::starting_on(today.month(), today.day())
    });
    let error = use_state(|| Option::<BirthdayFormError>::None);

    let on_month_change = {
        let input = input.clone();
        Callback::from(move |month: u32| {
            let mut next = (*input).clone();
            next.set_month(month);
            input.set(next);
        })
    };

    let on_day_change = {
        let input = input.clone();
        Callback::from(move |day: u32| {
            let mut next = (*input).clone();
            next.set_day(day);
            input.set(next);
        })
    };

    let on_year_change = {
        let input = input.clone();
        Callback::from(move |year: String| {
            let mut next = (*input).clone();
            next.set_year(year);
            input.set(next);
        })
    };

    let on_submit = {
        let input = input.clone();
        let error = error.clone();
        let on_navigate = props.on_navigate.clone();
        let on_celebrate = props.on_celebrate.clone();
        Callback::from(move |_: ()| {
            let outcome = input.submit(&BrowserClock);
            error.set(outcome.error());

            match outcome {
                SubmitOutcome::Explore { date, celebrate } => {
                    if celebrate {
                        on_celebrate.emit(());
                    }
                    Logger::info_with_component("landing", &format!("Exploring birthday {}", date));
                    on_navigate.emit(dashboard_href(&date));
                }
                SubmitOutcome::Rejected(e) => {
                    Logger::warn_with_component(
                        "landing",
                        &format!("Rejected birthday input: {:?}", e),
                    );
                }
            }
        })
    };

    html! {
        <div class="page">
            <div class="nebula" aria-hidden="true" />
            <Header on_navigate={props.on_navigate.clone()} />

            <main class="landing">
                <div class="hero">
                    <h1>
                        {"YOUR BIRTHDAY"}
                        <span class="hero-accent">{"UNIVERSE"}</span>
                    </h1>
                    <p class="hero-subtitle">{"Enter Your Birthday to Explore"}</p>
                </div>

                <CategoryRing>
                    <BirthdayForm
                        input={(*input).clone()}
                        error={*error}
                        {on_month_change}
                        {on_day_change}
                        {on_year_change}
                        {on_submit}
                    />
                </CategoryRing>

                <Footer />
            </main>
        </div>
    }
}
