use shared::{DashboardView, SectionIcon};
use yew::prelude::*;

use super::cards::{CircleCard, PosterRow, SectionCard};
use super::header::{Footer, Header};
use crate::hooks::use_birthday::use_birthday;
use crate::services::navigation::PageLocation;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub location: PageLocation,
    pub on_navigate: Callback<String>,
}

/// Placeholder "on this day" content for the birthday in the URL
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let birthday = use_birthday(&props.location);
    let view = DashboardView::render(&birthday.display);

    html! {
        <div class="page">
            <div class="nebula" aria-hidden="true" />
            <Header on_navigate={props.on_navigate.clone()} />

            <main class="dashboard">
                <div class="dashboard-title">
                    <h1>{"YOUR BIRTHDAY "}<span class="hero-accent-inline">{"UNIVERSE"}</span></h1>
                    <p class="hero-subtitle">{view.subtitle.clone()}</p>
                </div>

                <div class="dashboard-grid">
                    <SectionCard class={classes!("span-3")} title="NEWS" icon={SectionIcon::News}>
                        <ul class="bullets">
                            {for view.news_bullets.iter().map(|bullet| html! {
                                <li>{format!("• {}", bullet)}</li>
                            })}
                        </ul>
                    </SectionCard>

                    <SectionCard
                        class={classes!("span-4")}
                        title="MOVIES"
                        icon={SectionIcon::Movie}
                    >
                        <PosterRow items={view.movies.clone()} />
                    </SectionCard>

                    <SectionCard
                        class={classes!("span-3")}
                        title={view.top_hits_title.clone()}
                        icon={SectionIcon::Music}
                    >
                        <PosterRow items={view.top_hits.clone()} />
                    </SectionCard>

                    <SectionCard
                        class={classes!("span-2")}
                        title="FASHION"
                        icon={SectionIcon::Fashion}
                    >
                        <PosterRow items={view.fashion.clone()} />
                    </SectionCard>

                    {for view.circles.iter().map(|circle| html! {
                        <CircleCard key={circle.title} class={classes!("span-3")} item={*circle} />
                    })}
                </div>

                <Footer />
            </main>
        </div>
    }
}
