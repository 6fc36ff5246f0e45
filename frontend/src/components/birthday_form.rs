use shared::{BirthdayFormError, BirthdayFormInput};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BirthdayFormProps {
    // Form state
    pub input: BirthdayFormInput,
    pub error: Option<BirthdayFormError>,

    // Event handlers
    pub on_month_change: Callback<u32>,
    pub on_day_change: Callback<u32>,
    pub on_year_change: Callback<String>,
    pub on_submit: Callback<()>,
}

fn select_value(e: &Event) -> Option<u32> {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value().parse().ok()
}

/// Month and day selectors plus the year box, centered inside the category ring
#[function_component(BirthdayForm)]
pub fn birthday_form(props: &BirthdayFormProps) -> Html {
    let on_month_change = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            if let Some(month) = select_value(&e) {
                on_month_change.emit(month);
            }
        })
    };

    let on_day_change = {
        let on_day_change = props.on_day_change.clone();
        Callback::from(move |e: Event| {
            if let Some(day) = select_value(&e) {
                on_day_change.emit(day);
            }
        })
    };

    let on_year_input = {
        let on_year_change = props.on_year_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_year_change.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let month = props.input.month;
    let day = props.input.day;

    html! {
        <form class="birthday-card" {onsubmit}>
            <div class="birthday-fields">
                <label class="field">
                    <div class="field-label">{"Month"}</div>
                    <select onchange={on_month_change}>
                        {for (1..=12u32).map(|m| html! {
                            <option value={m.to_string()} selected={m == month}>{m}</option>
                        })}
                    </select>
                </label>
                <label class="field">
                    <div class="field-label">{"Day"}</div>
                    <select onchange={on_day_change}>
                        {for (1..=props.input.day_count()).map(|d| html! {
                            <option value={d.to_string()} selected={d == day}>{d}</option>
                        })}
                    </select>
                </label>
                <label class="field">
                    <div class="field-label">{"Year"}</div>
                    <input
                        type="number"
                        placeholder="YYYY"
                        value={props.input.year.clone()}
                        oninput={on_year_input}
                    />
                </label>
            </div>

            {if let Some(error) = props.error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error.to_string()}
                    </div>
                }
            } else { html! {} }}

            <button type="submit" class="btn btn-primary explore-btn">
                {"EXPLORE"}
            </button>
        </form>
    }
}
