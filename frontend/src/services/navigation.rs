//! Client-side routing between the landing and dashboard screens.

use shared::{BirthdayQuery, CanonicalDate};
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
}

impl Route {
    /// Match a path to a screen; `None` for paths the app does not serve
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Landing),
            DASHBOARD_PATH => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Path and query string of the current page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLocation {
    pub path: String,
    pub search: String,
}

impl PageLocation {
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|window| window.location()) else {
            return Self::default();
        };
        Self {
            path: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
        }
    }

    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }

    /// Read the `date` and legacy `birthday` parameters from the query string
    pub fn birthday_query(&self) -> BirthdayQuery {
        match UrlSearchParams::new_with_str(&self.search) {
            Ok(params) => BirthdayQuery::new(params.get("date"), params.get("birthday")),
            Err(_) => BirthdayQuery::default(),
        }
    }
}

/// Dashboard URL carrying a percent-encoded canonical date
pub fn dashboard_href(date: &CanonicalDate) -> String {
    let encoded: String = js_sys::encode_uri_component(date.as_str()).into();
    format!("{}?date={}", DASHBOARD_PATH, encoded)
}

/// Add a history entry for `href` without reloading the page
pub fn push(href: &str) -> Result<(), JsValue> {
    let history = window_history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(href))
}

/// Swap the current history entry for `href` without reloading the page
pub fn replace(href: &str) -> Result<(), JsValue> {
    let history = window_history()?;
    history.replace_state_with_url(&JsValue::NULL, "", Some(href))
}

fn window_history() -> Result<web_sys::History, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .history()
}
