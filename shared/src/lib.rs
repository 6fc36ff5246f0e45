//! Platform-independent core of Birthday Universe.
//!
//! Shared by the Yew frontend and the axum backend: calendar rules, the
//! birthday form, the date parameter pipeline, the category ring layout and
//! the placeholder dashboard content.

pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod form;
pub mod pipeline;
pub mod ring;

pub use calendar::{days_in_month, is_leap_year, is_valid_date, month_name};
pub use catalog::{CircleItem, DashboardView, MediaItem, SectionIcon};
pub use clock::{
    is_birthday_today, Clock, FixedClock, SystemClock, CELEBRATION_DURATION_MS, CONFETTI_COUNT,
};
pub use form::{
    clamp_day, selectable_days, validate_birthday, BirthdayFormError, BirthdayFormInput,
    SubmitOutcome,
};
pub use pipeline::{
    derive_display_fields, normalize_date_string, parse_date, resolve_birthday, BirthDate,
    BirthdayQuery, CanonicalDate, DateParseError, DisplayFields, ResolvedBirthday, FALLBACK_TOKEN,
};
pub use ring::{Category, CategoryRingItem, RingLayout, RingPoint, CATEGORIES};

use serde::{Deserialize, Serialize};

/// Log entry forwarded from the frontend to the backend log sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
