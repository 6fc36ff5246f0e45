use gloo::timers::callback::Timeout;
use shared::{CELEBRATION_DURATION_MS, CONFETTI_COUNT};
use yew::prelude::*;

/// One falling confetti piece
#[derive(Clone, PartialEq, Debug)]
pub struct ConfettiPiece {
    pub id: String,
    /// Horizontal start, percent of viewport width
    pub x: f64,
    /// Animation delay in seconds
    pub delay: f64,
    /// Initial rotation in degrees
    pub rotation: f64,
}

/// Scatter `count` pieces using `random` (uniform in `0.0..1.0`)
pub fn scatter_confetti(
    batch: u64,
    count: usize,
    mut random: impl FnMut() -> f64,
) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|index| ConfettiPiece {
            id: format!("{}-{}", batch, index),
            x: random() * 100.0,
            delay: random() * 0.4,
            rotation: random() * 360.0,
        })
        .collect()
}

#[derive(Clone, PartialEq)]
pub struct UseCelebrationHandle {
    pub pieces: Vec<ConfettiPiece>,
    /// Start a celebration; it clears itself after `CELEBRATION_DURATION_MS`
    pub celebrate: Callback<()>,
}

#[hook]
pub fn use_celebration() -> UseCelebrationHandle {
    let pieces = use_state(Vec::<ConfettiPiece>::new);

    let celebrate = {
        let pieces = pieces.clone();
        use_callback((), move |_: (), _| {
            let batch = js_sys::Date::now() as u64;
            pieces.set(scatter_confetti(batch, CONFETTI_COUNT, js_sys::Math::random));

            let pieces = pieces.clone();
            Timeout::new(CELEBRATION_DURATION_MS, move || pieces.set(Vec::new())).forget();
        })
    };

    UseCelebrationHandle {
        pieces: (*pieces).clone(),
        celebrate,
    }
}
