use yew::prelude::*;

use crate::hooks::use_celebration::ConfettiPiece;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub pieces: Vec<ConfettiPiece>,
}

/// Decorative overlay; renders nothing when there is no celebration
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    if props.pieces.is_empty() {
        return html! {};
    }

    html! {
        <div class="confetti-layer" aria-hidden="true">
            {for props.pieces.iter().map(|piece| {
                let style = format!(
                    "left: {:.2}%; animation-delay: {:.2}s; transform: rotate({:.0}deg);",
                    piece.x, piece.delay, piece.rotation
                );
                html! {
                    <span key={piece.id.clone()} class="confetti-piece" {style}>{"🎉"}</span>
                }
            })}
        </div>
    }
}
