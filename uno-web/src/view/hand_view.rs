use uno_core::Card;
use yew::{function_component, html, Callback, Html, Properties};

use super::card_view::{CardView, CardViewProps};

#[derive(Properties, PartialEq)]
pub struct HandViewProps {
    pub cards: Vec<Card>,
    pub on_card_play: Callback<Card>,
    pub is_my_turn: bool,
}

/// One `CardView` per card, playable exactly while it is the player's turn.
pub fn hand_cards(props: &HandViewProps) -> Vec<CardViewProps> {
    props
        .cards
        .iter()
        .map(|card| CardViewProps {
            card: card.clone(),
            playable: props.is_my_turn,
            onclick: props.on_card_play.clone(),
        })
        .collect()
}

/// The player's cards in a horizontally scrolling strip. Whether a tapped
/// card may actually be played is for the receiver of `on_card_play` to decide.
#[function_component(HandView)]
pub fn hand_view(props: &HandViewProps) -> Html {
    html! {
        <div class="uno-hand">
            <div class="uno-hand-strip"> {
                hand_cards(props).into_iter().map(|card| html! {
                    <CardView key={card.card.id().to_string()} card={card.card.clone()}
                        playable={card.playable} onclick={card.onclick}/>
                }).collect::<Html>()
            } </div>
        </div>
    }
}
