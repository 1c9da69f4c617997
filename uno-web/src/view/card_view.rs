use uno_core::{Card, Color};
use yew::{classes, events::MouseEvent, function_component, html, Callback, Properties};

#[derive(Properties, PartialEq)]
pub struct CardViewProps {
    pub card: Card,
    #[prop_or(true)]
    pub playable: bool,
    #[prop_or_default]
    pub onclick: Callback<Card>,
}

pub fn card_background(color: Color) -> &'static str {
    match color {
        Color::Red => "#d72600",
        Color::Blue => "#0956bf",
        Color::Green => "#379711",
        Color::Yellow => "#ecd407",
        Color::Black => "#1c1c1c",
    }
}

pub fn card_style(color: Color, playable: bool) -> String {
    let opacity = if playable { 1.0 } else { 0.5 };
    format!(
        "background-color: {}; opacity: {};",
        card_background(color),
        opacity
    )
}

/// The glyph of a symbolic card, or the numeral of a number card.
pub fn center_label(card: &Card) -> String {
    card.kind()
        .glyph()
        .map(str::to_string)
        .unwrap_or_else(|| card.value().to_string())
}

/// The tap handler of a card, or `None` when the card must ignore input.
pub fn card_click(playable: bool, onclick: &Callback<Card>, card: &Card) -> Option<Callback<()>> {
    playable.then(|| {
        let card = card.clone();
        onclick.reform(move |()| card.clone())
    })
}

#[function_component(CardView)]
pub fn card_view(props: &CardViewProps) -> Html {
    let card = &props.card;
    let value = card.value().to_string();
    let onclick = card_click(props.playable, &props.onclick, card)
        .map(|click| click.reform(|_: MouseEvent| ()));

    html! {
        <div class={classes!("uno-card", (!props.playable).then_some("is-disabled"))}
            style={card_style(card.color(), props.playable)} onclick={onclick}>
            <span class="uno-card-corner">{ value.clone() }</span>
            <span class="uno-card-center">{ center_label(card) }</span>
            <span class="uno-card-corner is-bottom">{ value }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};
    use uno_core::{CardId, Kind};

    fn recorder() -> (Callback<Card>, Rc<RefCell<Vec<Card>>>) {
        let taps = Rc::new(RefCell::new(Vec::new()));
        let sink = taps.clone();
        (Callback::from(move |card: Card| sink.borrow_mut().push(card)), taps)
    }

    #[test]
    fn unplayable_card_has_no_tap_handler() {
        let (onclick, taps) = recorder();
        let card = Card::number(CardId::new(3), Color::Blue, 4);
        assert!(card_click(false, &onclick, &card).is_none());
        assert!(taps.borrow().is_empty());
    }

    #[test]
    fn playable_card_sends_itself_on_tap() {
        let (onclick, taps) = recorder();
        let card = Card::new(CardId::new(3), Color::Red, "skip", Kind::Skip);
        let click = card_click(true, &onclick, &card).expect("playable card is clickable");
        click.emit(());
        click.emit(());
        assert_eq!(*taps.borrow(), vec![card.clone(), card]);
    }

    #[test]
    fn number_card_shows_numeral_in_center() {
        let card = Card::number(CardId::new(0), Color::Red, 7);
        assert_eq!(center_label(&card), "7");
    }

    #[test]
    fn symbolic_card_shows_glyph_in_center() {
        let card = Card::new(CardId::new(0), Color::Blue, "skip", Kind::Skip);
        assert_eq!(center_label(&card), Kind::Skip.glyph().unwrap());
        let wild = Card::new(CardId::new(1), Color::Black, "+4", Kind::WildDrawFour);
        assert_eq!(center_label(&wild), Kind::Wild.glyph().unwrap());
    }

    #[test]
    fn unplayable_card_is_dimmed() {
        assert!(card_style(Color::Green, false).contains("opacity: 0.5"));
        assert!(card_style(Color::Green, true).contains("opacity: 1"));
    }

    #[test]
    fn every_color_has_its_own_background() {
        let colors = [
            Color::Red,
            Color::Blue,
            Color::Green,
            Color::Yellow,
            Color::Black,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(card_background(*a), card_background(*b));
            }
        }
    }
}
