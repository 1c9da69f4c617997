use yew::{classes, function_component, html, Properties};

#[derive(Properties, PartialEq)]
pub struct TurnIndicatorProps {
    pub is_my_turn: bool,
}

pub fn turn_text(is_my_turn: bool) -> &'static str {
    if is_my_turn {
        "Your turn"
    } else {
        "Opponent's turn"
    }
}

#[function_component(TurnIndicator)]
pub fn turn_indicator(props: &TurnIndicatorProps) -> Html {
    let style = if props.is_my_turn {
        "my-foreground"
    } else {
        "their-foreground"
    };
    html! {
        <div class="columns is-mobile is-centered">
            <div class="column is-narrow">
                <p class={classes!("title", "is-5", style)}>{ turn_text(props.is_my_turn) }</p>
            </div>
        </div>
    }
}
