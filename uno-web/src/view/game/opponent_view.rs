use yew::{function_component, html, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct OpponentViewProps {
    pub count: u32,
}

pub fn count_label(count: u32) -> String {
    match count {
        1 => "Opponent holds 1 card".to_string(),
        n => format!("Opponent holds {} cards", n),
    }
}

#[function_component(OpponentView)]
pub fn opponent_view(props: &OpponentViewProps) -> Html {
    html! {
        <div class="block">
            <div class="uno-opponent-hand"> {
                (0..props.count).map(|_| html! {
                    <div class="uno-card-back is-small is-upside-down"/>
                }).collect::<Html>()
            } </div>
            <p class="has-text-centered has-text-grey-light">{ count_label(props.count) }</p>
        </div>
    }
}
