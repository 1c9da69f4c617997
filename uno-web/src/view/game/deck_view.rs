use yew::{events::MouseEvent, function_component, html, Callback, Properties};

#[derive(Properties, PartialEq)]
pub struct DeckViewProps {
    pub on_draw: Callback<()>,
}

#[function_component(DeckView)]
pub fn deck_view(props: &DeckViewProps) -> Html {
    let onclick = props.on_draw.reform(|_: MouseEvent| ());
    html! {
        <div class="uno-card-back uno-deck" title="Draw a card" onclick={onclick}>
            <span class="icon is-large has-text-white">
                <i class="fa-solid fa-layer-group fa-2x"></i>
            </span>
        </div>
    }
}
