use yew::{function_component, html};

use self::game::GameView;

mod card_view;
mod game;
mod hand_view;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main>
            <nav class="navbar is-dark" role="navigation" aria-label="main navigation">
                <div class="navbar-brand">
                    <div class="navbar-item">
                        <b> { "Uno" } </b>
                    </div>
                </div>
            </nav>
            <section class="section">
                <div class="container">
                    <GameView/>
                </div>
            </section>
        </main>
    }
}
