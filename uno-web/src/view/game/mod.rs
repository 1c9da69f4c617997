use std::time::Duration;

use gloo::timers::callback::Timeout;
use log::{debug, info};
use rand::rngs::ThreadRng;
use uno_core::{Card, Config, Effect, Event, Game, Notice, RngSource};
use yew::{events::MouseEvent, html, Component, Context, Html};

use self::{
    deck_view::DeckView,
    notice_view::NoticeView,
    opponent_timer::{timer_millis, OpponentTimer},
    opponent_view::OpponentView,
    turn_indicator::TurnIndicator,
};
use super::{card_view::CardView, hand_view::HandView};

mod deck_view;
mod notice_view;
mod opponent_timer;
mod opponent_view;
mod turn_indicator;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

type TableGame = Game<RngSource<ThreadRng>>;

/// The table screen. Owns the game and every timer that feeds it, so the
/// pending opponent turn dies with the screen.
pub struct GameView {
    game: TableGame,
    opponent_timer: OpponentTimer<Timeout>,
    notice: Option<Notice>,
    notice_timeout: Option<Timeout>,
}

pub enum GameMsg {
    PlayCard(Card),
    Draw,
    OpponentResolved(u64),
    Restart,
    DismissNotice,
}

impl Component for GameView {
    type Message = GameMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut view = Self {
            game: Game::new(Config::default(), RngSource::thread()),
            opponent_timer: OpponentTimer::new(),
            notice: None,
            notice_timeout: None,
        };
        view.dispatch(ctx, Event::Setup);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: GameMsg) -> bool {
        use GameMsg::*;
        match msg {
            PlayCard(card) => {
                debug!("user plays {} {}", card.id(), card);
                self.dispatch(ctx, Event::Play(card.id()))
            }
            Draw => {
                debug!("user draws");
                self.dispatch(ctx, Event::Draw)
            }
            OpponentResolved(ticket) => {
                if !self.opponent_timer.fire(ticket) {
                    debug!("stale opponent turn {} ignored", ticket);
                    return false;
                }
                debug!("opponent turn resolves");
                self.dispatch(ctx, Event::OpponentResolved)
            }
            Restart => {
                self.opponent_timer.cancel();
                info!("new game");
                self.dispatch(ctx, Event::Setup)
            }
            DismissNotice => {
                self.notice_timeout = None;
                self.notice.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.game.state();
        let is_my_turn = state.is_my_turn();
        let on_card_play = ctx.link().callback(GameMsg::PlayCard);
        let on_draw = ctx.link().callback(|()| GameMsg::Draw);
        let on_close = ctx.link().callback(|()| GameMsg::DismissNotice);
        let restart_onclick = ctx.link().callback(|_: MouseEvent| GameMsg::Restart);

        html! {
            <div class="uno-table">
                <OpponentView count={state.opponent_count()}/>
                <div class="uno-play-area">
                    {
                        match state.discard_top() {
                            Some(top) => html! {
                                <div class="uno-discard">
                                    <CardView card={top.clone()} playable={false}/>
                                </div>
                            },
                            None => html! {},
                        }
                    }
                    <DeckView {on_draw}/>
                </div>
                <HandView cards={state.hand().clone()} {on_card_play} {is_my_turn}/>
                <TurnIndicator {is_my_turn}/>
                <div class="buttons is-centered">
                    <button class="button is-success" onclick={restart_onclick}>
                        <span class="icon">
                            <i class="fa-solid fa-arrow-rotate-left"></i>
                        </span>
                        <span>{ "New game" }</span>
                    </button>
                </div>
                <NoticeView notice={self.notice} {on_close}/>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.opponent_timer.cancel() {
            debug!("screen closed, pending opponent turn cancelled");
        }
        self.notice_timeout = None;
    }
}

impl GameView {
    /// Feeds `event` to the game and arms whatever timers the outcome asks
    /// for. Returns whether the screen needs a re-render.
    fn dispatch(&mut self, ctx: &Context<Self>, event: Event) -> bool {
        let outcome = self.game.dispatch(event);
        if let Some(err) = &outcome.rejected {
            debug!("{:?} rejected: {}", event, err);
        }
        if let Some(notice) = outcome.notice {
            self.show_notice(ctx, notice);
        }
        if let Some(Effect::ScheduleOpponent { delay }) = outcome.effect {
            self.schedule_opponent(ctx, delay);
        }
        if outcome.rejected.is_none() {
            debug!(
                "state = {}",
                serde_json::to_string(self.game.state()).unwrap_or_default()
            );
        }
        outcome.rejected.is_none() || outcome.notice.is_some()
    }

    // Re-arming drops, and thereby cancels, any earlier timeout.
    fn schedule_opponent(&mut self, ctx: &Context<Self>, delay: Duration) {
        let resolve = ctx.link().callback(GameMsg::OpponentResolved);
        self.opponent_timer.arm(|ticket| {
            Timeout::new(timer_millis(delay), move || resolve.emit(ticket))
        });
    }

    fn show_notice(&mut self, ctx: &Context<Self>, notice: Notice) {
        let dismiss = ctx.link().callback(|()| GameMsg::DismissNotice);
        self.notice = Some(notice);
        self.notice_timeout = Some(Timeout::new(timer_millis(NOTICE_TIMEOUT), move || {
            dismiss.emit(())
        }));
    }
}
