use gloo::timers::callback::Timeout;
use parejita_core as game;
use yew::prelude::*;

use crate::utils::js_random_seed;

/// Photo assets shipped with the widget; each appears twice in the deck.
const PHOTO_COUNT: game::CardId = 18;

/// How long both cards of a wrong guess stay face-up.
const REVEAL_DELAY_MS: u32 = 1_000;

/// How long the wrong-guess cue stays visible after the cards flip back.
const INCORRECT_FLASH_MS: u32 = 1_000;

fn photo_url(card: game::CardId) -> String {
    format!("game-photos/{}.avif", card + 1)
}

fn photo_values() -> Vec<game::CardId> {
    (0..PHOTO_COUNT).collect()
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewSlotState {
    FaceDown,
    FaceUp(game::CardId),
    Matched(game::CardId),
}

/// Render adapter over the engine, kept separate from the component so the
/// derivation can be tested without a DOM.
struct GameSession {
    engine: game::MatchEngine,
}

impl GameSession {
    fn new(seed: u64) -> Self {
        use game::{DeckGenerator, ShuffledDeckGenerator};

        let deck = ShuffledDeckGenerator::new(seed).generate(&photo_values());
        Self {
            engine: game::MatchEngine::new(deck),
        }
    }

    fn slot_view(&self, slot: game::SlotIndex) -> ViewSlotState {
        use game::SlotState::*;

        match self.engine.slot_state(slot) {
            Hidden => ViewSlotState::FaceDown,
            Selected => ViewSlotState::FaceUp(self.engine.card_at(slot)),
            Matched => ViewSlotState::Matched(self.engine.card_at(slot)),
        }
    }

    fn is_incorrect(&self, slot: game::SlotIndex) -> bool {
        self.engine.is_incorrect(slot)
    }

    fn is_locked(&self, slot: game::SlotIndex) -> bool {
        !self.engine.can_select_at(slot)
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SlotProps {
    slot: game::SlotIndex,
    state: ViewSlotState,
    #[prop_or_default]
    incorrect: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::SlotIndex>,
}

#[function_component(SlotView)]
fn slot_component(props: &SlotProps) -> Html {
    use ViewSlotState::*;

    let SlotProps {
        slot,
        state,
        incorrect,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match state {
            FaceDown => classes!("face-down"),
            FaceUp(_) => classes!("face-up"),
            Matched(_) => classes!("face-up", "matched"),
        }
    );
    if incorrect {
        class.push("wrong");
    }
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("slot {} clicked", slot);
        callback.emit(slot);
    });

    html! {
        <td {class} {onclick}>
            {
                match state {
                    FaceUp(card) | Matched(card) => html! {
                        <img src={photo_url(card)} alt={format!("photo {}", card + 1)}/>
                    },
                    FaceDown => html! {},
                }
            }
        </td>
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SlotClicked(game::SlotIndex),
    RevealElapsed,
    FlashElapsed,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Deck seed forced from the location hash, if any.
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Fired exactly once, when the last pair is matched.
    pub on_complete: Callback<()>,
}

/// The heart-grid pairs widget. Owns one engine for its mount lifetime; the
/// deck is built once and never recreated. The two delayed steps of a wrong
/// guess are owned `Timeout` handles, so tearing the component down cancels
/// anything still pending.
pub(crate) struct GameView {
    session: GameSession,
    reveal_timer: Option<Timeout>,
    flash_timer: Option<Timeout>,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("deck seed: {}", seed);

        Self {
            session: GameSession::new(seed),
            reveal_timer: None,
            flash_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SlotClicked(slot) => {
                let outcome = match self.session.engine.select_slot(slot) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        log::error!("rejected click on slot {}: {}", slot, err);
                        return false;
                    }
                };

                match outcome {
                    game::SelectOutcome::Mismatched => {
                        let link = ctx.link().clone();
                        self.reveal_timer = Some(Timeout::new(REVEAL_DELAY_MS, move || {
                            link.send_message(RevealElapsed)
                        }));
                    }
                    game::SelectOutcome::Won => {
                        ctx.props().on_complete.emit(());
                    }
                    _ => {}
                }

                outcome.has_update()
            }
            RevealElapsed => {
                self.reveal_timer = None;
                let updated = self.session.engine.resolve_mismatch().has_update();
                if updated {
                    // replacing the handle cancels a cue timer still pending
                    // from an earlier miss
                    let link = ctx.link().clone();
                    self.flash_timer = Some(Timeout::new(INCORRECT_FLASH_MS, move || {
                        link.send_message(FlashElapsed)
                    }));
                }
                updated
            }
            FlashElapsed => {
                self.flash_timer = None;
                self.session.engine.expire_incorrect().has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let layout = &game::HEART;
        let playable = !self.session.engine.is_complete();

        html! {
            <table class={classes!("board", playable.then_some("playable"))}>
                {
                    for (0..layout.rows()).map(|row| html! {
                        <tr>
                            {
                                for (0..layout.cols()).map(|col| {
                                    match layout.slot_at(col, row) {
                                        Some(slot) => {
                                            let state = self.session.slot_view(slot);
                                            let incorrect = self.session.is_incorrect(slot);
                                            let locked = self.session.is_locked(slot);
                                            let callback = ctx.link().callback(Msg::SlotClicked);
                                            html! {
                                                <SlotView {slot} {state} {incorrect} {locked} {callback}/>
                                            }
                                        }
                                        None => html! { <td class="blank"/> },
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}
