use yew::prelude::*;

use crate::game::GameView;
use crate::utils::Overlay;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    /// Deck seed forced from the location hash, if any.
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) enum Msg {
    GameWon,
}

/// Root component: hosts the pairs game and reveals the proposal once every
/// pair has been matched.
pub(crate) struct App {
    show_proposal: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            show_proposal: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GameWon => {
                log::debug!("game won, revealing proposal");
                let changed = !self.show_proposal;
                self.show_proposal = true;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let seed = ctx.props().seed;
        let on_complete = ctx.link().callback(|()| Msg::GameWon);

        html! {
            <div class="parejita">
                <GameView {seed} {on_complete}/>
                if self.show_proposal {
                    <Overlay>
                        <div class="proposal">
                            <h1>{"Will you marry me?"}</h1>
                        </div>
                    </Overlay>
                }
            </div>
        }
    }
}
