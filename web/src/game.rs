use crate::cell::CellView;
use lights_out_core as game;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::ToggleOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("activation rejected: {}", err);
                false
            }
        }
    }
}

/// Stable list key of a cell, derived from its position.
fn cell_key(coords: game::Coord2) -> String {
    format!("{}-{}", coords.0, coords.1)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Activate(game::Coord2),
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::GameConfig,
    pub seed: u64,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::GameGrid,
}

impl GameView {
    fn view_board(&self, ctx: &Context<Self>) -> Html {
        use game::BoardProjection::*;

        match self.game.project() {
            Won { message } => html! {
                <h1 class="board-won">{message}</h1>
            },
            Playing { rows } => html! {
                <table class="board-table">
                    <tbody>
                        {
                            for rows.into_iter().map(|row| {
                                let row_key = row.first().map_or(0, |cell| cell.coords.0);
                                html! {
                                    <tr key={row_key} class="board-row">
                                        {
                                            for row.into_iter().map(|cell| {
                                                let game::CellDescriptor { coords, is_lit } = cell;
                                                let key = cell_key(coords);
                                                let on_activate = ctx.link().callback(move |()| Msg::Activate(coords));
                                                html! {
                                                    <CellView key={key} {is_lit} {on_activate}/>
                                                }
                                            })
                                        }
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
            },
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        log::debug!("seed: {}", seed);

        Self {
            game: game::GameGrid::new(config, game::RandomBoardGenerator::new(seed)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate(coords) => {
                log::debug!("activate cell: {:?}", coords);
                self.game.activate(coords).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="board">
                <h1>{game::TITLE}</h1>
                {self.view_board(ctx)}
            </div>
        }
    }
}
