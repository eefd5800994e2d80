use crate::utils::*;
use gloo::timers::callback::Interval;
use minefield_core as game;
use yew::prelude::*;

/// Real-time length of one timer unit.
const TICK_MILLIS: u32 = 1_000;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    Tick,
    ToggleTimer,
    NewGame,
}

fn cell_classes(cell: game::VisibleCell) -> Classes {
    use game::VisibleCell::*;

    classes!(
        "cell",
        match cell {
            Hidden => classes!(),
            Revealed(0) => classes!("revealed"),
            Revealed(count) => classes!("revealed", format!("num-{}", count)),
            Mine => classes!("revealed", "mine"),
            TriggeredMine => classes!("revealed", "mine", "oops"),
        }
    )
}

fn cell_label(cell: game::VisibleCell) -> String {
    use game::VisibleCell::*;

    match cell {
        Hidden | Revealed(0) => String::new(),
        Revealed(count) => count.to_string(),
        Mine | TriggeredMine => "💣".to_string(),
    }
}

fn status_message(state: game::GameState) -> Option<&'static str> {
    use game::GameState::*;

    match state {
        InProgress => None,
        Won => Some("🎉 Congratulations! You've won!"),
        Lost => Some("💥 Oops! You hit a mine! Game over :("),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    cell: game::VisibleCell,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        cell,
        locked,
        callback,
    } = props.clone();

    let mut class = cell_classes(cell);
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        if !locked {
            callback.emit((row, col));
        }
    });

    html! {
        <td {class} {onclick}>{cell_label(cell)}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the first board, a random one is used when missing
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    timer_interval: Option<Interval>,
}

impl GameView {
    /// Keeps exactly one interval alive while the session timer runs, and none otherwise.
    fn sync_timer_interval(&mut self, ctx: &Context<Self>) {
        match (self.session.timer_running(), self.timer_interval.is_some()) {
            (true, false) => {
                let link = ctx.link().clone();
                self.timer_interval =
                    Some(Interval::new(TICK_MILLIS, move || link.send_message(Msg::Tick)));
                log::debug!("timer interval started");
            }
            (false, true) => {
                // dropping the interval clears it
                self.timer_interval = None;
                log::debug!("timer interval cleared");
            }
            _ => {}
        }
    }

    fn reveal_cell(&mut self, coords: game::Coord2) -> bool {
        let outcome = self.session.reveal(coords);
        if outcome.hit_mine {
            log::info!("hit a mine at {:?}", coords);
        } else if self.session.is_won() {
            log::info!("won in {} ticks", self.session.elapsed_time());
        }
        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: game::GameSession::new(game::GameConfig::CLASSIC, seed),
            timer_interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Reveal(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.reveal_cell(coords)
            }
            Tick => self.session.tick(),
            ToggleTimer => {
                let was_running = self.session.timer_running();
                self.session.toggle_timer() != was_running
            }
            NewGame => {
                self.session.new_game(js_random_seed());
                true
            }
        };

        self.sync_timer_interval(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let size = self.session.size();
        let is_playable = !self.session.is_game_over();
        let score = format_for_counter(self.session.score().into());
        let elapsed_time = format_for_counter(self.session.elapsed_time());
        let timer_label = if self.session.timer_running() {
            "⏸️"
        } else {
            "▶️"
        };
        let message = status_message(self.session.state());
        let message_class = classes!(
            "message",
            match self.session.state() {
                game::GameState::InProgress => None,
                game::GameState::Won => Some("win"),
                game::GameState::Lost => Some("lose"),
            }
        );

        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_toggle_timer = ctx.link().callback(|_: MouseEvent| ToggleTimer);

        html! {
            <div class="minefield">
                <nav>
                    <aside class="score">{score}</aside>
                    <button class="new-game" onclick={cb_new_game}>{"New game"}</button>
                    <button class="toggle-timer" onclick={cb_toggle_timer} disabled={!is_playable}>
                        {timer_label}
                    </button>
                    <aside class="timer">{elapsed_time}</aside>
                </nav>
                <table class={is_playable.then_some("playable")}>
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let cell = self.session.visible_cell((row, col));
                                        let locked = !is_playable || !cell.is_hidden();
                                        let callback = ctx.link().callback(Msg::Reveal);
                                        html! {
                                            <CellView {row} {col} {cell} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class={message_class}>{message.unwrap_or_default()}</p>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_classes_follow_visible_state() {
        use game::VisibleCell::*;

        assert!(!cell_classes(Hidden).contains("revealed"));
        assert!(cell_classes(Revealed(0)).contains("revealed"));
        assert!(cell_classes(Revealed(3)).contains("num-3"));
        assert!(cell_classes(Mine).contains("mine"));
        assert!(!cell_classes(Mine).contains("oops"));
        assert!(cell_classes(TriggeredMine).contains("oops"));
        assert!(cell_classes(TriggeredMine).contains("cell"));
    }

    #[test]
    fn labels_hide_zeros() {
        use game::VisibleCell::*;

        assert_eq!(cell_label(Hidden), "");
        assert_eq!(cell_label(Revealed(0)), "");
        assert_eq!(cell_label(Revealed(8)), "8");
        assert_eq!(cell_label(TriggeredMine), "💣");
    }

    #[test]
    fn message_only_after_game_end() {
        let layout = game::MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut session = game::GameSession::from_layout(layout);
        assert_eq!(status_message(session.state()), None);

        session.reveal((0, 0));

        assert_eq!(
            status_message(session.state()),
            Some("💥 Oops! You hit a mine! Game over :(")
        );
        assert!(status_message(game::GameState::Won).is_some());
    }
}
