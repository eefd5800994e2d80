use serde::Serialize;

use crate::*;

/// Everything a shell needs to run consecutive games: the current engine, the config new games
/// are generated from, and the elapsed-time counter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    config: GameConfig,
    engine: PlayEngine,
    timer: Timer,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let layout = RandomLayoutGenerator::new(seed).generate(config);
        Self::from_layout(layout)
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        Self {
            config: layout.config(),
            engine: PlayEngine::new(layout),
            timer: Timer::new(),
        }
    }

    /// Replaces the board with a freshly generated one and resets the timer.
    pub fn new_game(&mut self, seed: u64) {
        let layout = RandomLayoutGenerator::new(seed).generate(self.config);
        self.restart_with(layout);
    }

    pub fn restart_with(&mut self, layout: MineLayout) {
        self.config = layout.config();
        self.engine = PlayEngine::new(layout);
        self.timer.reset();
    }

    /// Handles a click on `coords`.
    ///
    /// Any click that uncovers something (re)starts the timer, and the timer stops when the game
    /// ends.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let outcome = self.engine.reveal(coords);
        if !outcome.has_update() {
            return outcome;
        }

        if self.engine.is_finished() {
            self.timer.stop();
        } else {
            self.timer.start();
        }

        outcome
    }

    /// Pauses or resumes the timer, returning whether it is running afterwards.
    pub fn toggle_timer(&mut self) -> bool {
        if self.engine.is_finished() {
            return self.timer.is_running();
        }
        self.timer.toggle()
    }

    /// Advances the elapsed time by one unit, returning whether it changed.
    pub fn tick(&mut self) -> bool {
        self.timer.tick()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn size(&self) -> Coord {
        self.engine.size()
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    pub fn score(&self) -> CellCount {
        self.engine.revealed_count()
    }

    pub fn elapsed_time(&self) -> u32 {
        self.timer.elapsed()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn visible_cell(&self, coords: Coord2) -> VisibleCell {
        self.engine.visible_cell(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord, mines: &[Coord2]) -> GameSession {
        GameSession::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn classic_with_zero_corner() -> GameSession {
        // 10 mines packed into the bottom rows, the top-left corner is a zero
        let mines = [
            (7, 0),
            (7, 1),
            (7, 2),
            (7, 3),
            (7, 4),
            (7, 5),
            (7, 6),
            (7, 7),
            (6, 0),
            (6, 7),
        ];
        session(8, &mines)
    }

    #[test]
    fn zero_corner_can_clear_the_classic_board_in_one_click() {
        let mut session = classic_with_zero_corner();
        assert_eq!(session.config(), GameConfig::CLASSIC);

        let outcome = session.reveal((0, 0));

        // rows 0..=5 flood fully, row 6 between the two mines is numbered
        assert!(!outcome.hit_mine);
        assert_eq!(outcome.revealed.len(), 54);
        assert_eq!(usize::from(session.score()), outcome.revealed.len());
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn zero_cell_cascade_keeps_the_game_going() {
        let mut session = session(8, &[(3, 0), (3, 1), (3, 2), (2, 3), (1, 3), (0, 3)]);

        let outcome = session.reveal((0, 0));

        //  . . 2 M
        //  . . 3 M
        //  2 3 4 M
        //  M M M
        assert_eq!(outcome.revealed.len(), 9);
        assert_eq!(session.score(), 9);
        assert_eq!(session.state(), GameState::InProgress);
        assert!(!session.is_game_over());
        assert!(session.timer_running());
    }

    #[test]
    fn first_click_starts_the_timer() {
        let mut session = session(3, &[(0, 0)]);

        assert!(!session.tick());
        assert_eq!(session.elapsed_time(), 0);

        session.reveal((0, 1));
        assert!(session.timer_running());
        session.tick();
        session.tick();

        assert_eq!(session.elapsed_time(), 2);
    }

    #[test]
    fn no_op_clicks_do_not_start_the_timer() {
        let mut session = session(3, &[(0, 0)]);

        session.reveal((5, 5));

        assert!(!session.timer_running());
    }

    #[test]
    fn click_resumes_a_paused_timer() {
        let mut session = session(3, &[(0, 0)]);
        session.reveal((0, 1));

        assert!(!session.toggle_timer());
        session.tick();
        assert_eq!(session.elapsed_time(), 0);

        session.reveal((1, 0));
        assert!(session.timer_running());
        session.tick();
        assert_eq!(session.elapsed_time(), 1);
    }

    #[test]
    fn losing_stops_timer_and_blocks_input() {
        let mut session = session(3, &[(0, 0)]);
        session.reveal((0, 1));
        session.tick();

        let outcome = session.reveal((0, 0));

        assert!(outcome.hit_mine);
        assert_eq!(session.state(), GameState::Lost);
        assert!(session.is_game_over());
        assert!(!session.is_won());
        assert!(!session.timer_running());
        assert_eq!(session.score(), 2);

        assert!(!session.reveal((2, 2)).has_update());
        assert!(!session.toggle_timer());
        assert!(!session.tick());
        assert_eq!(session.elapsed_time(), 1);
        assert_eq!(session.visible_cell((0, 0)), VisibleCell::TriggeredMine);
    }

    #[test]
    fn winning_stops_timer() {
        let mut session = session(2, &[(0, 0)]);

        session.reveal((0, 1));
        session.reveal((1, 0));
        session.tick();
        session.reveal((1, 1));

        assert!(session.is_won());
        assert!(session.is_game_over());
        assert!(!session.timer_running());
        assert_eq!(session.elapsed_time(), 1);
    }

    #[test]
    fn new_game_replaces_board_and_resets_counters() {
        let mut session = GameSession::new(GameConfig::CLASSIC, 3);
        let first_layout = session.engine().board().layout().clone();
        let safe = first_layout
            .cells()
            .indexed_iter()
            .find(|(_, cell)| !cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .unwrap();
        session.reveal(safe);
        session.tick();

        session.new_game(4);

        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.score(), 0);
        assert_eq!(session.elapsed_time(), 0);
        assert!(!session.timer_running());
        assert_eq!(session.config(), GameConfig::CLASSIC);
        assert_eq!(session.engine().total_mines(), MINE_COUNT);
        assert!(!session.engine().board().revealed_mask().iter().any(|&r| r));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = session(3, &[(0, 0)]);
        let b = session(3, &[(0, 0)]);

        a.reveal((0, 0));

        assert!(a.is_game_over());
        assert!(!b.is_game_over());
        assert_eq!(b.score(), 0);
    }
}
