use alloc::collections::VecDeque;

use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine layout and hints, present from the first reveal onwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Minefield {
    layout: MineLayout,
    board: Board,
}

impl Minefield {
    fn new(layout: MineLayout) -> Self {
        let board = Board::compute_hints(&layout);
        Self { layout, board }
    }
}

/// A single game: owns every piece of mutable state and only changes it through
/// [`GameSession::claim_free_cell`], [`GameSession::toggle_flag`] or [`GameSession::apply`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    minefield: Option<Minefield>,
    view: Array2<CellView>,
    flags: HashSet<Coord2>,
    opened: HashSet<Coord2>,
    move_count: u32,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    /// Starts a game whose mines are placed on the first reveal, using `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            minefield: None,
            view: Array2::default(BOARD_SIZE.to_nd_index()),
            flags: HashSet::new(),
            opened: HashSet::new(),
            move_count: 0,
            outcome: Outcome::default(),
            triggered_mine: None,
        }
    }

    /// Starts a game on a known layout; the first reveal does not move any mine.
    pub fn from_layout(layout: MineLayout) -> Self {
        let mut session = Self::new(GameConfig::new_unchecked(layout.mine_count()), 0);
        session.minefield = Some(Minefield::new(layout));
        session
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn is_generated(&self) -> bool {
        self.minefield.is_some()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.view[coords.to_nd_index()]
    }

    /// Hidden content of a cell, `None` until mines are placed.
    pub fn content_at(&self, coords: Coord2) -> Option<CellContent> {
        self.minefield
            .as_ref()
            .map(|minefield| minefield.board.content_at(coords))
    }

    pub fn mines(&self) -> Option<&HashSet<Coord2>> {
        self.minefield
            .as_ref()
            .map(|minefield| minefield.layout.mines())
    }

    pub fn flags(&self) -> &HashSet<Coord2> {
        &self.flags
    }

    pub fn opened(&self) -> &HashSet<Coord2> {
        &self.opened
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flags.len() as isize)
    }

    /// Routes a parsed command to its entry point.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        log::trace!("Move {}: {:?}", self.move_count + 1, command);
        match command.kind {
            CommandKind::ToggleFlag => self.toggle_flag(command.coords),
            CommandKind::ClaimFree => self.claim_free_cell(command.coords),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<Outcome> {
        use CellView::*;

        let coords = validate_coords(coords)?;
        self.check_playing()?;

        match self.view[coords.to_nd_index()] {
            Unexplored => {
                self.flags.insert(coords);
                self.view[coords.to_nd_index()] = Flagged;
            }
            Flagged => {
                self.flags.remove(&coords);
                self.view[coords.to_nd_index()] = Unexplored;
            }
            Revealed => return Err(GameError::InvalidFlagTarget),
        }

        self.move_count += 1;
        Ok(self.evaluate())
    }

    pub fn claim_free_cell(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = validate_coords(coords)?;
        self.check_playing()?;

        if self.minefield.is_none() {
            let zone = safe_zone(coords);
            let layout = RandomMineGenerator::new(self.seed).generate(self.config, &zone)?;
            self.minefield = Some(Minefield::new(layout));
        }
        self.move_count += 1;

        let hit_mine = self
            .minefield
            .as_ref()
            .is_some_and(|minefield| minefield.layout.contains_mine(coords));
        if hit_mine {
            log::debug!("Stepped on a mine at {coords:?}");
            self.triggered_mine = Some(coords);
            self.outcome = Outcome::Lost;
            return Ok(self.outcome);
        }

        if !self.opened.contains(&coords) {
            self.safe_open(coords);
        }
        Ok(self.evaluate())
    }

    /// Opens `start` and cascades through connected zero-hint cells.
    fn safe_open(&mut self, start: Coord2) {
        let Self {
            minefield,
            view,
            flags,
            opened,
            ..
        } = self;
        let Some(minefield) = minefield.as_ref() else {
            return;
        };

        let mut reveal = |coords: Coord2| {
            if flags.remove(&coords) {
                log::debug!("Cleared flag at {coords:?} while opening");
            }
            view[coords.to_nd_index()] = CellView::Revealed;
        };

        // a cell joins `opened` when queued, so it is never queued twice
        opened.insert(start);
        reveal(start);
        let mut to_visit = VecDeque::from([start]);
        let mut newly_opened = 1usize;

        while let Some(visit_coords) = to_visit.pop_front() {
            if minefield.board.hint_at(visit_coords) != Some(0) {
                continue;
            }
            for neighbor in iter_neighbors(visit_coords) {
                if opened.insert(neighbor) {
                    reveal(neighbor);
                    to_visit.push_back(neighbor);
                    newly_opened += 1;
                }
            }
        }

        if newly_opened > 1 {
            log::debug!("Opened {newly_opened} cells from {start:?}");
        }
    }

    /// Both win rules stay active: every mine flagged with no stray flags, or every
    /// safe cell opened. Neither applies before mines are placed.
    fn evaluate(&mut self) -> Outcome {
        if self.outcome.is_finished() {
            return self.outcome;
        }
        let Some(minefield) = self.minefield.as_ref() else {
            return self.outcome;
        };

        let all_flagged = self.flags == *minefield.layout.mines();
        let all_opened = self.opened.len() == usize::from(minefield.layout.safe_cell_count());
        if all_flagged || all_opened {
            log::debug!(
                "Won after {} moves (flags match: {all_flagged}, board cleared: {all_opened})",
                self.move_count
            );
            self.outcome = Outcome::Won;
        }
        self.outcome
    }

    fn check_playing(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::CommandAfterGameOver)
        } else {
            Ok(())
        }
    }
}
