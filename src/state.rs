//! The walking sprite's state and its once-per-tick update.
use crate::{
    config::Config,
    direction::{Axis, Direction, PerDirection},
};

/// Mutable state of one walking session.
///
/// Only [`GameState::set_direction`] and [`GameState::advance`] change it, which keeps the
/// sprite inside `[0, max_x] × [0, max_y]` and every frame counter below its frame count.
#[derive(Debug, Clone)]
pub struct GameState {
    direction: Option<Direction>,
    x: u32,
    y: u32,
    frame_index: PerDirection<usize>,
    frame_counts: PerDirection<usize>,
    step: u32,
    max_x: u32,
    max_y: u32,
}

/// An immutable copy of a [`GameState`], handed to whoever draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// `None` after an unrecognized direction was set.
    pub direction: Option<Direction>,
    pub x: u32,
    pub y: u32,
    pub frame_index: PerDirection<usize>,
}

impl Snapshot {
    /// The frame currently shown for `direction`.
    pub fn frame(&self, direction: Direction) -> usize {
        self.frame_index[direction]
    }
}

impl GameState {
    /// Creates the session state. Frame counts of zero are treated as one; run
    /// [`Config::validate`] first to reject them instead.
    pub fn new(config: &Config) -> Self {
        let max_x = config.max_x();
        let max_y = config.max_y();
        Self {
            direction: Some(Direction::default()),
            x: config.start_x.min(max_x),
            y: config.start_y.min(max_y),
            frame_index: PerDirection::splat(0),
            frame_counts: PerDirection::from_fn(|d| config.frame_counts[d].max(1)),
            step: config.step,
            max_x,
            max_y,
        }
    }

    /// Overwrites the heading. Any value is accepted; `None` stands for a direction
    /// nobody recognizes, and makes every following [`GameState::advance`] a no-op.
    pub fn set_direction(&mut self, direction: impl Into<Option<Direction>>) {
        self.direction = direction.into();
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn frame_index(&self, direction: Direction) -> usize {
        self.frame_index[direction]
    }

    pub fn frame_count(&self, direction: Direction) -> usize {
        self.frame_counts[direction]
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            direction: self.direction,
            x: self.x,
            y: self.y,
            frame_index: self.frame_index,
        }
    }

    /// Runs one animation tick: steps the current direction's frame counter and walks one
    /// step that way, stopping at the canvas edge. The frame advances even when the sprite
    /// is already at the edge.
    ///
    /// Returns the new state, or `None` if nothing changed.
    pub fn advance(&mut self) -> Option<Snapshot> {
        let Some(direction) = self.direction else {
            log::debug!("no known direction, tick skipped");
            return None;
        };

        let before = self.snapshot();
        let count = self.frame_counts[direction];
        let frame = &mut self.frame_index[direction];
        *frame = (*frame + 1) % count;

        let (coord, max) = match direction.axis() {
            Axis::X => (&mut self.x, self.max_x),
            Axis::Y => (&mut self.y, self.max_y),
        };
        if direction.is_forward() {
            if *coord < max {
                *coord = coord.saturating_add(self.step).min(max);
            }
        } else if *coord > 0 {
            *coord = coord.saturating_sub(self.step);
        }

        let after = self.snapshot();
        (after != before).then_some(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&Config::default())
    }

    #[test]
    fn defaults() {
        let s = state();
        assert_eq!(s.direction(), Some(Direction::Right));
        assert_eq!(s.position(), (5, 300));
        for d in Direction::ALL {
            assert_eq!(s.frame_index(d), 0);
            assert_eq!(s.frame_count(d), 3);
        }
    }

    #[test]
    fn one_step_right() {
        let mut s = state();
        let snap = s.advance().unwrap();
        assert_eq!((snap.x, snap.y), (15, 300));
        assert_eq!(snap.frame(Direction::Right), 1);
        assert_eq!(snap, s.snapshot());
    }

    #[test]
    fn each_direction_moves_its_axis() {
        let cases = [
            (Direction::Right, (110, 200)),
            (Direction::Left, (90, 200)),
            (Direction::Up, (100, 190)),
            (Direction::Down, (100, 210)),
        ];
        for (d, expected) in cases {
            let mut s = GameState::new(&Config::default().with_start(100, 200));
            s.set_direction(d);
            s.advance();
            assert_eq!(s.position(), expected, "{d}");
            assert_eq!(s.frame_index(d), 1);
        }
    }

    #[test]
    fn clamps_at_edges() {
        let mut s = GameState::new(&Config::default().with_start(715, 3));
        s.advance();
        assert_eq!(s.position(), (720, 3));
        s.advance();
        assert_eq!(s.position(), (720, 3));

        s.set_direction(Direction::Up);
        s.advance();
        assert_eq!(s.position(), (720, 0));
        s.advance();
        assert_eq!(s.position(), (720, 0));
    }

    #[test]
    fn clamps_at_bottom_and_left_edges() {
        let mut s = GameState::new(&Config::default().with_start(5, 475));
        s.set_direction(Direction::Down);
        s.advance();
        assert_eq!(s.position(), (5, 480));
        s.advance();
        assert_eq!(s.position(), (5, 480));

        // 5 is not a multiple of the step: lands on 0, never wraps below it
        s.set_direction(Direction::Left);
        s.advance();
        assert_eq!(s.position(), (0, 480));
        s.advance();
        assert_eq!(s.position(), (0, 480));
        assert_eq!(s.frame_index(Direction::Left), 2);
    }

    #[test]
    fn frame_advances_at_edge() {
        let mut s = GameState::new(&Config::default().with_start(0, 0));
        s.set_direction(Direction::Left);
        let snap = s.advance().unwrap();
        assert_eq!((snap.x, snap.y), (0, 0));
        assert_eq!(snap.frame(Direction::Left), 1);
    }

    #[test]
    fn unknown_direction_is_a_no_op() {
        let mut s = state();
        s.advance();
        s.set_direction("diagonal".parse::<Direction>().ok());
        let before = s.snapshot();
        assert_eq!(s.advance(), None);
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.direction(), None);
    }

    #[test]
    fn single_frame_at_edge_reports_no_change() {
        let config = Config::default()
            .with_frame_counts(PerDirection::splat(1))
            .with_start(720, 0);
        let mut s = GameState::new(&config);
        assert_eq!(s.advance(), None);
    }

    #[test]
    fn start_is_clamped() {
        let s = GameState::new(&Config::default().with_start(5000, 5000));
        assert_eq!(s.position(), (720, 480));
    }

    #[test]
    fn uneven_frame_counts() {
        let mut counts = PerDirection::splat(3);
        counts[Direction::Down] = 5;
        let mut s = GameState::new(&Config::default().with_frame_counts(counts).with_start(0, 0));
        s.set_direction(Direction::Down);
        let seen: Vec<_> = (0..7)
            .map(|_| {
                s.advance();
                s.frame_index(Direction::Down)
            })
            .collect();
        assert_eq!(seen, [1, 2, 3, 4, 0, 1, 2]);
    }
}
