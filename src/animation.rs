//! Solver animation module.
//!
//! The solver runs to completion in one go with a [`Recorder`](crate::render::Recorder) attached.
//! This module turns the recorded moves into a sequence of steps and replays them one frame at a
//! time, so the interface can show the search growing and backtracking.

use std::time::{Duration, Instant};

use crate::cell::Coord;

/// Animation step types for solver visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Extend the displayed path with a cell the solver stepped into.
    Add(Coord),
    /// Drop a cell the solver backed out of from the displayed path.
    Remove(Coord),
}

/// Animation state manager for solver visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// path being displayed while the maze is being solved.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Steps recorded from the solver, in the order they happened.
    pub(crate) steps: Vec<AnimationStep>,
    /// Index into [`steps`](AnimationManager::steps) of the next step to apply.
    pub(crate) current_index: usize,
    /// Time the last step was applied, used to pace the playback.
    pub(crate) last_update_time: Instant,
    /// Cells currently on the displayed path, entrance first.
    pub(crate) current_path: Vec<Coord>,
    /// Minimum time between two applied steps. Zero plays everything back at once.
    pub(crate) frame_delay: Duration,
}

impl AnimationManager {
    /// Creates an empty animation manager with the given frame delay.
    pub(crate) fn new(frame_delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            current_path: Vec::new(),
            frame_delay,
        }
    }

    /// Rewinds the playback to the first step.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.current_path.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Replaces the animation with the moves of a solver run starting at `entrance`.
    ///
    /// The moves are `(from, to, undo)` triples as reported to a render port. Forward moves add
    /// `to` to the path and undone moves take it away again.
    pub(crate) fn load<I>(&mut self, entrance: Coord, moves: I)
    where
        I: IntoIterator<Item = (Coord, Coord, bool)>,
    {
        self.steps.clear();
        self.steps.push(AnimationStep::Add(entrance));
        self.steps
            .extend(moves.into_iter().map(|(_, to, undo)| {
                if undo {
                    AnimationStep::Remove(to)
                } else {
                    AnimationStep::Add(to)
                }
            }));
        self.reset();
    }

    /// Returns whether every step has been applied.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Advances the playback if enough time has passed since the last step.
    ///
    /// Once finished, the final path stays on screen until the animation is cleared or reloaded.
    pub(crate) fn update(&mut self) {
        if self.frame_delay.is_zero() {
            while !self.is_finished() {
                self.apply_next();
            }
        } else if !self.is_finished() && self.last_update_time.elapsed() >= self.frame_delay {
            self.last_update_time = Instant::now();
            self.apply_next();
        }
    }

    /// Applies the next pending step, if any.
    fn apply_next(&mut self) {
        if let Some(step) = self.steps.get(self.current_index) {
            match *step {
                AnimationStep::Add(coord) => self.current_path.push(coord),
                AnimationStep::Remove(coord) => {
                    // Backtracking always leaves from the tip, but search the whole path anyway.
                    if let Some(pos) = self.current_path.iter().rposition(|cell| *cell == coord) {
                        let _ = self.current_path.remove(pos);
                    }
                }
            }
        }

        self.current_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Moves of a solver that tries a dead end before finding the exit.
    fn dead_end_moves() -> Vec<(Coord, Coord, bool)> {
        vec![
            (Coord::new(0, 0), Coord::new(1, 0), false),
            (Coord::new(0, 0), Coord::new(1, 0), true),
            (Coord::new(0, 0), Coord::new(0, 1), false),
            (Coord::new(0, 1), Coord::new(1, 1), false),
        ]
    }

    #[test]
    fn test_load_translates_moves() {
        let mut manager = AnimationManager::new(Duration::from_secs(1));
        manager.load(Coord::new(0, 0), dead_end_moves());

        assert_eq!(
            manager.steps,
            vec![
                AnimationStep::Add(Coord::new(0, 0)),
                AnimationStep::Add(Coord::new(1, 0)),
                AnimationStep::Remove(Coord::new(1, 0)),
                AnimationStep::Add(Coord::new(0, 1)),
                AnimationStep::Add(Coord::new(1, 1)),
            ]
        );
        assert_eq!(manager.current_index, 0);
        assert!(manager.current_path.is_empty());
    }

    #[test]
    fn test_zero_delay_plays_everything() {
        let mut manager = AnimationManager::new(Duration::ZERO);
        manager.load(Coord::new(0, 0), dead_end_moves());

        manager.update();

        assert!(manager.is_finished());
        assert_eq!(
            manager.current_path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_update_waits_for_the_frame_delay() {
        let mut manager = AnimationManager::new(Duration::from_secs(3600));
        manager.load(Coord::new(0, 0), dead_end_moves());

        manager.update();

        assert_eq!(manager.current_index, 0, "no step should be applied before the delay");
        assert!(manager.current_path.is_empty());
    }

    #[test]
    fn test_update_applies_one_step_per_frame() {
        let mut manager = AnimationManager::new(Duration::from_millis(1));
        manager.load(Coord::new(0, 0), dead_end_moves());

        manager.last_update_time = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .expect("clock should be past one second");
        manager.update();

        assert_eq!(manager.current_index, 1);
        assert_eq!(manager.current_path, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn test_finished_animation_holds() {
        let mut manager = AnimationManager::new(Duration::ZERO);
        manager.load(Coord::new(0, 0), Vec::new());
        manager.update();
        manager.update();

        assert!(manager.is_finished());
        assert_eq!(manager.current_path, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut manager = AnimationManager::new(Duration::ZERO);
        manager.load(Coord::new(0, 0), dead_end_moves());
        manager.update();

        manager.reset();
        assert_eq!(manager.current_index, 0);
        assert!(manager.current_path.is_empty());
        assert!(!manager.steps.is_empty());

        manager.clear();
        assert!(manager.steps.is_empty());
        assert!(manager.is_finished());
    }
}
