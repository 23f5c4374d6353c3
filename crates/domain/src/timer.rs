use log::debug;

use crate::Seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimedExercise {
    pub name: String,
    pub duration: Seconds,
    pub reps: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exercise,
    Rest,
}

/// Countdown through a list of exercises with a rest after each of them.
///
/// The host calls [`WorkoutTimer::tick`] once per second. When a countdown expires the timer
/// pauses and switches to the next phase of nonzero length, so every phase has to be started
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTimer {
    exercises: Vec<TimedExercise>,
    rest: Seconds,
    index: usize,
    phase: Phase,
    remaining: u32,
    running: bool,
    finished: bool,
}

impl WorkoutTimer {
    pub fn new(exercises: Vec<TimedExercise>, rest: Seconds) -> Result<Self, TimerError> {
        let Some(first) = exercises.first() else {
            return Err(TimerError::NoExercises);
        };
        let remaining = u32::from(first.duration);

        Ok(Self {
            exercises,
            rest,
            index: 0,
            phase: Phase::Exercise,
            remaining,
            running: false,
            finished: false,
        })
    }

    #[must_use]
    pub fn exercises(&self) -> &[TimedExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn current(&self) -> &TimedExercise {
        &self.exercises[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn toggle(&mut self) {
        if !self.finished {
            self.running = !self.running;
        }
    }

    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.complete_phase();
        }
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.exercises.len() {
            self.select(self.index + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.select(self.index - 1);
        }
    }

    /// Elapsed fraction of the current phase.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        let total = self.phase_duration();
        if total == 0 {
            return 1.0;
        }
        1.0 - self.remaining as f32 / total as f32
    }

    fn phase_duration(&self) -> u32 {
        match self.phase {
            Phase::Exercise => u32::from(self.current().duration),
            Phase::Rest => u32::from(self.rest),
        }
    }

    fn select(&mut self, index: usize) {
        self.index = index;
        self.phase = Phase::Exercise;
        self.remaining = u32::from(self.current().duration);
        self.running = false;
        self.finished = false;
    }

    /// Leaves the expired phase and every following phase without length.
    fn complete_phase(&mut self) {
        self.running = false;

        while self.remaining == 0 && !self.finished {
            match self.phase {
                Phase::Exercise => {
                    debug!("finished exercise {}", self.current().name);
                    self.phase = Phase::Rest;
                    self.remaining = u32::from(self.rest);
                }
                Phase::Rest if self.index + 1 < self.exercises.len() => {
                    self.select(self.index + 1);
                }
                Phase::Rest => {
                    debug!("finished workout after {} exercises", self.exercises.len());
                    self.phase = Phase::Exercise;
                    self.finished = true;
                }
            }
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimerError {
    #[error("Workout must contain at least one exercise")]
    NoExercises,
}

/// Formats seconds as `m:ss`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
