use crate::schedule::Schedule;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DayList,
    ExerciseList { day: usize },
    ExerciseDetail { day: usize, exercise: usize },
}

/// User input, already decoded. Indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(usize),
    Back,
    Start,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(Screen),
    Stayed(Screen),
    SessionStarted { day: usize },
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no training day {0}")]
    NoSuchDay(usize),

    #[error("no exercise {exercise} on day {day}")]
    NoSuchExercise { day: usize, exercise: usize },

    #[error("nothing to open here")]
    NothingToOpen,

    #[error("a session can only be started from a day's exercise list")]
    NothingToStart,
}

/// Screen stack rooted at [`Screen::DayList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::DayList],
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::DayList)
    }

    pub fn apply(&mut self, schedule: &Schedule, action: Action) -> Result<Transition, NavError> {
        let current = self.current();
        match action {
            Action::Quit => Ok(Transition::Quit),
            Action::Back => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    Ok(Transition::Moved(self.current()))
                } else {
                    Ok(Transition::Stayed(current))
                }
            }
            Action::Start => match current {
                Screen::ExerciseList { day } => Ok(Transition::SessionStarted { day }),
                _ => Err(NavError::NothingToStart),
            },
            Action::Open(index) => {
                let next = Self::open(schedule, current, index)?;
                self.stack.push(next);
                Ok(Transition::Moved(next))
            }
        }
    }

    fn open(schedule: &Schedule, current: Screen, index: usize) -> Result<Screen, NavError> {
        match current {
            Screen::DayList => schedule
                .day(index)
                .map(|_| Screen::ExerciseList { day: index })
                .ok_or(NavError::NoSuchDay(index)),
            Screen::ExerciseList { day } => {
                let exists = schedule
                    .day(day)
                    .map_or(false, |d| index < d.exercises.len());
                if exists {
                    Ok(Screen::ExerciseDetail {
                        day,
                        exercise: index,
                    })
                } else {
                    Err(NavError::NoSuchExercise {
                        day,
                        exercise: index,
                    })
                }
            }
            Screen::ExerciseDetail { .. } => Err(NavError::NothingToOpen),
        }
    }
}
