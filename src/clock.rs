//! Modular clock puzzle: tick a clock forward or backward one hour at a
//! time until it shows the target hour.

use std::fmt;

use crate::search::Configuration;

/// Errors constructing a clock instance.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("clock must have at least one hour")]
    NoHours,

    #[error("hour {hour} is outside 1..={hours}")]
    HourOutOfRange { hour: u32, hours: u32 },
}

/// One state of the clock puzzle.
///
/// The modulus and target hour travel with every state so that a
/// configuration is a self-contained value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    hours: u32,
    current: u32,
    end: u32,
}

impl ClockConfig {
    /// Build the initial state, validating that both hours lie on the
    /// clock face.
    pub fn new(hours: u32, start: u32, end: u32) -> Result<Self, ClockError> {
        if hours == 0 {
            return Err(ClockError::NoHours);
        }
        for hour in [start, end] {
            if hour == 0 || hour > hours {
                return Err(ClockError::HourOutOfRange { hour, hours });
            }
        }
        Ok(Self {
            hours,
            current: start,
            end,
        })
    }

    /// The hour this state shows.
    pub fn current(&self) -> u32 {
        self.current
    }
}

impl Configuration for ClockConfig {
    fn is_goal(&self) -> bool {
        self.current == self.end
    }

    /// One tick backward (1 wraps to `hours`), then one tick forward
    /// (`hours` wraps to 1).
    fn neighbors(&self) -> Vec<Self> {
        let back = if self.current == 1 {
            self.hours
        } else {
            self.current - 1
        };
        let forward = if self.current == self.hours {
            1
        } else {
            self.current + 1
        };
        vec![
            Self {
                current: back,
                ..*self
            },
            Self {
                current: forward,
                ..*self
            },
        ]
    }
}

impl fmt::Display for ClockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}
