//! String rotation puzzle: transform one uppercase string into another
//! by rotating a single character per move through the alphabet.

use std::fmt;

use crate::search::Configuration;

/// Errors constructing a strings instance.
#[derive(Debug, thiserror::Error)]
pub enum StringsError {
    #[error("start and end must be the same length ({start} vs {end})")]
    LengthMismatch { start: usize, end: usize },

    #[error("{0:?} is not an uppercase letter A-Z")]
    NotUppercase(char),
}

/// One state of the strings puzzle: the working string plus the target
/// it is being rotated toward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: String,
    end: String,
}

/// Rotate a character one step back through the alphabet, `A` wrapping
/// to `Z`.
fn rotate_back(c: char) -> char {
    if c == 'A' {
        'Z'
    } else {
        (c as u8 - 1) as char
    }
}

/// Rotate a character one step forward, `Z` wrapping to `A`.
fn rotate_forward(c: char) -> char {
    if c == 'Z' {
        'A'
    } else {
        (c as u8 + 1) as char
    }
}

impl StringsConfig {
    /// Build the initial state, validating both strings are uppercase
    /// A-Z and of equal length.
    pub fn new(start: &str, end: &str) -> Result<Self, StringsError> {
        if start.len() != end.len() {
            return Err(StringsError::LengthMismatch {
                start: start.len(),
                end: end.len(),
            });
        }
        if let Some(bad) = start.chars().chain(end.chars()).find(|c| !c.is_ascii_uppercase()) {
            return Err(StringsError::NotUppercase(bad));
        }
        Ok(Self {
            current: start.to_string(),
            end: end.to_string(),
        })
    }

    /// The working string.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Copy of this state with the character at `index` replaced.
    fn with_char(&self, index: usize, replacement: char) -> Self {
        let current = self
            .current
            .chars()
            .enumerate()
            .map(|(i, c)| if i == index { replacement } else { c })
            .collect();
        Self {
            current,
            end: self.end.clone(),
        }
    }
}

impl Configuration for StringsConfig {
    fn is_goal(&self) -> bool {
        self.current == self.end
    }

    /// For each character position, the backward rotation then the
    /// forward rotation.
    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::with_capacity(self.current.len() * 2);
        for (index, c) in self.current.chars().enumerate() {
            neighbors.push(self.with_char(index, rotate_back(c)));
            neighbors.push(self.with_char(index, rotate_forward(c)));
        }
        neighbors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Solver;

    fn steps(solution: &crate::search::Solution<StringsConfig>) -> Vec<String> {
        solution
            .path
            .iter()
            .map(|c| c.current().to_string())
            .collect()
    }

    #[test]
    fn test_rotations_wrap() {
        assert_eq!(rotate_back('A'), 'Z');
        assert_eq!(rotate_back('B'), 'A');
        assert_eq!(rotate_forward('Z'), 'A');
        assert_eq!(rotate_forward('Y'), 'Z');
    }

    #[test]
    fn test_single_increment() {
        let start = StringsConfig::new("AA", "AB").unwrap();
        let solution = Solver::new(start).solve();

        assert_eq!(steps(&solution), vec!["AA", "AB"]);
        assert_eq!(solution.moves(), Some(1));
    }

    #[test]
    fn test_start_equals_end() {
        let start = StringsConfig::new("AA", "AA").unwrap();
        let solution = Solver::new(start).solve();

        assert_eq!(steps(&solution), vec!["AA"]);
        assert_eq!(solution.unique_visited, 1);
    }

    #[test]
    fn test_wrap_is_one_move() {
        let start = StringsConfig::new("A", "Z").unwrap();
        let solution = Solver::new(start).solve();

        assert_eq!(solution.moves(), Some(1));
    }

    #[test]
    fn test_distance_matches_per_character_rotation() {
        // F->A is 5 back, O->B is 13 either way: 18 moves minimum.
        let start = StringsConfig::new("FO", "AB").unwrap();
        let solution = Solver::new(start).solve();

        assert_eq!(solution.moves(), Some(18));
    }

    #[test]
    fn test_neighbor_count_and_repeatability() {
        let config = StringsConfig::new("CAT", "DOG").unwrap();

        assert_eq!(config.neighbors().len(), 6);
        assert_eq!(config.neighbors(), config.neighbors());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            StringsConfig::new("AB", "A"),
            Err(StringsError::LengthMismatch { start: 2, end: 1 })
        ));
        assert!(matches!(
            StringsConfig::new("ab", "cd"),
            Err(StringsError::NotUppercase('a'))
        ));
        assert!(matches!(
            StringsConfig::new("A1", "BC"),
            Err(StringsError::NotUppercase('1'))
        ));
    }
}
