use crate::consts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Gameplay options fixed for the duration of a session
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub grid_size: GridSize,
}

/// Difficulty selects the tick interval a session starts at
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// The tick interval at level 1
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(70),
            Difficulty::Extreme => Duration::from_millis(50),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        };
        f.pad(name)
    }
}

/// How the edges of the board behave
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Hitting an edge is a collision
    #[default]
    Classic,
    /// The board wraps around at the edges
    Wrap,
}

impl GameMode {
    pub fn wraps(self) -> bool {
        self == GameMode::Wrap
    }
}

/// Side length of the square board, clamped to
/// [`MIN_GRID_SIZE`][consts::MIN_GRID_SIZE] ..=
/// [`MAX_GRID_SIZE`][consts::MAX_GRID_SIZE].  Out-of-range requests are
/// clamped rather than rejected.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "u16", into = "u16")]
pub struct GridSize(u16);

impl GridSize {
    pub fn new(size: u16) -> GridSize {
        GridSize(size.clamp(consts::MIN_GRID_SIZE, consts::MAX_GRID_SIZE))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(consts::DEFAULT_GRID_SIZE)
    }
}

impl From<u16> for GridSize {
    fn from(size: u16) -> GridSize {
        GridSize::new(size)
    }
}

impl From<GridSize> for u16 {
    fn from(size: GridSize) -> u16 {
        size.get()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 10)]
    #[case(10, 10)]
    #[case(20, 20)]
    #[case(30, 30)]
    #[case(50, 30)]
    fn grid_size_clamps(#[case] requested: u16, #[case] actual: u16) {
        assert_eq!(GridSize::new(requested).get(), actual);
    }

    #[rstest]
    #[case(Difficulty::Easy, 150)]
    #[case(Difficulty::Medium, 100)]
    #[case(Difficulty::Hard, 70)]
    #[case(Difficulty::Extreme, 50)]
    fn difficulty_intervals(#[case] difficulty: Difficulty, #[case] millis: u64) {
        assert_eq!(difficulty.tick_interval(), Duration::from_millis(millis));
    }

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.difficulty, Difficulty::Medium);
        assert_eq!(opts.mode, GameMode::Classic);
        assert_eq!(opts.grid_size.get(), 20);
    }

    #[test]
    fn deserialize_partial_toml() {
        let opts = toml::from_str::<Options>("difficulty = \"hard\"\n").unwrap();
        assert_eq!(opts.difficulty, Difficulty::Hard);
        assert_eq!(opts.mode, GameMode::Classic);
        assert_eq!(opts.grid_size.get(), 20);
    }

    #[test]
    fn deserialize_clamps_grid_size() {
        let opts = toml::from_str::<Options>("grid-size = 200\nmode = \"wrap\"\n").unwrap();
        assert_eq!(opts.grid_size.get(), 30);
        assert!(opts.mode.wraps());
    }

    #[test]
    fn toml_round_trip() {
        let opts = Options {
            difficulty: Difficulty::Extreme,
            mode: GameMode::Wrap,
            grid_size: GridSize::new(25),
        };
        let src = toml::to_string(&opts).unwrap();
        assert_eq!(toml::from_str::<Options>(&src).unwrap(), opts);
    }
}
