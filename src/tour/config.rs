//! Tour run parameters.

use super::types::Cell;

/// Configuration for a knight's tour search.
///
/// # Examples
///
/// ```
/// use combisearch::tour::{Cell, TourConfig};
///
/// let config = TourConfig::default()
///     .with_start(Cell::new(3, 4))
///     .with_closed(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// Starting cell. Must lie on the board.
    pub start: Cell,

    /// Whether the tour must be closed: the final cell has to be one
    /// knight move from `start`. Open tours may end anywhere.
    pub closed: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            start: Cell::new(0, 0),
            closed: false,
        }
    }
}

impl TourConfig {
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.start.in_bounds() {
            return Err(format!(
                "start ({}, {}) is off the board",
                self.start.x, self.start.y
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TourConfig::default();
        assert_eq!(config.start, Cell::new(0, 0));
        assert!(!config.closed);
    }

    #[test]
    fn test_builder() {
        let config = TourConfig::default()
            .with_start(Cell::new(5, 2))
            .with_closed(true);
        assert_eq!(config.start, Cell::new(5, 2));
        assert!(config.closed);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TourConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_off_board_start() {
        let config = TourConfig::default().with_start(Cell::new(8, 0));
        assert!(config.validate().is_err());
    }
}
