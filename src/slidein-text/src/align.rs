//! Horizontal placement of a line inside the available width.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of each visual line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// Horizontal offset of a line of `line_width` inside `max_width`.
    ///
    /// Lines wider than the box (overlong words) start at zero.
    pub fn offset(self, line_width: f32, max_width: f32) -> f32 {
        let free = (max_width - line_width).max(0.0);
        match self {
            Self::Start => 0.0,
            Self::Center => free / 2.0,
            Self::End => free,
        }
    }

    /// The next alignment in `Start -> Center -> End` order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Start => Self::Center,
            Self::Center => Self::End,
            Self::End => Self::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(TextAlign::Start.offset(4.0, 10.0), 0.0);
        assert_eq!(TextAlign::Center.offset(4.0, 10.0), 3.0);
        assert_eq!(TextAlign::End.offset(4.0, 10.0), 6.0);
        assert_eq!(TextAlign::End.offset(14.0, 10.0), 0.0);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(TextAlign::Start.cycle(), TextAlign::Center);
        assert_eq!(TextAlign::End.cycle(), TextAlign::Start);
    }
}
