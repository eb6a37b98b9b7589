use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement chosen after a correct answer, or the sentinel for the final word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
    /// Marks the last solved word. Gets a point and a label but never moves.
    Terminal,
}

impl Direction {
    pub const MOVES: [Direction; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    /// Parse a direction label as sent by the quiz screens.
    ///
    /// Accepts the Korean button labels (`상단`, `좌측`, `우측`, `하단`, `마지막`)
    /// and their English names, case-insensitive. Surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "상단" => return Some(Self::Up),
            "좌측" => return Some(Self::Left),
            "우측" => return Some(Self::Right),
            "하단" => return Some(Self::Down),
            "마지막" => return Some(Self::Terminal),
            _ => {}
        }
        match label.to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            "terminal" | "last" => Some(Self::Terminal),
            _ => None,
        }
    }

    /// The Korean label the quiz buttons use for this direction.
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "상단",
            Self::Left => "좌측",
            Self::Right => "우측",
            Self::Down => "하단",
            Self::Terminal => "마지막",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Terminal
    }

    /// Angle added to the running heading for this move, in radians.
    /// Screen coordinates are Y-down, so `Up` is a negative quarter turn.
    /// `None` for `Terminal`.
    pub fn heading_offset(self) -> Option<f32> {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Self::Up => Some(-FRAC_PI_2),
            Self::Left => Some(PI),
            Self::Right => Some(0.0),
            Self::Down => Some(FRAC_PI_2),
            Self::Terminal => None,
        }
    }
}

/// One solved word and the direction picked after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedRecord {
    pub word: String,
    pub direction: Direction,
}

impl SolvedRecord {
    pub fn new(word: impl Into<String>, direction: Direction) -> Self {
        Self {
            word: word.into(),
            direction,
        }
    }
}

/// Unvalidated record as it arrives from the host (JSON or UI layer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub word: String,
    pub direction: String,
}

impl RawRecord {
    pub fn new(word: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            direction: direction.into(),
        }
    }
}

/// Drawn location of a record. Laid out as two floats so a point slice
/// can be handed to the host as a flat `[x, y, x, y, ...]` buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f32,
    pub y: f32,
}

impl LayoutPoint {
    pub const FLOATS: usize = 2;

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: LayoutPoint) -> f32 {
        Vec2::from(self).distance(Vec2::from(other))
    }
}

impl From<Vec2> for LayoutPoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<LayoutPoint> for Vec2 {
    fn from(p: LayoutPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}
