use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TileRectError {
    EmptyExtent { x0: u32, y0: u32, x1: u32, y1: u32 },
}

impl fmt::Display for TileRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { x0, y0, x1, y1 } => {
                write!(
                    f,
                    "tile bounds must be non-empty: x [{}, {}), y [{}, {})",
                    x0, x1, y0, y1
                )
            }
        }
    }
}

impl Error for TileRectError {}

/// A half-open pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl TileRect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self, TileRectError> {
        if x1 <= x0 || y1 <= y0 {
            return Err(TileRectError::EmptyExtent { x0, y0, x1, y1 });
        }

        Ok(Self { x0, y0, x1, y1 })
    }

    #[must_use]
    pub fn x0(&self) -> u32 {
        self.x0
    }

    #[must_use]
    pub fn y0(&self) -> u32 {
        self.y0
    }

    #[must_use]
    pub fn x1(&self) -> u32 {
        self.x1
    }

    #[must_use]
    pub fn y1(&self) -> u32 {
        self.y1
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }
}
