use std::error::Error;
use std::fmt;

/// Starting iteration budget for a freshly constructed field.
pub const DEFAULT_MAX_ITERATIONS: u32 = 80;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldParamsError {
    InvalidDimensions { width: u32, height: u32 },
    ZeroMaxIterations,
}

impl fmt::Display for FieldParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "field dimensions must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for FieldParamsError {}

/// Validated construction parameters for a fractal field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldParams {
    width: u32,
    height: u32,
    max_iterations: u32,
}

impl FieldParams {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, FieldParamsError> {
        if width == 0 || height == 0 {
            return Err(FieldParamsError::InvalidDimensions { width, height });
        }
        if max_iterations == 0 {
            return Err(FieldParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
