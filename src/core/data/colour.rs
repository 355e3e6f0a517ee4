/// An RGB triple with channels conventionally in `[0, 1]`, stored at the
/// precision the display consumer uploads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_has_zeroed_channels() {
        assert_eq!(Colour::BLACK.r, 0.0);
        assert_eq!(Colour::BLACK.g, 0.0);
        assert_eq!(Colour::BLACK.b, 0.0);
    }

    #[test]
    fn test_equality_compares_all_channels() {
        let a = Colour {
            r: 0.1,
            g: 0.2,
            b: 0.3,
        };
        let b = Colour {
            r: 0.1,
            g: 0.2,
            b: 0.3,
        };
        let c = Colour {
            r: 0.1,
            g: 0.2,
            b: 0.4,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
