use crate::Float;

/// The visible rectangle, origin top-left, y pointing down.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: Float,
    pub height: Float,
}

impl Playfield {
    #[inline]
    pub fn centre_x(&self) -> Float {
        (self.width / 2.0).ceil()
    }
}

impl Default for Playfield {
    fn default() -> Playfield {
        Playfield::new(800.0, 600.0)
    }
}
