#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_either_side_is_zero() {
        assert!(Viewport::new(0, 10).is_empty());
        assert!(Viewport::new(10, 0).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
