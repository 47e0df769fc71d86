//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores a character's base position in
//! screen (pixel) coordinates. Effects such as
//! [`Tremble`](super::tremble::Tremble) never write to it; they are applied
//! on top when the rendered position is queried.

use bevy_ecs::prelude::Component;

use crate::components::tremble::Tremble;

/// Base screen-space position (pivot) for a character.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Horizontal position as it should be drawn this tick.
    ///
    /// Adds the tremble offset when one is attached. Always computed from the
    /// current offset, never stored.
    pub fn rendered_x(&self, tremble: Option<&Tremble>) -> f32 {
        match tremble {
            Some(t) => self.x + t.offset as f32,
            None => self.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_creates_correct_position() {
        let pos = ScreenPosition::new(10.0, 20.0);
        assert!(approx_eq(pos.x, 10.0));
        assert!(approx_eq(pos.y, 20.0));
    }

    #[test]
    fn test_default_is_zero() {
        let pos = ScreenPosition::default();
        assert!(approx_eq(pos.x, 0.0));
        assert!(approx_eq(pos.y, 0.0));
    }

    #[test]
    fn test_translate() {
        let mut pos = ScreenPosition::new(10.0, 20.0);
        pos.translate(5.0, -3.0);
        assert!(approx_eq(pos.x, 15.0));
        assert!(approx_eq(pos.y, 17.0));
    }

    #[test]
    fn test_rendered_x_without_tremble() {
        let pos = ScreenPosition::new(100.0, 50.0);
        assert!(approx_eq(pos.rendered_x(None), 100.0));
    }

    #[test]
    fn test_rendered_x_adds_offset() {
        let pos = ScreenPosition::new(100.0, 50.0);
        let mut t = Tremble::new(8.0, 0.8, None);
        t.advance();
        assert!(approx_eq(pos.rendered_x(Some(&t)), 106.0));
        assert!(approx_eq(pos.x, 100.0));
    }
}
