use crate::buffer::{Color, PixelBuffer};

/// Flood fill of the 4-connected region around a seed point.
///
/// The traversal uses an explicit work stack rather than recursion so a
/// fill covering the whole canvas cannot blow the call stack. Neighbors
/// are pushed unconditionally; bounds and color are re-checked on pop.
pub struct FloodFillEngine;

/// What a fill call did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// At least one pixel was recolored.
    Filled,
    /// Seed out of bounds, or the region already had the fill color.
    NoEffect,
}

impl FloodFillEngine {
    /// Recolors every pixel 4-connected to (seed_x, seed_y) that exactly
    /// matches the seed pixel's RGBA. The painted alpha is forced to 255.
    ///
    /// An out-of-range seed is a no-op, not an error: pointer coordinates
    /// at the canvas edge are routine. A region whose RGB already equals
    /// the fill color's RGB is also left alone, even when its alpha
    /// differs from the 255 the fill would write.
    pub fn fill(buffer: &mut PixelBuffer, seed_x: i32, seed_y: i32, fill_color: Color) -> FillOutcome {
        if !buffer.contains(seed_x, seed_y) {
            log::debug!("fill seed ({seed_x}, {seed_y}) outside buffer, ignoring");
            return FillOutcome::NoEffect;
        }
        let target = buffer.pixel(seed_x as usize, seed_y as usize);

        // Early exit compares RGB only; the traversal match below compares
        // all four channels. The asymmetry is intentional.
        if target.rgb_eq(&fill_color) {
            return FillOutcome::NoEffect;
        }

        let painted = Color {
            a: 255,
            ..fill_color
        };
        let mut stack = vec![(seed_x, seed_y)];
        while let Some((x, y)) = stack.pop() {
            if !buffer.contains(x, y) {
                continue;
            }
            // A painted pixel no longer matches the target, so already
            // visited pixels fall out here.
            if buffer.pixel(x as usize, y as usize) != target {
                continue;
            }
            buffer.set_pixel(x, y, painted);
            stack.push((x + 1, y));
            stack.push((x - 1, y));
            stack.push((x, y + 1));
            stack.push((x, y - 1));
        }
        FillOutcome::Filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::opaque(255, 0, 0);
    const BLUE: Color = Color::opaque(0, 0, 255);

    #[test]
    fn fills_entire_uniform_buffer() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        let outcome = FloodFillEngine::fill(&mut buffer, 0, 0, RED);
        assert_eq!(outcome, FillOutcome::Filled);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buffer.pixel(x, y), RED);
            }
        }
    }

    #[test]
    fn fill_stops_at_differently_colored_pixels() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        buffer.set_pixel(2, 2, Color::BLACK);
        FloodFillEngine::fill(&mut buffer, 0, 0, BLUE);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x, y) == (2, 2) { Color::BLACK } else { BLUE };
                assert_eq!(buffer.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_does_not_leak_across_a_wall() {
        // Vertical black wall splits the buffer in two.
        let mut buffer = PixelBuffer::new(5, 3, Color::WHITE);
        for y in 0..3 {
            buffer.set_pixel(2, y, Color::BLACK);
        }
        FloodFillEngine::fill(&mut buffer, 0, 1, RED);
        for y in 0..3 {
            assert_eq!(buffer.pixel(0, y), RED);
            assert_eq!(buffer.pixel(1, y), RED);
            assert_eq!(buffer.pixel(2, y), Color::BLACK);
            assert_eq!(buffer.pixel(3, y), Color::WHITE);
            assert_eq!(buffer.pixel(4, y), Color::WHITE);
        }
    }

    #[test]
    fn diagonal_neighbors_are_not_connected() {
        // Checkerboard corner: (0,0) white, (1,1) white, but joined only
        // diagonally, so a fill at (0,0) must not reach (1,1).
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        buffer.set_pixel(1, 0, Color::BLACK);
        buffer.set_pixel(0, 1, Color::BLACK);
        FloodFillEngine::fill(&mut buffer, 0, 0, RED);
        assert_eq!(buffer.pixel(0, 0), RED);
        assert_eq!(buffer.pixel(1, 1), Color::WHITE);
    }

    #[test]
    fn filling_with_the_same_color_is_a_no_op() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        let before = buffer.clone();
        let outcome = FloodFillEngine::fill(&mut buffer, 1, 1, Color::WHITE);
        assert_eq!(outcome, FillOutcome::NoEffect);
        assert_eq!(buffer, before);
    }

    #[test]
    fn rgb_match_with_different_alpha_still_early_exits() {
        // Region is (255,0,0,128); fill color is opaque red. The early
        // exit only compares RGB, so nothing changes, alpha included.
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        let translucent_red = Color { r: 255, g: 0, b: 0, a: 128 };
        buffer.fill_all(translucent_red);
        let before = buffer.clone();
        let outcome = FloodFillEngine::fill(&mut buffer, 0, 0, RED);
        assert_eq!(outcome, FillOutcome::NoEffect);
        assert_eq!(buffer, before);
    }

    #[test]
    fn out_of_bounds_seed_is_a_no_op() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        let before = buffer.clone();
        assert_eq!(FloodFillEngine::fill(&mut buffer, -1, 0, RED), FillOutcome::NoEffect);
        assert_eq!(FloodFillEngine::fill(&mut buffer, 0, 4, RED), FillOutcome::NoEffect);
        assert_eq!(buffer, before);
    }

    #[test]
    fn painted_alpha_is_forced_opaque() {
        let mut buffer = PixelBuffer::new(2, 1, Color::WHITE);
        let translucent_blue = Color { r: 0, g: 0, b: 255, a: 10 };
        FloodFillEngine::fill(&mut buffer, 0, 0, translucent_blue);
        assert_eq!(buffer.pixel(0, 0), Color::opaque(0, 0, 255));
        assert_eq!(buffer.pixel(1, 0), Color::opaque(0, 0, 255));
    }
}
