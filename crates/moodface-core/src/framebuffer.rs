//! In-memory framebuffer with per-pixel change detection.
//!
//! Widget drawing targets this RAM buffer instead of a hardware display.
//! After drawing completes, only the rectangular region containing changed
//! pixels is flushed to the real display in a single transaction. Tests use
//! it as a headless surface and probe individual pixels.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

/// Heap-backed framebuffer implementing `DrawTarget<Color = Rgb565>`.
///
/// Tracks a dirty bounding box so that only changed pixels are flushed to
/// the downstream display.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a new framebuffer of the given size, filled with black pixels.
    pub fn new(size: Size) -> Self {
        let pixel_count = size.width as usize * size.height as usize;
        Self {
            size,
            pixels: vec![Rgb565::BLACK; pixel_count],
            dirty: None,
        }
    }

    /// Read back a single pixel, or `None` when the point is out of bounds.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        if point.x < 0
            || point.y < 0
            || point.x as u32 >= self.size.width
            || point.y as u32 >= self.size.height
        {
            return None;
        }
        let idx = point.y as usize * self.size.width as usize + point.x as usize;
        Some(self.pixels[idx])
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.size.width as usize + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a downstream display, then reset the dirty
    /// state.
    ///
    /// Only the bounding rectangle of changed pixels is sent, via
    /// `fill_contiguous`. If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let height = rect.max_y - rect.min_y + 1;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            width, height, rect.min_x, rect.min_y
        );

        let area = Rectangle::new(
            Point::new(rect.min_x as i32, rect.min_y as i32),
            Size::new(width as u32, height as u32),
        );

        // Borrow the pixel slice so the closure captures a shared reference,
        // avoiding the `FnMut` escaping-reference issue with `&mut self`.
        let pixels = &self.pixels;
        let stride = self.size.width as usize;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        // Clamp the area to framebuffer bounds
        let area_x = area.top_left.x.max(0) as usize;
        let area_y = area.top_left.y.max(0) as usize;
        let area_w = area.size.width as usize;
        let area_h = area.size.height as usize;

        let mut colors = colors.into_iter();
        for row in 0..area_h {
            let y = area_y + row;
            for col in 0..area_w {
                let x = area_x + col;
                if let Some(color) = colors.next()
                    && x < w
                    && y < h
                {
                    self.set_pixel(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        let x_start = (area.top_left.x.max(0) as usize).min(w);
        let y_start = (area.top_left.y.max(0) as usize).min(h);
        let x_end = ((area.top_left.x + area.size.width as i32).max(0) as usize).min(w);
        let y_end = ((area.top_left.y + area.size.height as i32).max(0) as usize).min(h);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        for y in 0..h {
            for x in 0..w {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::Drawable as EgDrawable;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn starts_black_with_nothing_to_flush() {
        let mut fb = FrameBuffer::new(Size::new(8, 8));
        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::BLACK));

        let mut sink = FrameBuffer::new(Size::new(8, 8));
        fb.flush(&mut sink).unwrap();
        assert!(sink.dirty.is_none());
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(0, 9), Rgb565::RED),
            Pixel(Point::new(2, 2), Rgb565::RED),
        ])
        .unwrap();

        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn flush_transfers_only_the_dirty_rect() {
        let mut fb = FrameBuffer::new(Size::new(16, 16));
        Rectangle::new(Point::new(4, 4), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut fb)
            .unwrap();

        let mut sink = FrameBuffer::new(Size::new(16, 16));
        fb.flush(&mut sink).unwrap();

        assert_eq!(sink.pixel(Point::new(4, 4)), Some(Rgb565::GREEN));
        assert_eq!(sink.pixel(Point::new(5, 5)), Some(Rgb565::GREEN));
        assert_eq!(sink.pixel(Point::new(6, 6)), Some(Rgb565::BLACK));

        // Dirty state resets after a flush.
        assert!(fb.dirty.is_none());

        // The sink's dirty rect should cover exactly the changed square.
        let rect = sink.dirty.unwrap();
        assert_eq!((rect.min_x, rect.min_y, rect.max_x, rect.max_y), (4, 4, 5, 5));
    }

    #[test]
    fn rewriting_the_same_color_stays_clean() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.clear(Rgb565::BLACK).unwrap();
        assert!(fb.dirty.is_none());
    }
}
