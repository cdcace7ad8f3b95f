use super::{HEIGHT, WIDTH};

/// Receives painted pixels from [`Display::redraw`](super::Display::redraw).
/// `colour` is an index into [`PALETTE`].
pub trait Surface {
    fn put(&mut self, x: usize, y: usize, colour: u8);
}

/// Normal colours at level 205, bright ones at 255.
pub const PALETTE: [[u8; 3]; 16] = [
    [0, 0, 0],
    [0, 0, 205],
    [205, 0, 0],
    [205, 0, 205],
    [0, 205, 0],
    [0, 205, 205],
    [205, 205, 0],
    [205, 205, 205],
    [0, 0, 0],
    [0, 0, 255],
    [255, 0, 0],
    [255, 0, 255],
    [0, 255, 0],
    [0, 255, 255],
    [255, 255, 0],
    [255, 255, 255],
];

/// A 256x192 surface of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u8>,
}

impl Default for Frame {
    fn default() -> Self {
        Frame::new()
    }
}

impl Frame {
    pub fn new() -> Frame {
        Frame {
            pixels: vec![0; WIDTH * HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn colour_at(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * WIDTH + x]
    }

    /// The rarest colour in a cell, so one pixel lines survive scaling
    /// down. Ties go to the first colour seen. Cells are clipped to the
    /// frame.
    pub fn accent(&self, x: usize, y: usize, width: usize, height: usize) -> u8 {
        let mut counts = [0usize; 16];
        let mut order = Vec::with_capacity(width * height);
        for row in y..(y + height).min(HEIGHT) {
            for column in x..(x + width).min(WIDTH) {
                let colour = self.colour_at(column, row) & 0x0F;
                if counts[colour as usize] == 0 {
                    order.push(colour);
                }
                counts[colour as usize] += 1;
            }
        }
        order
            .into_iter()
            .min_by_key(|colour| counts[*colour as usize])
            .unwrap_or(0)
    }

    pub fn rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            out.extend_from_slice(&PALETTE[(colour & 0x0F) as usize]);
            out.push(255);
        }
        out
    }
}

impl Surface for Frame {
    fn put(&mut self, x: usize, y: usize, colour: u8) {
        if x < WIDTH && y < HEIGHT {
            self.pixels[y * WIDTH + x] = colour;
        }
    }
}
