use super::point::{block_index, point_info, PointInfo};
use super::{DirtyRange, Surface};
use super::{ATTR_OFFSET, BLOCK_COUNT, DEFAULT_ATTRIBUTE, MAX_LINE_STEPS, SCREEN_BASE, TOTAL_SIZE};
use log::trace;
use rand::Rng;

/// ## Display memory
///
/// Every mutation goes through one private write so the dirty range sees
/// all of them.

#[derive(Debug, Clone)]
pub struct Display {
    data: Vec<u8>,
    dirty: DirtyRange,
    attr: u8,
    over: bool,
    inverse: bool,
    cursor: (f64, f64),
    flash_phase: u8,
    last_flash_phase: u8,
}

/// What a pointer-driven host learns about one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerReport {
    pub info: PointInfo,
    pub attribute: u8,
    pub bitmap: u8,
    pub lit: bool,
    pub ink: u8,
    pub paper: u8,
}

impl Default for Display {
    fn default() -> Self {
        Display::new()
    }
}

impl Display {
    /// A cleared screen: paper everywhere, default attribute.
    pub fn new() -> Display {
        let mut display = Display::blank();
        display.cls();
        display
    }

    /// Random memory contents, as the hardware shows at power on.
    pub fn with_noise<R: Rng>(rng: &mut R) -> Display {
        let mut display = Display::blank();
        for index in 0..TOTAL_SIZE {
            display.write(index, rng.gen());
        }
        display.dirty = DirtyRange::full();
        display
    }

    fn blank() -> Display {
        Display {
            data: vec![0; TOTAL_SIZE],
            dirty: DirtyRange::full(),
            attr: DEFAULT_ATTRIBUTE,
            over: false,
            inverse: false,
            cursor: (0.0, 0.0),
            flash_phase: 0,
            last_flash_phase: 0,
        }
    }

    fn write(&mut self, index: usize, value: u8) {
        if index < TOTAL_SIZE {
            self.data[index] = value;
            self.dirty.widen(block_index(index));
        }
    }

    pub fn attribute(&self) -> u8 {
        self.attr
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    pub fn dirty(&self) -> &DirtyRange {
        &self.dirty
    }

    pub fn flash_phase(&self) -> u8 {
        self.flash_phase
    }

    pub fn ink(&mut self, ink: u8) {
        self.attr = self.attr & 0xF8 | (ink & 7);
    }

    pub fn paper(&mut self, paper: u8) {
        self.attr = self.attr & 0xC7 | (paper & 7) << 3;
    }

    pub fn bright(&mut self, bright: u8) {
        self.attr = self.attr & 0xBF | (bright & 1) << 6;
    }

    pub fn flash(&mut self, flash: u8) {
        self.attr = self.attr & 0x7F | (flash & 1) << 7;
    }

    pub fn set_over(&mut self, over: bool) {
        self.over = over;
    }

    pub fn set_inverse(&mut self, inverse: bool) {
        self.inverse = inverse;
    }

    /// Set one pixel and recolour its block. Moves the drawing cursor.
    pub fn plot(&mut self, x: f64, y: f64) {
        self.set_pixel(x, y);
        self.cursor = (x, y);
    }

    fn set_pixel(&mut self, x: f64, y: f64) {
        let p = match point_info(x, y) {
            Some(p) => p,
            None => return,
        };
        self.write(p.attr_index, self.attr);
        let byte = self.data[p.bitmap_index];
        let byte = match (self.over, self.inverse) {
            (false, false) => byte | p.bit,
            (true, false) => byte ^ p.bit,
            (false, true) => byte & !p.bit,
            (true, true) => byte,
        };
        self.write(p.bitmap_index, byte);
    }

    /// Rasterise along the longer axis, interpolating the other one. At
    /// most `MAX_LINE_STEPS` pixels are visited.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return;
        }
        let dx = x2 - x1;
        let dy = y2 - y1;
        if dx == 0.0 && dy == 0.0 {
            self.set_pixel(x1, y1);
        } else if dx.abs() > dy.abs() {
            let start = if dx > 0.0 { x1 } else { x2 };
            for i in 0..line_steps(dx) {
                let x = start + i as f64;
                self.set_pixel(x, (x - x1) / dx * dy + y1);
            }
        } else {
            let start = if dy > 0.0 { y1 } else { y2 };
            for i in 0..line_steps(dy) {
                let y = start + i as f64;
                self.set_pixel((y - y1) / dy * dx + x1, y);
            }
        }
        self.cursor = (x2, y2);
    }

    /// Line from the cursor by an offset.
    pub fn draw(&mut self, dx: f64, dy: f64) {
        let (x, y) = self.cursor;
        self.line(x, y, x + dx, y + dy);
    }

    pub fn cls(&mut self) {
        for index in 0..ATTR_OFFSET {
            self.write(index, 0);
        }
        for index in ATTR_OFFSET..TOTAL_SIZE {
            self.write(index, self.attr);
        }
        self.cursor = (0.0, 0.0);
    }

    /// Writes wrap into an 8K window; the part past the buffer is ignored.
    pub fn poke(&mut self, address: i64, value: u8) {
        let index = (address.wrapping_sub(SCREEN_BASE) & 0x1FFF) as usize;
        self.write(index, value);
    }

    pub fn peek(&self, address: i64) -> u8 {
        if address < SCREEN_BASE || address >= SCREEN_BASE + TOTAL_SIZE as i64 {
            return 0;
        }
        self.data[(address - SCREEN_BASE) as usize]
    }

    pub fn inspect(&self, x: f64, y: f64) -> Option<PointerReport> {
        let info = point_info(x, y)?;
        let attribute = self.data[info.attr_index];
        let bitmap = self.data[info.bitmap_index];
        let (ink, paper) = colours(attribute);
        Some(PointerReport {
            info,
            attribute,
            bitmap,
            lit: bitmap & info.bit != 0,
            ink,
            paper,
        })
    }

    /// Paint dirty blocks, and flashing blocks whenever the flash phase
    /// flips, onto `surface`. Returns false when nothing was painted.
    pub fn redraw<S: Surface>(&mut self, surface: &mut S) -> bool {
        self.flash_phase = (self.flash_phase + 1) & 0x3F;
        let flash_change = (self.flash_phase ^ self.last_flash_phase) & 0x20 != 0;
        self.last_flash_phase = self.flash_phase;
        let has_dirt = self.dirty.has_dirt();
        if !(has_dirt || flash_change) {
            return false;
        }
        let range = if flash_change {
            Some(0..=BLOCK_COUNT - 1)
        } else {
            self.dirty.range()
        };
        let mut painted = 0;
        for block in range.into_iter().flatten() {
            let attribute = self.data[ATTR_OFFSET + block];
            let flash = attribute & 0x80 != 0;
            if !(has_dirt || flash_change && flash) {
                continue;
            }
            self.paint(surface, block, attribute, flash);
            painted += 1;
        }
        trace!("redraw painted {} blocks", painted);
        self.dirty.reset();
        painted > 0
    }

    fn paint<S: Surface>(&self, surface: &mut S, block: usize, attribute: u8, flash: bool) {
        let block_x = block & 0x1F;
        let left = block_x << 3;
        let top = (block >> 5) << 3;
        let first = block_x | (block & 0xE0) | (block & 0x300) << 3;
        let (mut ink, mut paper) = colours(attribute);
        if flash && self.flash_phase & 0x20 != 0 {
            std::mem::swap(&mut ink, &mut paper);
        }
        for row in 0..8 {
            let byte = self.data[first | row << 8];
            for column in 0..8 {
                let colour = if byte & (0x80 >> column) != 0 {
                    ink
                } else {
                    paper
                };
                surface.put(left + column, top + row, colour);
            }
        }
    }
}

/// Pixels visited along the major axis of a line spanning `delta`.
fn line_steps(delta: f64) -> u64 {
    (delta.abs().floor() + 1.0).min(MAX_LINE_STEPS as f64) as u64
}

/// Palette indices for ink and paper. Bright selects the upper eight.
fn colours(attribute: u8) -> (u8, u8) {
    let ink = (attribute & 0x07) | (attribute & 0x40) >> 3;
    let paper = (attribute & 0x78) >> 3;
    (ink, paper)
}
