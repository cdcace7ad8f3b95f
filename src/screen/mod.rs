/*!
## Rust Screen Module

The display memory: a 6912 byte buffer laid out the way the ZX Spectrum
lays out its screen, with dirty tracking so a host only repaints what
changed. Hosts implement [`Surface`] to receive pixels.

```text
bitmap offset   y7 y6 y2 y1 y0 y5 y4 y3 x7 x6 x5 x4 x3
attr offset     6144 + (y7 y6 y5 y4 y3 x7 x6 x5 x4 x3)
block index     (offset & 0xFF) | (offset & 0x1800) >> 3
```
*/

mod dirty;
mod display;
mod frame;
mod point;

pub use dirty::DirtyRange;
pub use display::{Display, PointerReport};
pub use frame::{Frame, Surface, PALETTE};
pub use point::{block_index, point_info, PointInfo};

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 192;
pub const BLOCK_WIDTH: usize = WIDTH >> 3;
pub const BLOCK_HEIGHT: usize = HEIGHT >> 3;
pub const BLOCK_COUNT: usize = BLOCK_WIDTH * BLOCK_HEIGHT;
pub const ATTR_OFFSET: usize = BLOCK_WIDTH * HEIGHT;
pub const TOTAL_SIZE: usize = ATTR_OFFSET + BLOCK_COUNT;

/// Address of the first display byte for `PEEK` and `POKE`.
pub const SCREEN_BASE: i64 = 16384;

/// Longest line ever rasterised. Coordinates wrap at 256 so anything
/// longer only repaints pixels already visited.
pub const MAX_LINE_STEPS: u64 = 1 << 16;

/// Ink 0 on paper 7, not bright, not flashing.
pub const DEFAULT_ATTRIBUTE: u8 = 56;
