use super::{ATTR_OFFSET, HEIGHT, SCREEN_BASE};

/// Where a pixel lives in display memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointInfo {
    pub x: usize,
    pub y: usize,
    pub block_x: usize,
    pub block_y: usize,
    pub attr_index: usize,
    pub bitmap_index: usize,
    pub attr_address: i64,
    pub bitmap_address: i64,
    pub bit: u8,
}

/// Coordinates are truncated and wrapped to 0..=255. Rows past the bottom
/// of the screen have no memory and give `None`.
pub fn point_info(x: f64, y: f64) -> Option<PointInfo> {
    let x = (x as i64 & 255) as usize;
    let y = (y as i64 & 255) as usize;
    if y >= HEIGHT {
        return None;
    }
    let block_x = x >> 3;
    let block_y = y >> 3;
    let attr_index = ATTR_OFFSET + (block_x | block_y << 5);
    let bitmap_index = block_x | (y & 0x07) << 8 | (y & 0x38) << 2 | (y & 0xC0) << 5;
    Some(PointInfo {
        x,
        y,
        block_x,
        block_y,
        attr_index,
        bitmap_index,
        attr_address: SCREEN_BASE + attr_index as i64,
        bitmap_address: SCREEN_BASE + bitmap_index as i64,
        bit: 0x80 >> (x & 7),
    })
}

/// The 8x8 block a buffer offset belongs to.
pub fn block_index(offset: usize) -> usize {
    if offset >= ATTR_OFFSET {
        offset - ATTR_OFFSET
    } else {
        (offset & 0x00FF) | (offset & 0x1800) >> 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave() {
        let p = point_info(9.0, 1.0).unwrap();
        assert_eq!(p.bitmap_index, 0x0101);
        assert_eq!(p.bit, 0x40);
        let p = point_info(0.0, 8.0).unwrap();
        assert_eq!(p.bitmap_index, 0x0020);
        assert_eq!(p.attr_index, ATTR_OFFSET + 32);
        let p = point_info(255.0, 191.0).unwrap();
        assert_eq!(p.bitmap_index, 0x17FF);
        assert_eq!(p.attr_address, 16384 + 6911);
    }

    #[test]
    fn test_wrap_and_clip() {
        assert_eq!(point_info(256.0 + 3.7, 2.0).unwrap().x, 3);
        assert!(point_info(0.0, 192.0).is_none());
        assert_eq!(point_info(0.0, 256.0 + 5.0).unwrap().y, 5);
    }

    #[test]
    fn test_block_of_every_row() {
        for y in 0..HEIGHT {
            let p = point_info(17.0, y as f64).unwrap();
            assert_eq!(block_index(p.bitmap_index), block_index(p.attr_index));
        }
    }
}
