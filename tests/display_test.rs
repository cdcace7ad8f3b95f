mod common;
use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zxbasic::mach::Runtime;
use zxbasic::screen::{
    point_info, Display, Frame, ATTR_OFFSET, HEIGHT, SCREEN_BASE, TOTAL_SIZE, WIDTH,
};

fn lit(r: &Runtime, x: usize, y: usize) -> bool {
    r.display().inspect(x as f64, y as f64).unwrap().lit
}

fn lit_count(d: &Display) -> u32 {
    (0..ATTR_OFFSET as i64)
        .map(|i| d.peek(SCREEN_BASE + i).count_ones())
        .sum()
}

#[test]
fn test_plot_writes_bitmap_and_attribute() {
    let (r, s) = run("INK 2:PAPER 5:BRIGHT 1:PLOT 9,1");
    assert_eq!(s, "");
    let d = r.display();
    assert_eq!(d.peek(16384 + 0x101), 0x40);
    assert_eq!(d.peek(16384 + 6144 + 1), 0x6A);
    assert_eq!(lit_count(d), 1);
    let report = d.inspect(9.0, 1.0).unwrap();
    assert!(report.lit);
    assert_eq!((report.ink, report.paper), (10, 13));
}

#[test]
fn test_dirty_tracking() {
    let mut d = Display::new();
    let mut frame = Frame::new();
    assert!(d.redraw(&mut frame));
    assert!(!d.dirty().has_dirt());
    assert!(!d.redraw(&mut frame));
    assert_eq!(frame.colour_at(0, 0), 7);
    d.poke(SCREEN_BASE, 0xFF);
    assert_eq!(d.dirty().range(), Some(0..=0));
    d.poke(SCREEN_BASE + 6144 + 700, 0x38);
    assert_eq!(d.dirty().range(), Some(0..=700));
    assert!(d.redraw(&mut frame));
    assert_eq!(frame.colour_at(7, 0), 0);
    assert_eq!(frame.colour_at(7, 1), 7);
    assert!(!d.redraw(&mut frame));
}

#[test]
fn test_draw_follows_the_longer_axis() {
    let (r, s) = run("PLOT 20,30:DRAW 40,17");
    assert_eq!(s, "");
    for x in 20..=60 {
        let y = (x - 20) as f64 / 40.0 * 17.0 + 30.0;
        assert!(lit(&r, x, y as usize), "({}, {})", x, y);
    }
    assert_eq!(lit_count(r.display()), 41);
    assert_eq!(r.display().cursor(), (60.0, 47.0));
}

#[test]
fn test_draw_is_relative_to_cursor() {
    let (r, s) = run("PLOT 10,10:DRAW 0,5:DRAW -5,0");
    assert_eq!(s, "");
    assert!(lit(&r, 10, 15));
    assert!(lit(&r, 5, 15));
    assert_eq!(lit_count(r.display()), 11);
}

#[test]
fn test_circle() {
    let (r, s) = run("CIRCLE 128,96,40");
    assert_eq!(s, "");
    assert!(lit(&r, 168, 96));
    assert!(!lit(&r, 128, 96));
    let mut count = 0;
    for y in 0..192 {
        for x in 0..256 {
            if lit(&r, x, y) {
                let d = ((x as f64 - 128.0).powi(2) + (y as f64 - 96.0).powi(2)).sqrt();
                assert!(d > 38.0 && d < 42.0, "({}, {}) at {}", x, y, d);
                count += 1;
            }
        }
    }
    assert!(count > 100);
}

#[test]
fn test_cls_uses_current_attribute() {
    let display = Display::with_noise(&mut StdRng::seed_from_u64(1));
    let mut r = Runtime::with_display("PAPER 3:INK 1:CLS", display);
    assert_eq!(exec(&mut r), "");
    let d = r.display();
    assert_eq!(lit_count(d), 0);
    for i in ATTR_OFFSET..TOTAL_SIZE {
        assert_eq!(d.peek(SCREEN_BASE + i as i64), 25);
    }
}

#[test]
fn test_peek_and_poke_bounds() {
    let mut d = Display::new();
    assert_eq!(d.peek(SCREEN_BASE - 1), 0);
    assert_eq!(d.peek(SCREEN_BASE + TOTAL_SIZE as i64), 0);
    d.poke(SCREEN_BASE + 8192, 9);
    assert_eq!(d.peek(SCREEN_BASE), 9);
    let before = d.clone();
    d.poke(SCREEN_BASE + 7000, 1);
    for i in 0..TOTAL_SIZE as i64 {
        assert_eq!(d.peek(SCREEN_BASE + i), before.peek(SCREEN_BASE + i));
    }
}

#[test]
fn test_poke_statement() {
    let (r, s) = run("POKE 22528,7:POKE 16384,255");
    assert_eq!(s, "");
    assert_eq!(r.display().peek(22528), 7);
    for x in 0..8 {
        assert!(lit(&r, x, 0));
    }
    assert!(!lit(&r, 8, 0));
}

#[test]
fn test_flash_swaps_every_32_frames() {
    let mut d = Display::new();
    d.flash(1);
    d.ink(2);
    d.paper(5);
    d.plot(0.0, 0.0);
    let mut frame = Frame::new();
    assert!(d.redraw(&mut frame));
    for _ in 1..31 {
        assert!(!d.redraw(&mut frame));
    }
    assert_eq!(frame.colour_at(0, 0), 2);
    assert_eq!(frame.colour_at(1, 0), 5);
    assert!(d.redraw(&mut frame));
    assert_eq!(frame.colour_at(0, 0), 5);
    assert_eq!(frame.colour_at(1, 0), 2);
    assert_eq!(frame.colour_at(8, 0), 7);
}

#[test]
fn test_over_and_inverse_statements() {
    let (r, s) = run("PLOT 5,5:OVER 1:PLOT 5,5:PLOT 6,5");
    assert_eq!(s, "");
    assert!(!lit(&r, 5, 5));
    assert!(lit(&r, 6, 5));
    let (r, s) = run("PLOT 5,5:PLOT 6,5:INVERSE 1:PLOT 5,5");
    assert_eq!(s, "");
    assert!(!lit(&r, 5, 5));
    assert!(lit(&r, 6, 5));
}

#[test]
fn test_plot_off_screen() {
    let (r, s) = run("PLOT 3,200:PLOT 259,2");
    assert_eq!(s, "");
    assert_eq!(lit_count(r.display()), 1);
    assert!(lit(&r, 3, 2));
}

/// Every painted pixel must agree with the bitmap bit and attribute byte
/// found at its computed addresses.
fn assert_frame_matches_memory(d: &Display, frame: &Frame) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let info = point_info(x as f64, y as f64).unwrap();
            let attribute = d.peek(info.attr_address);
            let bitmap = d.peek(info.bitmap_address);
            let ink = (attribute & 0x07) | (attribute & 0x40) >> 3;
            let paper = (attribute & 0x78) >> 3;
            let expected = if bitmap & info.bit != 0 { ink } else { paper };
            assert_eq!(frame.colour_at(x, y), expected, "({}, {})", x, y);
        }
    }
}

#[test]
fn test_redraw_paints_what_memory_holds() {
    let mut r = Runtime::new(
        "10 INK 2:PAPER 6:PLOT 20,30:DRAW 40,17
        20 INK 4:BRIGHT 1:CIRCLE 128,96,40
        30 BRIGHT 0:INK 1:PLOT 255,191:DRAW -100,-3",
    );
    assert_eq!(exec(&mut r), "");
    let mut frame = Frame::new();
    assert!(r.display_mut().redraw(&mut frame));
    assert_frame_matches_memory(r.display(), &frame);
    assert_eq!(frame.colour_at(20, 30), 2);
    assert_eq!(frame.colour_at(168, 96), 12);
    assert_eq!(frame.colour_at(255, 191), 1);
}

#[test]
fn test_redraw_after_cls_and_poke() {
    let display = Display::with_noise(&mut StdRng::seed_from_u64(9));
    let mut r = Runtime::with_display(
        "PAPER 5:INK 0:CLS:PLOT 7,7:POKE 16384+2048+1,170",
        display,
    );
    let mut frame = Frame::new();
    assert!(r.display_mut().redraw(&mut frame));
    assert_eq!(exec(&mut r), "");
    assert!(r.display_mut().redraw(&mut frame));
    assert_frame_matches_memory(r.display(), &frame);
    assert_eq!(frame.colour_at(7, 7), 0);
    assert_eq!(frame.colour_at(8, 64), 0);
    assert_eq!(frame.colour_at(9, 64), 5);
}

#[test]
fn test_infinite_circle_does_nothing() {
    let (r, s) = run("CIRCLE 128,96,1/0:CIRCLE 0/0,96,4");
    assert_eq!(s, "");
    assert_eq!(lit_count(r.display()), 0);
}

#[test]
fn test_huge_shapes_finish() {
    let (r, s) = run("PLOT 0,0:DRAW 1E12,0:CIRCLE 128,96,1E5");
    assert_eq!(s, "");
    for x in 0..WIDTH {
        assert!(lit(&r, x, 0));
    }
}
