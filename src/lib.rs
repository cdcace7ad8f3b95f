//! # ZX BASIC
//!
//! A small line-numbered BASIC that draws into ZX Spectrum display memory.
//!
//! Programs are plain text. Statements are separated by newlines or `:`
//! and any physical line may start with a line number for `GOTO` and
//! `GOSUB` to find. Drawing commands write into a 6912 byte buffer laid
//! out exactly like the Spectrum screen, including its odd interleaved
//! bitmap rows and the flashing attribute.
//!
//! Run a program from a terminal with `zxbasic program.bas --png out.png`
//! or embed [`mach::Runtime`] and paint [`screen::Display`] yourself:
//! ```
//! use zxbasic::mach::{Event, Runtime};
//! use zxbasic::screen::Frame;
//!
//! let mut runtime = Runtime::new("10 INK 2\n20 CIRCLE 128,96,40");
//! while runtime.execute(100) == Event::Running {}
//! let mut frame = Frame::new();
//! runtime.display_mut().redraw(&mut frame);
//! assert_eq!(frame.colour_at(168, 96), 2);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
pub mod screen;
