use ansi_term::Colour;
use zxbasic::screen::{Frame, PALETTE};

/// Half-block rendering, one character per 2x4 pixels. Each half shows
/// the rarest colour of its 2x2 cell.
pub fn render(frame: &Frame) -> String {
    let mut out = String::new();
    for y in (0..frame.height()).step_by(4) {
        for x in (0..frame.width()).step_by(2) {
            let [r, g, b] = PALETTE[frame.accent(x, y, 2, 2) as usize];
            let [br, bg, bb] = PALETTE[frame.accent(x, y + 2, 2, 2) as usize];
            let style = Colour::RGB(r, g, b).on(Colour::RGB(br, bg, bb));
            out.push_str(&style.paint("\u{2580}").to_string());
        }
        out.push('\n');
    }
    out
}
