use super::LineNumber;

/// The leading line number of a trimmed statement. At most four digits are
/// read, so `12345 PLOT 0,0` is line 1234.
pub fn line_number(s: &str) -> Option<LineNumber> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    digits.parse().ok()
}

/// Where the statement starting at some offset ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Earliest newline or `:`, or the end of the source.
    pub stop: usize,
    /// Next newline, or the end of the source.
    pub newline: usize,
}

impl Boundary {
    pub fn find(code: &str, index: usize) -> Boundary {
        let tail = &code[index..];
        let newline = tail.find('\n').map_or(code.len(), |i| index + i);
        let colon = tail.find(':').map_or(code.len(), |i| index + i);
        Boundary {
            stop: newline.min(colon),
            newline,
        }
    }
}
