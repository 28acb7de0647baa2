use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("[{}:{}]", start, end)]
pub struct Span {
    // inclusive byte range
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..=self.end).unwrap_or("")
    }

    /// 1-based row and column of the first byte of the span.
    pub fn to_start_row_col(self, input: &str) -> (usize, usize) {
        let mut row = 1;
        let mut col = 1;
        for (offset, c) in input.char_indices() {
            if offset >= self.start {
                break;
            }
            if c == '\n' {
                row += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (row, col)
    }
}
