//! Page layout for the exported document
//!
//! Positions are whole PDF points with the origin in the bottom-left corner.

use super::metrics::Font;

/// A positioned run of Latin-1 text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub font: Font,
    pub size: i64,
    pub x: i64,
    pub y: i64,
    pub text: Vec<u8>,
}

/// Text runs placed on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub runs: Vec<TextRun>,
}

/// Geometry of a single-column, title-plus-body page (A4 by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub page_width: i64,
    pub page_height: i64,
    /// Left, right and top margin
    pub margin: i64,
    /// Distance from the page bottom at which a new page is started
    pub bottom_margin: i64,
    pub title_size: i64,
    pub title_height: i64,
    /// Vertical gap between the title cell and the body
    pub title_gap: i64,
    pub body_size: i64,
    pub line_height: i64,
    /// Horizontal inset of body text inside the margins
    pub cell_padding: i64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 595,
            page_height: 842,
            margin: 28,
            bottom_margin: 57,
            title_size: 16,
            title_height: 28,
            title_gap: 28,
            body_size: 12,
            line_height: 16,
            cell_padding: 3,
        }
    }
}

impl PageLayout {
    /// Width available to a body line, in points
    pub fn body_width(&self) -> i64 {
        self.page_width - 2 * self.margin - 2 * self.cell_padding
    }

    /// Baseline offset from the top of a cell, so text sits vertically centered
    fn baseline_in_cell(cell_height: i64, size: i64) -> i64 {
        cell_height / 2 + size * 3 / 10
    }

    /// Width available to a title line, in points
    pub fn title_width(&self) -> i64 {
        self.page_width - 2 * self.margin
    }

    /// Break one encoded body line into pieces that fit the body width.
    ///
    /// Breaks at the last space before the overflow; a word wider than the
    /// whole line is broken mid-word. An empty line stays one empty piece.
    pub fn wrap(&self, line: &[u8]) -> Vec<Vec<u8>> {
        Self::fit(line, Font::Helvetica, self.body_size, self.body_width())
    }

    /// Break the title into centered lines that fit between the margins
    pub fn wrap_title(&self, title: &[u8]) -> Vec<Vec<u8>> {
        Self::fit(
            title,
            Font::HelveticaBold,
            self.title_size,
            self.title_width(),
        )
    }

    fn fit(line: &[u8], font: Font, size: i64, max_points: i64) -> Vec<Vec<u8>> {
        let max_width = max_points * 1000;
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut last_space = None;
        let mut width = 0;
        let mut i = 0;

        while i < line.len() {
            let byte = line[i];
            if byte == b' ' {
                last_space = Some(i);
            }
            width += i64::from(font.glyph_width(byte)) * size;

            if width > max_width {
                match last_space {
                    Some(space) if space > start => {
                        pieces.push(line[start..space].to_vec());
                        start = space + 1;
                    }
                    _ => {
                        let end = if i == start { i + 1 } else { i };
                        pieces.push(line[start..end].to_vec());
                        start = end;
                    }
                }
                i = start;
                width = 0;
                last_space = None;
                continue;
            }

            i += 1;
        }

        if start < line.len() || pieces.is_empty() {
            pieces.push(line[start..].to_vec());
        }

        pieces
    }

    /// Lay out a title and body lines, starting a new page whenever the next
    /// line would cross the bottom margin. The title appears on the first
    /// page only, one centered cell per wrapped title line. Always returns at
    /// least one page.
    pub fn paginate(&self, title: &[u8], lines: &[Vec<u8>]) -> Vec<PageContent> {
        let mut pages = Vec::new();
        let mut page = PageContent::default();
        let mut cursor = self.margin;

        for line in self.wrap_title(title) {
            let width = Font::HelveticaBold.text_width(&line, self.title_size) / 1000;
            page.runs.push(TextRun {
                font: Font::HelveticaBold,
                size: self.title_size,
                x: ((self.page_width - width) / 2).max(self.margin),
                y: self.page_height
                    - cursor
                    - Self::baseline_in_cell(self.title_height, self.title_size),
                text: line,
            });
            cursor += self.title_height;
        }
        cursor += self.title_gap;

        let limit = self.page_height - self.bottom_margin;
        for piece in lines.iter().flat_map(|line| self.wrap(line)) {
            if cursor + self.line_height > limit {
                pages.push(std::mem::take(&mut page));
                cursor = self.margin;
            }

            if !piece.is_empty() {
                page.runs.push(TextRun {
                    font: Font::Helvetica,
                    size: self.body_size,
                    x: self.margin + self.cell_padding,
                    y: self.page_height
                        - cursor
                        - Self::baseline_in_cell(self.line_height, self.body_size),
                    text: piece,
                });
            }
            cursor += self.line_height;
        }

        pages.push(page);
        pages
    }
}
