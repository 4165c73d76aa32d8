use macroquad::prelude::*;

use crate::domain::{CATALOG, CatalogEntry, Category, PatternId};

const HEADER_HEIGHT: f32 = 26.0;
const ITEM_HEIGHT: f32 = 28.0;
const PADDING: f32 = 4.0;
const SCROLL_STEP: f32 = 35.0;

/// One line of the sidebar listing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogRow {
    Header(Category),
    Entry(CatalogEntry),
}

impl CatalogRow {
    fn height(self) -> f32 {
        match self {
            CatalogRow::Header(_) => HEADER_HEIGHT,
            CatalogRow::Entry(_) => ITEM_HEIGHT,
        }
    }
}

/// Scrollable, category-grouped list of catalog entries
#[derive(Clone, Debug)]
pub struct CatalogList {
    rows: Vec<CatalogRow>,
    x: f32,
    top: f32,
    width: f32,
    height: f32,
    scroll: f32,
}

impl CatalogList {
    pub fn new() -> Self {
        let rows = CATALOG
            .iter()
            .flat_map(|(category, entries)| {
                std::iter::once(CatalogRow::Header(*category))
                    .chain(entries.iter().copied().map(CatalogRow::Entry))
            })
            .collect();
        Self {
            rows,
            x: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            scroll: 0.0,
        }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Update the on-screen viewport for responsive layout
    pub fn set_viewport(&mut self, x: f32, top: f32, width: f32, height: f32) {
        self.x = x;
        self.top = top;
        self.width = width;
        self.height = height.max(0.0);
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    fn content_height(&self) -> f32 {
        self.rows.iter().map(|r| r.height() + PADDING).sum()
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.height + 10.0).max(0.0)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Scroll by wheel notches; positive scrolls the list up
    pub fn scroll_by(&mut self, notches: f32) {
        self.scroll = (self.scroll - notches * SCROLL_STEP).clamp(0.0, self.max_scroll());
    }

    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.top
            && pos.1 <= self.top + self.height
    }

    /// Rows with their screen-space top edge, after scrolling
    fn laid_out(&self) -> impl Iterator<Item = (f32, CatalogRow)> + '_ {
        let mut y = self.top - self.scroll;
        self.rows.iter().map(move |row| {
            let at = y;
            y += row.height() + PADDING;
            (at, *row)
        })
    }

    /// Entry under the cursor, if any
    pub fn entry_at(&self, pos: (f32, f32)) -> Option<CatalogEntry> {
        if !self.contains(pos) {
            return None;
        }
        self.laid_out().find_map(|(y, row)| match row {
            CatalogRow::Entry(entry)
                if pos.1 >= y
                    && pos.1 <= y + ITEM_HEIGHT
                    && pos.0 >= self.x + 10.0
                    && pos.0 <= self.x + self.width - 10.0 =>
            {
                Some(entry)
            }
            _ => None,
        })
    }

    /// Draw visible rows, highlighting the armed pattern
    pub fn draw(&self, mouse_pos: (f32, f32), active: Option<PatternId>) {
        let hovered = self.entry_at(mouse_pos);
        let bottom = self.top + self.height;

        for (y, row) in self.laid_out() {
            if y + row.height() < self.top || y > bottom {
                continue;
            }
            match row {
                CatalogRow::Header(category) => {
                    draw_text(
                        &format!("- {} -", category.label()),
                        self.x + 10.0,
                        y + 18.0,
                        15.0,
                        Color::from_rgba(130, 170, 220, 255),
                    );
                }
                CatalogRow::Entry(entry) => {
                    let is_active = matches!(entry, CatalogEntry::Pattern(id) if Some(id) == active);
                    let bg = if is_active {
                        Color::from_rgba(70, 100, 160, 255)
                    } else if hovered == Some(entry) {
                        Color::from_rgba(75, 75, 95, 255)
                    } else {
                        Color::from_rgba(55, 55, 55, 255)
                    };
                    let (bx, bw) = (self.x + 10.0, self.width - 20.0);
                    draw_rectangle(bx, y, bw, ITEM_HEIGHT, bg);
                    draw_rectangle_lines(bx, y, bw, ITEM_HEIGHT, 1.0, Color::from_rgba(80, 80, 80, 255));

                    let text = entry.name();
                    let size = measure_text(text, None, 14, 1.0);
                    draw_text(text, bx + (bw - size.width) / 2.0, y + 19.0, 14.0, WHITE);
                }
            }
        }
    }
}

impl Default for CatalogList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Action;

    fn list() -> CatalogList {
        let mut list = CatalogList::new();
        list.set_viewport(800.0, 300.0, 300.0, 600.0);
        list
    }

    #[test]
    fn test_rows_start_with_controls() {
        let list = list();
        assert_eq!(list.rows()[0], CatalogRow::Header(Category::Controls));
        assert_eq!(list.rows()[1], CatalogRow::Entry(CatalogEntry::Action(Action::Clear)));
    }

    #[test]
    fn test_entry_at_first_item() {
        let list = list();
        // Header occupies 300..326, padding to 330, Clear spans 330..358
        assert_eq!(list.entry_at((900.0, 340.0)), Some(CatalogEntry::Action(Action::Clear)));
        assert_eq!(list.entry_at((900.0, 310.0)), None);
        assert_eq!(list.entry_at((700.0, 340.0)), None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut list = list();
        list.scroll_by(1.0);
        assert_eq!(list.scroll_offset(), 0.0);
        list.scroll_by(-1000.0);
        assert_eq!(list.scroll_offset(), list.max_scroll());
        assert!(list.max_scroll() > 0.0);
    }

    #[test]
    fn test_scrolling_shifts_hits() {
        let mut list = list();
        list.scroll_by(-1.0);
        // 35px scroll moves Clear to 295..323, above the viewport top for y < 300
        assert_eq!(list.entry_at((900.0, 299.0)), None);
        assert_eq!(list.entry_at((900.0, 310.0)), Some(CatalogEntry::Action(Action::Clear)));
    }
}
