use tracing::{debug, info, warn};

use super::cursor::{locate, Cursor};
use super::error::ExecuteError;
use super::pager::{Pager, TABLE_MAX_PAGES};
use super::row::{Row, ROW_SIZE};
use super::ROWS_PER_PAGE;

/// The single append-only table.
pub struct Table {
    num_rows: usize,
    max_pages: usize,
    pager: Pager,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self::with_max_pages(TABLE_MAX_PAGES)
    }

    pub fn with_max_pages(max_pages: usize) -> Self {
        info!(max_pages, "opened table");
        Table {
            num_rows: 0,
            max_pages,
            pager: Pager::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn max_rows(&self) -> usize {
        ROWS_PER_PAGE.saturating_mul(self.max_pages)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Appends `row` after the last one.
    pub fn insert(&mut self, row: &Row) -> Result<(), ExecuteError> {
        if self.num_rows >= self.max_rows() {
            warn!(num_rows = self.num_rows, "table full");
            return Err(ExecuteError::TableFull);
        }
        let (page_num, offset) = locate(self.num_rows);
        let page = self.pager.get_page(page_num)?;
        row.serialize(&mut page[offset..offset + ROW_SIZE]);
        self.num_rows += 1;
        debug!(row_num = self.num_rows - 1, page_num, id = row.id(), "inserted row");
        Ok(())
    }

    /// Every row in insertion order.
    pub fn scan(&self) -> Cursor<'_> {
        Cursor::table_start(self)
    }

    pub(crate) fn row_slot(&self, row_num: usize) -> Option<&[u8]> {
        if row_num >= self.num_rows {
            return None;
        }
        let (page_num, offset) = locate(row_num);
        let page = self.pager.page(page_num)?;
        Some(&page[offset..offset + ROW_SIZE])
    }

    /// Releases all pages. The table is gone afterwards.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.pager.num_allocated() > 0 {
            info!(
                num_rows = self.num_rows,
                pages = self.pager.num_allocated(),
                "closing table"
            );
        }
        self.pager.close();
    }
}

#[cfg(test)]
impl Table {
    /// A table whose next append lands at row `num_rows`.
    pub(crate) fn with_num_rows(max_pages: usize, num_rows: usize) -> Self {
        let mut table = Self::with_max_pages(max_pages);
        table.num_rows = num_rows;
        table
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        self.release();
    }
}
