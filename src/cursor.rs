use super::row::{Row, ROW_SIZE};
use super::table::Table;
use super::ROWS_PER_PAGE;

/// Maps a row number to the page holding it and the byte offset inside that page.
pub fn locate(row_num: usize) -> (usize, usize) {
    let page_num = row_num / ROWS_PER_PAGE;
    let byte_offset = (row_num % ROWS_PER_PAGE) * ROW_SIZE;
    (page_num, byte_offset)
}

/// Walks the rows of a table in insertion order.
pub struct Cursor<'a> {
    table: &'a Table,
    row_num: usize,
    end_of_table: bool,
}

impl<'a> Cursor<'a> {
    pub fn table_start(table: &'a Table) -> Self {
        Self {
            table,
            row_num: 0,
            end_of_table: table.num_rows() == 0,
        }
    }

    /// Bytes of the row under the cursor, or `None` past the end.
    pub fn cursor_value(&self) -> Option<&'a [u8]> {
        if self.end_of_table {
            return None;
        }
        self.table.row_slot(self.row_num)
    }

    pub fn advance(&mut self) {
        self.row_num += 1;
        if self.row_num >= self.table.num_rows() {
            self.end_of_table = true;
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = Row::deserialize(self.cursor_value()?);
        self.advance();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.end_of_table {
            0
        } else {
            self.table.num_rows() - self.row_num
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_first_page() {
        assert_eq!(locate(0), (0, 0));
        assert_eq!(locate(1), (0, ROW_SIZE));
        assert_eq!(locate(13), (0, 13 * ROW_SIZE));
    }

    #[test]
    fn locate_crosses_page_boundary() {
        assert_eq!(locate(ROWS_PER_PAGE), (1, 0));
        assert_eq!(locate(ROWS_PER_PAGE + 2), (1, 2 * ROW_SIZE));
        assert_eq!(locate(crate::TABLE_MAX_ROWS - 1), (99, 13 * ROW_SIZE));
    }

    #[test]
    fn row_always_fits_in_its_page() {
        for row_num in 0..crate::TABLE_MAX_ROWS {
            let (_, offset) = locate(row_num);
            assert!(offset + ROW_SIZE <= crate::PAGE_SIZE);
        }
    }

    #[test]
    fn cursor_over_empty_table() {
        let table = Table::new();
        let cursor = Cursor::table_start(&table);
        assert!(cursor.cursor_value().is_none());
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn cursor_positions() {
        let mut table = Table::new();
        table.insert(&Row::new(1, "a", "a@x").unwrap()).unwrap();
        table.insert(&Row::new(2, "b", "b@x").unwrap()).unwrap();

        let mut cursor = Cursor::table_start(&table);
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.next().map(|r| r.id()), Some(1));
        assert_eq!(cursor.len(), 1);
        assert_eq!(cursor.next().map(|r| r.id()), Some(2));
        assert_eq!(cursor.len(), 0);
        assert!(cursor.cursor_value().is_none());
        assert!(cursor.next().is_none());
    }
}
