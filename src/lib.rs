pub mod compiler;
pub mod cursor;
pub mod error;
pub mod pager;
pub mod repl;
pub mod row;
pub mod table;
pub mod vm;

pub use pager::{PAGE_SIZE, TABLE_MAX_PAGES};
pub use row::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};

pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants() {
        assert_eq!(ROW_SIZE, 291);
        assert_eq!(ROWS_PER_PAGE, 14);
        assert_eq!(TABLE_MAX_ROWS, 1400);
    }
}
