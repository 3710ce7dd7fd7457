use super::compiler::Statement;
use super::cursor::Cursor;
use super::error::{ExecuteError, MetaCommandError};
use super::row::Row;
use super::table::Table;
use super::{PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE};

#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Constants,
}

pub fn do_meta_command(command: &str) -> Result<MetaCommand, MetaCommandError> {
    match command {
        ".exit" => Ok(MetaCommand::Exit),
        ".constants" => Ok(MetaCommand::Constants),
        _ => Err(MetaCommandError::Unrecognized(command.to_owned())),
    }
}

/// Layout constants reported by `.constants`. The limits are the table's own,
/// which differ from the defaults when the page ceiling is configured.
pub fn constants(table: &Table) -> [(&'static str, usize); 5] {
    [
        ("ROW_SIZE", ROW_SIZE),
        ("PAGE_SIZE", PAGE_SIZE),
        ("ROWS_PER_PAGE", ROWS_PER_PAGE),
        ("TABLE_MAX_PAGES", table.max_pages()),
        ("TABLE_MAX_ROWS", table.max_rows()),
    ]
}

pub enum ExecuteResult<'a> {
    Inserted,
    Rows(Cursor<'a>),
}

pub fn execute_statement(
    stmt: Statement,
    table: &mut Table,
) -> Result<ExecuteResult<'_>, ExecuteError> {
    match stmt {
        Statement::Insert(row) => execute_insert(&row, table),
        Statement::Select => Ok(execute_select(table)),
    }
}

fn execute_insert<'a>(
    row: &Row,
    table: &'a mut Table,
) -> Result<ExecuteResult<'a>, ExecuteError> {
    table.insert(row)?;
    Ok(ExecuteResult::Inserted)
}

fn execute_select(table: &Table) -> ExecuteResult<'_> {
    ExecuteResult::Rows(table.scan())
}
