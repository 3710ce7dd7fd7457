use super::error::PrepareError;
use super::row::Row;

#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

fn prepare_insert(args: &[&str]) -> Result<Statement, PrepareError> {
    use PrepareError::*;
    if args.len() != 4 {
        return Err(SyntaxError);
    }
    let id: i64 = args[1].parse().map_err(|_| SyntaxError)?;
    if id < 0 {
        return Err(NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| SyntaxError)?;
    let row_to_insert = Row::new(id, args[2], args[3])?;
    Ok(Statement::Insert(row_to_insert))
}

pub fn prepare_statement(command: &str) -> Result<Statement, PrepareError> {
    let args: Vec<_> = command.split_whitespace().collect();
    match args.first() {
        Some(&"insert") => prepare_insert(&args),
        Some(&"select") => Ok(Statement::Select),
        _ => Err(PrepareError::UnrecognizedStatement(command.to_owned())),
    }
}
