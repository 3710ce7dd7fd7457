use std::io::{BufRead, Write};

use tracing::debug;

use super::compiler::prepare_statement;
use super::error::{Error, Result};
use super::table::Table;
use super::vm::{constants, do_meta_command, execute_statement, ExecuteResult, MetaCommand};

const PROMPT: &str = "db > ";

/// Reads commands from `input` until `.exit`, writing results to `output`.
///
/// Table-full and input errors are reported and the loop goes on. An
/// allocation failure, an I/O error, or end of input before `.exit`
/// stops the loop with an error.
pub fn run<R: BufRead, W: Write>(mut table: Table, mut input: R, mut output: W) -> Result<()> {
    let mut buffer = Vec::new();
    loop {
        print_prompt(&mut output)?;
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Err(Error::InputClosed);
        }
        // Stray non-UTF-8 bytes become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buffer);
        let command = line.trim();
        debug!(command, "read command");

        if command.starts_with('.') {
            match do_meta_command(command) {
                Ok(MetaCommand::Exit) => {
                    table.close();
                    return Ok(());
                }
                Ok(MetaCommand::Constants) => {
                    for (name, value) in constants(&table) {
                        writeln!(output, "{name}: {value}")?;
                    }
                }
                Err(err) => writeln!(output, "{err}")?,
            }
            continue;
        }

        let stmt = match prepare_statement(command) {
            Ok(stmt) => stmt,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match execute_statement(stmt, &mut table) {
            Ok(ExecuteResult::Inserted) => writeln!(output, "Executed.")?,
            Ok(ExecuteResult::Rows(rows)) => {
                for row in rows {
                    writeln!(output, "{row}")?;
                }
                writeln!(output, "Executed.")?;
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

fn print_prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    Ok(())
}
