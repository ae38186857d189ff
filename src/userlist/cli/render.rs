use colored::Colorize;
use std::io::{self, Write};
use userlist::api::{CmdMessage, CmdResult, MessageLevel};

/// Write a result to the output sink: raw output bytes first, verbatim, then
/// one line per message.
pub fn write_result<W: Write>(sink: &mut W, result: &CmdResult) -> io::Result<()> {
    sink.write_all(&result.output)?;
    write_messages(sink, &result.messages)?;
    sink.flush()
}

fn write_messages<W: Write>(sink: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(sink, "{}", message.content.dimmed())?,
            MessageLevel::Warning => writeln!(sink, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}
