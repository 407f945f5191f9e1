//! Terminal rendering of query results.

use crate::query::filter::{FileDetail, TokenMatch};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_stream(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print the match tree: each token followed by the files it occurs in
/// with per-file occurrence counts.
pub fn print_token_tree(matches: &[TokenMatch], color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(stdout, "{}", m.token)?;
        stdout.reset()?;

        for hit in &m.files {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            write!(stdout, "    {}", hit.path.display())?;
            stdout.reset()?;
            writeln!(stdout, " ({})", hit.count)?;
        }
    }

    Ok(())
}

/// Print the detail view for one token: per file, every occurrence line
/// number with the literal line text.
pub fn print_token_detail(token: &str, details: &[FileDetail], color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    if details.is_empty() {
        writeln!(stdout, "No visible occurrences of '{token}'")?;
        return Ok(());
    }

    let mut first = true;
    for detail in details {
        if !first {
            writeln!(stdout)?;
        }
        first = false;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", detail.path.display())?;
        stdout.reset()?;

        for (line_number, text) in &detail.lines {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(stdout, "  {line_number}")?;
            stdout.reset()?;
            writeln!(stdout, ": {text}")?;
        }
    }

    Ok(())
}
