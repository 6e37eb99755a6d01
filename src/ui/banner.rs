use std::io::{self, IsTerminal, Write};

use crossterm::style::{Color, Stylize};

const BOX_RULE: &str = " ---------------------------------------------------------";
const BOX_EDGE: &str = "|                                                         |";
const BOX_WIDTH: usize = 57;
const TITLE: &str = "SITE WARM-UP";
const TITLE_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);

/// Prints the header box followed by the target domain and worker count.
///
/// # Errors
///
/// Returns an error when stdout cannot be written.
pub fn print_header(domain: &str, workers: usize, no_color: bool) -> io::Result<()> {
    let use_color = !no_color && io::stdout().is_terminal();
    let mut out = io::stdout().lock();
    write_header(&mut out, domain, workers, use_color)
}

pub(crate) fn write_header<W: Write>(
    out: &mut W,
    domain: &str,
    workers: usize,
    use_color: bool,
) -> io::Result<()> {
    let subtitle = format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    writeln!(out)?;
    writeln!(out, "{}", BOX_RULE)?;
    writeln!(out, "{}", BOX_EDGE)?;
    let title = centered(TITLE);
    if use_color {
        let (r, g, b) = TITLE_RGB;
        writeln!(out, "{}", title.with(Color::Rgb { r, g, b }))?;
    } else {
        writeln!(out, "{}", title)?;
    }
    writeln!(out, "{}", centered(&subtitle))?;
    writeln!(out, "{}", BOX_EDGE)?;
    writeln!(out, "{}", BOX_RULE)?;
    writeln!(out)?;
    writeln!(out, "Testing {} with {} workers.", domain, workers)?;
    writeln!(out)?;
    Ok(())
}

fn centered(text: &str) -> String {
    let len = text.chars().count().min(BOX_WIDTH);
    let left = BOX_WIDTH.saturating_sub(len) / 2;
    let right = BOX_WIDTH.saturating_sub(len).saturating_sub(left);
    format!("|{}{}{}|", " ".repeat(left), text, " ".repeat(right))
}
