//! Console summary printed after reports are written

use std::io::{self, Write};
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// What a run produced, for the console.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
    pub files: usize,
    pub directories: usize,
}

/// Write the summary to any color-capable writer.
pub fn write_summary<W: WriteColor>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut green = ColorSpec::new();
    green.set_fg(Some(Color::Green));

    out.set_color(&bold)?;
    write!(out, "Analyzed:")?;
    out.reset()?;
    writeln!(out, " {}", summary.root.display())?;

    for path in &summary.written {
        out.set_color(&green)?;
        write!(out, "Written:")?;
        out.reset()?;
        writeln!(out, "  {}", path.display())?;
    }

    writeln!(
        out,
        "Statistics: {} files, {} directories",
        summary.files, summary.directories
    )?;
    Ok(())
}

/// Print the summary to stdout.
pub fn print_summary(summary: &RunSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_summary(&mut stdout, summary)
}
