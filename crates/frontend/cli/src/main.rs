use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tile_core::digits;
use tile_core::TileSheet;

#[derive(Parser)]
#[command(name = "tiles", about = "Inspect the built-in digit tile sheet")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print tile width, height and frame count
    Info,

    /// Print the raw tile image
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Hex)]
        format: DumpFormat,
    },

    /// Print one glyph as text rows
    Show {
        /// Digit to show (0-9)
        digit: char,

        /// Character for lit pixels
        #[arg(long, default_value_t = '#')]
        on: char,

        /// Character for unlit pixels
        #[arg(long, default_value_t = '.')]
        off: char,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Hex,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sheet = digits::sheet();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Info => write_info(&mut out, &sheet)?,
        Command::Dump { format } => match format {
            DumpFormat::Hex => write_hex(&mut out, &sheet)?,
            DumpFormat::Json => {
                let info = sheet.to_info();
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            }
        },
        Command::Show { digit, on, off } => {
            let index = digits::frame_for_char(digit)?;
            log::debug!("showing frame {} for '{}'", index, digit);
            write_glyph(&mut out, &sheet, index, on, off)?;
        }
    }

    Ok(())
}

fn write_info(out: &mut impl Write, sheet: &TileSheet<'_>) -> Result<()> {
    writeln!(out, "width:  {}", sheet.width())?;
    writeln!(out, "height: {}", sheet.height())?;
    writeln!(out, "frames: {}", sheet.frame_count())?;
    writeln!(out, "bytes:  {}", sheet.as_bytes().len())?;
    Ok(())
}

/// Header on its own line, then one frame per line.
fn write_hex(out: &mut impl Write, sheet: &TileSheet<'_>) -> Result<()> {
    writeln!(out, "{:02X} {:02X}", sheet.width(), sheet.height())?;
    for (i, rows) in sheet.frames().enumerate() {
        let line: Vec<String> = rows.iter().map(|b| format!("{:02X}", b)).collect();
        writeln!(out, "{}  ; frame {}", line.join(" "), i)?;
    }
    Ok(())
}

fn write_glyph(
    out: &mut impl Write,
    sheet: &TileSheet<'_>,
    index: usize,
    on: char,
    off: char,
) -> Result<()> {
    for y in 0..sheet.height() {
        let mut line = String::with_capacity(sheet.width() as usize);
        for x in 0..sheet.width() {
            let lit = sheet
                .pixel(index, x, y)
                .with_context(|| format!("frame {} pixel ({}, {})", index, x, y))?;
            line.push(if lit { on } else { off });
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
