//! Usage: `cargo run --example strips -- [BASE_COLOR] [STOPS] [STRIP_WIDTH]`
//!
//! Writes `strips.html` (the palettes for every stop count) and the
//! JPEG export of the chosen palette in the current directory.

use std::{env,
          io::{BufWriter, Write},
          fs::{self, File},
          error::Error,
          time::Instant};
use color_strips::{Palette, config::{self, Settings},
                   session::{Session, Swatch}};

type Err = Box<dyn Error>;

fn table_of_swatches(fh: &mut impl Write, swatches: &[Swatch],
                     width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for s in swatches {
        writeln!(fh, "  <td title=\"{}\" style=\"width: {width}px; height: 48px; \
                      background-color: {}\"></td>",
                 s.label, s.hex)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr><tr>")?;
    for s in swatches {
        writeln!(fh, "  <td style=\"font: 10px monospace\">{}</td>", s.hex)?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut args = env::args().skip(1);
    let mut session = Session::new(Settings::default());
    if let Some(base) = args.next() {
        session.set_base_color(&base);
    }
    if let Some(n) = args.next() {
        session.set_stop_count(n.parse()?);
    }
    if let Some(w) = args.next() {
        session.set_strip_width(&w);
    }
    if session.palette().is_empty() {
        return Err(format!("not a color: {}", session.base_color()).into());
    }

    let mut fh = BufWriter::new(File::create("strips.html")?);
    let base = session.base_color().to_string();
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>color-strips: {base}</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Preview (darkest first)</h3>")?;
    table_of_swatches(&mut fh, &session.preview(), 60, "")?;

    // A copy is acknowledged right away and forgotten later.
    let mut clipboard = String::new();
    let now = Instant::now();
    if let Some(s) = session.preview().first() {
        session.copy(&s.hex, &mut clipboard, now);
    }
    writeln!(fh, "<p>Copied: {}</p>", session.copied(now).unwrap_or("-"))?;

    writeln!(fh, "<h3>All stop counts</h3>")?;
    for n in config::STOP_COUNT {
        let p = Palette::monochrome(&base, n)?;
        let swatches: Vec<_> = p.iter().zip(p.to_hex())
            .map(|(&color, hex)| Swatch { label: hex.clone(), hex, color })
            .collect();
        table_of_swatches(&mut fh, &swatches, 30, &format!("{n} stops"))?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;

    if let Some(export) = session.export()? {
        fs::write(&export.file_name, &export.bytes)?;
        println!("{} ({} bytes)", export.file_name, export.bytes.len());
    }
    Ok(())
}
