use std::env;
use tile_core::digits;

// Print the glyphs for a run of digits side by side, e.g. `glyph_strip 2024`.
fn main() {
    let args: Vec<String> = env::args().collect();
    let text = args.get(1).map(|s| s.as_str()).unwrap_or("0123456789");

    let sheet = digits::sheet();
    let mut frames = Vec::new();
    for c in text.chars() {
        match digits::frame_for_char(c) {
            Ok(index) => frames.push(index),
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        }
    }

    for y in 0..sheet.height() {
        let mut line = String::new();
        for &index in &frames {
            for x in 0..sheet.width() {
                let lit = sheet.pixel(index, x, y).unwrap_or(false);
                line.push(if lit { '#' } else { ' ' });
            }
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
