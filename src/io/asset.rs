//! Tab-separated palette text assets and the built-in default palette

use crate::io::error::{Result, fs_error};
use crate::palette::{Color, Palette};
use std::path::Path;

/// Parse palette text, one `Name<TAB>#RRGGBB` entry per line
///
/// Line order becomes palette order. Blank lines and lines that fail to
/// parse (missing tab, bad hex) are skipped; only whole-file problems are
/// worth surfacing, and those happen at the I/O layer.
pub fn parse_palette(text: &str) -> Palette {
    let mut palette = Palette::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, hex)) = line.split_once('\t') else {
            continue;
        };
        if let Ok(color) = Color::from_hex(hex.trim()) {
            palette.add(name.trim(), color);
        }
    }
    palette
}

/// Load a palette from a text file
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub fn load_palette_file(path: &Path) -> Result<Palette> {
    let text =
        std::fs::read_to_string(path).map_err(|e| fs_error(path, "read palette file", e))?;
    Ok(parse_palette(&text))
}

/// Write a palette as tab-separated text, one entry per line
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_palette_file(path: &Path, palette: &Palette) -> Result<()> {
    let mut text = String::new();
    for (name, color) in palette.iter() {
        text.push_str(name);
        text.push('\t');
        text.push_str(&color.to_hex());
        text.push('\n');
    }
    std::fs::write(path, text).map_err(|e| fs_error(path, "write palette file", e))
}

/// The built-in 16-color default palette used when no palette file is given
pub fn default_palette() -> Palette {
    let colors = [
        Color::opaque(0xFF, 0xFF, 0xFF), // white
        Color::opaque(0x00, 0x00, 0x00), // black
        Color::opaque(0xFF, 0x00, 0x00), // red
        Color::opaque(0x00, 0xFF, 0x00), // green
        Color::opaque(0x00, 0x00, 0xFF), // blue
        Color::opaque(0xFF, 0xFF, 0x00), // yellow
        Color::opaque(0xFF, 0x00, 0xFF), // magenta
        Color::opaque(0x00, 0xFF, 0xFF), // cyan
        Color::opaque(0xFF, 0xA5, 0x00), // orange
        Color::opaque(0x80, 0x00, 0x80), // purple
        Color::opaque(0x80, 0x80, 0x80), // gray
        Color::opaque(0xA5, 0x2A, 0x2A), // brown
        Color::opaque(0xFF, 0xC0, 0xCB), // pink
        Color::opaque(0x87, 0xCE, 0xEB), // sky blue
        Color::opaque(0x98, 0xFB, 0x98), // pale green
        Color::opaque(0xFF, 0xD7, 0x00), // gold
    ];

    let mut palette = Palette::new();
    for (index, color) in colors.into_iter().enumerate() {
        palette.add(&format!("Color{index}"), color);
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::{default_palette, parse_palette};
    use crate::palette::Color;

    #[test]
    fn test_parse_preserves_line_order_and_skips_malformed_lines() {
        let text = "First\t#FF0000\n\nnot a palette line\nSecond\t#00ff00\nBad\t#XYZXYZ\n";
        let palette = parse_palette(text);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.name_at(0), Some("First"));
        assert_eq!(palette.name_at(1), Some("Second"));
        assert_eq!(palette.get("Second"), Some(Color::opaque(0, 255, 0)));
    }

    #[test]
    fn test_default_palette_has_sixteen_ordered_entries() {
        let palette = default_palette();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.name_at(0), Some("Color0"));
        assert_eq!(palette.get("Color15"), Some(Color::opaque(0xFF, 0xD7, 0x00)));
    }
}
