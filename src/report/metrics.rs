//! Glyph advance widths for the two base-14 fonts the report uses, taken
//! from the Adobe AFM metrics (thousandths of an em, ASCII 32..=126).
//! Needed for right-aligned amount columns and the centered title.

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, //  ' ' .. ')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, //  '*' .. '3'
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, //  '4' .. '='
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // '>' .. 'G'
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 'H' .. 'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 'R' .. '['
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // '\' .. 'e'
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 'f' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 'p' .. 'y'
    500, 334, 260, 334, 584, //                          'z' .. '~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, //  ' ' .. ')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, //  '*' .. '3'
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, //  '4' .. '='
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // '>' .. 'G'
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // 'H' .. 'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // 'R' .. '['
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // '\' .. 'e'
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 'f' .. 'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // 'p' .. 'y'
    500, 389, 280, 389, 584, //                          'z' .. '~'
];

fn glyph_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let code = c as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        // Accented Latin glyphs are close enough to a lowercase letter.
        556
    }
}

/// Advance width of `text` at the given point size.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, bold) as u32).sum();
    units as f32 * size / 1000.0
}

/// Lossy mapping to WinAnsi (Latin-1 superset) bytes for the base fonts;
/// characters outside the code page become '?'.
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match code {
                0x20..=0x7e | 0xa0..=0xff => code as u8,
                0x20ac => 0x80, // euro sign
                _ => b'?',
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_share_a_width() {
        let narrow = text_width("1111", 10.0, false);
        let wide = text_width("8888", 10.0, false);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_bold_is_at_least_as_wide() {
        let regular = text_width("Subtotal", 10.0, false);
        let bold = text_width("Subtotal", 10.0, true);
        assert!(bold >= regular);
    }

    #[test]
    fn test_winansi_replaces_unmappable_chars() {
        assert_eq!(to_winansi("Ab"), vec![b'A', b'b']);
        assert_eq!(to_winansi("\u{20ac}"), vec![0x80]);
        assert_eq!(to_winansi("\u{4e2d}"), vec![b'?']);
    }
}
