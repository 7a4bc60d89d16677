//! Built-in 5×7 bitmap font for axis labels, legend entries and the title.
//!
//! Each glyph is seven five-character rows where `#` marks a lit pixel.
//! Text is upper-cased before lookup.
//! Characters without a glyph advance like a space.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins at scale 1.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&[
            "  #  ", " # # ", "#   #", "#####", "#   #", "#   #", "#   #",
        ]),
        'B' => Some(&[
            "#### ", "#   #", "#   #", "#### ", "#   #", "#   #", "#### ",
        ]),
        'C' => Some(&[
            " ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### ",
        ]),
        'D' => Some(&[
            "#### ", "#   #", "#   #", "#   #", "#   #", "#   #", "#### ",
        ]),
        'E' => Some(&[
            "#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####",
        ]),
        'F' => Some(&[
            "#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#    ",
        ]),
        'G' => Some(&[
            " ### ", "#   #", "#    ", "# ###", "#   #", "#   #", " ### ",
        ]),
        'H' => Some(&[
            "#   #", "#   #", "#   #", "#####", "#   #", "#   #", "#   #",
        ]),
        'I' => Some(&[
            " ### ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### ",
        ]),
        'J' => Some(&[
            "  ###", "   # ", "   # ", "   # ", "#  # ", "#  # ", " ##  ",
        ]),
        'K' => Some(&[
            "#   #", "#  # ", "# #  ", "##   ", "# #  ", "#  # ", "#   #",
        ]),
        'L' => Some(&[
            "#    ", "#    ", "#    ", "#    ", "#    ", "#    ", "#####",
        ]),
        'M' => Some(&[
            "#   #", "## ##", "# # #", "# # #", "#   #", "#   #", "#   #",
        ]),
        'N' => Some(&[
            "#   #", "##  #", "# # #", "#  ##", "#   #", "#   #", "#   #",
        ]),
        'O' => Some(&[
            " ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### ",
        ]),
        'P' => Some(&[
            "#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    ",
        ]),
        'Q' => Some(&[
            " ### ", "#   #", "#   #", "#   #", "# # #", "#  # ", " ## #",
        ]),
        'R' => Some(&[
            "#### ", "#   #", "#   #", "#### ", "# #  ", "#  # ", "#   #",
        ]),
        'S' => Some(&[
            " ####", "#    ", "#    ", " ### ", "    #", "    #", "#### ",
        ]),
        'T' => Some(&[
            "#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ",
        ]),
        'U' => Some(&[
            "#   #", "#   #", "#   #", "#   #", "#   #", "#   #", " ### ",
        ]),
        'V' => Some(&[
            "#   #", "#   #", "#   #", "#   #", " # # ", " # # ", "  #  ",
        ]),
        'W' => Some(&[
            "#   #", "#   #", "#   #", "# # #", "# # #", "## ##", "#   #",
        ]),
        'X' => Some(&[
            "#   #", "#   #", " # # ", "  #  ", " # # ", "#   #", "#   #",
        ]),
        'Y' => Some(&[
            "#   #", "#   #", " # # ", "  #  ", "  #  ", "  #  ", "  #  ",
        ]),
        'Z' => Some(&[
            "#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#####",
        ]),
        '0' => Some(&[
            " ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### ",
        ]),
        '1' => Some(&[
            "  #  ", " ##  ", "# #  ", "  #  ", "  #  ", "  #  ", "#####",
        ]),
        '2' => Some(&[
            " ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####",
        ]),
        '3' => Some(&[
            " ### ", "#   #", "    #", " ### ", "    #", "#   #", " ### ",
        ]),
        '4' => Some(&[
            "   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # ",
        ]),
        '5' => Some(&[
            "#####", "#    ", "#    ", "#### ", "    #", "#   #", " ### ",
        ]),
        '6' => Some(&[
            " ### ", "#   #", "#    ", "#### ", "#   #", "#   #", " ### ",
        ]),
        '7' => Some(&[
            "#####", "    #", "   # ", "  #  ", "  #  ", "  #  ", "  #  ",
        ]),
        '8' => Some(&[
            " ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### ",
        ]),
        '9' => Some(&[
            " ### ", "#   #", "#   #", " ####", "    #", "#   #", " ### ",
        ]),
        '-' => Some(&[
            "     ", "     ", "     ", " ### ", "     ", "     ", "     ",
        ]),
        '+' => Some(&[
            "     ", "  #  ", "  #  ", "#####", "  #  ", "  #  ", "     ",
        ]),
        '=' => Some(&[
            "     ", "     ", "#####", "     ", "#####", "     ", "     ",
        ]),
        '.' => Some(&[
            "     ", "     ", "     ", "     ", "     ", " ##  ", " ##  ",
        ]),
        ',' => Some(&[
            "     ", "     ", "     ", "     ", " ##  ", "  #  ", " #   ",
        ]),
        ':' => Some(&[
            "     ", " ##  ", " ##  ", "     ", " ##  ", " ##  ", "     ",
        ]),
        '/' => Some(&[
            "    #", "   # ", "   # ", "  #  ", " #   ", "#    ", "#    ",
        ]),
        '_' => Some(&[
            "     ", "     ", "     ", "     ", "     ", "     ", "#####",
        ]),
        '(' => Some(&[
            "   # ", "  #  ", " #   ", " #   ", " #   ", "  #  ", "   # ",
        ]),
        ')' => Some(&[
            " #   ", "  #  ", "   # ", "   # ", "   # ", "  #  ", " #   ",
        ]),
        '[' => Some(&[
            " ### ", " #   ", " #   ", " #   ", " #   ", " #   ", " ### ",
        ]),
        ']' => Some(&[
            " ### ", "   # ", "   # ", "   # ", "   # ", "   # ", " ### ",
        ]),
        '<' => Some(&[
            "   # ", "  #  ", " #   ", "#    ", " #   ", "  #  ", "   # ",
        ]),
        '>' => Some(&[
            " #   ", "  #  ", "   # ", "    #", "   # ", "  #  ", " #   ",
        ]),
        '%' => Some(&[
            "##   ", "##  #", "   # ", "  #  ", " #   ", "#  ##", "   ##",
        ]),
        '#' => Some(&[
            " # # ", " # # ", "#####", " # # ", "#####", " # # ", " # # ",
        ]),
        '*' => Some(&[
            "     ", "  #  ", "# # #", " ### ", "# # #", "  #  ", "     ",
        ]),
        '!' => Some(&[
            "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "     ", "  #  ",
        ]),
        '?' => Some(&[
            " ### ", "#   #", "    #", "   # ", "  #  ", "     ", "  #  ",
        ]),
        '\'' => Some(&[
            "  #  ", "  #  ", " #   ", "     ", "     ", "     ", "     ",
        ]),
        _ => None,
    }
}

/// Lit cells of a glyph as `(column, row)` pairs.
pub fn lit_cells(glyph: &Glyph) -> impl Iterator<Item = (u32, u32)> + '_ {
    glyph.iter().enumerate().flat_map(|(row, pattern)| {
        pattern
            .chars()
            .enumerate()
            .filter(|(_, pixel)| *pixel != ' ')
            .map(move |(col, _)| (col as u32, row as u32))
    })
}

/// Rendered width of `text` in pixels, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> f64 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0.0;
    }
    f64::from((count * ADVANCE - 1) * scale)
}

pub fn text_height(scale: u32) -> f64 {
    f64::from(GLYPH_HEIGHT * scale)
}
