//! FILENAME: grid/src/coord.rs
//! PURPOSE: Conversion between A1-style references and 0-based (row, col)
//! indices, plus parsing of the `Sheet!$A$1:$D$5` references that
//! workbook defined names resolve to.
//! Column "A" = 0, "B" = 1, ..., "Z" = 25, "AA" = 26, etc.

/// A cell coordinate as (row, col) with 0-based indices.
pub type CellCoord = (u32, u32);

/// Converts a column string to a 0-based column index.
/// "A" -> 0, "Z" -> 25, "AA" -> 26.
pub fn col_to_index(col_str: &str) -> Option<u32> {
    if col_str.is_empty() {
        return None;
    }
    let mut result: u32 = 0;
    for c in col_str.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        result = result * 26 + digit;
    }
    Some(result - 1)
}

/// Converts a 0-based column index to a column string.
/// 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn index_to_col(mut col_index: u32) -> String {
    let mut result = String::new();
    loop {
        let remainder = col_index % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if col_index < 26 {
            break;
        }
        col_index = col_index / 26 - 1;
    }
    result
}

/// Converts a pre-split A1 reference to a 0-based (row, col) coordinate.
/// ("A", 1) -> (0, 0), ("AA", 100) -> (99, 26).
pub fn a1_to_coord(col_str: &str, row_num: u32) -> Option<CellCoord> {
    if row_num == 0 {
        return None;
    }
    Some((row_num - 1, col_to_index(col_str)?))
}

/// Converts a 0-based (row, col) coordinate to an A1 reference string.
pub fn coord_to_a1(coord: CellCoord) -> String {
    let (row, col) = coord;
    format!("{}{}", index_to_col(col), row + 1)
}

/// Parses a single absolute or relative A1 reference such as "$B$10"
/// or "B10" into a 0-based coordinate.
pub fn parse_a1(reference: &str) -> Option<CellCoord> {
    let cleaned: String = reference.chars().filter(|c| *c != '$').collect();
    let split = cleaned.find(|c: char| c.is_ascii_digit())?;
    let (col_str, row_str) = cleaned.split_at(split);
    let row_num: u32 = row_str.parse().ok()?;
    a1_to_coord(col_str, row_num)
}

/// Parses a defined-name destination like "ABCP!$B$10:$F$13" or
/// "'Mix Tables'!$A$1" into (sheet, top-left, bottom-right). A single
/// cell yields identical corners. The sheet part is optional.
pub fn parse_range(reference: &str) -> Option<(Option<String>, CellCoord, CellCoord)> {
    let (sheet, cells) = match reference.rsplit_once('!') {
        Some((sheet, cells)) => {
            let name = sheet.trim_matches('\'').to_string();
            (Some(name), cells)
        }
        None => (None, reference),
    };

    match cells.split_once(':') {
        Some((a, b)) => {
            let start = parse_a1(a)?;
            let end = parse_a1(b)?;
            // Normalize so start is the top-left corner.
            let top_left = (start.0.min(end.0), start.1.min(end.1));
            let bottom_right = (start.0.max(end.0), start.1.max(end.1));
            Some((sheet, top_left, bottom_right))
        }
        None => {
            let coord = parse_a1(cells)?;
            Some((sheet, coord, coord))
        }
    }
}
