//! A1-style address helpers

/// Bijective base-26 column name for a zero-based index (`0` → `A`, `26` → `AA`)
pub fn column_letter(index: u16) -> String {
    let mut letters = Vec::with_capacity(3);
    let mut n = u32::from(index) + 1;

    while n > 0 {
        let digit = ((n - 1) % 26) as u8;
        letters.push(char::from(b'A' + digit));
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Zero-based (row, col) → "A1" notation
pub fn cell_name(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row + 1)
}
