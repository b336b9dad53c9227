//! Hex/ASCII dump of a byte buffer.
//!
//! The layout is a compatibility contract and fixed bit-for-bit: per
//! 16-byte row a bracketed four-digit offset, the bytes as uppercase hex
//! in a 50-column field with a double space after byte 8, then the bytes
//! as characters with a single space after the 8th. Non-alphanumeric
//! bytes render as `.`.
//!
//! ```text
//! [0000]   75 6E 6B 6E 6F 77 6E 20   30 FF 00 00 00 00 39 00   unknown. 0.....9.
//! ```

/// Render `data` as a dump table, one row per 16 bytes.
///
/// Pure function of its input; an empty buffer renders as the empty
/// string.
pub fn render(data: &[u8]) -> String {
    let mut out = String::new();
    for (row, bytes) in data.chunks(16).enumerate() {
        let offset = row * 16;
        let mut hex = String::with_capacity(50);
        let mut chars = String::with_capacity(17);
        for (i, &b) in bytes.iter().enumerate() {
            hex.push_str(&format!("{b:02X} "));
            chars.push(if b.is_ascii_alphanumeric() {
                b as char
            } else {
                '.'
            });
            if i == 7 {
                // half-row gap, also present when the row ends here
                hex.push_str("  ");
                chars.push(' ');
            }
        }
        // offsets wider than four digits keep their leading four
        let addr = format!("{offset:04x}");
        out.push_str(&format!("[{}]   {hex:<50}  {chars}\n", &addr[..4]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_bytes_make_two_rows_second_row_four_bytes() {
        let data: Vec<u8> = (0x00..=0x13).collect();
        let dump = render(&data);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "[0000]   00 01 02 03 04 05 06 07   08 09 0A 0B 0C 0D 0E 0F   ........ ........"
        );
        assert_eq!(lines[1], format!("[0010]   {:<50}  {}", "10 11 12 13 ", "...."));
    }

    #[test]
    fn full_text_row() {
        let dump = render(b"Hello, World!123");
        assert_eq!(
            dump,
            "[0000]   48 65 6C 6C 6F 2C 20 57   6F 72 6C 64 21 31 32 33   Hello..W orld.123\n"
        );
    }

    #[test]
    fn exactly_eight_bytes_keep_the_half_row_gap() {
        let dump = render(&[0x41; 8]);
        let hex_col = "41 ".repeat(8) + "  ";
        assert_eq!(dump, format!("[0000]   {hex_col:<50}  AAAAAAAA \n"));
    }

    #[test]
    fn row_count_is_len_divided_by_16_rounded_up() {
        for len in 1..=48 {
            let data = vec![0xAAu8; len];
            assert_eq!(render(&data).lines().count(), len.div_ceil(16), "len {len}");
        }
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn row_offsets_count_in_sixteens() {
        let data = vec![0u8; 64];
        let dump = render(&data);
        let offsets: Vec<&str> = dump.lines().map(|l| &l[1..5]).collect();
        assert_eq!(offsets, vec!["0000", "0010", "0020", "0030"]);
    }

    #[test]
    fn wide_offsets_keep_their_leading_digits() {
        let data = vec![0u8; 0x10010];
        let dump = render(&data);
        let last = dump.lines().last().unwrap();
        assert!(last.starts_with("[1000]   "), "got: {last}");
    }

    #[test]
    fn rendering_is_pure() {
        let data: Vec<u8> = (0u8..=255).collect();
        assert_eq!(render(&data), render(&data));
    }
}
