//! On-disk layout of an encoded record.
//!
//! ```text
//! offset  width  field
//! 0       8      format_version  (u64, big-endian)
//! 8       4      int_value       (i32, big-endian)
//! 12      4      text_length     (u32, big-endian, UTF-8 byte count)
//! 16      n      text bytes
//! ```

use binary_layout::define_layout;

pub const FORMAT_VERSION: u64 = 1;

pub const HEADER_SIZE: usize = 16;

// Checked before the rest of the header.
pub const VERSION_SIZE: usize = 8;

define_layout!(header, BigEndian, {
    format_version: u64,
    int_value: i32,
    text_length: u32,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_size_matches_layout() {
        assert_eq!(header::SIZE, Some(HEADER_SIZE));
    }

    #[test]
    fn header_fields_are_big_endian() {
        let mut view = header::View::new(vec![0u8; HEADER_SIZE]);
        view.format_version_mut().write(FORMAT_VERSION);
        view.int_value_mut().write(-2);
        view.text_length_mut().write(0x0102_0304);
        assert_eq!(
            view.into_storage(),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 0xff, 0xff, 0xff, 0xfe, 1, 2, 3, 4]
        );
    }
}
