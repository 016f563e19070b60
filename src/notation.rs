/// Number of rows or columns that get a distinct single-character label.
pub const MAX_LABELED: u16 = 62;

/// Label for a row or column index: digits `0-9`, then `A-Z`, then `a-z`,
/// then `?` for anything past index 61.
pub fn index_label(index: u16) -> char {
    match index {
        0..=9 => (b'0' + index as u8) as char,
        10..=35 => (b'A' + (index - 10) as u8) as char,
        36..=61 => (b'a' + (index - 36) as u8) as char,
        _ => '?',
    }
}

/// Inverse of [`index_label`] for the 62 labeled indices.
pub fn label_index(label: char) -> Option<u16> {
    match label {
        '0'..='9' => Some(label as u16 - '0' as u16),
        'A'..='Z' => Some(10 + label as u16 - 'A' as u16),
        'a'..='z' => Some(36 + label as u16 - 'a' as u16),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ranges() {
        assert_eq!(index_label(0), '0');
        assert_eq!(index_label(9), '9');
        assert_eq!(index_label(10), 'A');
        assert_eq!(index_label(35), 'Z');
        assert_eq!(index_label(36), 'a');
        assert_eq!(index_label(61), 'z');
        assert_eq!(index_label(62), '?');
        assert_eq!(index_label(100), '?');
    }

    #[test]
    fn test_round_trip() {
        for index in 0..MAX_LABELED {
            assert_eq!(label_index(index_label(index)), Some(index));
        }
    }

    #[test]
    fn test_unlabeled() {
        assert_eq!(label_index('?'), None);
        assert_eq!(label_index('!'), None);
        assert_eq!(label_index('^'), None);
    }
}
