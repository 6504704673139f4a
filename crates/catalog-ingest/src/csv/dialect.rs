//! Encoding and separator detection for supplier CSV exports.
//!
//! Suppliers send either UTF-8 files separated by `;` (Excel in a Brazilian
//! locale) or Latin-1 files separated by `,` (older ERP exports). The
//! encoding decides the default separator; the header line can override it.

use encoding_rs::WINDOWS_1252;

/// Detected CSV conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDialect {
    /// Name of the encoding used to decode the bytes.
    pub encoding: &'static str,
    /// Field separator.
    pub separator: u8,
}

impl CsvDialect {
    pub const UTF8_SEMICOLON: CsvDialect = CsvDialect {
        encoding: "UTF-8",
        separator: b';',
    };

    pub const LATIN1_COMMA: CsvDialect = CsvDialect {
        encoding: "windows-1252",
        separator: b',',
    };
}

/// Decodes raw bytes and picks the separator.
///
/// Returns UTF-8 text with any byte-order mark removed.
pub(crate) fn decode(bytes: &[u8]) -> (String, CsvDialect) {
    let (text, mut dialect) = match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), CsvDialect::UTF8_SEMICOLON),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text.into_owned(), CsvDialect::LATIN1_COMMA)
        }
    };
    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    let header = text.lines().next().unwrap_or_default();
    let (default, other) = match dialect.separator {
        b';' => (';', ','),
        _ => (',', ';'),
    };
    if !header.contains(default) && header.contains(other) {
        dialect.separator = other as u8;
    }

    (text, dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_defaults_to_semicolon() {
        let (text, dialect) = decode("SKU;Descrição\nA1;Café\n".as_bytes());
        assert_eq!(dialect, CsvDialect::UTF8_SEMICOLON);
        assert!(text.contains("Café"));
    }

    #[test]
    fn latin1_defaults_to_comma() {
        // "Descrição" in Latin-1
        let bytes = b"SKU,Descri\xe7\xe3o\nA1,Caf\xe9\n";
        let (text, dialect) = decode(bytes);
        assert_eq!(dialect.encoding, "windows-1252");
        assert_eq!(dialect.separator, b',');
        assert!(text.starts_with("SKU,Descrição"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn header_overrides_default_separator() {
        let (_, dialect) = decode(b"SKU,Descricao\nA1,Cafe\n");
        assert_eq!(dialect.encoding, "UTF-8");
        assert_eq!(dialect.separator, b',');
    }

    #[test]
    fn bom_is_stripped() {
        let (text, _) = decode("\u{feff}SKU;NCM\n".as_bytes());
        assert!(text.starts_with("SKU"));
    }
}
