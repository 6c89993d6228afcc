//! Display text cleanup.
//!
//! Open Trivia DB sends prompts and answers HTML-escaped (`&quot;`, `&#039;`,
//! `&eacute;`). Questions are stored as sent and decoded when drawn.

/// Replace HTML character references with the characters they stand for.
///
/// Covers the full HTML5 named set plus decimal and hex references. Unknown
/// references are left as written.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_entities("The &quot;Big Apple&quot; &amp; more"),
            "The \"Big Apple\" & more"
        );
        assert_eq!(decode_entities("Pok&eacute;mon"), "Pokémon");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("Don&#039;t"), "Don't");
        assert_eq!(decode_entities("&#x41;&#66;"), "AB");
    }

    #[test]
    fn test_entities_seen_in_trivia_text() {
        let cases = [
            ("S&atilde;o Paulo", "São Paulo"),
            ("Citro&euml;n", "Citroën"),
            ("&Aacute;lvaro", "Álvaro"),
            ("h&ocirc;tel", "hôtel"),
            ("Coca-Cola&reg;", "Coca-Cola®"),
            ("&alpha; particle", "α particle"),
            ("E = mc&sup2;", "E = mc²"),
        ];
        for (raw, expected) in cases {
            let decoded = decode_entities(raw);
            assert_eq!(decoded, expected);
            assert!(!decoded.contains('&'), "{:?} left {:?}", raw, decoded);
        }
    }

    #[test]
    fn test_bare_ampersands_pass_through() {
        assert_eq!(decode_entities("Fish & Chips"), "Fish & Chips");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_long_run_of_ampersands() {
        let text = "&".repeat(20_000);
        assert_eq!(decode_entities(&text), text);
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_entities("Which planet is largest?"), "Which planet is largest?");
    }
}
