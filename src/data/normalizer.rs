// ============================================================
// Layer 4 - Text Normaliser
// ============================================================
// Rewrites raw novel text into a form the segmenter can split
// cleanly. The rules run in a fixed order:
//
//   1. `,` `:` `;` (and full-width forms) → " xxpause "
//   2. `.` `?` `!` followed by a newline   → ". "
//   3. Quote characters                    → removed
//   4. Digits (any script) and hyphens     → removed
//   5. Roman-numeral words (IV, XII, ...)  → removed
//   6. Whitespace runs                     → one space, then trim
//
// The function is pure: the same input always gives the same
// output, and a second pass over normalised text is a no-op.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use regex::Regex;

/// Stands in for clause punctuation so the pause survives as a token
pub const SPACER_TOKEN: &str = "xxpause";

pub struct Normalizer {
    clause_punct:  Regex,
    line_terminal: Regex,
    quotes:        Regex,
    digits_hyphen: Regex,
    roman:         Regex,
    whitespace:    Regex,
}

impl Normalizer {
    /// Compile the rewrite rules.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            clause_punct:  Regex::new(r"[,:;\u{FF0C}\u{FF1A}\u{FF1B}]")?,
            line_terminal: Regex::new(r"[.?!]+[ \t]*\r?\n")?,
            quotes:        Regex::new(r#"["'`\u{2018}\u{2019}\u{201C}\u{201D}]"#)?,
            digits_hyphen: Regex::new(r"[\d\-\u{2010}\u{2011}]")?,
            roman:         Regex::new(r"\b[IVXLCDM]+\b")?,
            whitespace:    Regex::new(r"\s+")?,
        })
    }

    /// Normalise a raw text string. Empty input gives empty output.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.trim_start_matches('\u{FEFF}');

        let spacer = format!(" {SPACER_TOKEN} ");
        let step1  = self.clause_punct.replace_all(text, spacer.as_str());
        let step2  = self.line_terminal.replace_all(&step1, ". ");
        let step3  = self.quotes.replace_all(&step2, "");
        let step4  = self.digits_hyphen.replace_all(&step3, "");
        let step5  = self.roman.replace_all(&step4, "");
        let step6  = self.whitespace.replace_all(&step5, " ");

        step6.trim().to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalizer().normalize(""), "");
    }

    #[test]
    fn test_clause_punctuation_becomes_spacer() {
        let out = normalizer().normalize("அவன்,வந்தான்; போனான்");
        assert_eq!(out, "அவன் xxpause வந்தான் xxpause போனான்");
    }

    #[test]
    fn test_terminal_punctuation_before_newline() {
        let out = normalizer().normalize("அவன் வந்தான்!\nஅவள் போனாள்?  \r\nசரி");
        assert_eq!(out, "அவன் வந்தான். அவள் போனாள். சரி");
    }

    #[test]
    fn test_removes_quotes_digits_and_hyphens() {
        let out = normalizer().normalize("\u{201C}வா\u{201D} என்றான் 12-ம் நாள் ௧௨");
        assert_eq!(out, "வா என்றான் ம் நாள்");
    }

    #[test]
    fn test_removes_roman_numerals() {
        let out = normalizer().normalize("அத்தியாயம் IV\nXII. முடிவு");
        assert_eq!(out, "அத்தியாயம் . முடிவு");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        let out = normalizer().normalize("\u{FEFF}  அவன்\t\t வந்தான்\u{00A0}\n\n ");
        assert_eq!(out, "அவன் வந்தான்");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let samples = [
            "அவன், \"வா\" என்றான்.\nIV அத்தியாயம் 12-ம்",
            "One, two: three; four!\nFive? Six.\n",
            "  I-V  X2  ‘quoted’ text\n\n\n end.",
            "",
        ];
        for raw in samples {
            let once  = n.normalize(raw);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }
}
