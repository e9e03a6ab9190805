/// Full-width folding applied before numeral normalization
///
/// Chinese input methods often produce full-width digits and symbols
/// ("２０２５年", "５０％"). The numeral rules only match ASCII, so the
/// front ends fold these characters first:
/// - Full-width digits ０-９ → 0-9
/// - ％ ． ／ － → % . / -
///
/// Only these characters are folded (NFKC, one at a time); the rest of the
/// text goes through NFC and is otherwise untouched.
use unicode_normalization::UnicodeNormalization;

fn is_foldable(ch: char) -> bool {
    matches!(ch, '\u{FF10}'..='\u{FF19}' | '\u{FF05}' | '\u{FF0E}' | '\u{FF0F}' | '\u{FF0D}')
}

pub fn fold_width(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.chars() {
        if is_foldable(ch) {
            folded.extend(std::iter::once(ch).nfkc());
        } else {
            folded.push(ch);
        }
    }

    folded.nfc().collect()
}
