/// ASCII replacement for a vulgar-fraction glyph, if it is one we know.
fn fraction_ascii(c: char) -> Option<&'static str> {
    match c {
        '¼' => Some("1/4"),
        '½' => Some("1/2"),
        '¾' => Some("3/4"),
        '⅓' => Some("1/3"),
        '⅔' => Some("2/3"),
        '⅕' => Some("1/5"),
        '⅖' => Some("2/5"),
        '⅗' => Some("3/5"),
        '⅘' => Some("4/5"),
        '⅙' => Some("1/6"),
        '⅚' => Some("5/6"),
        '⅛' => Some("1/8"),
        '⅜' => Some("3/8"),
        '⅝' => Some("5/8"),
        '⅞' => Some("7/8"),
        _ => None,
    }
}

/// Replace Unicode vulgar fractions with their ASCII `a/b` spelling.
///
/// No spacing is inserted around the replacement, so `1½` becomes `11/2`.
// TODO: insert a space before the fraction when it directly follows a digit,
// so mixed numbers render as "1 1/2" instead of "11/2"
pub fn convert_fractions(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        match fraction_ascii(c) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(c),
        }
    }

    output
}
