/// Canonicalize keypad text for the tokenizer.
///
/// Removes every whitespace character (including the thin space used for
/// digit grouping), turns the decimal comma into a point and maps the `×` and
/// `÷` glyphs to `*` and `/`. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            ',' => '.',
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}
