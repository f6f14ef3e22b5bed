use ammonia;

/// Clean submitted question/answer text using the ammonia library.
///
/// Question submissions come straight from the add-question form and are
/// rendered back to every player, so markup is sanitized on the way in:
/// safe inline tags survive, anything script-bearing is stripped. This is
/// the fail-safe against stored XSS in the quiz views.
pub fn clean_text(input: &str) -> String {
    ammonia::clean(input)
}
