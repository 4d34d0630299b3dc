/// Terminal width the word list wraps at.
pub const DEFAULT_WIDTH: usize = 72;

pub const NO_WORDS_MESSAGE: &str = "There are no words that can be formed from this input.";

pub fn summary_line(count: usize) -> String {
    match count {
        0 => NO_WORDS_MESSAGE.to_string(),
        1 => "1 valid word".to_string(),
        n => format!("{n} valid words"),
    }
}

/// Summary line followed by the words, space separated and wrapped at `width`.
pub fn format_words(words: &[String], width: usize) -> String {
    let mut out = summary_line(words.len());
    if words.is_empty() {
        return out;
    }

    let mut line = String::new();
    for word in words {
        // Always place at least one word per line, even if it overflows.
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push('\n');
            out.push_str(&line);
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    out.push('\n');
    out.push_str(&line);
    out
}
