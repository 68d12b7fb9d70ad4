//! Quote page content

use heapless::Vec;

/// Upper bound on wrapped lines for one quote
pub const MAX_QUOTE_LINES: usize = 8;

pub const QUOTES: &[&str] = &[
    "Simplicity is prerequisite for reliability. - Edsger Dijkstra",
    "The best way to predict the future is to invent it. - Alan Kay",
    "Premature optimization is the root of all evil. - Donald Knuth",
    "Well begun is half done. - Aristotle",
    "It always seems impossible until it's done. - Nelson Mandela",
    "Stay hungry, stay foolish. - Stewart Brand",
    "Make it work, make it right, make it fast. - Kent Beck",
    "What we know is a drop, what we don't know is an ocean. - Isaac Newton",
    "Quality is not an act, it is a habit. - Will Durant",
    "The only way to go fast is to go well. - Robert C. Martin",
    "Talk is cheap. Show me the code. - Linus Torvalds",
    "Done is better than perfect. - Sheryl Sandberg",
    "Little by little, one travels far. - J.R.R. Tolkien",
    "Act as if what you do makes a difference. It does. - William James",
    "Energy and persistence conquer all things. - Benjamin Franklin",
    "The journey of a thousand miles begins with one step. - Lao Tzu",
    "Whatever you are, be a good one. - Abraham Lincoln",
    "Measure twice, cut once. - Proverb",
    "Nothing in life is to be feared, it is only to be understood. - Marie Curie",
    "If you can't explain it simply, you don't understand it well enough. - Albert Einstein",
    "Dream big. Start small. Act now. - Robin Sharma",
    "You miss 100% of the shots you don't take. - Wayne Gretzky",
    "Fall seven times, stand up eight. - Japanese proverb",
    "Be curious, not judgmental. - Walt Whitman",
];

/// One xorshift32 step
fn xorshift32(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Pick a quote from a seed such as a timer reading
pub fn pick(seed: u32) -> &'static str {
    // xorshift maps 0 to itself
    let index = xorshift32(seed | 1) as usize % QUOTES.len();
    QUOTES[index]
}

/// Word-wrap `text` into lines of at most `cols` characters
///
/// Words longer than a line are split. Text beyond [`MAX_QUOTE_LINES`]
/// lines is dropped.
pub fn wrap(text: &str, cols: usize) -> Vec<&str, MAX_QUOTE_LINES> {
    let cols = cols.max(1);
    let mut lines = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let (line, next) = split_line(rest, cols);
        if lines.push(line).is_err() {
            break;
        }
        rest = next.trim_start();
    }

    lines
}

/// Split off the first line of `text` (which starts with a non-space)
fn split_line(text: &str, cols: usize) -> (&str, &str) {
    let Some((end, _)) = text.char_indices().nth(cols) else {
        return (text, "");
    };

    if text[end..].starts_with(' ') {
        return (text[..end].trim_end(), &text[end..]);
    }

    match text[..end].rfind(' ') {
        Some(space) if space > 0 => (text[..space].trim_end(), &text[space..]),
        _ => (&text[..end], &text[end..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_deterministic() {
        assert_eq!(pick(12345), pick(12345));
        assert!(QUOTES.contains(&pick(0)));
        assert!(QUOTES.contains(&pick(u32::MAX)));
    }

    #[test]
    fn test_pick_zero_seed_is_not_stuck() {
        assert_eq!(pick(0), pick(1));
        assert_ne!(pick(0), QUOTES[0]);
    }

    #[test]
    fn test_pick_spreads_over_table() {
        let distinct = (0..200u32)
            .map(pick)
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        assert!(distinct > QUOTES.len() / 2);
    }

    #[test]
    fn test_wrap_on_word_boundaries() {
        let lines = wrap("Well begun is half done.", 10);
        assert_eq!(lines.as_slice(), ["Well begun", "is half", "done."]);
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap("  Stay hungry.  ", 30);
        assert_eq!(lines.as_slice(), ["Stay hungry."]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        let lines = wrap("abcdefghij xy", 4);
        assert_eq!(lines.as_slice(), ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_truncates_to_max_lines() {
        let text = "a b c d e f g h i j k l";
        let lines = wrap(text, 1);
        assert_eq!(lines.len(), MAX_QUOTE_LINES);
        assert_eq!(lines[MAX_QUOTE_LINES - 1], "h");
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_all_quotes_fit_the_page() {
        for q in QUOTES {
            let lines = wrap(q, 28);
            let rejoined: usize = lines.iter().map(|l| l.len()).sum::<usize>() + lines.len() - 1;
            assert!(lines.iter().all(|l| l.chars().count() <= 28));
            assert_eq!(rejoined, q.len(), "quote truncated: {}", q);
        }
    }
}
