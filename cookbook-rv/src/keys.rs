//! Keyboard input for the viewer session
//!
//! Terminal input arrives a line at a time. Arrow keys show up as escape
//! sequences (`ESC [ D` / `ESC [ C`, or `ESC O D` / `ESC O C` in
//! application mode), possibly several on one line.

/// One navigation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Table of contents entry, 1-based as labeled
    Toc(usize),
    Quit,
}

/// Parse one input line into the events it contains
pub fn parse_line(line: &str) -> Vec<Key> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.contains('\u{1b}') {
        return parse_escape_sequences(line);
    }

    let word = line.trim().to_ascii_lowercase();
    let key = match word.as_str() {
        "left" | "arrowleft" | "h" | "p" | "prev" => Key::Left,
        "right" | "arrowright" | "l" | "n" | "next" => Key::Right,
        "q" | "quit" | "exit" => Key::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Key::Toc(n),
            _ => return Vec::new(),
        },
    };
    vec![key]
}

fn parse_escape_sequences(line: &str) -> Vec<Key> {
    line.split('\u{1b}')
        .filter_map(|seq| match seq.trim() {
            "[D" | "OD" => Some(Key::Left),
            "[C" | "OC" => Some(Key::Right),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(parse_line("left\n"), vec![Key::Left]);
        assert_eq!(parse_line("ArrowRight"), vec![Key::Right]);
        assert_eq!(parse_line(" n "), vec![Key::Right]);
        assert_eq!(parse_line("q"), vec![Key::Quit]);
    }

    #[test]
    fn test_numbers_select_toc_entries() {
        assert_eq!(parse_line("3"), vec![Key::Toc(3)]);
        assert!(parse_line("0").is_empty());
    }

    #[test]
    fn test_arrow_escape_sequences() {
        assert_eq!(parse_line("\u{1b}[D"), vec![Key::Left]);
        assert_eq!(
            parse_line("\u{1b}[C\u{1b}[C\u{1b}OD"),
            vec![Key::Right, Key::Right, Key::Left]
        );
        // Up/down arrows are ignored
        assert!(parse_line("\u{1b}[A\u{1b}[B").is_empty());
    }

    #[test]
    fn test_unknown_input() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("jump").is_empty());
    }
}
