const WRAP_WIDTH: usize = 74;
// Signature separator line: mail clients expect it verbatim.
const SIGNATURE_SEPARATOR: &str = "-- ";

/// Hard-wrap body text at [WRAP_WIDTH] columns.
/// Blank lines are preserved, words longer than the width are never broken
/// and the signature separator line is left untouched.
pub fn wrap(content: &str) -> String {
    let mut wrapped_lines: Vec<String> = vec![];
    for line in content.lines() {
        if line == SIGNATURE_SEPARATOR {
            wrapped_lines.push(line.to_owned());
        } else if line.trim().is_empty() {
            wrapped_lines.push(String::new());
        } else {
            wrapped_lines.extend(wrap_line(line));
        }
    }

    wrapped_lines.join("\n")
}

fn wrap_line(line: &str) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= WRAP_WIDTH {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_short_lines_untouched() {
        let content = "A short line.\nAnother one.";

        assert_eq!(content, wrap(content));
    }

    #[test]
    fn should_wrap_long_lines_at_word_boundaries() {
        let content = "word ".repeat(40);

        let wrapped = wrap(&content);

        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH);
            assert!(!line.starts_with(' '));
            assert!(!line.ends_with(' '));
        }
        assert_eq!(content.trim_end(), wrapped.replace('\n', " "));
    }

    #[test]
    fn should_preserve_blank_lines() {
        let content = "First paragraph.\n\nSecond paragraph.";

        assert_eq!(content, wrap(content));
    }

    #[test]
    fn should_not_break_long_words() {
        let long_word = "a".repeat(100);
        let content = format!("see {long_word} here");

        let wrapped = wrap(&content);

        assert!(wrapped.lines().any(|line| line == long_word));
    }

    #[test]
    fn should_keep_signature_separator_untouched() {
        let content = "Cheers,\n-- \nKenji";

        assert_eq!(content, wrap(content));
    }
}
