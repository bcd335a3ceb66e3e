//! Markdown rendering of an extracted outline.

use super::headings::Heading;

/// Render headings as a Markdown outline, one line per heading.
///
/// Each line is `#` repeated per level, a space, then the heading text,
/// newline-terminated (including the last line). No headings renders as
/// the empty string.
pub fn render(headings: &[Heading]) -> String {
    let mut out = String::new();
    for heading in headings {
        for _ in 0..heading.level {
            out.push('#');
        }
        out.push(' ');
        out.push_str(&heading.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_outline() {
        let headings = vec![
            Heading { level: 1, text: "France".into() },
            Heading { level: 2, text: "History".into() },
            Heading { level: 3, text: "Ancient".into() },
        ];
        assert_eq!(render(&headings), "# France\n## History\n### Ancient\n");
    }

    #[test]
    fn test_render_empty_outline() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_level_six() {
        let headings = vec![Heading { level: 6, text: "Notes".into() }];
        assert_eq!(render(&headings), "###### Notes\n");
    }

    #[test]
    fn test_every_line_is_newline_terminated() {
        let headings = vec![
            Heading { level: 1, text: "a".into() },
            Heading { level: 2, text: "b".into() },
        ];
        let rendered = render(&headings);
        assert!(rendered.ends_with('\n'));
        assert_eq!(rendered.lines().count(), 2);
    }
}
