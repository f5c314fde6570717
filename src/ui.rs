use ratatui::{prelude::*, widgets::*};

/// Renders a labelled text input field with focus styling
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Terminal column offset for a cursor sitting at `byte_offset` into
/// `input`. Byte offsets overshoot on multi-byte characters, so count
/// chars up to the offset instead.
pub fn cursor_column(input: &str, byte_offset: usize) -> u16 {
    input
        .char_indices()
        .take_while(|(i, _)| *i < byte_offset)
        .count() as u16
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_ascii() {
        assert_eq!(cursor_column("hello", 0), 0);
        assert_eq!(cursor_column("hello", 3), 3);
        assert_eq!(cursor_column("hello", 5), 5);
    }

    #[test]
    fn test_cursor_column_multibyte() {
        // "José" is 5 bytes but 4 chars; a cursor past the accent must
        // land on the char column, not the byte column.
        let name = "José";
        assert_eq!(name.len(), 5);
        assert_eq!(cursor_column(name, name.len()), 4);
        // Cursor right before the accented char (byte offset 3).
        assert_eq!(cursor_column(name, 3), 3);
    }

    #[test]
    fn test_cursor_column_clamps_out_of_range() {
        assert_eq!(cursor_column("ab", 10), 2);
    }
}
