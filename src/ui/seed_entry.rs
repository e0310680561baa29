use crate::gacha::sequence::parse_seed;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SeedEntryScreen {
    pub input: String,
    pub cursor_position: usize,
    pub validation_error: Option<String>,
}

impl SeedEntryScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Rules
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Ten-Pull Seed Simulator")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let label = Paragraph::new("Seed:");
        f.render_widget(label, chunks[2]);

        // Input field with cursor
        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 1,
        };

        let input_text = {
            let char_count = self.input.chars().count();
            if self.cursor_position < char_count {
                let chars: Vec<char> = self.input.chars().collect();
                let before: String = chars[..self.cursor_position].iter().collect();
                let after: String = chars[self.cursor_position..].iter().collect();
                format!("{}{}{}", before, "_", after)
            } else {
                format!("{}_", self.input)
            }
        };

        let input_widget = Paragraph::new(input_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let rules = vec![
            Line::from("• Decimal number between 0 and 4294967295"),
            Line::from("• The same seed always produces the same ten draws"),
        ];
        let rules_widget = Paragraph::new(rules).style(Style::default().fg(Color::Gray));
        f.render_widget(rules_widget, chunks[4]);

        let validation_text = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if !self.input.trim().is_empty() {
            Line::from(Span::styled(
                "✓ Seed is valid",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        let validation_widget = Paragraph::new(validation_text);
        f.render_widget(validation_widget, chunks[5]);

        let controls = Paragraph::new("[Enter] Draw 10    [r] Random Seed    [q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.input.insert(self.cursor_position, c);
        self.cursor_position += 1;
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.input.remove(self.cursor_position - 1);
            self.cursor_position -= 1;
            self.validate();
        }
    }

    pub fn set_input(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.input = text;
        self.validate();
    }

    pub fn validate(&mut self) {
        self.validation_error = if self.input.trim().is_empty() {
            None
        } else {
            parse_seed(&self.input).err().map(|e| e.to_string())
        };
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none() && !self.input.trim().is_empty()
    }

    /// The parsed seed, when the current input is valid.
    pub fn parsed_seed(&self) -> Option<u32> {
        parse_seed(&self.input).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_digits_form_a_seed() {
        let mut screen = SeedEntryScreen::new();
        for c in "12345".chars() {
            screen.handle_char_input(c);
        }
        assert!(screen.is_valid());
        assert_eq!(screen.parsed_seed(), Some(12_345));
    }

    #[test]
    fn test_invalid_input_reports_error() {
        let mut screen = SeedEntryScreen::new();
        screen.set_input("12a".to_string());
        assert!(!screen.is_valid());
        assert!(screen.parsed_seed().is_none());
        assert!(screen.validation_error.is_some());
    }

    #[test]
    fn test_backspace_recovers_validity() {
        let mut screen = SeedEntryScreen::new();
        screen.set_input("99x".to_string());
        assert!(!screen.is_valid());
        screen.handle_backspace();
        assert!(screen.is_valid());
        assert_eq!(screen.parsed_seed(), Some(99));
    }

    #[test]
    fn test_empty_input_is_neither_valid_nor_an_error() {
        let screen = SeedEntryScreen::new();
        assert!(!screen.is_valid());
        assert!(screen.validation_error.is_none());
    }
}
