//! Stat Card Widget
//!
//! A bordered card showing a title, a value and an optional subtitle.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::super::theme::theme;

pub struct StatCard<'a> {
    title: &'a str,
    value: &'a str,
    value_color: Color,
    highlighted: bool,
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_color: theme().text_primary,
            highlighted: false,
            subtitle: None,
        }
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let border_style = if self.highlighted {
            t.border_active()
        } else {
            t.border_inactive()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(t.bg());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Value
                Constraint::Length(1), // Subtitle
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.title).style(t.label()).alignment(Alignment::Left),
            content[0],
        );

        frame.render_widget(
            Paragraph::new(self.value)
                .style(Style::default().fg(self.value_color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Left),
            content[1],
        );

        if let Some(subtitle) = self.subtitle {
            frame.render_widget(
                Paragraph::new(subtitle)
                    .style(Style::default().fg(t.text_muted))
                    .alignment(Alignment::Left),
                content[2],
            );
        }
    }
}
