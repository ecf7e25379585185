//! Rendering of the view-count widget.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::widget::state::CountState;
use crate::widget::theme::{COUNT_PENDING, COUNT_READY, GLOBAL_BORDER, LABEL_TEXT};

pub struct ViewCounter {
    slug: String,
}

impl ViewCounter {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn widget(&self, state: &CountState) -> Paragraph<'static> {
        let label_style = Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM);
        let count_style = if state.is_pending() {
            Style::default().fg(COUNT_PENDING).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(COUNT_READY)
        };

        let value = match state {
            CountState::Pending => "…".to_string(),
            // A failed fetch is deliberately indistinguishable from a
            // genuinely-zero count.
            CountState::Failed => format_count(0),
            CountState::Ready { count } => format_count(*count),
        };

        let line = Line::from(vec![
            Span::styled("◉ ", label_style),
            Span::styled(self.slug.clone(), label_style),
            Span::styled("  ", label_style),
            Span::styled(value, count_style),
            Span::styled(" views", label_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Format a count with thousands grouping, `1234567` -> `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits: Vec<char> = count.to_string().chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}
