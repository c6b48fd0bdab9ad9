use crate::ui::app::{Page, Screen};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    page: Page,
    screen: Screen,
}

impl Footer {
    pub fn new(page: Page, screen: Screen) -> Self {
        Self { page, screen }
    }

    fn hints(&self) -> &'static str {
        match self.screen {
            Screen::Selecting => {
                " Enter: Select/Start │ Esc: Remove file │ Ctrl+U: Clear │ Tab: Switch page │ Ctrl+Q: Quit"
            }
            Screen::Generating => " Tab: Switch page │ Ctrl+Q: Quit",
            Screen::Summary if self.page == Page::Study => {
                " ↑↓ PgUp/PgDn: Scroll │ →: Quiz │ r: New document │ Tab: Switch page │ Ctrl+Q: Quit"
            }
            Screen::Summary => {
                " ↑↓ PgUp/PgDn: Scroll │ r: New document │ Tab: Switch page │ Ctrl+Q: Quit"
            }
            Screen::Quiz => {
                " ↑↓: Move │ Enter/A-H: Answer │ n/p: Next/Prev │ ←: Summary │ r: New document │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_screen() {
        assert!(Footer::new(Page::Study, Screen::Quiz).hints().contains("Answer"));
        assert!(!Footer::new(Page::Study, Screen::Generating).hints().contains("Enter"));
        assert!(Footer::new(Page::Study, Screen::Summary).hints().contains("Quiz"));
        assert!(!Footer::new(Page::Summarize, Screen::Summary).hints().contains("Quiz"));
    }
}
