use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::study::render_study_page;
use crate::ui::summarize::render_summarize_page;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.page()).widget(), header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Summarize => {
            render_summarize_page(frame, body, app.summarize_state(), app.max_file_size_mb())
        }
        Page::Study => render_study_page(frame, body, app.study_state(), app.max_file_size_mb()),
    }
    frame.render_widget(Footer::new(app.page(), app.screen()).widget(footer), footer);
}
