use crate::ui::app::{App, Screen};
use crate::ui::study::StudyView;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_STEP: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.switch_page();
        return;
    }

    match app.screen() {
        Screen::Selecting => handle_upload_key(app, key),
        Screen::Generating => {}
        Screen::Summary => handle_summary_key(app, key),
        Screen::Quiz => handle_quiz_key(app, key),
    }
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.clear_file(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.insert_char(ch),
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll(1),
        KeyCode::PageUp => app.scroll(-PAGE_STEP),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll(PAGE_STEP),
        KeyCode::Home => app.scroll(-i32::from(u16::MAX)),
        KeyCode::End => app.scroll(i32::from(u16::MAX)),
        KeyCode::Right => app.show_view(StudyView::Quiz),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.choose_cursor(),
        KeyCode::Char('n') | KeyCode::PageDown => app.next_question(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_question(),
        KeyCode::Left => app.show_view(StudyView::Summary),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(ch) => {
            if let Some(index) = choice_index(ch) {
                app.choose(index);
            }
        }
        _ => {}
    }
}

/// `a`..`h` (either case) pick a choice directly.
fn choice_index(ch: char) -> Option<usize> {
    let lower = ch.to_ascii_lowercase();
    ('a'..='h')
        .contains(&lower)
        .then(|| usize::from(lower as u8 - b'a'))
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::app::Page;
    use tokio::sync::mpsc;

    fn new_app() -> App {
        let (tx, _rx) = mpsc::channel(1);
        App::new(&Config::default(), tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_and_ctrl_c_quit() {
        let mut app = new_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());

        let mut app = new_app();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn tab_switches_pages() {
        let mut app = new_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.page(), Page::Study);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.page(), Page::Summarize);
    }

    #[test]
    fn typing_goes_to_upload_input() {
        let mut app = new_app();
        for ch in "a.pdf".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.summarize_state().upload.input, "a.pd");
        handle_key(&mut app, ctrl('u'));
        assert!(app.summarize_state().upload.input.is_empty());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = new_app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.summarize_state().upload.input.is_empty());
    }

    #[test]
    fn letters_map_to_choices() {
        assert_eq!(choice_index('a'), Some(0));
        assert_eq!(choice_index('D'), Some(3));
        assert_eq!(choice_index('n'), None);
    }
}
