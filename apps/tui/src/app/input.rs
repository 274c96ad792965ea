use crossterm::event::KeyCode;

use crate::app::state::App;
use channelscope::domain::Section;

/// Key handling for the dashboard. Navigation keys drive the section
/// navigator; everything else is app-level chrome.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.show_help && !matches!(key, KeyCode::Char('h' | '?') | KeyCode::Esc) {
        // Any other key first closes the help popup.
        app.show_help = false;
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.running = false;
            }
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('h' | '?') => app.show_help = !app.show_help,
        KeyCode::Char(digit @ '1'..='7') => {
            let index = digit as usize - '1' as usize;
            app.nav.select_index(index);
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.nav.next_section(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.nav.prev_section(),
        KeyCode::Home | KeyCode::Char('g') => app.nav.select(Section::Overview),
        KeyCode::End | KeyCode::Char('G') => app.nav.select(Section::Insights),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::handle_input;
    use crate::app::state::App;
    use channelscope::domain::Section;
    use channelscope::report::Report;
    use channelscope::theme::ThemeStore;
    use crossterm::event::KeyCode;

    fn sample_report() -> Report {
        serde_json::from_str(include_str!("../../demos/report.json")).unwrap()
    }

    fn ready_app() -> App {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ThemeStore::load(dir.path().join("theme")));
        app.apply_report(sample_report());
        app
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn digits_select_sections() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav.active, Section::Competitors);
        handle_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.nav.active, Section::Overview);
    }

    #[test]
    fn arrows_step_through_sections() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.nav.active, Section::Performance);
        handle_input(&mut app, KeyCode::Up);
        assert_eq!(app.nav.active, Section::Overview);
        // No wrap at the edges.
        handle_input(&mut app, KeyCode::Up);
        assert_eq!(app.nav.active, Section::Overview);
    }

    #[test]
    fn help_popup_swallows_navigation() {
        let mut app = ready_app();
        handle_input(&mut app, KeyCode::Char('h'));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Down);
        assert!(!app.show_help);
        assert_eq!(app.nav.active, Section::Overview);
    }
}
