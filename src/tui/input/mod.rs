mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use navigate::handle_navigate;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts ? and Esc, plus scroll keys
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                app.show_help = false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.help_scroll = app.help_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }

    handle_navigate(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Household, TabKind};

    fn app() -> App {
        App::new(Household::demo(), &Config::default(), false)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut a = app();
        ctrl(&mut a, 'c');
        assert!(a.should_quit);
    }

    #[test]
    fn help_swallows_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('?'));
        assert!(a.show_help);
        press(&mut a, KeyCode::Char('q'));
        assert!(!a.show_help);
        assert!(!a.should_quit);
    }

    #[test]
    fn column_and_row_movement() {
        let mut a = app();
        press(&mut a, KeyCode::Char('l'));
        press(&mut a, KeyCode::Right);
        assert_eq!(a.tab().col_cursor, 2);
        press(&mut a, KeyCode::Char('h'));
        assert_eq!(a.tab().col_cursor, 1);
        press(&mut a, KeyCode::Char('j'));
        press(&mut a, KeyCode::Down);
        assert_eq!(a.tab().row_cursor, 2);
        press(&mut a, KeyCode::Char('G'));
        assert_eq!(a.tab().row_cursor, a.tab().rows.len() - 1);
        press(&mut a, KeyCode::Char('g'));
        assert_eq!(a.tab().row_cursor, 0);
        press(&mut a, KeyCode::Char('$'));
        assert_eq!(a.tab().col_cursor, a.tab().specs.len() - 1);
        press(&mut a, KeyCode::Char('0'));
        assert_eq!(a.tab().col_cursor, 0);
    }

    #[test]
    fn tab_switching() {
        let mut a = app();
        press(&mut a, KeyCode::Tab);
        assert_eq!(a.tab().kind, TabKind::Quotes);
        press(&mut a, KeyCode::BackTab);
        press(&mut a, KeyCode::BackTab);
        assert_eq!(a.tab().kind, TabKind::Vendors);
    }

    #[test]
    fn hide_and_show_columns() {
        let mut a = app();
        // Status column
        a.tab_mut().col_cursor = 3;
        press(&mut a, KeyCode::Char('n'));
        assert_eq!(a.tab().pins.len(), 1);

        press(&mut a, KeyCode::Char('c'));
        assert!(a.tab().specs[3].is_hidden());
        assert!(a.tab().pins.is_empty());
        assert_eq!(a.tab().col_cursor, 4);

        press(&mut a, KeyCode::Char('U'));
        assert!(!a.tab().specs[3].is_hidden());
        assert_eq!(a.tab().col_cursor, 3);

        press(&mut a, KeyCode::Char('c'));
        press(&mut a, KeyCode::Char('c'));
        assert_eq!(a.tab().visible_column_count(), a.tab().specs.len() - 2);
        press(&mut a, KeyCode::Char('C'));
        assert_eq!(a.tab().visible_column_count(), a.tab().specs.len());
    }

    #[test]
    fn hiding_last_column_reports_status() {
        let mut a = app();
        let n = a.tab().specs.len();
        for _ in 0..n {
            press(&mut a, KeyCode::Char('c'));
        }
        assert_eq!(a.tab().visible_column_count(), 1);
        assert_eq!(a.status.as_deref(), Some("can't hide the last visible column"));
    }

    #[test]
    fn pin_preview_then_filter_then_invert() {
        let mut a = app();
        // Type column of the first row: "Remodel"
        a.tab_mut().col_cursor = 1;
        press(&mut a, KeyCode::Char('n'));
        let total = a.tab().full_rows.len();
        assert_eq!(a.tab().rows.len(), total);
        assert_eq!(a.tab().rows.iter().filter(|m| m.dimmed).count(), total - 1);

        press(&mut a, KeyCode::Char('N'));
        assert!(a.tab().filter_active);
        assert_eq!(a.tab().rows.len(), 1);

        press(&mut a, KeyCode::Char('!'));
        assert_eq!(a.tab().rows.len(), total - 1);

        ctrl(&mut a, 'n');
        assert!(a.tab().pins.is_empty());
        assert!(!a.tab().filter_active);
        assert_eq!(a.tab().rows.len(), total);
    }

    #[test]
    fn filter_toggle_needs_pins() {
        let mut a = app();
        press(&mut a, KeyCode::Char('N'));
        assert!(!a.tab().filter_active);
        assert!(a.status.is_some());
    }

    #[test]
    fn sort_cycles_on_cursor_column() {
        let mut a = app();
        // Title
        a.tab_mut().col_cursor = 2;
        press(&mut a, KeyCode::Char('s'));
        let first = a.tab().cell_rows[0][2].value.clone();
        assert_eq!(first, "Basement waterproofing");
        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.tab().cell_rows[0][2].value, "Solar panels");
        press(&mut a, KeyCode::Char('s'));
        assert!(a.tab().sorts.is_empty());
        assert_eq!(a.tab().rows[0].id, 1);
    }

    #[test]
    fn toggle_deleted_and_magnitude() {
        let mut a = app();
        let before = a.tab().rows.len();
        press(&mut a, KeyCode::Char('x'));
        assert!(a.show_deleted);
        assert_eq!(a.tab().rows.len(), before + 1);

        press(&mut a, KeyCode::Char('m'));
        assert!(a.mag_mode);
        press(&mut a, KeyCode::Char('m'));
        assert!(!a.mag_mode);
    }
}
