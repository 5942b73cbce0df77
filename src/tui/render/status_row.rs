use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::pins::{has_pins, pin_summary};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row (bottom of screen): a message or the pin summary on
/// the left, row position on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let tab = app.tab();

    let left: Vec<Span> = if let Some(msg) = &app.status {
        vec![Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )]
    } else if has_pins(tab) {
        let mode = match (tab.filter_active, tab.filter_inverted) {
            (true, false) => "filter",
            (true, true) => "filter !",
            (false, false) => "preview",
            (false, true) => "preview !",
        };
        vec![
            Span::styled(
                format!("{} ", mode),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(pin_summary(tab), Style::default().fg(app.theme.text).bg(bg)),
        ]
    } else {
        vec![Span::styled(
            "? help",
            Style::default().fg(app.theme.dim).bg(bg),
        )]
    };

    let position = if tab.rows.is_empty() {
        format!("0/{}", tab.full_rows.len())
    } else {
        format!("{}/{}", tab.row_cursor + 1, tab.rows.len())
    };
    let hint_width = display_width(&position);

    // Left side gives way to the row position
    let budget = width.saturating_sub(hint_width + 1);
    let mut spans: Vec<Span> = Vec::new();
    let mut used = 0;
    for span in left {
        let w = display_width(&span.content);
        if used + w <= budget {
            used += w;
            spans.push(span);
        } else {
            let cut = truncate_to_width(&span.content, budget - used);
            used += display_width(&cut);
            spans.push(Span::styled(cut, span.style));
            break;
        }
    }
    if used + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(position, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::filter::apply_row_filter;
    use crate::ops::pins::toggle_pin;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn idle_shows_help_hint() {
        let app = demo_app();
        let out = render_to_string(40, 1, |frame, area| render_status_row(frame, &app, area));
        assert_snapshot!(out, @"? help                               1/5");
    }

    #[test]
    fn pins_show_mode_and_summary() {
        let mut app = demo_app();
        let tab = app.tab_mut();
        toggle_pin(tab, 3, "planned");
        toggle_pin(tab, 3, "quoted");
        tab.filter_active = true;
        apply_row_filter(tab, false);
        let out = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with("filter Status: planned, quoted"));
        assert!(out.ends_with("1/2"));
    }

    #[test]
    fn message_wins_and_truncates() {
        let mut app = demo_app();
        app.status = Some("a very long message that cannot fit in the row".into());
        let out = render_to_string(20, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.ends_with("1/5"));
        assert!(out.starts_with("a very long"));
    }
}
