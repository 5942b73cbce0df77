use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the tab bar: one tab per entity kind, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);

    let rule = Span::styled(
        "─".repeat(chunks[1].width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );
    frame.render_widget(Paragraph::new(Line::from(rule)), chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let sep = Span::styled("│", Style::default().fg(app.theme.dim).bg(bg));
    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "⌂",
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];

    for (i, tab) in app.tabs.iter().enumerate() {
        let label = if tab.pins.is_empty() {
            format!(" {} ", tab.kind.label())
        } else {
            // Marks tabs that carry pins
            format!(" {}* ", tab.kind.label())
        };
        spans.push(Span::styled(label, tab_style(app, i == app.active)));
        spans.push(sep.clone());
    }

    // Right-aligned mode badges
    let mut badges = Vec::new();
    if app.mag_mode {
        badges.push("mag");
    }
    if app.show_deleted {
        badges.push("deleted");
    }
    if !badges.is_empty() {
        let text = format!("[{}] ", badges.join(" "));
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let width = area.width as usize;
        if used + display_width(&text) < width {
            spans.push(Span::styled(
                " ".repeat(width - used - display_width(&text)),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(text, Style::default().fg(app.theme.yellow).bg(bg)));
        }
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::pins::toggle_pin;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn tabs_in_order() {
        let app = demo_app();
        let out = render_to_string(60, 2, |frame, area| render_tab_bar(frame, &app, area));
        assert_snapshot!(out, @r"
         ⌂  Projects │ Quotes │ Maintenance │ Vendors │
        ────────────────────────────────────────────────────────────
        ");
    }

    #[test]
    fn pinned_tab_and_badges() {
        let mut app = demo_app();
        toggle_pin(&mut app.tabs[1], 3, "$2,310.00");
        app.mag_mode = true;
        let out = render_to_string(60, 1, |frame, area| render_tab_bar(frame, &app, area));
        assert!(out.contains(" Quotes* "));
        assert!(out.ends_with("[mag]"));
    }
}
