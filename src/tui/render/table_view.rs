use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Align, Cell, CellKind, RowMeta, SortDir, Tab};
use crate::ops::pins::{cell_key, has_column_pins, is_pinned};
use crate::ops::viewport::{Separator, Viewport, compute_viewport};
use crate::ops::window::INDICATOR_WIDTH;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, fit_to_width};

/// Render the active tab's grid: a header line, then as many rows as fit.
///
/// The viewport is recomputed from the tab on every call. The window start
/// is written back as the tab's scroll hint, and the row scroll is adjusted
/// so the cursor row stays on screen.
pub fn render_table_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width as usize;
    let vp = compute_viewport(app.tab(), width, app.sep_width(), app.mag_mode);

    let active = app.active;
    app.tabs[active].view_offset = vp.window.start;
    let body_height = (area.height as usize).saturating_sub(1);
    let scroll = row_scroll(
        app.row_scroll[active],
        app.tabs[active].row_cursor,
        body_height,
        vp.cells.len(),
    );
    app.row_scroll[active] = scroll;

    let tab = &app.tabs[active];
    let grid = GridPainter {
        vp: &vp,
        theme: &app.theme,
        plain: &app.separator,
        gap: &app.gap_separator,
        sep_width: app.sep_width(),
        width,
    };

    let mut lines = vec![grid.header_line(tab)];
    if vp.cells.is_empty() {
        let msg = if tab.full_rows.is_empty() {
            "  nothing here yet"
        } else {
            "  no rows match the pins"
        };
        lines.push(Line::from(Span::styled(
            msg,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }
    for (i, (cells, meta)) in vp
        .cells
        .iter()
        .zip(&tab.rows)
        .enumerate()
        .skip(scroll)
        .take(body_height)
    {
        lines.push(grid.row_line(tab, cells, meta, i == tab.row_cursor));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// First row to draw so that `cursor` is inside a body `height` rows tall
pub(crate) fn row_scroll(scroll: usize, cursor: usize, height: usize, len: usize) -> usize {
    if height == 0 || len == 0 {
        return 0;
    }
    let mut scroll = scroll.min(len.saturating_sub(height));
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + height {
        scroll = cursor + 1 - height;
    }
    scroll
}

struct GridPainter<'a> {
    vp: &'a Viewport,
    theme: &'a Theme,
    plain: &'a str,
    gap: &'a str,
    sep_width: usize,
    width: usize,
}

impl GridPainter<'_> {
    fn header_line(&self, tab: &Tab) -> Line<'static> {
        let base = Style::default()
            .fg(self.theme.text_bright)
            .bg(self.theme.background)
            .add_modifier(Modifier::BOLD);
        let cells: Vec<(String, Style)> = self
            .vp
            .specs
            .iter()
            .zip(&self.vp.full_cols)
            .zip(&self.vp.widths)
            .enumerate()
            .map(|(i, ((spec, &full), &width))| {
                let mut text = spec.header();
                if let Some(sort) = tab.sorts.iter().find(|s| s.col == full) {
                    let arrow = match sort.dir {
                        SortDir::Asc => " ▲",
                        SortDir::Desc => " ▼",
                    };
                    if display_width(&text) + display_width(arrow) <= width {
                        text.push_str(arrow);
                    }
                }
                let mut style = base;
                if self.vp.cursor == Some(i) {
                    style = style.fg(self.theme.highlight);
                }
                if has_column_pins(tab, full) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                (text, style)
            })
            .collect();
        self.line(cells, self.theme.background)
    }

    fn row_line(&self, tab: &Tab, cells: &[Cell], meta: &RowMeta, is_cursor_row: bool) -> Line<'static> {
        let bg = if is_cursor_row {
            self.theme.selection_bg
        } else {
            self.theme.background
        };
        let styled: Vec<(String, Style)> = cells
            .iter()
            .zip(&self.vp.full_cols)
            .enumerate()
            .map(|(i, (cell, &full))| {
                let mut style = Style::default().fg(self.cell_color(cell)).bg(bg);
                // Values are already in display form
                if !meta.dimmed && is_pinned(tab, full, &cell_key(cell, false)) {
                    style = style.fg(self.theme.text_bright).bg(self.theme.pin_bg);
                }
                if meta.dimmed || meta.deleted {
                    style = style.fg(self.theme.dim);
                }
                if meta.deleted {
                    style = style.add_modifier(Modifier::CROSSED_OUT);
                }
                if is_cursor_row && self.vp.cursor == Some(i) {
                    style = style
                        .fg(self.theme.background)
                        .bg(self.theme.highlight)
                        .add_modifier(Modifier::BOLD);
                }
                (cell.value.clone(), style)
            })
            .collect();
        self.line(styled, bg)
    }

    fn cell_color(&self, cell: &Cell) -> ratatui::style::Color {
        match cell.kind {
            CellKind::Status => self.theme.status_color(&cell.value),
            CellKind::Id | CellKind::Drilldown => self.theme.selection_fg,
            _ => self.theme.text,
        }
    }

    /// Lay out one grid line: scroll indicators, fitted cells and the
    /// separator between each pair.
    fn line(&self, cells: Vec<(String, Style)>, bg: ratatui::style::Color) -> Line<'static> {
        let indicator = Style::default().fg(self.theme.highlight).bg(bg);
        let sep_style = Style::default().fg(self.theme.dim).bg(bg);
        let mut spans: Vec<Span<'static>> = Vec::new();

        if self.vp.window.has_left {
            spans.push(Span::styled(
                fit_to_width("◀", INDICATOR_WIDTH, Align::Left),
                indicator,
            ));
        }
        for (i, ((text, style), &width)) in cells.into_iter().zip(&self.vp.widths).enumerate() {
            if i > 0 {
                let sep = match self.vp.separators.get(i - 1) {
                    Some(Separator::Gap) => self.gap,
                    _ => self.plain,
                };
                spans.push(Span::styled(
                    fit_to_width(sep, self.sep_width, Align::Left),
                    sep_style,
                ));
            }
            let align = self.vp.specs.get(i).map_or(Align::Left, |s| s.align);
            spans.push(Span::styled(fit_to_width(&text, width, align), style));
        }

        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if self.vp.window.has_right {
            let pad = self.width.saturating_sub(used + 1);
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
            spans.push(Span::styled("▶", indicator));
        } else if used < self.width {
            spans.push(Span::styled(" ".repeat(self.width - used), Style::default().bg(bg)));
        }
        Line::from(spans)
    }
}
