use super::{Focus, Shell};
use crate::kernel::{EditorBinding, TextSurface};
use crate::models::slice_to_cow;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) const CREATE_LABEL: &str = "+ Create file";
const ACTIVITY_BAR_WIDTH: u16 = 4;
const SIDEBAR_WIDTH_PERCENT: u16 = 20;
const SIDEBAR_MIN_WIDTH: u16 = 24;
const STATUS_HEIGHT: u16 = 1;
const EMPTY_HINT: &str = "Create a file and select it to start using the editor";
const TRASH_GLYPH: &str = "x";

impl Shell {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
            .split(area);
        let body = rows[0];

        let activity_width = ACTIVITY_BAR_WIDTH.min(body.width);
        let activity = Rect::new(body.x, body.y, activity_width, body.height);
        let rest = Rect::new(
            body.x + activity_width,
            body.y,
            body.width - activity_width,
            body.height,
        );

        let sidebar_width = if self.sidebar_visible {
            (rest.width * SIDEBAR_WIDTH_PERCENT / 100)
                .max(SIDEBAR_MIN_WIDTH)
                .min(rest.width / 2)
        } else {
            0
        };
        let sidebar = Rect::new(rest.x, rest.y, sidebar_width, rest.height);
        let editor = Rect::new(
            rest.x + sidebar_width,
            rest.y,
            rest.width - sidebar_width,
            rest.height,
        );

        self.render_activity_bar(frame, activity);
        if sidebar.width > 0 {
            self.render_files(frame, sidebar);
        } else {
            self.areas.files = None;
        }
        self.render_editor(frame, editor);
        self.render_status(frame, rows[1]);
    }

    fn render_activity_bar(&mut self, frame: &mut Frame, area: Rect) {
        self.areas.activity = (area.width > 0).then_some(area);
        if area.width == 0 {
            return;
        }

        let base = Style::default()
            .bg(self.theme.activity_bg)
            .fg(self.theme.activity_fg);
        frame.render_widget(Block::default().style(base), area);

        let style = if self.sidebar_visible {
            base.fg(self.theme.activity_active_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        };
        let icon = Rect::new(area.x, area.y + area.height.min(1), area.width, 1);
        if icon.y < area.bottom() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(" ≡ ", style))),
                icon,
            );
        }
    }

    fn render_files(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::Files {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.areas.files = (inner.width > 0 && inner.height > 0).then_some(inner);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines = Vec::new();
        let width = usize::from(inner.width);

        let title = "All Files";
        let gap = width.saturating_sub(title.width() + CREATE_LABEL.width());
        lines.push(Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(CREATE_LABEL, Style::default().fg(self.theme.muted_fg)),
        ]));

        let entry_lines = self
            .entry
            .as_ref()
            .map_or(0, |entry| 1 + usize::from(entry.error().is_some()));
        let rows = usize::from(inner.height)
            .saturating_sub(1 + entry_lines)
            .max(1);
        let len = self.sync.files().len();
        if self.selected < self.files_scroll {
            self.files_scroll = self.selected;
        } else if self.selected >= self.files_scroll + rows {
            self.files_scroll = self.selected + 1 - rows;
        }
        self.files_scroll = self.files_scroll.min(len.saturating_sub(rows));
        self.areas.file_rows = rows.min(len - self.files_scroll);

        let active = self.sync.active();
        for (index, (id, record)) in self
            .sync
            .files()
            .iter()
            .enumerate()
            .skip(self.files_scroll)
            .take(rows)
        {
            let label = format!("{} {}", record.icon().glyph(), record.name());
            let label = truncate_to_width(&label, width.saturating_sub(2));
            let pad = width.saturating_sub(label.width() + TRASH_GLYPH.width());

            let mut style = Style::default();
            if Some(id) == active {
                style = style
                    .bg(self.theme.active_file_bg)
                    .fg(self.theme.active_file_fg);
            }
            if index == self.selected && self.focus == Focus::Files && self.entry.is_none() {
                style = style.add_modifier(Modifier::REVERSED);
            }

            lines.push(Line::from(vec![
                Span::styled(format!("{label}{}", " ".repeat(pad)), style),
                Span::styled(TRASH_GLYPH, style.fg(self.theme.error_fg)),
            ]));
        }

        if let Some(entry) = self.entry.as_ref() {
            let row = lines.len() as u16;
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(self.theme.focus_border)),
                Span::raw(entry.value().to_string()),
            ]));
            if let Some(error) = entry.error() {
                lines.push(Line::from(Span::styled(
                    error.to_string(),
                    Style::default().fg(self.theme.error_fg),
                )));
            }

            if row < inner.height {
                let col = entry.value()[..entry.cursor()].width() as u16 + 2;
                frame.set_cursor_position((
                    inner.x + col.min(inner.width.saturating_sub(1)),
                    inner.y + row,
                ));
            }
        }

        let used = lines.len() as u16;
        frame.render_widget(Paragraph::new(lines), inner);

        if len == 0 && used + 1 < inner.height {
            let hint = Rect::new(
                inner.x,
                inner.y + used + 1,
                inner.width,
                inner.height - used - 1,
            );
            frame.render_widget(
                Paragraph::new(EMPTY_HINT)
                    .style(Style::default().fg(self.theme.muted_fg))
                    .wrap(Wrap { trim: true }),
                hint,
            );
        }
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::Editor {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let Some(surface) = self.sync.binding() else {
            self.areas.editor = None;
            return;
        };

        let title = match self.sync.active_record() {
            Some(record) => format!(" {} ", record.name()),
            None => " no file ".to_string(),
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(
                Style::default()
                    .bg(self.theme.editor_bg)
                    .fg(self.theme.editor_fg),
            )
            .title(title);
        if surface.is_read_only() {
            block = block.title_bottom(" read-only ");
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            self.areas.editor = None;
            return;
        }

        let gutter = gutter_width(surface);
        let height = usize::from(inner.height);
        let (cursor_row, cursor_col) = surface.cursor();
        // Follow the cursor only when it moved; the wheel scrolls freely.
        if self.editor_anchor != Some((cursor_row, cursor_col)) {
            self.editor_anchor = Some((cursor_row, cursor_col));
            if cursor_row < self.editor_scroll {
                self.editor_scroll = cursor_row;
            } else if cursor_row >= self.editor_scroll + height {
                self.editor_scroll = cursor_row + 1 - height;
            }
        }

        let buffer = surface.buffer();
        let end = buffer.len_lines().min(self.editor_scroll + height);
        let mut lines = Vec::with_capacity(end.saturating_sub(self.editor_scroll));
        for row in self.editor_scroll..end {
            let text = buffer
                .line_slice(row)
                .map(|slice| slice_to_cow(slice).trim_end_matches(['\n', '\r']).to_string())
                .unwrap_or_default();
            let mut spans = Vec::with_capacity(2);
            if gutter > 0 {
                spans.push(Span::styled(
                    format!("{:>width$} ", row + 1, width = usize::from(gutter) - 1),
                    Style::default().fg(self.theme.gutter_fg),
                ));
            }
            spans.push(Span::raw(text));
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        if self.focus == Focus::Editor && self.entry.is_none() {
            let prefix: String = buffer
                .line_slice(cursor_row)
                .map(|slice| {
                    slice_to_cow(slice)
                        .graphemes(true)
                        .take(cursor_col)
                        .collect()
                })
                .unwrap_or_default();
            let x = inner.x + gutter + prefix.width() as u16;
            let visible = cursor_row
                .checked_sub(self.editor_scroll)
                .filter(|offset| *offset < height);
            if let Some(offset) = visible.filter(|_| x < inner.right()) {
                frame.set_cursor_position((x, inner.y + offset as u16));
            }
        }

        self.areas.editor = Some(inner);
        self.areas.editor_gutter = gutter;
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        let mode = self
            .sync
            .binding()
            .map(|surface| surface.mode().display_name())
            .unwrap_or("-");
        let file = self
            .sync
            .active_record()
            .map(|record| record.name().to_string())
            .unwrap_or_else(|| "no file".to_string());
        let left = format!(
            " {file} | {mode} | {} files ",
            self.sync.files().len()
        );
        let right = self
            .message
            .as_deref()
            .or(self.last_log.as_deref())
            .unwrap_or("Ctrl+Q quit  Ctrl+S save  Ctrl+B files");
        let width = usize::from(area.width);
        let right = truncate_to_width(right, width.saturating_sub(left.width() + 1));
        let gap = width.saturating_sub(left.width() + right.width() + 1);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(left),
                Span::raw(" ".repeat(gap)),
                Span::raw(right),
                Span::raw(" "),
            ]))
            .style(style),
            area,
        );
    }
}

fn gutter_width(surface: &TextSurface) -> u16 {
    if !surface.options().line_numbers {
        return 0;
    }
    let digits = surface.line_count().max(1).to_string().len().max(3);
    digits as u16 + 1
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w + 1 > max {
            break;
        }
        out.push_str(g);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}
