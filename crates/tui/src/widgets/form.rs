//! Add/edit card modal and single-line input rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::card::take_width;
use crate::form::{CardForm, FormField, TextInput};
use crate::layout::{FORM_HEIGHT, FORM_WIDTH, centered_rect};

/// Width of the label column in the form, including the separator.
const LABEL_WIDTH: usize = 14;

/// Renders the add/edit card modal centered in `area`.
///
/// `completion` is the project suggestion to offer, if any; the app looks
/// it up from the board because the form does not know the project names.
///
/// ```text
/// ╭ New card ──────────────────────────────╮
/// │ Title       │ Write docs▏              │
/// │ Description │                          │
/// │ Project     │ we                       │
/// │ Deadline    │ 2024-01-12               │
/// │ Status      │ ← Backlog →              │
/// │                                        │
/// │ Tab: complete "web"                    │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_tui::form::CardForm;
/// use tracker_tui::widgets::render_card_form;
///
/// let form = CardForm::new_card();
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_card_form(&form, None, area, &mut buf);
/// ```
pub fn render_card_form(form: &CardForm, completion: Option<&str>, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup, buf);

    let title = if form.editing().is_some() {
        " Edit card "
    } else {
        " New card "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));

    let inner = block.inner(popup);
    block.render(popup, buf);

    let value_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH + 1);
    let mut lines: Vec<Line<'_>> = FormField::all()
        .into_iter()
        .map(|field| field_line(form, field, value_width))
        .collect();

    lines.push(Line::from(""));
    if form.deadline_error() {
        lines.push(Line::from(Span::styled(
            " Deadline must be a date like 2024-01-31",
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(completion) = completion.filter(|_| form.focus() == FormField::Project) {
        lines.push(Line::from(vec![
            Span::styled(" Tab", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(": complete \"{completion}\""),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let mut hints = vec![
        Span::styled(" Enter", key_style),
        Span::styled(" Save  ", text_style),
        Span::styled("Tab", key_style),
        Span::styled(" Next  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" Cancel", text_style),
    ];
    if form.editing().is_some() {
        hints.push(Span::styled("  Ctrl+D", key_style));
        hints.push(Span::styled(" Delete", text_style));
    }

    let hint_row = inner.height.saturating_sub(1);
    Paragraph::new(lines).render(
        Rect {
            height: hint_row,
            ..inner
        },
        buf,
    );
    if inner.height > 0 {
        Paragraph::new(Line::from(hints)).render(
            Rect {
                y: inner.y + hint_row,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

fn field_line(form: &CardForm, field: FormField, width: usize) -> Line<'static> {
    let focused = form.focus() == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(
        format!(" {:<w$}│ ", field.label(), w = LABEL_WIDTH - 3),
        label_style,
    )];

    match form.input(field) {
        Some(input) => spans.extend(input_spans(input, focused, width)),
        None => {
            let arrow_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled("← ", arrow_style));
            spans.push(Span::styled(
                form.status().display_name(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(" →", arrow_style));
        }
    }

    Line::from(spans)
}

/// Splits an input into spans, drawing the cursor as a reversed cell when
/// focused. Long values scroll so the cursor stays visible.
pub(super) fn input_spans(input: &TextInput, focused: bool, width: usize) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(Color::White);
    let chars: Vec<char> = input.value().chars().collect();

    if width == 0 {
        return Vec::new();
    }
    if !focused {
        let shown = take_width(input.value(), width).to_string();
        return vec![Span::styled(shown, text_style)];
    }

    let cursor = input.value()[..input.cursor()].chars().count();
    let start = (cursor + 1).saturating_sub(width);
    let before: String = chars[start..cursor].iter().collect();
    let at = chars.get(cursor).map_or(' ', |c| *c);
    let after: String = chars
        .iter()
        .skip(cursor + 1)
        .take(width.saturating_sub(cursor + 1 - start))
        .collect();

    vec![
        Span::styled(before, text_style),
        Span::styled(at.to_string(), text_style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, text_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::Utc;
    use tracker_protocol::{Card, CardDraft, Status};

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn new_form_shows_all_fields() {
        let form = CardForm::new_card();
        let mut buf = Buffer::empty(area());

        render_card_form(&form, None, area(), &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New card"));
        for field in FormField::all() {
            assert!(content.contains(field.label()));
        }
        assert!(content.contains("← Backlog →"));
        assert!(!content.contains("Ctrl+D"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let draft = CardDraft::new("Fix login")
            .unwrap()
            .with_project("web")
            .with_status(Status::Done);
        let card = Card::create(draft, Utc::now());
        let form = CardForm::edit(&card);
        let mut buf = Buffer::empty(area());

        render_card_form(&form, None, area(), &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Edit card"));
        assert!(content.contains("Fix login"));
        assert!(content.contains("web"));
        assert!(content.contains("← Done →"));
        assert!(content.contains("Ctrl+D Delete"));
    }

    #[test]
    fn completion_hint_only_on_project_field() {
        let mut form = CardForm::new_card();
        let mut buf = Buffer::empty(area());
        render_card_form(&form, Some("web"), area(), &mut buf);
        assert!(!buffer_to_string(&buf).contains("complete"));

        form.next_field();
        form.next_field();
        let mut buf = Buffer::empty(area());
        render_card_form(&form, Some("web"), area(), &mut buf);
        assert!(buffer_to_string(&buf).contains("Tab: complete \"web\""));
    }

    #[test]
    fn deadline_error_hint() {
        let mut form = CardForm::new_card();
        form.insert_char('x');
        for _ in 0..3 {
            form.next_field();
        }
        for ch in "soon".chars() {
            form.insert_char(ch);
        }
        let _ = form.submit();
        let mut buf = Buffer::empty(area());

        render_card_form(&form, None, area(), &mut buf);

        assert!(buffer_to_string(&buf).contains("Deadline must be a date"));
    }

    #[test]
    fn focused_input_draws_cursor() {
        let input = TextInput::new("abc");
        let spans = input_spans(&input, true, 10);
        assert_eq!(spans[0].content, "abc");
        assert_eq!(spans[1].content, " ");
        assert!(spans[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn long_input_scrolls_to_cursor() {
        let input = TextInput::new("abcdefghij");
        let spans = input_spans(&input, true, 5);
        let shown: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(shown, "ghij ");
    }

    #[test]
    fn cursor_in_middle_keeps_tail() {
        let mut input = TextInput::new("abcd");
        input.move_left();
        input.move_left();
        let spans = input_spans(&input, true, 10);
        assert_eq!(spans[0].content, "ab");
        assert_eq!(spans[1].content, "c");
        assert_eq!(spans[2].content, "d");
    }

    #[test]
    fn unfocused_wide_input_fits_width() {
        let input = TextInput::new("日本語のメモ");
        let spans = input_spans(&input, false, 5);
        assert_eq!(spans[0].content, "日本");
    }
}
