//! Card form and text input state.
//!
//! The add/edit modal is a [`CardForm`]: four text fields and a status
//! selector, one of which has focus. The import path prompt reuses
//! [`TextInput`] on its own.

use chrono::NaiveDate;
use tracker_protocol::{Card, CardDraft, CardId, Command, Status};

/// Date format accepted by the deadline field.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// A single-line text value with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    /// Byte offset of the cursor within `value`.
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }
}

/// Fields of the card form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Card title (required).
    #[default]
    Title,
    /// Free-text description.
    Description,
    /// Project tag, with autocomplete.
    Project,
    /// Deadline date.
    Deadline,
    /// Column the card is in.
    Status,
}

impl FormField {
    /// Returns all fields in focus order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Title,
            Self::Description,
            Self::Project,
            Self::Deadline,
            Self::Status,
        ]
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Project => "Project",
            Self::Deadline => "Deadline",
            Self::Status => "Status",
        }
    }

    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Project,
            Self::Project => Self::Deadline,
            Self::Deadline => Self::Status,
            Self::Status => Self::Title,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Status,
            Self::Description => Self::Title,
            Self::Project => Self::Description,
            Self::Deadline => Self::Project,
            Self::Status => Self::Deadline,
        }
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmit {
    /// The form is valid; dispatch this command and close the form.
    Accepted(Command),
    /// The title is blank. Nothing happens and the form stays open.
    EmptyTitle,
    /// The deadline could not be parsed. The form stays open with a hint.
    InvalidDeadline,
}

/// State of the add/edit card modal.
///
/// # Examples
///
/// ```
/// use tracker_protocol::Command;
/// use tracker_tui::form::{CardForm, FormSubmit};
///
/// let mut form = CardForm::new_card();
/// for ch in "Write docs".chars() {
///     form.insert_char(ch);
/// }
/// assert!(matches!(form.submit(), FormSubmit::Accepted(Command::Create(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    editing: Option<CardId>,
    title: TextInput,
    description: TextInput,
    project: TextInput,
    deadline: TextInput,
    status: Status,
    focus: FormField,
    deadline_error: bool,
}

impl CardForm {
    /// Creates an empty form for a new Backlog card.
    #[must_use]
    pub fn new_card() -> Self {
        Self {
            editing: None,
            title: TextInput::default(),
            description: TextInput::default(),
            project: TextInput::default(),
            deadline: TextInput::default(),
            status: Status::Backlog,
            focus: FormField::Title,
            deadline_error: false,
        }
    }

    /// Creates a form pre-filled from an existing card.
    #[must_use]
    pub fn edit(card: &Card) -> Self {
        Self {
            editing: Some(card.id),
            title: TextInput::new(card.title.as_str()),
            description: TextInput::new(card.description.as_str()),
            project: TextInput::new(card.project.as_str()),
            deadline: TextInput::new(
                card.deadline
                    .map(|d| d.format(DEADLINE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            status: card.status,
            focus: FormField::Title,
            deadline_error: false,
        }
    }

    /// Returns the id of the card being edited, or `None` for a new card.
    #[must_use]
    pub fn editing(&self) -> Option<CardId> {
        self.editing
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the selected status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` if the last submit failed on the deadline.
    #[must_use]
    pub fn deadline_error(&self) -> bool {
        self.deadline_error
    }

    /// Returns the text input for a field, or `None` for the status selector.
    #[must_use]
    pub fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Description => Some(&self.description),
            FormField::Project => Some(&self.project),
            FormField::Deadline => Some(&self.deadline),
            FormField::Status => None,
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Project => Some(&mut self.project),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Status => None,
        }
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if self.focus == FormField::Deadline {
            self.deadline_error = false;
        }
        if let Some(input) = self.focused_input_mut() {
            input.insert_char(ch);
        }
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        if self.focus == FormField::Deadline {
            self.deadline_error = false;
        }
        if let Some(input) = self.focused_input_mut() {
            input.backspace();
        }
    }

    /// Left arrow: previous status on the status field, otherwise moves the
    /// cursor.
    pub fn left(&mut self) {
        match self.focused_input_mut() {
            Some(input) => input.move_left(),
            None => self.status = cycle_status(self.status, false),
        }
    }

    /// Right arrow: next status on the status field, otherwise moves the
    /// cursor.
    pub fn right(&mut self) {
        match self.focused_input_mut() {
            Some(input) => input.move_right(),
            None => self.status = cycle_status(self.status, true),
        }
    }

    /// Returns the project completion to offer for the current input.
    ///
    /// Only a suggestion that would change the text is offered, so an exact
    /// match yields `None`.
    #[must_use]
    pub fn project_completion<'a>(&self, suggestions: &[&'a str]) -> Option<&'a str> {
        let current = self.project.value().trim();
        if current.is_empty() {
            return None;
        }
        suggestions.iter().copied().find(|s| *s != current)
    }

    /// Replaces the project text with `completion`.
    pub fn complete_project(&mut self, completion: &str) {
        self.project.set(completion);
    }

    /// Validates the form and builds the command to dispatch.
    ///
    /// Records a deadline error so the modal can show a hint.
    pub fn submit(&mut self) -> FormSubmit {
        let Ok(draft) = CardDraft::new(self.title.value()) else {
            return FormSubmit::EmptyTitle;
        };

        let deadline = match parse_deadline(self.deadline.value()) {
            Ok(deadline) => deadline,
            Err(()) => {
                self.deadline_error = true;
                return FormSubmit::InvalidDeadline;
            }
        };

        let draft = draft
            .with_description(self.description.value())
            .with_project(self.project.value())
            .with_deadline(deadline)
            .with_status(self.status);

        FormSubmit::Accepted(match self.editing {
            Some(id) => Command::Update { id, draft },
            None => Command::Create(draft),
        })
    }
}

/// Parses deadline input. Blank input means no deadline.
fn parse_deadline(text: &str) -> Result<Option<NaiveDate>, ()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DEADLINE_FORMAT)
        .map(Some)
        .map_err(|_| ())
}

fn cycle_status(status: Status, forward: bool) -> Status {
    let len = Status::all().len();
    let idx = if forward {
        (status.index() + 1) % len
    } else {
        (status.index() + len - 1) % len
    };
    Status::from_index(idx).unwrap_or(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn type_str(form: &mut CardForm, text: &str) {
        for ch in text.chars() {
            form.insert_char(ch);
        }
    }

    #[test]
    fn text_input_editing() {
        let mut input = TextInput::new("héllo");
        input.backspace();
        assert_eq!(input.value(), "héll");

        input.move_left();
        input.move_left();
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.value(), "hXéll");

        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "hXll");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn text_input_boundaries() {
        let mut input = TextInput::default();
        input.backspace();
        input.move_left();
        input.move_right();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn field_cycle_wraps() {
        let mut form = CardForm::new_card();
        for _ in 0..FormField::all().len() {
            form.next_field();
        }
        assert_eq!(form.focus(), FormField::Title);
        form.prev_field();
        assert_eq!(form.focus(), FormField::Status);
    }

    #[test]
    fn status_field_cycles() {
        let mut form = CardForm::new_card();
        form.prev_field();
        form.right();
        assert_eq!(form.status(), Status::InProgress);
        form.left();
        form.left();
        assert_eq!(form.status(), Status::Done);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut form = CardForm::new_card();
        type_str(&mut form, "   ");
        assert_eq!(form.submit(), FormSubmit::EmptyTitle);
    }

    #[test]
    fn invalid_deadline_sets_hint_until_edited() {
        let mut form = CardForm::new_card();
        type_str(&mut form, "Card");
        form.focus = FormField::Deadline;
        type_str(&mut form, "next week");

        assert_eq!(form.submit(), FormSubmit::InvalidDeadline);
        assert!(form.deadline_error());

        form.backspace();
        assert!(!form.deadline_error());
    }

    #[test]
    fn submit_new_card_builds_create() {
        let mut form = CardForm::new_card();
        type_str(&mut form, "  Ship  ");
        form.next_field();
        type_str(&mut form, "soon");
        form.next_field();
        type_str(&mut form, " web ");
        form.next_field();
        type_str(&mut form, "2024-02-01");

        let FormSubmit::Accepted(Command::Create(draft)) = form.submit() else {
            panic!("expected create");
        };
        let card = Card::create(draft, Utc::now());
        assert_eq!(card.title, "Ship");
        assert_eq!(card.description, "soon");
        assert_eq!(card.project, "web");
        assert_eq!(card.deadline, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(card.status, Status::Backlog);
    }

    #[test]
    fn edit_prefills_and_builds_update() {
        let draft = CardDraft::new("Old")
            .unwrap()
            .with_project("ops")
            .with_deadline(NaiveDate::from_ymd_opt(2024, 3, 4))
            .with_status(Status::Done);
        let card = Card::create(draft, Utc::now());

        let mut form = CardForm::edit(&card);
        assert_eq!(form.editing(), Some(card.id));
        assert_eq!(form.input(FormField::Deadline).unwrap().value(), "2024-03-04");
        assert_eq!(form.status(), Status::Done);

        assert!(matches!(
            form.submit(),
            FormSubmit::Accepted(Command::Update { id, .. }) if id == card.id
        ));
    }

    #[test]
    fn blank_deadline_clears_it() {
        assert_eq!(parse_deadline("  "), Ok(None));
        assert!(parse_deadline("2024-13-01").is_err());
    }

    #[test]
    fn project_completion() {
        let mut form = CardForm::new_card();
        form.focus = FormField::Project;
        assert_eq!(form.project_completion(&["Website"]), None);

        type_str(&mut form, "we");
        assert_eq!(form.project_completion(&["Website"]), Some("Website"));

        form.complete_project("Website");
        assert_eq!(form.input(FormField::Project).unwrap().value(), "Website");
        assert_eq!(form.project_completion(&["Website"]), None);
    }
}
