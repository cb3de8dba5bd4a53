//! Main application struct and run loop.
//!
//! This module provides the [`App`] struct which owns the card repository
//! and the UI state, turns [`Message`]s into repository commands, and
//! renders each frame.
//!
//! Overlays take input in a fixed order: a pending confirmation first, then
//! the card form, then the import prompt, then the help overlay, and finally
//! the board itself.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, warn};
use tracker_protocol::{
    BoardView, Card, CardId, Command, INVALID_IMPORT_NOTICE, Message, Outcome, ProjectFilter,
    Status, export_document, export_file_name, filter_options, import_prompt, parse_import,
    project_suggestions,
};
use tracker_store::{BlobStore, CardRepository, FileSave, read_import_file};

use crate::{
    AppState,
    event::{InputMode, event_to_message, poll_event},
    form::{CardForm, FormField, FormSubmit, TextInput},
    layout::{
        CONFIRM_HEIGHT, CONFIRM_WIDTH, FORM_HEIGHT, FORM_WIDTH, MIN_HEIGHT, MIN_WIDTH,
        PROMPT_HEIGHT, PROMPT_WIDTH, ScreenLayout, centered_rect, column_areas,
    },
    terminal::AppTerminal,
    widgets::{
        BoardHighlight, LanePosition, Notice, card_at, render_board, render_card_form,
        render_confirm_dialog, render_help_overlay, render_import_prompt, render_status_bar,
    },
};

/// A yes/no question waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Delete the card with this id.
    Delete {
        /// The card to delete.
        id: CardId,
    },
    /// Replace the whole collection with these cards.
    Import(Vec<Card>),
}

impl PendingConfirmation {
    /// Returns the question shown in the dialog.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Delete { .. } => "Delete this card?".to_string(),
            Self::Import(cards) => import_prompt(cards.len()),
        }
    }
}

/// A card being dragged with the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    id: CardId,
    from: Status,
    /// Column under the pointer, if it is over the board.
    hover: Option<Status>,
}

/// The main application struct.
///
/// `S` is where cards are persisted and `F` is where exports are written.
pub struct App<S, F> {
    repository: CardRepository<S>,
    saver: F,
    state: AppState,
    filter: ProjectFilter,
    form: Option<CardForm>,
    prompt: Option<TextInput>,
    confirmation: Option<PendingConfirmation>,
    notice: Option<Notice>,
    drag: Option<Drag>,
    /// Import file waiting to be read by the run loop.
    pending_import: Option<PathBuf>,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
}

impl<S: BlobStore, F: FileSave> App<S, F> {
    /// Creates a new application over a loaded repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_store::{CardRepository, DirectoryFileSave, MemoryBlobStore};
    /// use tracker_tui::App;
    ///
    /// let repository = CardRepository::load(MemoryBlobStore::new());
    /// let app = App::new(repository, DirectoryFileSave::new("."));
    /// assert!(app.board().is_empty());
    /// ```
    #[must_use]
    pub fn new(repository: CardRepository<S>, saver: F) -> Self {
        Self {
            repository,
            saver,
            state: AppState::new(),
            filter: ProjectFilter::All,
            form: None,
            prompt: None,
            confirmation: None,
            notice: None,
            drag: None,
            pending_import: None,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Returns the selection state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &tracker_protocol::Board {
        self.repository.board()
    }

    /// Returns the active project filter.
    #[must_use]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Returns the notice shown in the status bar, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns `true` once the user has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns which key map applies to the next key press.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.confirmation.is_some() {
            InputMode::Confirm
        } else if self.form.is_some() {
            InputMode::Form
        } else if self.prompt.is_some() {
            InputMode::Prompt
        } else {
            InputMode::Board
        }
    }

    /// Updates the application state based on a message.
    ///
    /// `Quit` works everywhere. Otherwise the topmost open overlay gets the
    /// message; while help is visible any message just dismisses it.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            info!("quit requested");
            self.should_quit = true;
            return;
        }

        if !msg.is_pointer() {
            self.notice = None;
        }

        if self.confirmation.is_some() {
            self.update_confirmation(msg);
        } else if self.form.is_some() {
            self.update_form(msg);
        } else if self.prompt.is_some() {
            self.update_prompt(msg);
        } else if self.state.help_visible {
            // Releasing the button that dismissed help must not start a drop.
            if !matches!(msg, Message::ReleaseAt { .. } | Message::DragTo { .. }) {
                let _ = self.state.dismiss_help();
            }
        } else {
            self.update_board(msg);
        }
    }

    fn update_board(&mut self, msg: Message) {
        match msg {
            _ if msg.is_navigation() => {
                let view = BoardView::derive(self.repository.board(), &self.filter);
                match msg {
                    Message::NavigateLeft => self.state.navigate_left(&view),
                    Message::NavigateRight => self.state.navigate_right(&view),
                    Message::NavigateUp => self.state.navigate_up(&view),
                    _ => self.state.navigate_down(&view),
                }
            }
            Message::Select => {
                if let Some((id, _)) = self.selected_card() {
                    self.open_edit(id);
                }
            }
            Message::Escape => self.state.clear_selection(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NewCard => self.form = Some(CardForm::new_card()),
            Message::DeleteCard => {
                if let Some((id, _)) = self.selected_card() {
                    self.confirmation = Some(PendingConfirmation::Delete { id });
                }
            }
            Message::MoveCardLeft | Message::MoveCardRight => {
                let Some((id, status)) = self.selected_card() else {
                    return;
                };
                let target = if msg == Message::MoveCardLeft {
                    status.previous()
                } else {
                    status.next()
                };
                if let Some(target) = target {
                    self.move_card(id, target);
                }
            }
            Message::CycleFilter => {
                let options = filter_options(self.repository.board());
                self.filter = self.filter.cycle(&options);
                debug!(filter = %self.filter, "filter changed");
                self.clamp_selection();
            }
            Message::Export => self.export(),
            Message::StartImport => self.prompt = Some(TextInput::default()),
            Message::PressAt { column, row } => self.press(column, row),
            Message::DragTo { column, row } => {
                let hover = self.column_at(column, row).map(|(status, _)| status);
                if let Some(drag) = &mut self.drag {
                    drag.hover = hover;
                }
            }
            Message::ReleaseAt { column, row } => self.release(column, row),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        let completion = self.project_completion().map(str::to_owned);
        let Some(form) = &mut self.form else {
            return;
        };

        match msg {
            Message::Cancel | Message::Escape => self.form = None,
            Message::Submit => match form.submit() {
                FormSubmit::Accepted(command) => {
                    self.form = None;
                    self.submit(command);
                }
                FormSubmit::EmptyTitle => debug!("ignoring submit with empty title"),
                FormSubmit::InvalidDeadline => debug!("ignoring submit with invalid deadline"),
            },
            Message::NextField => match completion {
                Some(completion) if form.focus() == FormField::Project => {
                    form.complete_project(&completion);
                }
                _ => form.next_field(),
            },
            Message::PrevField => form.prev_field(),
            Message::FieldLeft => form.left(),
            Message::FieldRight => form.right(),
            Message::Backspace => form.backspace(),
            Message::Input { ch } => form.insert_char(ch),
            Message::DeleteCard => {
                if let Some(id) = form.editing() {
                    self.confirmation = Some(PendingConfirmation::Delete { id });
                }
            }
            Message::PressAt { column, row } => {
                if self.outside_modal(FORM_WIDTH, FORM_HEIGHT, column, row) {
                    self.form = None;
                }
            }
            _ => {}
        }
    }

    fn update_prompt(&mut self, msg: Message) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };

        match msg {
            Message::Cancel | Message::Escape => self.prompt = None,
            Message::Submit => {
                let path = prompt.value().trim();
                if !path.is_empty() {
                    info!(path, "import requested");
                    self.pending_import = Some(PathBuf::from(path));
                    self.prompt = None;
                }
            }
            Message::FieldLeft => prompt.move_left(),
            Message::FieldRight => prompt.move_right(),
            Message::Backspace => prompt.backspace(),
            Message::Input { ch } => prompt.insert_char(ch),
            Message::PressAt { column, row } => {
                if self.outside_modal(PROMPT_WIDTH, PROMPT_HEIGHT, column, row) {
                    self.prompt = None;
                }
            }
            _ => {}
        }
    }

    fn update_confirmation(&mut self, msg: Message) {
        match msg {
            Message::Confirm => {
                let Some(confirmation) = self.confirmation.take() else {
                    return;
                };
                match confirmation {
                    PendingConfirmation::Delete { id } => {
                        if self.form.as_ref().and_then(CardForm::editing) == Some(id) {
                            self.form = None;
                        }
                        let _ = self.dispatch(Command::Delete { id });
                    }
                    PendingConfirmation::Import(cards) => {
                        let count = cards.len();
                        let outcome = self.dispatch(Command::Replace(cards));
                        // A save failure has already set an error notice.
                        if outcome.is_changed() && self.notice.is_none() {
                            self.notice = Some(Notice::info(format!("Imported {count} cards")));
                        }
                    }
                }
            }
            Message::Deny | Message::Cancel | Message::Escape => self.confirmation = None,
            Message::PressAt { column, row } => {
                if self.outside_modal(CONFIRM_WIDTH, CONFIRM_HEIGHT, column, row) {
                    self.confirmation = None;
                }
            }
            _ => {}
        }
    }

    /// Dispatches a form command and selects the card it produced.
    fn submit(&mut self, command: Command) {
        let target = match &command {
            Command::Update { id, .. } => Some(*id),
            _ => None,
        };
        if !self.dispatch(command).is_changed() {
            return;
        }
        let id = target.or_else(|| self.repository.board().cards().last().map(|c| c.id));
        if let Some(id) = id {
            self.select(id);
        }
    }

    fn move_card(&mut self, id: CardId, status: Status) {
        if self.dispatch(Command::Move { id, status }).is_changed() {
            self.select(id);
        }
    }

    /// Applies a command through the repository and brings the view back in
    /// line with the new collection.
    fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        let outcome = match self.repository.dispatch(command, Utc::now()) {
            Ok(outcome) => outcome,
            Err(e) => {
                // The board keeps the change even though it was not written.
                warn!(command = name, error = %e, "failed to save cards");
                self.notice = Some(Notice::error(format!("Could not save changes: {e}")));
                Outcome::Changed
            }
        };

        if outcome.is_changed() {
            debug!(command = name, "board changed");
            let options = filter_options(self.repository.board());
            self.filter = std::mem::take(&mut self.filter).reconcile(&options);
            self.clamp_selection();
        }
        outcome
    }

    /// Returns the id and status of the selected card.
    fn selected_card(&self) -> Option<(CardId, Status)> {
        let view = BoardView::derive(self.repository.board(), &self.filter);
        self.state.selected(&view).map(|card| (card.id, card.status))
    }

    fn select(&mut self, id: CardId) {
        let view = BoardView::derive(self.repository.board(), &self.filter);
        if !self.state.select_card(&view, id) {
            self.state.clamp(&view);
        }
    }

    fn clamp_selection(&mut self) {
        let view = BoardView::derive(self.repository.board(), &self.filter);
        self.state.clamp(&view);
    }

    fn open_edit(&mut self, id: CardId) {
        if let Some(card) = self.repository.board().get(id) {
            self.form = Some(CardForm::edit(card));
        }
    }

    /// Returns the project completion offered by the open form, if any.
    fn project_completion(&self) -> Option<&str> {
        let form = self.form.as_ref()?;
        let prefix = form.input(FormField::Project)?.value();
        let suggestions = project_suggestions(self.repository.board(), prefix);
        form.project_completion(&suggestions)
    }

    fn export(&mut self) {
        let cards = self.repository.board().cards();
        let name = export_file_name(today());
        let result = export_document(cards)
            .map_err(anyhow::Error::from)
            .and_then(|document| {
                self.saver
                    .save_file(&name, &document)
                    .map_err(anyhow::Error::from)
            });

        self.notice = Some(match result {
            Ok(path) => {
                info!(path = %path.display(), cards = cards.len(), "exported cards");
                Notice::info(format!(
                    "Exported {} cards to {}",
                    cards.len(),
                    path.display()
                ))
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                Notice::error(format!("Export failed: {e}"))
            }
        });
    }

    /// Reads the file requested through the import prompt, if any.
    ///
    /// The run loop calls this after every update; it does nothing when no
    /// import is pending.
    pub async fn process_pending_import(&mut self) {
        if let Some(path) = self.pending_import.take() {
            let result = read_import_file(&path).await;
            self.finish_import(&path, result);
        }
    }

    /// Handles the contents of an import file.
    ///
    /// Valid content asks for confirmation before replacing the board;
    /// anything else leaves the board alone and shows a notice.
    fn finish_import(&mut self, path: &Path, result: tracker_store::Result<String>) {
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read import file");
                self.notice = Some(Notice::error(format!(
                    "Could not read {}: {e}",
                    path.display()
                )));
                return;
            }
        };

        match parse_import(&text, Utc::now()) {
            Ok(cards) => {
                debug!(cards = cards.len(), "import file parsed");
                self.confirmation = Some(PendingConfirmation::Import(cards));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "rejected import file");
                self.notice = Some(Notice::error(INVALID_IMPORT_NOTICE));
            }
        }
    }

    // --- Mouse ---

    fn press(&mut self, column: u16, row: u16) {
        self.drag = None;
        if let Some((id, status)) = self.card_at_position(column, row) {
            self.select(id);
            self.drag = Some(Drag {
                id,
                from: status,
                hover: Some(status),
            });
        } else if let Some((status, _)) = self.column_at(column, row) {
            self.state.selected_column = status.index();
            self.clamp_selection();
        }
    }

    fn release(&mut self, column: u16, row: u16) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        match self.column_at(column, row) {
            Some((status, _)) if status == drag.from => {
                debug!(id = %drag.id, "card clicked");
                self.open_edit(drag.id);
            }
            Some((status, _)) => {
                debug!(id = %drag.id, to = %status, "card dropped");
                self.move_card(drag.id, status);
            }
            None => debug!("drag released outside the board"),
        }
    }

    /// Returns the column under a screen position.
    fn column_at(&self, x: u16, y: u16) -> Option<(Status, Rect)> {
        let layout = ScreenLayout::compute(self.last_area)?;
        let position = Position::new(x, y);
        if !layout.board.contains(position) {
            return None;
        }
        column_areas(layout.board)
            .into_iter()
            .zip(Status::all())
            .find(|(area, _)| area.contains(position))
            .map(|(area, status)| (status, area))
    }

    /// Returns the id and status of the card under a screen position.
    fn card_at_position(&self, x: u16, y: u16) -> Option<(CardId, Status)> {
        let (status, area) = self.column_at(x, y)?;
        let view = BoardView::derive(self.repository.board(), &self.filter);
        let column = view.column(status);
        let selection = if self.state.selected_column == status.index() {
            self.state.selected_card
        } else {
            None
        };
        let idx = card_at(
            area,
            LanePosition::for_index(status.index(), view.columns.len()),
            column.count(),
            selection,
            y,
        )?;
        column.cards.get(idx).map(|card| (card.id, card.status))
    }

    fn outside_modal(&self, width: u16, height: u16, x: u16, y: u16) -> bool {
        !centered_rect(width, height, self.last_area).contains(Position::new(x, y))
    }

    // --- Rendering ---

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below the minimum dimensions a "terminal too small" message is shown.
    /// - When height is tight the header is hidden to reclaim space.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let Some(layout) = ScreenLayout::compute(area) else {
            render_terminal_too_small(frame, area);
            return;
        };

        if let Some(header) = layout.header {
            self.render_header(frame, header);
        }

        let view = BoardView::derive(self.repository.board(), &self.filter);
        let highlight = BoardHighlight {
            selected_column: self.state.selected_column,
            selected_card: self.state.selected_card,
            drop_target: self.drag.and_then(|d| d.hover.filter(|s| *s != d.from)),
        };
        let mode = self.input_mode();
        let buf = frame.buffer_mut();

        render_board(&view, highlight, today(), layout.board, buf);
        render_status_bar(mode, self.notice.as_ref(), layout.status_bar, buf);

        if let Some(form) = &self.form {
            render_card_form(form, self.project_completion(), area, buf);
        }
        if let Some(prompt) = &self.prompt {
            render_import_prompt(prompt, area, buf);
        }
        if let Some(confirmation) = &self.confirmation {
            render_confirm_dialog(&confirmation.message(), area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders the header bar with title, active filter, and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let filter_style = match self.filter {
            ProjectFilter::All => Style::default().fg(Color::DarkGray),
            ProjectFilter::Project(_) => Style::default().fg(Color::Magenta),
        };
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Project Tracker",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Filter: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.filter.to_string(), filter_style),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Each iteration draws a frame, waits up to 100 ms for an input event,
    /// applies it, and then performs a pending import read if one was
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tracker_store::{CardRepository, DirectoryFileSave, MemoryBlobStore};
    /// use tracker_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let repository = CardRepository::load(MemoryBlobStore::new());
    ///     let mut app = App::new(repository, DirectoryFileSave::new("."));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(cards = self.repository.board().len(), "starting event loop");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.input_mode())
            {
                self.update(msg);
            }

            self.process_pending_import().await;

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };

    frame.render_widget(paragraph, centered_area);
}
