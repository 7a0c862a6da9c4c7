use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::save_menu;
use crate::models::{CourseFilter, MenuItem};
use crate::store::MenuStore;

use super::forms::{ConfirmDishDelete, DishField, DishForm};
use super::helpers::{
    average_line, centered_rect, cursor_column, dish_card_lines, visible_window,
};
use super::screens::{FilterScreen, Selection};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per dish card in list views.
const DISH_CARD_HEIGHT: u16 = 6;
/// Rows taken by the title and dish count on the home screen.
const HEADER_HEIGHT: u16 = 3;
/// Averages panel: one row per course plus borders.
const AVERAGES_HEIGHT: u16 = 5;
const PAGE_STEP: isize = 5;

/// Top-level navigation states.
enum Screen {
    Welcome,
    Home,
    Filter(FilterScreen),
}

/// Modal state layered over the current screen.
enum Mode {
    Normal,
    AddingDish(DishForm),
    ConfirmDelete(ConfirmDishDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Owns the menu store and
/// the database handle the store is mirrored to.
pub struct App {
    conn: Connection,
    store: MenuStore,
    selection: Selection,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(conn: Connection, store: MenuStore) -> Self {
        Self {
            conn,
            store,
            selection: Selection::default(),
            screen: Screen::Welcome,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Route a key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingDish(form) => self.handle_add_dish(code, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Welcome => match code {
                KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.screen = Screen::Home;
                }
                _ => {}
            },
            Screen::Home => {
                let len = self.store.len();
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc => {
                        self.clear_status();
                        self.screen = Screen::Welcome;
                    }
                    KeyCode::Up => self.selection.move_by(-1, len),
                    KeyCode::Down => self.selection.move_by(1, len),
                    KeyCode::PageUp => self.selection.move_by(-PAGE_STEP, len),
                    KeyCode::PageDown => self.selection.move_by(PAGE_STEP, len),
                    KeyCode::Home => self.selection.first(),
                    KeyCode::End => self.selection.last(len),
                    KeyCode::Char('f') | KeyCode::Char('F') => {
                        self.clear_status();
                        self.screen = Screen::Filter(FilterScreen::new());
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('+') => {
                        self.clear_status();
                        let mut form = DishForm::default();
                        form.focus(DishField::Name);
                        return Ok(Mode::AddingDish(form));
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('-') => {
                        if let Some(item) = self.current_dish() {
                            let confirm = ConfirmDishDelete::from(item);
                            self.clear_status();
                            return Ok(Mode::ConfirmDelete(confirm));
                        }
                        self.set_status("No dish selected to delete.", StatusKind::Error);
                    }
                    KeyCode::Enter => {
                        if let Some(item) = self.current_dish().cloned() {
                            self.open_image(&item);
                        }
                    }
                    _ => {}
                }
            }
            Screen::Filter(ref mut filter) => {
                let len = self.store.filter(filter.filter).len();
                let mut back_home = false;
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('F') => back_home = true,
                    KeyCode::Left | KeyCode::BackTab => filter.set_filter(filter.filter.previous()),
                    KeyCode::Right | KeyCode::Tab => filter.set_filter(filter.filter.next()),
                    KeyCode::Char(ch @ '1'..='4') => {
                        let index = ch as usize - '1' as usize;
                        filter.set_filter(CourseFilter::OPTIONS[index]);
                    }
                    KeyCode::Up => filter.selection.move_by(-1, len),
                    KeyCode::Down => filter.selection.move_by(1, len),
                    KeyCode::PageUp => filter.selection.move_by(-PAGE_STEP, len),
                    KeyCode::PageDown => filter.selection.move_by(PAGE_STEP, len),
                    KeyCode::Home => filter.selection.first(),
                    KeyCode::End => filter.selection.last(len),
                    _ => {}
                }
                if back_home {
                    self.screen = Screen::Home;
                }
            }
        }
        Ok(Mode::Normal)
    }

    fn handle_add_dish(&mut self, code: KeyCode, mut form: DishForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add dish cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left if form.active == DishField::Course => form.previous_course(),
            KeyCode::Right if form.active == DishField::Course => form.next_course(),
            KeyCode::Char(' ') if form.active == DishField::Course => form.next_course(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.add(&form.to_draft()) {
                Ok(item) => {
                    let message = format!("Added {}.", item.name);
                    self.selection.last(self.store.len());
                    self.persist();
                    self.set_status(message, StatusKind::Info);
                    keep_open = false;
                }
                Err(err) => {
                    debug!(error = %err, "dish rejected");
                    let message = err.to_string();
                    form.focus(err.field().into());
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingDish(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDishDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.perform_delete(&confirm);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn perform_delete(&mut self, confirm: &ConfirmDishDelete) {
        if self.store.delete(&confirm.id).is_some() {
            self.persist();
            self.set_status(format!("Deleted {}.", confirm.name), StatusKind::Info);
        }
        self.selection.clamp(self.store.len());
    }

    /// Mirror the store to disk. Failures are logged by `save_menu` and never
    /// undo the in-memory change.
    fn persist(&self) {
        save_menu(&self.conn, self.store.list());
    }

    fn open_image(&mut self, item: &MenuItem) {
        let Some(image) = item.image.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            self.set_status("This dish does not have an image.", StatusKind::Error);
            return;
        };
        match open_link(image) {
            Ok(()) => self.set_status(format!("Opened image for {}.", item.name), StatusKind::Info),
            Err(err) => {
                warn!(error = %err, url = image, "failed to open image");
                self.set_status(format!("Failed to open image: {err}"), StatusKind::Error);
            }
        }
    }

    fn current_dish(&self) -> Option<&MenuItem> {
        self.store.list().get(self.selection.index)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Welcome => self.draw_welcome(frame, content_area),
            Screen::Home => self.draw_home(frame, content_area),
            Screen::Filter(filter) => self.draw_filter(frame, content_area, filter),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingDish(form) => self.draw_dish_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let top_padding = inner.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::from(""); top_padding as usize];
        lines.push(Line::from(Span::styled(
            "Christoffel's Kitchen",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to view the menu",
            Style::default().fg(Color::LightBlue),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(AVERAGES_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Chef's Menu",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Total Dishes: {}", self.store.len()),
                Style::default().fg(Color::LightBlue),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let averages: Vec<Line> = self
            .store
            .average_by_course()
            .iter()
            .map(average_line)
            .collect();
        let averages = Paragraph::new(averages).block(
            Block::default()
                .title("Average Prices by Course")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightBlue)),
        );
        frame.render_widget(averages, chunks[1]);

        let items: Vec<&MenuItem> = self.store.list().iter().collect();
        if items.is_empty() {
            self.draw_empty(
                frame,
                chunks[2],
                "No dishes yet!",
                "Add your first dish to get started",
            );
        } else {
            self.render_dish_cards(frame, chunks[2], &items, self.selection.index);
        }
    }

    fn draw_filter(&self, frame: &mut Frame, area: Rect, filter: &FilterScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);

        let mut tabs = Vec::new();
        for (idx, option) in CourseFilter::OPTIONS.iter().enumerate() {
            let style = if *option == filter.filter {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            tabs.push(Span::styled(format!(" {} {} ", idx + 1, option.label()), style));
            tabs.push(Span::raw(" "));
        }

        let items = filter.items(&self.store);
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Filter by Course",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(tabs),
            Line::from(Span::styled(
                filter.summary(items.len()),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        if items.is_empty() {
            self.draw_empty(frame, chunks[1], "No dishes found", &filter.empty_hint());
        } else {
            self.render_dish_cards(frame, chunks[1], &items, filter.selection.index);
        }
    }

    fn draw_empty(&self, frame: &mut Frame, area: Rect, title: &str, hint: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_dish_cards(&self, frame: &mut Frame, area: Rect, items: &[&MenuItem], selected: usize) {
        if items.is_empty() || area.height == 0 {
            return;
        }

        let capacity = (area.height / DISH_CARD_HEIGHT).max(1) as usize;
        let (start, end) = visible_window(selected, items.len(), capacity);
        let constraints: Vec<Constraint> = (start..end)
            .map(|_| Constraint::Length(DISH_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (chunk, index) in rows.iter().zip(start..end) {
            if chunk.height == 0 {
                continue;
            }
            let is_selected = index == selected;
            let mut block = Block::default().borders(Borders::ALL);
            let mut style = Style::default();
            if is_selected {
                block = block.style(Style::default().fg(Color::Yellow));
                style = Style::default().fg(Color::Yellow);
            }

            let paragraph = Paragraph::new(dish_card_lines(items[index], is_selected))
                .block(block)
                .wrap(Wrap { trim: true })
                .style(style);
            frame.render_widget(paragraph, *chunk);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::AddingDish(_)) => &[
                ("[Tab]", " Next field   "),
                ("[Left/Right]", " Course   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            (_, Mode::ConfirmDelete(_)) => &[("[Y]", " Delete   "), ("[N/Esc]", " Keep")],
            (Screen::Welcome, _) => &[("[Enter]", " Enter Menu   "), ("[Q]", " Quit")],
            (Screen::Home, _) => &[
                ("[Up/Down]", " Navigate   "),
                ("[A]", " Add Dish   "),
                ("[D]", " Delete   "),
                ("[F]", " Filter   "),
                ("[Enter]", " Open Image   "),
                ("[Q]", " Quit"),
            ],
            (Screen::Filter(_), _) => &[
                ("[Left/Right]", " Course   "),
                ("[1-4]", " Jump   "),
                ("[Up/Down]", " Navigate   "),
                ("[Esc]", " Back"),
            ],
        };

        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(action.to_string()),
                ]
            })
            .collect();
        Line::from(spans)
    }

    fn draw_dish_form(&self, frame: &mut Frame, area: Rect, form: &DishForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add New Dish").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = DishField::ORDER
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        if form.active != DishField::Course {
            let row = DishField::ORDER
                .iter()
                .position(|field| *field == form.active)
                .unwrap_or(0) as u16;
            let prefix = form.active.label().len() + 2;
            let cursor_x = cursor_column(inner, prefix + form.value_len(form.active));
            frame.set_cursor_position((cursor_x, inner.y.saturating_add(row)));
        }
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDishDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Dish").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Remove \"{}\" from {}?", confirm.name, confirm.course)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{default_menu, ensure_schema, load_menu};
    use crate::models::Course;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        App::new(conn, MenuStore::from_items(default_menu()))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key).unwrap(), "unexpected exit on {key:?}");
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, &[KeyCode::Char(ch)]);
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn adding_a_dish_updates_store_and_snapshot() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('a')]);
        type_text(&mut app, "Malva Pudding");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "Warm apricot sponge");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "65");
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Left, KeyCode::Enter]);

        assert!(matches!(app.mode, Mode::Normal));
        let added = app.store().list().last().unwrap();
        assert_eq!(added.name, "Malva Pudding");
        assert_eq!(added.course, Course::Desserts);
        assert_eq!(added.price, 65.0);
        assert_eq!(load_menu(&app.conn), app.store().list());
        assert_eq!(app.selection.index, 2);
    }

    #[test]
    fn invalid_dish_keeps_form_open() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('a')]);
        type_text(&mut app, "Nameless");
        press(&mut app, &[KeyCode::Enter]);

        match &app.mode {
            Mode::AddingDish(form) => {
                assert_eq!(form.active, DishField::Description);
                assert!(form.error.is_some());
            }
            _ => panic!("form should stay open"),
        }
        assert_eq!(app.store().len(), 2);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('d'), KeyCode::Char('n')]);
        assert_eq!(app.store().len(), 2);

        press(&mut app, &[KeyCode::Down, KeyCode::Char('d'), KeyCode::Char('y')]);
        assert_eq!(app.store().len(), 1);
        assert!(app.store().get("2").is_none());
        assert_eq!(app.selection.index, 0);
        assert_eq!(load_menu(&app.conn), app.store().list());
    }

    #[test]
    fn filter_screen_cycles_courses() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('f'), KeyCode::Right]);
        match &app.screen {
            Screen::Filter(filter) => {
                assert_eq!(filter.filter, CourseFilter::Only(Course::Starters))
            }
            _ => panic!("expected filter screen"),
        }

        press(&mut app, &[KeyCode::Char('3')]);
        assert!(screen_text(&app).contains("Showing 1 mains"));

        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.screen, Screen::Home));
    }

    #[test]
    fn quit_from_home() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn home_renders_summary_and_averages() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter]);
        let text = screen_text(&app);
        assert!(text.contains("Chef's Menu"));
        assert!(text.contains("Total Dishes: 2"));
        assert!(text.contains("R 85.00"));
        assert!(text.contains("Grilled Salmon"));
    }

    #[test]
    fn failed_save_keeps_added_dish() {
        let mut app = app();
        app.conn.execute("DROP TABLE kv_store", []).unwrap();

        press(&mut app, &[KeyCode::Enter, KeyCode::Char('a')]);
        type_text(&mut app, "Bobotie");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "Spiced mince bake");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "150");
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Right, KeyCode::Enter]);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.store().len(), 3);
        assert_eq!(app.store().list()[2].name, "Bobotie");
        let status = app.status.as_ref().unwrap();
        assert!(matches!(status.kind, StatusKind::Info));
        assert_eq!(status.text, "Added Bobotie.");
    }

    #[test]
    fn confirming_an_already_removed_dish_reports_nothing() {
        let mut app = app();
        let stale = ConfirmDishDelete {
            id: "missing".to_string(),
            name: "Ghost".to_string(),
            course: Course::Mains,
        };

        app.perform_delete(&stale);

        assert_eq!(app.store().len(), 2);
        assert!(app.status.is_none());
    }

    #[test]
    fn empty_menu_shows_hint() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let mut app = App::new(conn, MenuStore::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('d')]);
        assert!(screen_text(&app).contains("No dishes yet!"));
    }
}
