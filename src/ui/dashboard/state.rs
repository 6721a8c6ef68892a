//! Dashboard state.
//!
//! One mutable value owns everything the renderer reads. Workers never touch
//! it; their events are queued here and applied by `update` on the UI loop,
//! and everything the state wants fetched or mutated is surfaced as explicit
//! requests for the loop to dispatch.

use crate::api::types::{Course, Stats, User};
use crate::consts::dashboard::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{ConnectionStatus, Event, Tab};
use crate::ui::dashboard::forms::{CourseForm, UserForm};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::VecDeque;
use std::time::Instant;

/// A fetch the state wants the runtime to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Stats,
    List(Tab),
    Instructors,
}

/// A mutation confirmed by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    CreateUser(crate::api::types::NewUser),
    DeleteUser(i64),
    CreateCourse(crate::api::types::NewCourse),
    DeleteCourse(i64),
}

/// What a key press amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Quit,
    Mutation(MutationRequest),
    Handled,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// One list view with its selection and fetch bookkeeping.
///
/// `latest_seq` is bumped every time a fetch is issued; a completed fetch is
/// applied only when it still carries the latest generation, so a slow
/// response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct TableView<T> {
    rows: Vec<T>,
    loaded: bool,
    selected: usize,
    latest_seq: u64,
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loaded: false,
            selected: 0,
            latest_seq: 0,
        }
    }
}

impl<T> TableView<T> {
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// False until the first fetch result has been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.rows.get(self.selected)
    }

    /// Allocate the generation for a fetch that is about to be issued.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Apply a completed fetch. Returns false when a newer fetch was issued
    /// in the meantime and this result must be discarded.
    pub fn apply(&mut self, seq: u64, rows: Vec<T>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.rows = rows;
        self.loaded = true;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        true
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The modal currently covering the dashboard, if any.
#[derive(Debug, Clone)]
pub enum Modal {
    None,
    UserForm(UserForm),
    CourseForm(CourseForm),
    ConfirmDelete { tab: Tab, id: i64, label: String },
}

pub struct DashboardState {
    environment: Environment,
    start_time: Instant,
    connection: ConnectionStatus,
    stats: Option<Stats>,
    users: TableView<User>,
    courses: TableView<Course>,
    active_tab: Tab,
    modal: Modal,
    toast: Option<Toast>,
    pending_events: VecDeque<Event>,
    activity_logs: VecDeque<Event>,
    pending_fetches: Vec<FetchRequest>,
    tick: u64,
}

impl DashboardState {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            start_time: Instant::now(),
            connection: ConnectionStatus::Checking,
            stats: None,
            users: TableView::default(),
            courses: TableView::default(),
            active_tab: Tab::Users,
            modal: Modal::None,
            toast: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            pending_fetches: Vec::new(),
            tick: 0,
        }
    }

    // Read accessors used by the renderer.

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.connection
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn users(&self) -> &TableView<User> {
        &self.users
    }

    pub fn courses(&self) -> &TableView<Course> {
        &self.courses
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    // Mutators used by the update pass.

    pub(crate) fn set_connection(&mut self, status: ConnectionStatus) {
        self.connection = status;
    }

    pub(crate) fn set_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
    }

    pub(crate) fn users_mut(&mut self) -> &mut TableView<User> {
        &mut self.users
    }

    pub(crate) fn courses_mut(&mut self) -> &mut TableView<Course> {
        &mut self.courses
    }

    pub(crate) fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub(crate) fn clear_toast(&mut self) {
        self.toast = None;
    }

    pub(crate) fn bump_tick(&mut self) {
        self.tick += 1;
    }

    pub(crate) fn next_pending_event(&mut self) -> Option<Event> {
        self.pending_events.pop_front()
    }

    /// Queue a worker event for the next update pass.
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    pub(crate) fn add_to_activity_log(&mut self, event: Event) {
        self.activity_logs.push_front(event);
        while self.activity_logs.len() > MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_back();
        }
    }

    /// Queue a fetch for the runtime, deduplicating identical requests.
    pub(crate) fn request_fetch(&mut self, request: FetchRequest) {
        if !self.pending_fetches.contains(&request) {
            self.pending_fetches.push(request);
        }
    }

    /// Allocate the fetch generation for a list fetch about to be issued.
    pub fn begin_list_fetch(&mut self, tab: Tab) -> u64 {
        match tab {
            Tab::Users => self.users.begin_fetch(),
            Tab::Courses => self.courses.begin_fetch(),
        }
    }

    /// Drain the fetches queued since the last call.
    pub fn take_pending_fetches(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.pending_fetches)
    }

    pub(crate) fn show_toast(&mut self, message: String, kind: ToastKind) {
        self.toast = Some(Toast {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Switch the visible tab and request a fresh fetch for it.
    pub(crate) fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.request_fetch(FetchRequest::List(tab));
    }

    pub(crate) fn open_user_form(&mut self) {
        self.modal = Modal::UserForm(UserForm::new());
    }

    pub(crate) fn open_course_form(&mut self) {
        self.modal = Modal::CourseForm(CourseForm::new());
        self.request_fetch(FetchRequest::Instructors);
    }

    pub(crate) fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Ask for confirmation before deleting the selected row, if any.
    fn request_delete_selected(&mut self) {
        match self.active_tab {
            Tab::Users => {
                if let Some(user) = self.users.selected_row() {
                    self.modal = Modal::ConfirmDelete {
                        tab: Tab::Users,
                        id: user.id,
                        label: user.username.clone(),
                    };
                }
            }
            Tab::Courses => {
                if let Some(course) = self.courses.selected_row() {
                    self.modal = Modal::ConfirmDelete {
                        tab: Tab::Courses,
                        id: course.id,
                        label: course.title.clone(),
                    };
                }
            }
        }
    }

    /// Close the confirmation modal. Returns the delete to dispatch when the
    /// user accepted.
    fn resolve_confirm(&mut self, accepted: bool) -> Option<MutationRequest> {
        let Modal::ConfirmDelete { tab, id, .. } = &self.modal else {
            return None;
        };
        let (tab, id) = (*tab, *id);
        self.modal = Modal::None;
        if !accepted {
            return None;
        }
        Some(match tab {
            Tab::Users => MutationRequest::DeleteUser(id),
            Tab::Courses => MutationRequest::DeleteCourse(id),
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match &self.modal {
            Modal::UserForm(_) => self.handle_user_form_key(key),
            Modal::CourseForm(_) => self.handle_course_form_key(key),
            Modal::ConfirmDelete { .. } => self.handle_confirm_key(key),
            Modal::None => self.handle_table_key(key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Tab => {
                self.switch_tab(self.active_tab.other());
                KeyOutcome::Handled
            }
            KeyCode::Char('1') => {
                self.switch_tab(Tab::Users);
                KeyOutcome::Handled
            }
            KeyCode::Char('2') => {
                self.switch_tab(Tab::Courses);
                KeyOutcome::Handled
            }
            KeyCode::Char('r') => {
                self.request_fetch(FetchRequest::Stats);
                self.request_fetch(FetchRequest::List(self.active_tab));
                self.show_toast("Refreshing...".to_string(), ToastKind::Info);
                KeyOutcome::Handled
            }
            KeyCode::Char('n') => {
                match self.active_tab {
                    Tab::Users => self.open_user_form(),
                    Tab::Courses => self.open_course_form(),
                }
                KeyOutcome::Handled
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.request_delete_selected();
                KeyOutcome::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                match self.active_tab {
                    Tab::Users => self.users.select_next(),
                    Tab::Courses => self.courses.select_next(),
                }
                KeyOutcome::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                match self.active_tab {
                    Tab::Users => self.users.select_previous(),
                    Tab::Courses => self.courses.select_previous(),
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                match self.resolve_confirm(true) {
                    Some(mutation) => KeyOutcome::Mutation(mutation),
                    None => KeyOutcome::Handled,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.resolve_confirm(false);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_user_form_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                KeyOutcome::Handled
            }
            KeyCode::Enter => {
                let submitted = {
                    let Modal::UserForm(form) = &self.modal else {
                        return KeyOutcome::Ignored;
                    };
                    form.submit()
                };
                match submitted {
                    Ok(payload) => KeyOutcome::Mutation(MutationRequest::CreateUser(payload)),
                    Err(reason) => {
                        self.show_toast(format!("Error: {}", reason), ToastKind::Error);
                        KeyOutcome::Handled
                    }
                }
            }
            _ => {
                if let Modal::UserForm(form) = &mut self.modal {
                    form.handle_key(key);
                }
                KeyOutcome::Handled
            }
        }
    }

    fn handle_course_form_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                KeyOutcome::Handled
            }
            KeyCode::Enter => {
                let submitted = {
                    let Modal::CourseForm(form) = &self.modal else {
                        return KeyOutcome::Ignored;
                    };
                    form.submit()
                };
                match submitted {
                    Ok(payload) => KeyOutcome::Mutation(MutationRequest::CreateCourse(payload)),
                    Err(reason) => {
                        self.show_toast(format!("Error: {}", reason), ToastKind::Error);
                        KeyOutcome::Handled
                    }
                }
            }
            _ => {
                if let Modal::CourseForm(form) = &mut self.modal {
                    form.handle_key(key);
                }
                KeyOutcome::Handled
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn backdate_toast(&mut self, by: std::time::Duration) {
        if let Some(toast) = &mut self.toast {
            toast.shown_at -= by;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Student,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut table = TableView::<i32>::default();
        let first = table.begin_fetch();
        let second = table.begin_fetch();
        assert!(!table.apply(first, vec![1]));
        assert!(!table.is_loaded());
        assert!(table.apply(second, vec![2, 3]));
        assert_eq!(table.rows(), &[2, 3]);
    }

    #[test]
    fn selection_is_clamped_when_rows_shrink() {
        let mut table = TableView::<i32>::default();
        let seq = table.begin_fetch();
        table.apply(seq, vec![1, 2, 3]);
        table.select_next();
        table.select_next();
        assert_eq!(table.selected(), 2);

        let seq = table.begin_fetch();
        table.apply(seq, vec![1]);
        assert_eq!(table.selected(), 0);
    }

    #[test]
    fn tab_switch_requests_a_fresh_list() {
        let mut state = state();
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.active_tab(), Tab::Courses);
        assert_eq!(
            state.take_pending_fetches(),
            vec![FetchRequest::List(Tab::Courses)]
        );
    }

    #[test]
    fn refresh_key_requests_stats_and_the_active_list() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('r')));
        let fetches = state.take_pending_fetches();
        assert!(fetches.contains(&FetchRequest::Stats));
        assert!(fetches.contains(&FetchRequest::List(Tab::Users)));

        // Manual refresh gets immediate feedback
        let toast = state.toast().unwrap();
        assert_eq!(toast.message, "Refreshing...");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn delete_needs_a_selected_row_and_confirmation() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(state.modal(), Modal::None));

        let seq = state.begin_list_fetch(Tab::Users);
        state.users_mut().apply(seq, vec![user(7, "jdoe")]);
        state.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(
            state.modal(),
            Modal::ConfirmDelete { id: 7, .. }
        ));

        // Declining closes the modal without a mutation.
        let outcome = state.handle_key(key(KeyCode::Char('n')));
        assert_eq!(outcome, KeyOutcome::Handled);
        assert!(matches!(state.modal(), Modal::None));

        state.handle_key(key(KeyCode::Char('d')));
        let outcome = state.handle_key(key(KeyCode::Char('y')));
        assert_eq!(
            outcome,
            KeyOutcome::Mutation(MutationRequest::DeleteUser(7))
        );
        assert!(matches!(state.modal(), Modal::None));
    }

    #[test]
    fn opening_the_course_form_requests_instructors() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('2')));
        state.take_pending_fetches();
        state.handle_key(key(KeyCode::Char('n')));
        assert!(matches!(state.modal(), Modal::CourseForm(_)));
        assert_eq!(
            state.take_pending_fetches(),
            vec![FetchRequest::Instructors]
        );
    }

    #[test]
    fn invalid_form_submission_shows_a_toast_and_keeps_the_form() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('n')));
        let outcome = state.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, KeyOutcome::Handled);
        assert!(matches!(state.modal(), Modal::UserForm(_)));
        let toast = state.toast().unwrap();
        assert_eq!(toast.message, "Error: Username is required");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn escape_quits_only_outside_modals() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('n')));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyOutcome::Handled);
        assert!(matches!(state.modal(), Modal::None));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyOutcome::Quit);
    }

    #[test]
    fn duplicate_fetch_requests_collapse() {
        let mut state = state();
        state.request_fetch(FetchRequest::Stats);
        state.request_fetch(FetchRequest::Stats);
        assert_eq!(state.take_pending_fetches(), vec![FetchRequest::Stats]);
        assert!(state.take_pending_fetches().is_empty());
    }
}
