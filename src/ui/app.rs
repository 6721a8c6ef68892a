//! The terminal application loop.

use crate::consts::dashboard::poll_interval;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::runtime::Dispatcher;
use crate::ui::dashboard::{
    DashboardState, FetchRequest, KeyOutcome, MutationRequest, render_dashboard,
};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Drives the periodic background refresh. The timer only reports due once
/// per period and not at all while stopped.
pub struct PollTimer {
    period: Duration,
    last_tick: Option<Instant>,
}

impl PollTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    pub fn start(&mut self) {
        self.last_tick = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// True when a full period has elapsed; the timer then rearms itself.
    pub fn due(&mut self) -> bool {
        match self.last_tick {
            Some(last) if last.elapsed() >= self.period => {
                self.last_tick = Some(Instant::now());
                true
            }
            _ => false,
        }
    }
}

pub struct App {
    state: DashboardState,
    dispatcher: Dispatcher,
    event_receiver: mpsc::Receiver<WorkerEvent>,
    poll_timer: PollTimer,
}

impl App {
    pub fn new(
        environment: Environment,
        dispatcher: Dispatcher,
        event_receiver: mpsc::Receiver<WorkerEvent>,
    ) -> Self {
        Self {
            state: DashboardState::new(environment),
            dispatcher,
            event_receiver,
            poll_timer: PollTimer::new(poll_interval()),
        }
    }

    /// Kick off the startup work: the one-shot health probe, the stats, the
    /// active list, and the periodic refresh.
    fn issue_initial_fetches(&mut self) {
        self.dispatcher.probe_health();
        self.dispatcher.fetch_stats();
        let tab = self.state.active_tab();
        let seq = self.state.begin_list_fetch(tab);
        self.dispatcher.fetch_list(tab, seq);
        self.poll_timer.start();
    }

    /// One periodic refresh: the stats and the active list.
    fn issue_poll_tick(&mut self) {
        self.dispatcher.fetch_stats();
        let tab = self.state.active_tab();
        let seq = self.state.begin_list_fetch(tab);
        self.dispatcher.fetch_list(tab, seq);
    }

    fn dispatch_fetch(&mut self, request: FetchRequest) {
        match request {
            FetchRequest::Stats => self.dispatcher.fetch_stats(),
            FetchRequest::List(tab) => {
                let seq = self.state.begin_list_fetch(tab);
                self.dispatcher.fetch_list(tab, seq);
            }
            FetchRequest::Instructors => self.dispatcher.load_instructors(),
        }
    }

    fn dispatch_mutation(&self, request: MutationRequest) {
        match request {
            MutationRequest::CreateUser(user) => self.dispatcher.create_user(user),
            MutationRequest::DeleteUser(id) => self.dispatcher.delete_user(id),
            MutationRequest::CreateCourse(course) => self.dispatcher.create_course(course),
            MutationRequest::DeleteCourse(id) => self.dispatcher.delete_course(id),
        }
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.state.handle_key(key) {
            KeyOutcome::Quit => true,
            KeyOutcome::Mutation(mutation) => {
                self.dispatch_mutation(mutation);
                false
            }
            KeyOutcome::Handled | KeyOutcome::Ignored => false,
        }
    }
}

/// Run the dashboard until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.issue_initial_fetches();

    loop {
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }
        app.state.update();

        for request in app.state.take_pending_fetches() {
            app.dispatch_fetch(request);
        }

        if app.poll_timer.due() {
            app.issue_poll_tick();
        }

        terminal.draw(|f| render_dashboard(f, &app.state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
