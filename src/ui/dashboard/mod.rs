pub mod components;
pub mod forms;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;
pub mod view;

pub use renderer::render_dashboard;
pub use state::{DashboardState, FetchRequest, KeyOutcome, MutationRequest};
