pub mod dashboard {
    //! Dashboard Configuration Constants
    //!
    //! All timing and sizing knobs for the dashboard client, organized by
    //! functional area.

    use std::time::Duration;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Period of the background refresh timer. Every tick refreshes the stats
    /// and the currently active tab's list.
    pub const POLL_INTERVAL_SECS: u64 = 30;

    /// How long a toast notification stays visible unless replaced first.
    pub const TOAST_DURATION_MS: u64 = 3000;

    /// Helper function to get the poll period
    pub const fn poll_interval() -> Duration {
        Duration::from_secs(POLL_INTERVAL_SECS)
    }

    /// Helper function to get the toast dismiss duration
    pub const fn toast_duration() -> Duration {
        Duration::from_millis(TOAST_DURATION_MS)
    }

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the worker event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // TABLE CONFIGURATION
    // =============================================================================

    /// Column count of the users table; placeholder rows span all of them.
    pub const USERS_TABLE_COLUMNS: u16 = 8;

    /// Column count of the courses table.
    pub const COURSES_TABLE_COLUMNS: u16 = 6;
}
