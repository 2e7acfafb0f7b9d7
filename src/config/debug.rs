//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,

    /// Log every (re)generation of the bucket sequence
    pub log_generation: bool,

    /// Log refresh requests from the header button or the R key
    pub log_refresh: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: false,
    log_generation: true,
    log_refresh: false,
};
