mod perf;

pub use perf::AppInstant;
