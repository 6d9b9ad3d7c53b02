use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(LogLevel::Trace, LevelFilter::TRACE)]
    #[case(LogLevel::Warn, LevelFilter::WARN)]
    #[case(LogLevel::Silent, LevelFilter::OFF)]
    fn log_level_maps_to_filter(#[case] level: LogLevel, #[case] expected: LevelFilter) {
        assert_eq!(LevelFilter::from(level), expected);
    }
}
