use log::LevelFilter;

use eca::automaton::{DEAD_CHAR, LIVE_CHAR};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub live_char: char,
    pub dead_char: char,
}
impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            live_char: LIVE_CHAR,
            dead_char: DEAD_CHAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
        }
    }
}
impl LogConfig {
    /// Returns the log level for a number of `-v` flags.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!('*', config.display.live_char);
        assert_eq!(' ', config.display.dead_char);
        assert_eq!(LevelFilter::Warn, config.log.level);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(LogConfig::default(), LogConfig::from_verbosity(0));
        assert_eq!(LevelFilter::Info, LogConfig::from_verbosity(1).level);
        assert_eq!(LevelFilter::Debug, LogConfig::from_verbosity(2).level);
        assert_eq!(LevelFilter::Trace, LogConfig::from_verbosity(3).level);
        assert_eq!(LevelFilter::Trace, LogConfig::from_verbosity(200).level);
    }
}
