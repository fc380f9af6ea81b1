// Configuration constants and command line options

use crate::errors::EngineError;
use crate::playback::Speed;

/// Operation shown when no identifier is given on the command line
pub const DEFAULT_OPERATION: &str = "array-insert";

/// Tick period at speed 1x; the effective period is `TICK_BASE_MS / speed`
pub const TICK_BASE_MS: u64 = 1000;

/// Upper bound on the number of steps one generator may record
pub const MAX_STEPS: usize = 512;

/// Input poll timeout of the terminal event loop
pub const POLL_INTERVAL_MS: u64 = 50;

/// Minimum time between two play/pause toggles (key repeat guard)
pub const PLAY_DEBOUNCE_MS: u64 = 200;

/// Display scale bounds and increment
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const SCALE_STEP: f32 = 0.25;

/// Width of one element cell at scale 1.0, in terminal columns
pub const BASE_CELL_WIDTH: u16 = 6;

/// Environment variables
pub const SPEED_ENV: &str = "STEPVIZ_SPEED";
pub const LOG_ENV: &str = "STEPVIZ_LOG";
pub const LOG_FILE_ENV: &str = "STEPVIZ_LOG_FILE";

/// Log file used when `STEPVIZ_LOG` is set without `STEPVIZ_LOG_FILE`
pub const DEFAULT_LOG_FILE: &str = "stepviz.log";

/// Display scale multiplier applied to cell widths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    pub fn new(value: f32) -> Result<Self, EngineError> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&value) {
            return Err(EngineError::InvalidScale {
                value: value.to_string(),
            });
        }
        Ok(Scale(value))
    }

    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let value: f32 = text.trim().parse().map_err(|_| EngineError::InvalidScale {
            value: text.to_string(),
        })?;
        Scale::new(value).map_err(|_| EngineError::InvalidScale {
            value: text.to_string(),
        })
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Width of one element cell in columns, never narrower than 3
    pub fn cell_width(self) -> u16 {
        ((BASE_CELL_WIDTH as f32 * self.0).round() as u16).max(3)
    }

    pub fn grow(self) -> Self {
        Scale((self.0 + SCALE_STEP).min(MAX_SCALE))
    }

    pub fn shrink(self) -> Self {
        Scale((self.0 - SCALE_STEP).max(MIN_SCALE))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale(1.0)
    }
}

/// What the binary should do once configuration is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run the terminal UI
    Interactive,
    /// Print the operation catalog and exit
    List,
    /// Print every step of the selected operation as text and exit
    Dump,
    /// Print usage and exit
    Help,
}

/// Startup configuration assembled from command line arguments and environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub operation: String,
    pub speed: Speed,
    pub scale: Scale,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            operation: DEFAULT_OPERATION.to_string(),
            speed: Speed::default(),
            scale: Scale::default(),
            mode: Mode::Interactive,
        }
    }
}

impl Config {
    /// Build a configuration from arguments (program name excluded).
    ///
    /// `env_speed` is the value of `STEPVIZ_SPEED`, if set. An explicit
    /// `--speed` flag wins over the environment.
    pub fn from_args<I>(args: I, env_speed: Option<String>) -> Result<Config, EngineError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        if let Some(text) = env_speed {
            config.speed = Speed::parse(&text)?;
        }

        let mut args = args.into_iter();
        let mut operation_set = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => config.mode = Mode::List,
                "--dump" | "-d" => config.mode = Mode::Dump,
                "--help" | "-h" => config.mode = Mode::Help,
                "--speed" | "-s" => {
                    let value = args.next().ok_or_else(|| EngineError::MissingArgument {
                        flag: arg.clone(),
                    })?;
                    config.speed = Speed::parse(&value)?;
                }
                "--scale" => {
                    let value = args.next().ok_or_else(|| EngineError::MissingArgument {
                        flag: arg.clone(),
                    })?;
                    config.scale = Scale::parse(&value)?;
                }
                flag if flag.starts_with('-') => {
                    return Err(EngineError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
                _ if !operation_set => {
                    config.operation = arg;
                    operation_set = true;
                }
                _ => {
                    return Err(EngineError::UnknownFlag { flag: arg });
                }
            }
        }

        Ok(config)
    }
}
