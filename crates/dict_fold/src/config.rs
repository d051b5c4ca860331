// crates/dict_fold/src/config.rs

/// How the fold plan is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration composed from CLI flags and the environment.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub format: OutputFormat,
    /// Print the numbered sample before the plan (text output only).
    pub show_source: bool,
    /// Regex replacing the `{` test; `None` keeps the brace rule.
    pub open_pattern: Option<String>,
    /// Regex replacing the `}` test; `None` keeps the brace rule.
    pub close_pattern: Option<String>,
    /// When set, only the end column of this 0-based line is printed.
    pub column_of: Option<i64>,
    pub verbose: bool,
}

/// Forces verbose logging when set.
pub const VERBOSE_ENV: &str = "DICT_FOLD_VERBOSE";
/// Forces JSON output when set.
pub const JSON_ENV: &str = "DICT_FOLD_JSON";

impl AppConfig {
    /// Applies environment overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`. A variable
    /// counts as set unless it is empty, `0` or `false`.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| {
            lookup(key)
                .map(|v| !matches!(v.trim(), "" | "0" | "false"))
                .unwrap_or(false)
        };
        if is_set(VERBOSE_ENV) {
            self.verbose = true;
        }
        if is_set(JSON_ENV) {
            self.format = OutputFormat::Json;
        }
        self
    }

    /// True when either side of the block test was replaced by a regex.
    pub fn uses_patterns(&self) -> bool {
        self.open_pattern.is_some() || self.close_pattern.is_some()
    }
}
