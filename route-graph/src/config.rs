//! Run configuration read from the environment.

use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Default location of the trips file.
pub const DEFAULT_TRIPS_PATH: &str = "storage/graph/trips.csv";

/// Default location of the direction queries file.
pub const DEFAULT_DIRECTIONS_PATH: &str = "storage/graph/testDirections.csv";

const TRIPS_VAR: &str = "ROUTE_GRAPH_TRIPS";
const DIRECTIONS_VAR: &str = "ROUTE_GRAPH_DIRECTIONS";
const AGGLOMERATIONS_VAR: &str = "ROUTE_GRAPH_AGGLOMERATIONS";
const VERBOSE_VAR: &str = "ROUTE_GRAPH_VERBOSE";
const BATCH_SIZE_VAR: &str = "ROUTE_GRAPH_BATCH_SIZE";

/// Error returned when an environment variable has an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Everything a run of the binary needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Trips CSV file.
    pub trips_path: PathBuf,

    /// Direction queries CSV file.
    pub directions_path: PathBuf,

    /// Optional agglomerations JSON file.
    pub agglomerations_path: Option<PathBuf>,

    /// Print every found route, not just the totals.
    pub verbose: bool,

    /// Search parameters.
    pub search: SearchConfig,
}

impl RunConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let verbose = match get(VERBOSE_VAR) {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ConfigError {
                var: VERBOSE_VAR,
                value,
            })?,
        };

        let mut search = SearchConfig::default();
        if let Some(value) = get(BATCH_SIZE_VAR) {
            search.batch_size = match value.trim().parse() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError {
                        var: BATCH_SIZE_VAR,
                        value,
                    });
                }
            };
        }

        Ok(Self {
            trips_path: get(TRIPS_VAR)
                .unwrap_or_else(|| DEFAULT_TRIPS_PATH.to_string())
                .into(),
            directions_path: get(DIRECTIONS_VAR)
                .unwrap_or_else(|| DEFAULT_DIRECTIONS_PATH.to_string())
                .into(),
            agglomerations_path: get(AGGLOMERATIONS_VAR).map(PathBuf::from),
            verbose,
            search,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
