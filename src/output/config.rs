//! Output mode selection

use std::fmt;

use tracing::warn;

/// Layout of the flattened records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// `path,timestamp`
    #[default]
    PathTimestamp,
    /// `path<TAB>timestamp`
    PathTabTimestamp,
    /// `path`
    PathOnly,
    /// `path,size,timestamp`
    PathSizeTimestamp,
    /// Pretty-printed JSON array of records
    Json,
}

impl OutputMode {
    /// Parse a mode argument. Accepts the numeric codes and their names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "csv" => Some(Self::PathTimestamp),
            "2" | "tsv" => Some(Self::PathTabTimestamp),
            "3" | "path" => Some(Self::PathOnly),
            "4" | "sized" => Some(Self::PathSizeTimestamp),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve the optional CLI argument. Missing or unrecognised values
    /// select the default `path,timestamp` layout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::default(),
            Some(s) => Self::parse(s).unwrap_or_else(|| {
                warn!(mode = s, "unrecognized output mode, using path,timestamp");
                Self::default()
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PathTimestamp => "csv",
            Self::PathTabTimestamp => "tsv",
            Self::PathOnly => "path",
            Self::PathSizeTimestamp => "sized",
            Self::Json => "json",
        };
        write!(f, "{}", s)
    }
}
