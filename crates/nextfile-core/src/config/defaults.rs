//! Default values shared by the config sections.

pub use crate::constants::{
    DEFAULT_BI_GRAM_WEIGHT, DEFAULT_RECENT_FILES_LIMIT, DEFAULT_STATE_FILE,
    DEFAULT_UNI_GRAM_WEIGHT,
};

pub const DEFAULT_LOG_LEVEL: &str = "info";
