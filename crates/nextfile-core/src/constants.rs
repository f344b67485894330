/// Number of recently opened files tracked per scope when nothing else is configured.
pub const DEFAULT_RECENT_FILES_LIMIT: usize = 50;

/// File name of the persisted history inside a scope's state directory.
pub const DEFAULT_STATE_FILE: &str = "file_history.json";

/// Default weight of the uni-gram MLE in the built-in candidate scorer.
pub const DEFAULT_UNI_GRAM_WEIGHT: f64 = 0.3;

/// Default weight of the bi-gram MLE in the built-in candidate scorer.
pub const DEFAULT_BI_GRAM_WEIGHT: f64 = 0.7;
