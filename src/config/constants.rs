//! Configuration constants.

/// Maximum URL length (2048 characters) accepted from trace input.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// File name of the exported trace artifact.
///
/// Downstream consumers key on this exact name, so it is part of the data
/// contract rather than a presentation detail.
pub const EXPORT_FILE_NAME: &str = "gotrace_data.json";

/// Prefix of every tooltip message shown for a resolved status code.
pub const TOOLTIP_MESSAGE_PREFIX: &str = "Status: ";
