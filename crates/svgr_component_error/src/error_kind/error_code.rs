pub const READ_FILE_FAILED: &str = "READ_FILE_FAILED";
pub const INVALID_SVG: &str = "INVALID_SVG";
pub const INVALID_IMPORT_PATTERN: &str = "INVALID_IMPORT_PATTERN";
pub const PARSE_JS_FAILED: &str = "PARSE_JS_FAILED";
pub const PANIC: &str = "PANIC";
