use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5050";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Multipart field the server reads the uploaded book from.
pub const DEFAULT_UPLOAD_FIELD: &str = "epub";

pub const APP_DIR_NAME: &str = "nubayrah";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_SERVER_URL: &str = "NUBAYRAH_SERVER_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "NUBAYRAH_REQUEST_TIMEOUT";
pub const ENV_UPLOAD_FIELD: &str = "NUBAYRAH_UPLOAD_FIELD";
pub const ENV_CONFIG_PATH: &str = "NUBAYRAH_CONFIG_PATH";

pub const ENV_PREFIX: &str = "NUBAYRAH_";
