/// Version prefix shared by every REST endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Default API origin when neither `.env` nor the query string set one
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

pub const DEFAULT_USER_ID: u64 = 1;

/// How long the delete-failure notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;
