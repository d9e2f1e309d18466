//! Backend endpoint paths, relative to the configured API base URL

// ============================================================================
// PUBLIC ENDPOINTS
// ============================================================================

pub const SUBSCRIBE: &str = "/api/subs";

pub const APPOINTMENTS: &str = "/api/appointment";

// ============================================================================
// SESSION ENDPOINTS
// ============================================================================

pub const SESSION: &str = "/api/auth/session";

pub const CSRF_TOKEN: &str = "/api/auth/csrf";

pub const SIGN_OUT: &str = "/api/auth/signout";
