//! API constants for the TSheets and Timeero REST endpoints

/// TSheets users listing endpoint
pub const TSHEETS_USERS_URL: &str = "https://rest.tsheets.com/api/v1/users";

/// Timeero user creation endpoint
pub const TIMEERO_USERS_URL: &str = "https://api.timeero.app/api/public/users";

/// Timeero job creation endpoint
pub const TIMEERO_JOBCODES_URL: &str = "https://api.timeero.app/api/public/jobs";

/// Users requested per TSheets page
pub const TSHEETS_PAGE_SIZE: u32 = 200;

/// Query parameters sent with every TSheets users page
pub mod query {
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "per_page";
    pub const ACTIVE: &str = "active";
    pub const ACTIVE_ONLY: &str = "yes";
    pub const INCLUDE: &str = "include";
    pub const INCLUDE_JOBCODES: &str = "jobcodes";
}

/// Standard headers
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// User agent sent to both services
    pub const USER_AGENT: &str = concat!("timesheet-sync/", env!("CARGO_PKG_VERSION"));
}

/// Timeero role assigned to TSheets admins
pub const ADMIN_ROLE_ID: u32 = 1;

/// Timeero role assigned to everyone else
pub const DEFAULT_ROLE_ID: u32 = 3;

/// Leading digit of generated phone numbers
pub const DEFAULT_PHONE_PREFIX: &str = "1";

pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Placeholder for missing first/last names
pub const MISSING_NAME: &str = "N/A";

/// Placeholder for job codes without a name
pub const MISSING_JOBCODE_NAME: &str = "Unknown Jobcode";

/// Placeholder for users without a payroll id in the report
pub const MISSING_PAYROLL_ID: &str = "N/A";

/// 422 messages containing any of these are expected duplicates, not failures
pub const BENIGN_REJECTION_MARKERS: [&str; 2] = ["email has already been taken", "Disposable email"];

/// Message used when a 422 response carries no message field
pub const UNKNOWN_422_MESSAGE: &str = "Unknown 422 error";
