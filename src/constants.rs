/// Base URL of the production API
pub const DEFAULT_BASE_URL: &str = "https://api.pomfort.com/sh";
/// Placeholder script id shipped with the samples
pub const DEFAULT_SCRIPT_ID: &str = "0123456789abcdef01234567/ExampleScript";
/// Placeholder script key shipped with the samples
pub const DEFAULT_SCRIPT_KEY: &str = "ThirtyTwoRandomLettersAndNumbers";
/// Default page size for paginated listings
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Number of projects fetched when resolving a project's root folder
pub const PROJECT_LOOKUP_PAGE_SIZE: u32 = 50;
/// Default number of attempts for a rate limited GET (first try included)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default pause between attempts after a `429 Too Many Requests`
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 60;
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Response header carrying the size of a paginated collection
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "shothub-client/0.1.0";
/// Root directory for files written by the sample programs
pub const OUTPUT_ROOT: &str = "output";
