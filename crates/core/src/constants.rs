/// Tracked companies as (ticker, company name), in display order.
pub const DEFAULT_ROSTER: [(&str, &str); 5] = [
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc. (Google)"),
    ("META", "Meta Platforms Inc."),
    ("AMZN", "Amazon.com Inc."),
];

/// Holiday names (matched case-insensitively as substrings) on which US
/// exchanges close. Apostrophe variants are listed separately on purpose.
pub const MARKET_HOLIDAY_NAMES: [&str; 14] = [
    "New Year's Day",
    "Martin Luther King",
    "MLK",
    "Presidents' Day",
    "President's Day",
    "Washington's Birthday",
    "Good Friday",
    "Memorial Day",
    "Independence Day",
    "Juneteenth",
    "Labor Day",
    "Thanksgiving",
    "Christmas Day",
    "Christmas",
];

/// Country passed to the holiday endpoint.
pub const DEFAULT_HOLIDAY_COUNTRY: &str = "US";

/// Crypto symbols shown in the price ticker.
pub const DEFAULT_CRYPTO_SYMBOLS: [&str; 2] = ["BTC", "ETH"];

/// How far ahead (in calendar days) a holiday counts as upcoming.
pub const UPCOMING_HOLIDAY_WINDOW_DAYS: i64 = 30;

/// Maximum number of upcoming holidays reported.
pub const MAX_UPCOMING_HOLIDAYS: usize = 3;

/// Name of the environment variable holding the upstream credential.
pub const API_KEY_ENV: &str = "API_KEY";
