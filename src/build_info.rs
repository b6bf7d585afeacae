//! Compile-time build metadata.

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build number from the build script; "0" when built without it
pub const BUILD_NUMBER: &str = match option_env!("BREWSHEET_BUILD_NUMBER") {
    Some(n) => n,
    None => "0",
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("BREWSHEET_BUILD_TIMESTAMP") {
    Some(t) => t,
    None => "unknown",
};

/// One-line version banner for the CLI
pub fn banner() -> String {
    format!(
        "{} {} (build {}, {})",
        env!("CARGO_PKG_NAME"),
        VERSION,
        BUILD_NUMBER,
        BUILD_TIMESTAMP
    )
}
