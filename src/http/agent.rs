/// `User-Agent` value sent with every request. Computed once at start-up and
/// carried inside [`super::ClientSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent(String);

impl UserAgent {
    /// Builds the header from the host platform and toolchain this binary was built for.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(platform_class(std::env::consts::OS), rust_version())
    }

    #[must_use]
    pub fn new(platform: &str, rust_version: &str) -> Self {
        Self(format!(
            "Warmup client; {}; Rust {} ({}/{})",
            platform,
            rust_version,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn platform_class(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "OS X",
        "windows" => "Windows",
        other => other,
    }
}

const fn rust_version() -> &'static str {
    let version = env!("CARGO_PKG_RUST_VERSION");
    if version.is_empty() { "unknown" } else { version }
}
