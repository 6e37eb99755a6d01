use std::time::Duration;

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["wakeup.toml", "wakeup.json"];

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Breather between URLs so the target can drain any backlog.
pub(crate) const DEFAULT_PAUSE: Duration = Duration::from_millis(50);
