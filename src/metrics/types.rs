/// Outcome of one warm-up GET.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestResult {
    pub status: u16,
    pub elapsed_ms: f64,
}

impl RequestResult {
    #[must_use]
    pub const fn new(status: u16, elapsed_ms: f64) -> Self {
        Self { status, elapsed_ms }
    }

    /// Client (4xx) and server (5xx) errors, including the transport sentinel.
    #[must_use]
    pub const fn is_error_status(&self) -> bool {
        is_error_status(self.status)
    }
}

pub(crate) const fn is_error_status(status: u16) -> bool {
    status >= 400 && status <= 599
}
