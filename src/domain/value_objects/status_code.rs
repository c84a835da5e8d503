/// Status recorded when the probe gave up after its timeout elapsed.
pub const TIMEOUT_STATUS: u16 = 408;

/// Status recorded when no HTTP response was received at all
/// (DNS failure, connection refused, TLS error, malformed URL).
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Only `200 OK` and `201 Created` count as healthy. 3xx, other 2xx
/// codes and every error code are unhealthy.
#[must_use]
pub const fn is_healthy_status(status_code: u16) -> bool {
    matches!(status_code, 200 | 201)
}
