//! In-memory per-IP request counters.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Outcome of admitting one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed {
        /// Requests left in the current window.
        remaining: u32,
        /// Time until the window resets.
        reset_in: Duration,
    },
    Limited {
        retry_after: Duration,
    },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window rate limiter keyed by client IP.
///
/// A window opens on the first request from an IP and admits at most `limit`
/// requests until `window` has elapsed. Expired windows are reset lazily on
/// access and evicted by [`RateLimiter::sweep`]. Rejected requests do not
/// count against the window.
#[derive(Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Counts a request from `ip` against its current window.
    pub fn check(&self, ip: IpAddr) -> RateLimitDecision {
        self.check_at(ip, Instant::now())
    }

    pub fn check_at(&self, ip: IpAddr, now: Instant) -> RateLimitDecision {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.saturating_duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        let reset_in = self
            .window
            .saturating_sub(now.saturating_duration_since(entry.started));

        if entry.count >= self.limit {
            return RateLimitDecision::Limited {
                retry_after: reset_in,
            };
        }

        entry.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.limit - entry.count,
            reset_in,
        }
    }

    /// Evicts expired windows and returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        let before = windows.len();
        windows.retain(|_, w| now.saturating_duration_since(w.started) < self.window);
        before - windows.len()
    }

    /// Number of IPs with a window currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Rounds a duration up to whole seconds, as used by `Retry-After`.
pub fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use std::sync::Arc;

    const MINUTE: Duration = Duration::from_secs(60);

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
    }

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::new(10, MINUTE);
        let now = Instant::now();

        for i in 0..10 {
            match limiter.check_at(ip(1), now) {
                RateLimitDecision::Allowed { remaining, .. } => assert_eq!(remaining, 9 - i),
                other => panic!("request {i} should be allowed, got {other:?}"),
            }
        }

        assert_eq!(
            limiter.check_at(ip(1), now),
            RateLimitDecision::Limited {
                retry_after: MINUTE
            }
        );
    }

    #[test]
    fn test_limits_are_per_ip() {
        let limiter = RateLimiter::new(2, MINUTE);
        let now = Instant::now();

        limiter.check_at(ip(1), now);
        limiter.check_at(ip(1), now);
        assert!(matches!(
            limiter.check_at(ip(1), now),
            RateLimitDecision::Limited { .. }
        ));

        assert!(matches!(
            limiter.check_at(ip(2), now),
            RateLimitDecision::Allowed { remaining: 1, .. }
        ));
        assert!(matches!(
            limiter.check_at(IpAddr::V6(Ipv6Addr::LOCALHOST), now),
            RateLimitDecision::Allowed { .. }
        ));
    }

    #[test]
    fn test_window_resets_after_elapsed() {
        let limiter = RateLimiter::new(1, MINUTE);
        let start = Instant::now();

        assert!(matches!(
            limiter.check_at(ip(1), start),
            RateLimitDecision::Allowed { .. }
        ));

        match limiter.check_at(ip(1), start + Duration::from_secs(45)) {
            RateLimitDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(15))
            }
            other => panic!("expected Limited, got {other:?}"),
        }

        assert!(matches!(
            limiter.check_at(ip(1), start + MINUTE),
            RateLimitDecision::Allowed { remaining: 0, .. }
        ));
    }

    #[test]
    fn test_rejections_do_not_extend_window() {
        let limiter = RateLimiter::new(1, MINUTE);
        let start = Instant::now();

        limiter.check_at(ip(1), start);
        for secs in [10, 20, 59] {
            assert!(matches!(
                limiter.check_at(ip(1), start + Duration::from_secs(secs)),
                RateLimitDecision::Limited { .. }
            ));
        }

        assert!(matches!(
            limiter.check_at(ip(1), start + Duration::from_secs(61)),
            RateLimitDecision::Allowed { .. }
        ));
    }

    #[test]
    fn test_sweep_evicts_expired_windows() {
        let limiter = RateLimiter::new(5, MINUTE);
        let start = Instant::now();

        limiter.check_at(ip(1), start);
        limiter.check_at(ip(2), start + Duration::from_secs(30));
        assert_eq!(limiter.tracked_clients(), 2);

        assert_eq!(limiter.sweep_at(start + Duration::from_secs(70)), 1);
        assert_eq!(limiter.tracked_clients(), 1);

        assert_eq!(limiter.sweep_at(start + Duration::from_secs(95)), 1);
        assert_eq!(limiter.tracked_clients(), 0);
    }

    #[test]
    fn test_concurrent_checks_respect_limit() {
        let limiter = Arc::new(RateLimiter::new(10, MINUTE));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || {
                    (0..5)
                        .filter(|_| {
                            matches!(limiter.check(ip(9)), RateLimitDecision::Allowed { .. })
                        })
                        .count()
                })
            })
            .collect();

        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(allowed, 10);
    }

    #[test]
    fn test_ceil_secs() {
        assert_eq!(ceil_secs(Duration::from_secs(15)), 15);
        assert_eq!(ceil_secs(Duration::from_millis(14_001)), 15);
        assert_eq!(ceil_secs(Duration::from_millis(1)), 1);
        assert_eq!(ceil_secs(Duration::ZERO), 0);
    }
}
