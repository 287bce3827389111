//! ISO-8601 duration decoding.
//!
//! The YouTube API encodes video lengths as `PT#H#M#S` with each component
//! optional. This module turns that encoding into whole seconds.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid regex"));

/// Decode an ISO-8601 duration into whole seconds.
///
/// Absent components count as zero, so `PT2H` is 7200 and `PT45S` is 45.
/// Input that does not match the pattern is logged and decoded as 0 rather
/// than failing; callers treat an undecodable duration the same as an
/// absent one.
pub fn decode(text: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(text) else {
        warn!(input = %text, "unparseable duration encoding");
        return 0;
    };

    // Components are digit-only, so the only parse failure is overflow;
    // saturate instead of wrapping or panicking to keep decoding total.
    let component = |index: usize| {
        caps.get(index)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .unwrap_or(0)
    };

    component(1)
        .saturating_mul(3600)
        .saturating_add(component(2).saturating_mul(60))
        .saturating_add(component(3))
}
