
use crate::TokenService;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes!!";
pub(crate) const UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0";
/// 2026-01-01T00:00:00Z
pub(crate) const NOW: i64 = 1_767_225_600;

pub(crate) fn test_tokens() -> TokenService {
    TokenService::with_defaults(SECRET).unwrap()
}
