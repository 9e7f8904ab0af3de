// Worker - per-token stand-in computation

use crate::core::Token;

/// Placeholder work applied to each consumed token. The result carries no
/// meaning and callers discard it.
pub fn process_token(token: &Token) -> i64 {
    token.value().wrapping_mul(2)
}
