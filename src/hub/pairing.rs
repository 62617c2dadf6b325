//! Canonical session keys for pairwise chat rooms

/// Separator between the two participant identifiers in a session key.
/// Callers must keep it out of identifiers (or escape it) for keys to be
/// collision-free; the chat endpoint's URL-decoded path segments satisfy
/// this for the identifier charset the platform allows.
pub const SESSION_KEY_SEPARATOR: char = ':';

/// Derive the room key for a pairwise chat session. Order-independent:
/// the lexicographically smaller identifier always comes first, so both
/// participants resolve to the same room no matter which side connects.
pub fn session_key(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}{SESSION_KEY_SEPARATOR}{hi}")
}
