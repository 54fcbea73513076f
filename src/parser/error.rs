//! Parse error signal.

/// An internal control-flow signal raised by a parse error.
///
/// The message and location are reported to the shared diagnostic sink at
/// the point the error is detected (see [`super::Parser::error`]); this type
/// carries no payload of its own, since by the time it exists the error has
/// already been surfaced. Propagating it with `?` simply unwinds to the
/// nearest declaration boundary, where panic-mode synchronization resumes
/// parsing.
#[derive(Debug)]
pub struct ParseError;

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error (see diagnostics for detail)")
    }
}

impl std::error::Error for ParseError {}
