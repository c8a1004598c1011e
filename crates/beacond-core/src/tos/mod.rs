//! Terms-of-use consent gate.
//!
//! The gate runs once, before the requested command. Acceptance is resolved in
//! this order:
//!
//! 1. A `tosaccepted` marker in the home directory
//! 2. The `--accept-tos` flag (records the marker)
//! 3. An interactive answer read from the injected input (records the marker on accept)
//!
//! Anything else fails closed: the command never runs.

pub mod gate;
pub mod marker;

pub use gate::{AcceptedVia, ConsentGate, ConsentState};
pub use marker::{TosMarker, ACCEPT_TOS_FILENAME};

/// Answer that accepts the terms (case-insensitive).
pub const ACCEPT_TOKEN: &str = "accept";

/// Answer that declines the terms. Also the default for an empty answer.
pub const DECLINE_TOKEN: &str = "decline";

/// Returned verbatim when the terms are declined. Scripts match on this text.
pub const DECLINED_ERROR_TEXT: &str =
    "you have to accept Terms and Conditions in order to continue";

/// Where the terms live unless configured otherwise.
pub const DEFAULT_TOS_URL: &str =
    "https://github.com/berachain/beacon-kit/blob/main/TERMS_OF_SERVICE.md";

/// Operator answer to the terms prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TosDecision {
    Accept,
    Decline,
}

/// Map a raw answer line to a decision. Unrecognized answers decline.
pub fn parse_decision(input: &str) -> TosDecision {
    if input.trim().eq_ignore_ascii_case(ACCEPT_TOKEN) {
        TosDecision::Accept
    } else {
        TosDecision::Decline
    }
}

/// Prompt shown to the operator.
pub fn prompt_text(terms_url: &str) -> String {
    format!(
        "\nTerms of Use\n\n\
         By downloading, accessing or using this implementation, you certify that you have\n\
         read and agreed to the terms and conditions at:\n\n\
         {terms_url}\n\n\
         Type \"{ACCEPT_TOKEN}\" to accept these terms and conditions \
         [{ACCEPT_TOKEN}/{DECLINE_TOKEN}] (default: {DECLINE_TOKEN}):"
    )
}

/// Explanation attached to a failed prompt. The URL is the trailing parameter,
/// so `prompt_error_text("")` is a prefix of every rendered form.
pub fn prompt_error_text(terms_url: &str) -> String {
    format!(
        "could not scan text input, if you are trying to run in non-interactive environment, you\n\
         can use the --accept-tos flag after reading the terms and conditions here: \n{terms_url}"
    )
}
