use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::marker::TosMarker;
use super::{parse_decision, prompt_error_text, prompt_text, TosDecision, DEFAULT_TOS_URL};
use crate::config::NodeConfig;
use crate::error::{TosError, TosResult};

/// Terms-of-use consent for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    #[default]
    Unknown,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Classify the outcome of [`ConsentGate::verify_or_prompt`].
    pub fn of(outcome: &TosResult<AcceptedVia>) -> Self {
        match outcome {
            Ok(_) => Self::Accepted,
            Err(TosError::Declined | TosError::PromptFailed { .. }) => Self::Declined,
            Err(TosError::MarkerWrite { .. } | TosError::MarkerRead { .. }) => Self::Unknown,
        }
    }
}

/// How the terms came to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptedVia {
    /// Recorded by an earlier run.
    Marker,
    /// `--accept-tos` on this run.
    Flag,
    /// Operator answered the prompt.
    Prompt,
}

/// Startup terms-of-use check.
#[derive(Debug, Clone)]
pub struct ConsentGate {
    marker: TosMarker,
    accept_flag: bool,
    terms_url: String,
}

impl ConsentGate {
    pub fn new(marker: TosMarker, accept_flag: bool) -> Self {
        Self {
            marker,
            accept_flag,
            terms_url: DEFAULT_TOS_URL.to_string(),
        }
    }

    pub fn from_config(config: &NodeConfig) -> Self {
        Self::new(TosMarker::new(&config.home), config.accept_tos)
            .with_terms_url(config.tos_url.clone())
    }

    pub fn with_terms_url(mut self, url: impl Into<String>) -> Self {
        self.terms_url = url.into();
        self
    }

    pub fn marker(&self) -> &TosMarker {
        &self.marker
    }

    /// Consent without prompting: accepted if the marker or the flag is present.
    pub fn state(&self) -> TosResult<ConsentState> {
        if self.accept_flag || self.marker.exists()? {
            Ok(ConsentState::Accepted)
        } else {
            Ok(ConsentState::Unknown)
        }
    }

    /// Resolve consent, prompting on `input`/`output` only when neither the marker
    /// nor the flag is present. Acceptance is durably recorded before returning.
    pub fn verify_or_prompt(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> TosResult<AcceptedVia> {
        if self.marker.exists()? {
            debug!(path = %self.marker.path().display(), "terms previously accepted");
            return Ok(AcceptedVia::Marker);
        }

        if self.accept_flag {
            self.marker.write()?;
            info!("terms of use accepted via flag");
            return Ok(AcceptedVia::Flag);
        }

        let answer = self.prompt(input, output)?;
        match parse_decision(&answer) {
            TosDecision::Accept => {
                self.marker.write()?;
                info!("terms of use accepted");
                Ok(AcceptedVia::Prompt)
            }
            TosDecision::Decline => {
                debug!(answer = answer.trim(), "terms of use declined");
                Err(TosError::Declined)
            }
        }
    }

    fn prompt(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> TosResult<String> {
        let failed = |source: io::Error| {
            warn!(error = %source, "terms prompt could not be completed");
            TosError::PromptFailed {
                message: prompt_error_text(&self.terms_url),
                source,
            }
        };

        writeln!(output, "{}", prompt_text(&self.terms_url)).map_err(failed)?;
        output.flush().map_err(failed)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(failed)?;
        if read == 0 {
            return Err(failed(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input available",
            )));
        }
        Ok(line)
    }
}
