//! Request handling around the skill duration engine.
//!
//! Wraps [`analyze_experiences`] with payload extraction and response
//! shaping. Callers hand [`RequestHandler::handle`] a parsed request body and
//! get back a [`Response`] carrying an HTTP-style status: `200` with the
//! `freelance` envelope on success, or a bare `422` when anything in the
//! payload is missing or malformed. Error details are logged, never returned.

use serde_json::{json, Value};
use skill_core::models::OverlapPolicy;
use skill_core::{Result, SkillError};
use skill_data::analysis::{analyze_experiences, SkillReport};
use skill_data::reader::parse_payload;
use tracing::{error, info, warn};

use crate::io::{read_payload, InputSource};

// ── Status codes ──────────────────────────────────────────────────────────────

/// The payload was processed.
pub const STATUS_OK: u16 = 200;

/// The payload could not be processed.
pub const STATUS_UNPROCESSABLE: u16 = 422;

/// Processing failed for a reason unrelated to the payload content.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// `EX_DATAERR` from `sysexits.h`, returned for unprocessable payloads.
const EXIT_DATA_ERROR: u8 = 65;

const EXIT_FAILURE: u8 = 1;

// ── Response ──────────────────────────────────────────────────────────────────

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    /// Response envelope; `None` for failures.
    pub body: Option<Value>,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body: Some(body),
        }
    }

    fn failure(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Map a failed request onto its status. Only errors caused by the
    /// payload content are `422`; anything else is an internal failure.
    fn rejection(err: &SkillError) -> Self {
        if err.is_malformed_input() {
            warn!("Rejecting payload: {}", err);
            Self::failure(STATUS_UNPROCESSABLE)
        } else {
            error!("Request failed: {}", err);
            Self::failure(STATUS_INTERNAL_ERROR)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Process exit code for the command-line front end.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else if self.status == STATUS_UNPROCESSABLE {
            EXIT_DATA_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

// ── RequestHandler ────────────────────────────────────────────────────────────

/// Turns request bodies into responses. Holds no per-request state, so one
/// handler can serve any number of calls, including concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestHandler {
    policy: OverlapPolicy,
}

impl RequestHandler {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self { policy }
    }

    /// Handle a parsed request body.
    pub fn handle(&self, body: &Value) -> Response {
        match self.process(body) {
            Ok(envelope) => Response::ok(envelope),
            Err(e) => Response::rejection(&e),
        }
    }

    /// Read the body from `source` and handle it.
    ///
    /// Unparseable JSON is an unprocessable payload. Failing to read the
    /// source at all is returned as an error, since no request was received.
    pub fn handle_source(&self, source: &InputSource) -> Result<Response> {
        match read_payload(source) {
            Ok(body) => Ok(self.handle(&body)),
            Err(e) if e.is_malformed_input() => Ok(Response::rejection(&e)),
            Err(e) => Err(e),
        }
    }

    fn process(&self, body: &Value) -> Result<Value> {
        let payload = parse_payload(body)?;
        let SkillReport { skills, metadata } =
            analyze_experiences(&payload.experiences, self.policy);

        info!(
            "Freelancer {}: {} skills from {} experiences ({} merges)",
            payload.freelancer_id,
            metadata.skills_found,
            metadata.experiences_processed,
            metadata.merges_performed,
        );

        Ok(json!({
            "freelance": {
                "id": payload.freelancer_id,
                "computedSkills": skills,
            }
        }))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
