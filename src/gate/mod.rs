//! Pre-deployment validation gate.
//!
//! A [`ValidationGate`] decodes a [`ConfigurationPayload`], parses the
//! document and hands it to a [`ProfileValidator`]. Every failure becomes a
//! [`ValidationResult::Rejected`]; the gate never panics on caller input and
//! performs no I/O.

pub mod error;
pub mod logging;
pub mod policy;
pub mod registry;

use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{info, warn};

use crate::domain::{ConfigurationPayload, Rejection, ValidationResult};

pub use error::GateError;
pub use logging::LoggingValidator;
pub use policy::GatePolicy;
pub use registry::{GateRegistry, LOGGING_PROFILE};

/// Token returned to the pipeline when a document is accepted.
pub const SUCCESS: &str = "Success";

/// Standard alphabet; `=` padding is accepted but not required.
const CONTENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Schema checks for one configuration profile.
pub trait ProfileValidator: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, document: &Value) -> Result<(), GateError>;
}

#[derive(Clone)]
pub struct ValidationGate {
    validator: Arc<dyn ProfileValidator>,
    max_payload_bytes: usize,
}

impl ValidationGate {
    pub fn new(validator: impl ProfileValidator + 'static, max_payload_bytes: usize) -> Self {
        Self {
            validator: Arc::new(validator),
            max_payload_bytes,
        }
    }

    /// Gate for the `LoggingConfiguration` profile.
    pub fn logging(policy: &GatePolicy) -> Self {
        Self::new(LoggingValidator::new(policy), policy.max_payload_bytes)
    }

    pub fn validate(&self, payload: &ConfigurationPayload) -> ValidationResult {
        let validator = self.validator.name();
        match self.check(payload) {
            Ok(()) => {
                info!(validator, encoded_len = payload.content.len(), "configuration accepted");
                ValidationResult::Accepted
            }
            Err(e) => {
                warn!(validator, kind = %e.kind(), reason = %e, "configuration rejected");
                ValidationResult::Rejected(e.into())
            }
        }
    }

    fn check(&self, payload: &ConfigurationPayload) -> Result<(), GateError> {
        let encoded = payload.content.as_bytes();

        // Refuse before allocating when the encoded form is already too long.
        let max_encoded = base64::encoded_len(self.max_payload_bytes, true).unwrap_or(usize::MAX);
        if encoded.len() > max_encoded {
            return Err(GateError::TooLarge {
                size: base64::decoded_len_estimate(encoded.len()),
                limit: self.max_payload_bytes,
            });
        }

        let decoded = CONTENT_ENGINE.decode(encoded)?;
        if decoded.len() > self.max_payload_bytes {
            return Err(GateError::TooLarge {
                size: decoded.len(),
                limit: self.max_payload_bytes,
            });
        }

        let document = parse_document(&decoded)?;
        self.validator.check(&document)
    }
}

/// Only the first document of a stream is validated. An empty or
/// whitespace-only stream has no keys at all.
fn parse_document(bytes: &[u8]) -> Result<Value, GateError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    match serde_yaml::Deserializer::from_slice(bytes).next() {
        Some(document) => Ok(Value::deserialize(document)?),
        None => Ok(Value::Null),
    }
}

/// Function-style entry point: `"Success"` or the rejection as an error.
pub fn invoke(
    gate: &ValidationGate,
    payload: &ConfigurationPayload,
) -> Result<&'static str, Rejection> {
    match gate.validate(payload) {
        ValidationResult::Accepted => Ok(SUCCESS),
        ValidationResult::Rejected(rejection) => Err(rejection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RejectionKind;
    use tracing_test::traced_test;

    fn gate() -> ValidationGate {
        ValidationGate::logging(&GatePolicy::default())
    }

    fn rejection(result: ValidationResult) -> Rejection {
        match result {
            ValidationResult::Rejected(rejection) => rejection,
            ValidationResult::Accepted => panic!("expected rejection"),
        }
    }

    #[test]
    fn accepts_info_level() {
        let payload = ConfigurationPayload::from_document("application.logging: {level: INFO}\n");
        assert_eq!(gate().validate(&payload), ValidationResult::Accepted);
    }

    #[test]
    fn accepts_json_documents() {
        let payload =
            ConfigurationPayload::from_document(r#"{"application.logging": {"level": "TRACE"}}"#);
        assert!(gate().validate(&payload).is_accepted());
    }

    #[test]
    fn rejects_level_outside_enumeration() {
        let payload = ConfigurationPayload::from_document("application.logging: {level: WARN}\n");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::InvalidValue);
        assert_eq!(rejection.reason, "Allowed values are INFO, TRACE or DEBUG");
    }

    #[test]
    fn rejects_empty_mapping() {
        let payload = ConfigurationPayload::from_document("{}");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::MissingSection);
        assert_eq!(rejection.reason, "Missing application.logging");
    }

    #[test]
    fn rejects_blank_document_as_missing_section() {
        for document in ["", "\n  \n"] {
            let payload = ConfigurationPayload::from_document(document);
            let rejection = rejection(gate().validate(&payload));
            assert_eq!(rejection.reason, "Missing application.logging");
        }
    }

    #[test]
    fn rejects_scalar_root_as_missing_section() {
        let payload = ConfigurationPayload::from_document("just a string");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::MissingSection);
    }

    #[test]
    fn rejects_section_without_level() {
        let payload = ConfigurationPayload::from_document("application.logging: {}\n");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::MissingField);
        assert_eq!(rejection.reason, "Missing level config");
    }

    #[test]
    fn rejects_non_base64_content() {
        let payload = ConfigurationPayload::new("not-base64!!");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::Decode);
        assert!(rejection.reason.starts_with("Content is not valid base64"));
    }

    #[test]
    fn accepts_unpadded_base64() {
        use base64::engine::general_purpose::STANDARD_NO_PAD;

        // 34 bytes, so the canonical encoding would end in `==`.
        let content = STANDARD_NO_PAD.encode("application.logging: {level: INFO}");
        assert!(!content.ends_with('='));
        assert!(gate().validate(&ConfigurationPayload::new(content)).is_accepted());
    }

    #[test]
    fn accepts_document_wrapped_in_separators() {
        let payload =
            ConfigurationPayload::from_document("---\napplication.logging:\n  level: INFO\n---\n");
        assert!(gate().validate(&payload).is_accepted());
    }

    #[test]
    fn validates_only_first_document_of_stream() {
        let payload = ConfigurationPayload::from_document(
            "application.logging:\n  level: DEBUG\n---\napplication.logging:\n  level: WARN\n",
        );
        assert!(gate().validate(&payload).is_accepted());

        let payload = ConfigurationPayload::from_document(
            "application.logging:\n  level: WARN\n---\napplication.logging:\n  level: DEBUG\n",
        );
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::InvalidValue);
    }

    #[test]
    fn rejects_duplicate_keys_as_parse_error() {
        let payload = ConfigurationPayload::from_document(
            "application.logging:\n  level: WARN\n  level: INFO\n",
        );
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::Parse);
        assert!(rejection.reason.contains("duplicate entry"));
    }

    #[test]
    fn rejects_unparsable_document_with_distinct_reason() {
        let payload = ConfigurationPayload::from_document("application.logging: [unclosed\n");
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::Parse);
        assert!(rejection.reason.starts_with("Content is not a valid YAML or JSON document"));
    }

    #[test]
    fn rejects_non_utf8_document() {
        let payload = ConfigurationPayload::from_document([0xff, 0xfe, 0xfd]);
        let rejection = rejection(gate().validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::Parse);
    }

    #[test]
    fn rejects_oversized_encoding_before_decoding() {
        let gate = ValidationGate::logging(&GatePolicy {
            max_payload_bytes: 8,
            ..GatePolicy::default()
        });
        // Not valid base64 either; the size check must win.
        let payload = ConfigurationPayload::new("!".repeat(64));
        let rejection = rejection(gate.validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::TooLarge);
    }

    #[test]
    fn rejects_decoded_payload_over_limit() {
        let gate = ValidationGate::logging(&GatePolicy {
            max_payload_bytes: 4,
            ..GatePolicy::default()
        });
        // Six bytes encode to eight characters, which is within the encoded bound.
        let payload = ConfigurationPayload::from_document("abcdef");
        let rejection = rejection(gate.validate(&payload));
        assert_eq!(rejection.kind, RejectionKind::TooLarge);
        assert_eq!(rejection.reason, "Payload of 6 bytes exceeds the 4 byte limit");
    }

    #[test]
    fn accepts_payload_exactly_at_limit() {
        let document = "application.logging: {level: INFO}";
        let gate = ValidationGate::logging(&GatePolicy {
            max_payload_bytes: document.len(),
            ..GatePolicy::default()
        });
        assert!(gate.validate(&ConfigurationPayload::from_document(document)).is_accepted());
    }

    #[test]
    fn validate_is_idempotent_and_leaves_input_untouched() {
        let payload = ConfigurationPayload::from_document("application.logging: {level: WARN}\n");
        let snapshot = payload.clone();
        let gate = gate();
        let first = gate.validate(&payload);
        let second = gate.validate(&payload);
        assert_eq!(first, second);
        assert_eq!(payload, snapshot);
    }

    #[test]
    fn invoke_returns_success_token() {
        let payload = ConfigurationPayload::from_document("application.logging: {level: DEBUG}\n");
        assert_eq!(invoke(&gate(), &payload), Ok("Success"));
    }

    #[test]
    fn invoke_surfaces_rejection_as_error() {
        let payload = ConfigurationPayload::from_document("application.logging: {}\n");
        let err = invoke(&gate(), &payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing level config");
    }

    #[traced_test]
    #[test]
    fn rejection_is_logged_without_document_content() {
        let payload = ConfigurationPayload::from_document(
            "application.logging: {level: WARN}\ndb.password: hunter2\n",
        );
        gate().validate(&payload);
        assert!(logs_contain("configuration rejected"));
        assert!(logs_contain("InvalidValue"));
        assert!(!logs_contain("hunter2"));
        assert!(!logs_contain(&payload.content));
    }
}
