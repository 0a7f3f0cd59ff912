//! Response envelope shared by every pipeline
//!
//! Engines return typed errors; the service layer turns each error into a
//! [`Diagnostic`] on a [`Response`]. A response is valid iff it carries no
//! diagnostics, and an invalid response always holds an empty payload.

use std::fmt;

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationDetail {
    /// The member (field, column, argument) the failure refers to
    pub member: Option<String>,
    /// Description of the failure
    pub message: String,
}

impl ValidationDetail {
    /// Create a detail for a named member
    pub fn new<M: Into<String>, S: Into<String>>(member: M, message: S) -> Self {
        Self {
            member: Some(member.into()),
            message: message.into(),
        }
    }
}

/// A user-visible failure attached to a response
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Field-level details, empty unless this is a validation failure
    pub validation: Vec<ValidationDetail>,
}

impl Diagnostic {
    /// Create a diagnostic with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            validation: Vec::new(),
        }
    }

    /// Create a validation diagnostic from field-level details
    pub fn validation(details: Vec<ValidationDetail>) -> Self {
        Self {
            message: "Validation failed".into(),
            validation: details,
        }
    }

    /// Check if this diagnostic carries validation details
    pub fn is_validation(&self) -> bool {
        !self.validation.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for detail in &self.validation {
            match &detail.member {
                Some(member) => write!(f, "; {}: {}", member, detail.message)?,
                None => write!(f, "; {}", detail.message)?,
            }
        }
        Ok(())
    }
}

/// A payload together with the diagnostics collected while producing it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response<T> {
    payload: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T: Default> Response<T> {
    /// A valid response carrying a payload
    pub fn ok(payload: T) -> Self {
        Self {
            payload,
            diagnostics: Vec::new(),
        }
    }

    /// An invalid response with one diagnostic and an empty payload
    pub fn failed(diagnostic: Diagnostic) -> Self {
        Self {
            payload: T::default(),
            diagnostics: vec![diagnostic],
        }
    }

    /// Build a response from an engine result, converting the error into a diagnostic
    pub fn from_result<E: fmt::Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(e) => Self::failed(Diagnostic::new(e.to_string())),
        }
    }

    /// Attach a diagnostic; the payload is discarded
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.payload = T::default();
        self.diagnostics.push(diagnostic);
    }
}

impl<T> Response<T> {
    /// Check if the response has no diagnostics
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the payload
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the response and return the payload
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Get the diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Transform the payload, keeping diagnostics
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            payload: f(self.payload),
            diagnostics: self.diagnostics,
        }
    }
}

impl<T: Default> Default for Response<T> {
    fn default() -> Self {
        Self::ok(T::default())
    }
}
