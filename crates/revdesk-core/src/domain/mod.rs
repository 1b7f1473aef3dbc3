//! Domain types shared across revdesk crates.
//!
//! These are pure data types with no infrastructure dependencies.

mod envelope;
mod notification;
mod outcome;
mod request;

pub use envelope::{EnvelopeVerdict, ErrorBody, ResponseEnvelope};
pub use notification::{NotificationId, NotificationState, Severity};
pub use outcome::{Failure, FailureKind, Outcome};
pub use request::{HttpMethod, QueryParams, RequestDescriptor};
