//! Routing and specialist dispatch for RecruitEM.
//!
//! A dispatch follows a fixed pipeline:
//!
//! 1. **Build state** from the input event and the job catalog
//! 2. **Route** on the status: `assessment` or `interview`
//! 3. **Run one specialist**, which calls its tools and drafts the message
//! 4. **Return** the message, with the full state and trace when asked
//!
//! There are no loops, retries or partial completions.

pub mod assessment;
pub mod builder;
pub mod interview;
pub mod messages;
pub mod orchestrator;
pub mod router;
pub mod specialist;

pub use assessment::AssessmentAgent;
pub use interview::InterviewAgent;
pub use messages::MessageStyle;
pub use orchestrator::{Artifact, DispatchMetadata, DispatchOutcome, Orchestrator};
pub use router::route;
pub use specialist::Specialist;

#[cfg(test)]
pub(crate) mod test_helpers;
