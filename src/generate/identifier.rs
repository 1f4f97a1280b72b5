//! UUID and trace id helpers

use crate::error::Result;
use crate::source::{RandomSource, UuidSource};
use super::generator::TokenGenerator;

impl<R: RandomSource, U: UuidSource> TokenGenerator<R, U> {
    /// Canonical hyphenated UUID from the UUID source
    pub fn uuid(&self) -> Result<String> {
        Ok(self.uuids.next_uuid()?.to_string())
    }

    /// UUID with hyphens stripped (32 hex characters)
    ///
    /// # Example
    /// ```
    /// let trace_id = tokenkit::default_generator().trace_id().unwrap();
    /// assert_eq!(trace_id.len(), 32);
    /// assert!(!trace_id.contains('-'));
    /// ```
    pub fn trace_id(&self) -> Result<String> {
        let trace_id = self.uuid()?.replace("-", "");
        tracing::debug!("generated trace id");
        Ok(trace_id)
    }
}
