//! Record enrichment: logger identity plus optional stack/snippet context.

use std::sync::{PoisonError, RwLock};

use crate::{frame::FrameContext, record::LogRecord};

/// Identity value in effect until a caller sets one (11 underscores).
pub const DEFAULT_LOGGER_ID: &str = "___________";

/// Attaches identity and optional diagnostic context to records before
/// formatting.
///
/// The identity is shared mutable state guarded by an `RwLock`: readers never
/// observe torn values, a set is visible to every subsequent enrichment from
/// any thread, and there is no association between an identity value and any
/// record emitted before the set. Callers racing `set_identity` against emits
/// get last-writer-wins ordering.
#[derive(Debug)]
pub struct ContextEnricher {
    logger_id: RwLock<String>,
}

impl Default for ContextEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextEnricher {
    /// Creates an enricher holding the default identity.
    pub fn new() -> Self {
        Self {
            logger_id: RwLock::new(DEFAULT_LOGGER_ID.to_owned()),
        }
    }

    /// Replaces the identity. An empty value resets it to
    /// [`DEFAULT_LOGGER_ID`].
    pub fn set_identity(&self, id: impl Into<String>) {
        let id = id.into();
        let mut guard = self
            .logger_id
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = if id.is_empty() {
            DEFAULT_LOGGER_ID.to_owned()
        } else {
            id
        };
    }

    /// Returns the identity currently in effect.
    pub fn identity(&self) -> String {
        self.logger_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Enriches `record` in place: copies in the current identity and, when a
    /// frame handle is supplied, the rendered stack trace and source snippet.
    ///
    /// Never fails and never suppresses a record; frame introspection
    /// problems degrade to empty `stack`/`snippet` fields.
    pub fn enrich(&self, record: &mut LogRecord<'_>, frame: Option<&FrameContext>) {
        record.logger_id = self.identity();
        match frame {
            Some(frame) => {
                record.stack = frame.render_stack();
                record.snippet = frame.render_snippet();
            }
            None => {
                record.stack.clear();
                record.snippet.clear();
            }
        }
    }
}
