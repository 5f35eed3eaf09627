//! Cache of compiled templates keyed by template text and arity

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::trace;

use crate::args::Arguments;
use crate::error::TemplateError;
use crate::FormatError;

use super::Template;

type Key = (&'static str, usize);

/// Compiled templates shared between callers
///
/// Lookups only take the read lock. On a miss the template is compiled
/// outside the lock and the first inserted copy wins; compiling the same text
/// twice gives identical templates, so racing callers agree.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: RwLock<HashMap<Key, Arc<Template<'static>>>>,
}

static GLOBAL: OnceLock<TemplateCache> = OnceLock::new();

impl TemplateCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache
    pub fn global() -> &'static TemplateCache {
        GLOBAL.get_or_init(TemplateCache::new)
    }

    /// Get the compiled template, compiling it on first use
    ///
    /// Failed compilations are not cached.
    pub fn get_or_compile(
        &self,
        source: &'static str,
        arity: usize,
    ) -> Result<Arc<Template<'static>>, TemplateError> {
        let key = (source, arity);
        {
            // Entries are immutable once inserted, so a poisoned lock is still usable
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(template) = entries.get(&key) {
                trace!(source, arity, "template cache hit");
                return Ok(Arc::clone(template));
            }
        }

        trace!(source, arity, "template cache miss");
        let compiled = Arc::new(Template::compile(source, arity)?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(key).or_insert(compiled)))
    }

    /// Format with a cached template compiled for the argument list's arity
    pub fn format<A: Arguments + ?Sized>(
        &self,
        source: &'static str,
        args: &A,
    ) -> Result<String, FormatError> {
        self.get_or_compile(source, args.arity())?.format(args)
    }

    /// Number of cached templates
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached template
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
