// src/cache.rs
//! Content-keyed memo of parsed schedules.
//!
//! Parsing is a pure function of (source bytes, parse options), so the same
//! upload parsed twice can share one `Schedule`. Keys are SHA-256 hex digests.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use sha2::{Digest, Sha256};

use crate::config::options::ParseOptions;
use crate::error::Result;
use crate::schedule::Schedule;

/// SHA-256 of the source bytes plus every option that changes the parse.
pub fn checksum(bytes: &[u8], opts: &ParseOptions) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.update(format!("{opts:?}").as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Default)]
pub struct ScheduleCache {
    entries: HashMap<String, Arc<Schedule>>,
    hits: usize,
}

impl ScheduleCache {
    pub fn new() -> Self { Self::default() }

    /// Return the cached schedule for this content, or build and remember it.
    /// Failed builds are not cached.
    pub fn get_or_parse<F>(&mut self, bytes: &[u8], opts: &ParseOptions, build: F) -> Result<Arc<Schedule>>
    where
        F: FnOnce() -> Result<Schedule>,
    {
        let key = checksum(bytes, opts);
        if let Some(s) = self.entries.get(&key) {
            self.hits += 1;
            debug!("Schedule cache hit {}", &key[..12]);
            return Ok(Arc::clone(s));
        }
        let schedule = Arc::new(build()?);
        self.entries.insert(key, Arc::clone(&schedule));
        Ok(schedule)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn hits(&self) -> usize { self.hits }
}
