//! Generated Source Cache
//!
//! Memoizes template library output for one generator and hands out the
//! text together with its xxh3-128 hash, which hosts use as a pipeline or
//! shader-module cache key. Generation is deterministic, so a hash always
//! identifies the same text.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use xxhash_rust::xxh3::xxh3_128;

use crate::builder::ShaderGenerator;
use crate::errors::Result;
use crate::templates::ShaderTemplate;

/// Hashes generated shader text.
#[inline]
#[must_use]
pub fn source_hash(source: &str) -> u128 {
    xxh3_128(source.as_bytes())
}

/// A generated source and its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSource {
    pub source: Arc<str>,
    pub hash: u128,
}

impl CachedSource {
    #[must_use]
    pub fn new(source: String) -> Self {
        let hash = source_hash(&source);
        Self {
            source: source.into(),
            hash,
        }
    }
}

/// Thread-safe template cache bound to one [`ShaderGenerator`].
#[derive(Debug)]
pub struct ShaderSourceCache {
    generator: ShaderGenerator,
    entries: RwLock<FxHashMap<ShaderTemplate, CachedSource>>,
}

impl ShaderSourceCache {
    #[must_use]
    pub fn new(generator: ShaderGenerator) -> Self {
        Self {
            generator,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    #[inline]
    #[must_use]
    pub fn generator(&self) -> &ShaderGenerator {
        &self.generator
    }

    /// Returns the cached source of `template`, generating it on first use.
    pub fn get_or_generate(&self, template: ShaderTemplate) -> Result<CachedSource> {
        if let Some(cached) = self.entries.read().get(&template) {
            return Ok(cached.clone());
        }

        // Racing threads may both generate; the text is identical either way.
        let cached = CachedSource::new(self.generator.generate(template)?);
        log::trace!(
            "Generated shader template '{}' ({} bytes, hash {:032x})",
            template.name(),
            cached.source.len(),
            cached.hash
        );

        Ok(self
            .entries
            .write()
            .entry(template)
            .or_insert(cached)
            .clone())
    }

    /// Returns the number of cached sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every cached source.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CapabilityProfile, RenderApi};

    fn cache(api: RenderApi) -> ShaderSourceCache {
        ShaderSourceCache::new(ShaderGenerator::new(CapabilityProfile::for_api(api)))
    }

    #[test]
    fn test_get_or_generate_reuses_entry() {
        let cache = cache(RenderApi::OpenGLES);
        let first = cache.get_or_generate(ShaderTemplate::FillFragment).unwrap();
        let second = cache.get_or_generate(ShaderTemplate::FillFragment).unwrap();

        assert!(Arc::ptr_eq(&first.source, &second.source));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hash_matches_source() {
        let cache = cache(RenderApi::D3D11);
        let cached = cache.get_or_generate(ShaderTemplate::CopyFragment).unwrap();
        assert_eq!(cached.hash, source_hash(&cached.source));
    }

    #[test]
    fn test_clear() {
        let cache = cache(RenderApi::Vulkan);
        for template in ShaderTemplate::ALL {
            cache.get_or_generate(template).unwrap();
        }
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }
}
