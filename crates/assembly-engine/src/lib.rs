pub mod compose;
pub mod layout;
pub mod rules;
pub mod types;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use catalog::{Catalog, ResolvedConfiguration, ResolvedGlazing, ResolvedProduct, ResolvedProfile};
use sash_types::{Configuration, Palette};

pub use compose::compose;
pub use layout::{layout_leaves, leaf_insets, operable_leaf, LeafLayout};
pub use rules::assemble;
pub use types::{Assembly, AssemblyConfig, Diagnostics};

/// Cache key: the normalized tuple, with dimensions compared by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    product: ResolvedProduct,
    profile: ResolvedProfile,
    glazing: ResolvedGlazing,
    palette: Palette,
    width: u64,
    height: u64,
}

impl From<&ResolvedConfiguration> for CacheKey {
    fn from(r: &ResolvedConfiguration) -> Self {
        Self {
            product: r.product,
            profile: r.profile.clone(),
            glazing: r.glazing.clone(),
            palette: r.palette.clone(),
            width: r.width.to_bits(),
            height: r.height.to_bits(),
        }
    }
}

/// Hit and miss counters of an [`Assembler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Turns configurations into assemblies against one catalog.
///
/// Owns the catalog and a bounded cache of recent results. Cached assemblies
/// are shared immutably, so a render loop can hold one while the configurator
/// moves on.
pub struct Assembler {
    catalog: Catalog,
    config: AssemblyConfig,
    cache: HashMap<CacheKey, Arc<Assembly>>,
    /// Insertion order, oldest first.
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

impl Assembler {
    pub fn new(catalog: Catalog, config: AssemblyConfig) -> Self {
        Self {
            catalog,
            config,
            cache: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Normalize and assemble, reusing a cached result for an equal tuple.
    #[instrument(skip(self, configuration), fields(product = ?configuration.product_type))]
    pub fn assemble(&mut self, configuration: &Configuration) -> Arc<Assembly> {
        let resolved = catalog::normalize(&self.catalog, configuration);
        if self.config.cache_capacity == 0 {
            self.misses += 1;
            return Arc::new(rules::assemble(&resolved, &self.config));
        }

        let key = CacheKey::from(&resolved);
        if let Some(hit) = self.cache.get(&key) {
            self.hits += 1;
            debug!("assembly cache hit");
            return Arc::clone(hit);
        }

        self.misses += 1;
        let assembly = Arc::new(rules::assemble(&resolved, &self.config));
        info!(
            parts = assembly.parts.len(),
            warnings = assembly.diagnostics.warnings.len(),
            "assembled configuration"
        );

        while self.order.len() >= self.config.cache_capacity {
            match self.order.pop_front() {
                Some(old) => {
                    self.cache.remove(&old);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.cache.insert(key, Arc::clone(&assembly));
        assembly
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.order.clear();
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(Catalog::default(), AssemblyConfig::default())
    }
}
