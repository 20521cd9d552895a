//! Deterministic universe construction.
//!
//! A universe is built in three steps that share one [`Mulberry32`] stream:
//!
//! 1. the four base elements, then `generated_total` synthesized elements;
//! 2. the curated base-pair recipes ([`SEED_RECIPES`]);
//! 3. a bulk fill that samples random pairs until `recipe_target` products
//!    exist or the attempt budget runs out.
//!
//! The same [`UniverseConfig`] always yields the same universe.

use crate::element::{Category, Element, ElementRegistry};
use crate::names::{synthesize_name, synthesize_product_name};
use crate::recipe::{PairKey, RecipeBook};
use crate::rng::Mulberry32;
use crate::{BASE_ELEMENTS, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Curated recipes inserted before the bulk fill, as `(a, b, result)`.
pub const SEED_RECIPES: [(&str, &str, &str); 9] = [
    ("Water", "Water", "Pond"),
    ("Water", "Fire", "Steam"),
    ("Fire", "Fire", "Ember"),
    ("Earth", "Water", "Mud"),
    ("Air", "Air", "Breeze"),
    ("Earth", "Earth", "Hill"),
    ("Air", "Water", "Rain"),
    ("Air", "Fire", "Spark"),
    ("Earth", "Fire", "Lava"),
];

/// Parameters of universe construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Seed of the shared random stream.
    pub seed: u32,
    /// Number of synthesized elements.
    pub generated_total: usize,
    /// Number of bulk recipes to aim for.
    pub recipe_target: usize,
    /// Attempt budget per key in the sampling pool.
    pub attempt_multiplier: usize,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            generated_total: 1200,
            recipe_target: 1400,
            attempt_multiplier: 6,
        }
    }
}

impl UniverseConfig {
    /// Default parameters with a different seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Counters describing one universe build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Synthesized elements.
    pub generated: usize,
    /// Elements created by the curated recipes.
    pub natural: usize,
    /// Recipes (and product elements) created by the bulk fill.
    pub products: usize,
    /// Bulk attempts consumed.
    pub attempts: usize,
    /// Bulk attempt budget.
    pub attempt_budget: usize,
}

impl BuildStats {
    /// Whether the bulk fill stopped on its attempt budget.
    pub fn under_filled(&self, target: usize) -> bool {
        self.products < target
    }
}

/// Immutable elements database: seed, elements and recipes.
#[derive(Debug, Clone, Serialize)]
pub struct Universe {
    seed: u32,
    elements: ElementRegistry,
    recipes: RecipeBook,
    #[serde(skip)]
    stats: BuildStats,
}

impl Universe {
    /// Build the universe described by `config`.
    pub fn generate(config: &UniverseConfig) -> Self {
        let mut rng = Mulberry32::new(config.seed);
        let mut elements = ElementRegistry::new();
        let mut recipes = RecipeBook::new();

        for base in BASE_ELEMENTS {
            elements.insert(base, Category::Base);
        }
        for i in 0..config.generated_total {
            elements.insert(synthesize_name(&mut rng, i + 1), Category::Generated);
        }

        let mut natural = 0;
        for (a, b, result) in SEED_RECIPES {
            recipes.insert(PairKey::new(a, b), result);
            if elements.insert(result, Category::Natural) {
                natural += 1;
            }
        }

        let pool: Vec<String> = elements.names().map(str::to_owned).collect();
        let attempt_budget = pool.len() * config.attempt_multiplier;
        let mut created = 0;
        let mut attempts = 0;
        while created < config.recipe_target && attempts < attempt_budget {
            let a = &pool[rng.index(pool.len())];
            let b = &pool[rng.index(pool.len())];
            attempts += 1;
            if a == b {
                continue;
            }
            let key = PairKey::new(a, b);
            if recipes.contains(&key) {
                continue;
            }
            let product = synthesize_product_name(&mut rng, created + 1);
            elements.insert(product.clone(), Category::Product);
            recipes.insert(key, product);
            created += 1;
        }

        let stats = BuildStats {
            generated: config.generated_total,
            natural,
            products: created,
            attempts,
            attempt_budget,
        };
        debug!(
            seed = config.seed,
            elements = elements.len(),
            recipes = recipes.len(),
            attempts,
            attempt_budget,
            "universe generated"
        );
        if stats.under_filled(config.recipe_target) {
            debug!(
                target = config.recipe_target,
                created, "bulk fill stopped on attempt budget"
            );
        }

        Self {
            seed: config.seed,
            elements,
            recipes,
            stats,
        }
    }

    /// Universe for `seed` with default parameters.
    pub fn from_seed(seed: u32) -> Self {
        Self::generate(&UniverseConfig::with_seed(seed))
    }

    /// Seed the universe was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    /// The recipe table.
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Counters from the build.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Look up an element by name.
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    /// Result element of combining two names, if a recipe exists.
    pub fn combine(&self, a: &str, b: &str) -> Option<&Element> {
        self.recipes
            .combine(a, b)
            .and_then(|result| self.elements.get(result))
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::generate(&UniverseConfig::default())
    }
}
