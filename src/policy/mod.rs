pub mod basket;

use crate::game::{OrchardState, RandomSource, TreeId};
use std::collections::HashMap;
use std::fmt;

/// One capability: given the trees that still carry fruit, pick the one to
/// harvest. The game loop is shared; only this step differs between runs.
pub trait Policy: Send + Sync + fmt::Debug {
    /// `available` is nonempty and sorted by tree id; the returned id must
    /// come from it.
    fn select_tree(
        &mut self,
        available: &[TreeId],
        state: &OrchardState,
        random: &mut dyn RandomSource,
    ) -> TreeId;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Policy>;
}

pub struct PolicyRegistry {
    policies: HashMap<String, Box<dyn Fn() -> Box<dyn Policy> + Send + Sync>>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            policies: HashMap::new(),
        };
        registry.register_builtin();
        registry
    }

    fn register_builtin(&mut self) {
        self.register("random", || Box::new(basket::RandomPick));
        self.register("greedy", || Box::new(basket::GreedyPick));
    }

    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Policy> + Send + Sync + 'static,
    {
        self.policies.insert(name.to_lowercase(), Box::new(factory));
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Policy>> {
        self.policies.get(&name.to_lowercase()).map(|factory| factory())
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.policies.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn global() -> &'static PolicyRegistry {
        use std::sync::OnceLock;
        static REGISTRY: OnceLock<PolicyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(PolicyRegistry::new)
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_the_builtin_policies() {
        let registry = PolicyRegistry::global();
        assert_eq!(registry.list(), vec!["greedy", "random"]);

        let policy = registry.create("Greedy").expect("case-insensitive lookup");
        assert_eq!(policy.name(), "greedy");
        assert!(registry.create("clairvoyant").is_none());
    }
}
