//! Append-only collection of known-answer vectors.
//!
//! A [`Registry`] is an ordinary value which can be filled and handed to a [`crate::runner::Runner`].
//! For test orchestration spanning a whole process, [`init`] freezes a registry exactly once,
//! after which it is shared read-only through [`global`].

use std::sync::OnceLock;

use crate::vector::TestVector;

/// Named test vectors in registration order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    vectors: Vec<TestVector>,
}

impl Registry {
    /// creates a registry holding the vectors of the GCM specification, see [`crate::vectors::gcm_spec`]
    pub fn with_gcm_spec() -> Self {
        let mut registry = Self::default();
        crate::vectors::gcm_spec::register(&mut registry);
        registry
    }

    /// Appends a vector. Names are expected to be unique, duplicates are only logged since they merely make
    /// reports ambiguous.
    pub fn register(&mut self, vector: TestVector) {
        if self.vectors.iter().any(|v| v.name() == vector.name()) {
            log::warn!(
                "Test vector '{}' is registered more than once",
                vector.name()
            );
        }
        log::trace!(
            "Registering test vector '{}' ({})",
            vector.name(),
            vector.algorithm()
        );
        self.vectors.push(vector);
    }

    /// every registered vector, in registration order
    pub fn all(&self) -> &[TestVector] {
        &self.vectors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestVector> {
        self.vectors.iter()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl Extend<TestVector> for Registry {
    fn extend<T: IntoIterator<Item = TestVector>>(&mut self, iter: T) {
        iter.into_iter().for_each(|vector| self.register(vector));
    }
}

impl FromIterator<TestVector> for Registry {
    fn from_iter<T: IntoIterator<Item = TestVector>>(iter: T) -> Self {
        let mut registry = Self::default();
        registry.extend(iter);
        registry
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestVector;
    type IntoIter = std::slice::Iter<'a, TestVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Runs the registration closure and freezes the resulting registry for the lifetime of the process.
/// Only the first call registers anything; later closures are dropped without being run.
pub fn init<F>(register: F) -> &'static Registry
where
    F: FnOnce(&mut Registry),
{
    let mut initialized = false;
    let registry = GLOBAL.get_or_init(|| {
        initialized = true;
        let mut registry = Registry::default();
        register(&mut registry);
        log::debug!("Froze global registry with {} vectors", registry.len());
        registry
    });

    if !initialized {
        log::warn!("Global registry is already initialized, ignoring registration");
    }

    registry
}

/// The process-wide registry. Falls back to the GCM specification vectors if [`init`] was never called.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        log::debug!("No registry installed, using the GCM specification vectors");
        Registry::with_gcm_spec()
    })
}
