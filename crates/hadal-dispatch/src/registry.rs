//! Name-keyed kernel registry.

use indexmap::IndexMap;

use hadal_kernel::Kernel;

/// A registry mapping entry-point names to boxed kernels.
///
/// Used by callers that dispatch by name — the C and Python boundaries
/// look kernels up here. Backed by an `IndexMap` so iteration order is
/// registration order, which keeps name listings deterministic.
///
/// Registering a kernel under an existing name replaces the previous
/// entry (latest wins).
#[derive(Default)]
pub struct KernelRegistry {
    kernels: IndexMap<String, Box<dyn Kernel>>,
}

impl KernelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kernel under its own [`name()`](Kernel::name).
    pub fn register(&mut self, kernel: Box<dyn Kernel>) {
        self.kernels.insert(kernel.name().to_string(), kernel);
    }

    /// Look up a kernel by name.
    pub fn get(&self, name: &str) -> Option<&dyn Kernel> {
        self.kernels.get(name).map(|k| k.as_ref())
    }

    /// Whether a kernel is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.kernels.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kernels.keys().map(String::as_str)
    }

    /// Number of registered kernels.
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Returns `true` if no kernels are registered.
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

impl std::fmt::Debug for KernelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadal_core::KernelError;
    use hadal_kernel::KernelContext;

    struct Named(&'static str);

    impl Kernel for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn arity(&self) -> usize {
            0
        }
        fn apply(&self, _ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
            Ok(())
        }
    }

    #[test]
    fn register_and_get() {
        let mut reg = KernelRegistry::new();
        assert!(reg.is_empty());
        reg.register(Box::new(Named("alpha")));
        assert_eq!(reg.len(), 1);
        assert!(reg.contains("alpha"));
        assert_eq!(reg.get("alpha").map(|k| k.name()), Some("alpha"));
        assert!(reg.get("beta").is_none());
    }

    #[test]
    fn names_preserve_registration_order() {
        let mut reg = KernelRegistry::new();
        reg.register(Box::new(Named("c")));
        reg.register(Box::new(Named("a")));
        reg.register(Box::new(Named("b")));
        let names: Vec<_> = reg.names().collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn reregistration_replaces() {
        struct Arity(usize);
        impl Kernel for Arity {
            fn name(&self) -> &str {
                "same"
            }
            fn arity(&self) -> usize {
                self.0
            }
            fn apply(&self, _ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
                Ok(())
            }
        }

        let mut reg = KernelRegistry::new();
        reg.register(Box::new(Arity(1)));
        reg.register(Box::new(Arity(2)));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("same").map(|k| k.arity()), Some(2));
    }
}
