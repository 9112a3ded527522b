//! Immutable, hierarchical request context
//!
//! A `Context` is a persistent chain of key/value bindings. Deriving a child
//! with [`Context::with_value`] shares the parent's chain and never mutates
//! it, so a context can be cloned and handed to other threads or tasks
//! freely. Lookups walk from the newest binding towards the root; the
//! nearest binding for a key wins.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

struct Binding {
    key: &'static str,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Binding>>,
}

/// Request-scoped key/value carrier
///
/// # Example
///
/// ```
/// use request_logger::Context;
///
/// let root = Context::background();
/// let child = root.with_value("tenant", String::from("acme"));
///
/// assert_eq!(child.value::<String>("tenant").map(String::as_str), Some("acme"));
/// assert!(root.value::<String>("tenant").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Binding>>,
}

impl Context {
    /// Empty root context
    pub fn background() -> Self {
        Self { head: None }
    }

    /// Derive a child context that binds `key` to `value`
    #[must_use]
    pub fn with_value<T>(&self, key: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Binding {
                key,
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the nearest binding for `key`
    ///
    /// Returns `None` when the key is unbound or when the nearest binding
    /// holds a value of another type. Outer bindings shadowed by a
    /// mistyped inner one are not consulted.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.key == key {
                return binding.value.downcast_ref::<T>();
            }
            current = binding.parent.as_deref();
        }
        None
    }

    /// Whether any binding exists for `key`, regardless of its type
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Check if no values have been bound
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Bound keys, newest first (shadowed keys appear once per binding)
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut current = self.head.as_deref();
        std::iter::from_fn(move || {
            let binding = current?;
            current = binding.parent.as_deref();
            Some(binding.key)
        })
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_empty() {
        let ctx = Context::background();
        assert!(ctx.is_empty());
        assert!(ctx.value::<String>("anything").is_none());
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = Context::background().with_value("a", 1_i64);
        let child = parent.with_value("b", 2_i64);

        assert_eq!(child.value::<i64>("a"), Some(&1));
        assert_eq!(child.value::<i64>("b"), Some(&2));
        assert!(parent.value::<i64>("b").is_none());
    }

    #[test]
    fn test_nearest_binding_wins() {
        let ctx = Context::background()
            .with_value("key", String::from("outer"))
            .with_value("key", String::from("inner"));

        assert_eq!(ctx.value::<String>("key").map(String::as_str), Some("inner"));
    }

    #[test]
    fn test_type_mismatch_returns_none() {
        let ctx = Context::background().with_value("key", 42_u32);
        assert!(ctx.value::<String>("key").is_none());
        assert!(ctx.contains_key("key"));
    }

    #[test]
    fn test_keys_newest_first() {
        let ctx = Context::background()
            .with_value("first", true)
            .with_value("second", false);

        assert_eq!(ctx.keys().collect::<Vec<_>>(), ["second", "first"]);
        assert_eq!(format!("{:?}", ctx), r#"Context { keys: ["second", "first"] }"#);
    }
}
