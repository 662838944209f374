use std::any::Any;
use std::collections::HashMap;

use crate::errors::AuthzError;

/// What applications register per policy: construct the policy from
/// (actor, record) and dispatch the query. Plain `fn` pointers keep the
/// table `Send + Sync` and generic over borrow lifetimes.
pub type PolicyHandler<U, R> = fn(Option<&U>, Option<&R>, &str) -> Result<bool, AuthzError>;

type ErasedHandler<U> =
    Box<dyn Fn(Option<&U>, Option<&dyn Any>, &str) -> Result<bool, AuthzError> + Send + Sync>;

/// One registered policy: its type-erased invoker plus the record type name
/// for diagnostics.
pub struct PolicyEntry<U> {
    record_type: &'static str,
    handler: ErasedHandler<U>,
}

impl<U> PolicyEntry<U> {
    pub fn record_type(&self) -> &'static str {
        self.record_type
    }

    /// Downcast the erased record and run the registered handler.
    pub fn invoke(
        &self,
        actor: Option<&U>,
        record: Option<&dyn Any>,
        query: &str,
    ) -> Result<bool, AuthzError> {
        (self.handler)(actor, record, query)
    }
}

impl<U> std::fmt::Debug for PolicyEntry<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEntry")
            .field("record_type", &self.record_type)
            .finish_non_exhaustive()
    }
}

/// Table mapping policy names (e.g. "Store::BookPolicy") to invokers.
///
/// The actor type is fixed once per registry, per application. Populated
/// explicitly at startup and immutable afterwards; share it behind an
/// `Arc` across request handlers.
pub struct PolicyRegistry<U> {
    entries: HashMap<String, PolicyEntry<U>>,
}

impl<U> Default for PolicyRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> std::fmt::Debug for PolicyRegistry<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<U> PolicyRegistry<U> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PolicyEntry<U>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<U: 'static> PolicyRegistry<U> {
    /// Register a policy under a name. The handler receives the actor, the
    /// record already downcast to `R`, and the query name. Registering the
    /// same name again replaces the previous entry.
    pub fn register<R: Any>(&mut self, name: impl Into<String>, handler: PolicyHandler<U, R>) {
        let name = name.into();
        if self.entries.contains_key(&name) {
            tracing::warn!(policy = %name, "replacing existing policy registration");
        }

        let policy_name = name.clone();
        let record_type = std::any::type_name::<R>();
        let erased: ErasedHandler<U> = Box::new(move |actor, record, query| {
            let record = match record {
                None => None,
                Some(any) => {
                    Some(any.downcast_ref::<R>().ok_or_else(|| {
                        AuthzError::RecordTypeMismatch {
                            policy: policy_name.clone(),
                            expected: record_type,
                        }
                    })?)
                }
            };
            handler(actor, record, query)
        });

        self.entries.insert(
            name,
            PolicyEntry {
                record_type,
                handler: erased,
            },
        );
    }
}
