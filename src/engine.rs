use std::any::Any;

use crate::action::ActionContext;
use crate::errors::AuthzError;
use crate::registry::PolicyRegistry;
use crate::resolve::{resolve, Resolution};

/// Explicit replacements for the convention-resolved policy and query names.
/// Either one always wins over resolution; with both set the action path is
/// not consulted at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'o> {
    pub policy: Option<&'o str>,
    pub query: Option<&'o str>,
}

impl<'o> Overrides<'o> {
    pub fn policy(name: &'o str) -> Self {
        Self {
            policy: Some(name),
            query: None,
        }
    }

    pub fn query(name: &'o str) -> Self {
        Self {
            policy: None,
            query: Some(name),
        }
    }

    pub fn with_query(mut self, name: &'o str) -> Self {
        self.query = Some(name);
        self
    }
}

/// Authorize an action against the registry using naming-convention
/// resolution.
///
/// The policy and query names are derived from `action.action_path()`, the
/// actor comes from `action.current_actor()`, and the policy is built fresh
/// for this one check. On an allow the original record reference comes back
/// for inline chaining (`None` when no record was supplied); on a deny the
/// result is `NotAuthorized`.
pub fn authorize<'a, A>(
    registry: &PolicyRegistry<A::Actor>,
    action: &'a A,
    record: Option<&'a dyn Any>,
) -> Result<Option<&'a dyn Any>, AuthzError>
where
    A: ActionContext,
{
    authorize_with(registry, action, record, Overrides::default())
}

/// [`authorize`], with explicit policy and/or query overrides.
pub fn authorize_with<'a, A>(
    registry: &PolicyRegistry<A::Actor>,
    action: &'a A,
    record: Option<&'a dyn Any>,
    overrides: Overrides<'_>,
) -> Result<Option<&'a dyn Any>, AuthzError>
where
    A: ActionContext,
{
    let resolution = resolve_request(action.action_path(), overrides)?;

    let Some(entry) = registry.get(&resolution.policy) else {
        return Err(AuthzError::UnknownPolicy(resolution.policy));
    };

    let allowed = entry.invoke(action.current_actor(), record, &resolution.query)?;
    if allowed {
        tracing::debug!(
            policy = %resolution.policy,
            query = %resolution.query,
            "authorization granted"
        );
        Ok(record)
    } else {
        tracing::debug!(
            policy = %resolution.policy,
            query = %resolution.query,
            "authorization denied"
        );
        Err(AuthzError::NotAuthorized)
    }
}

/// Apply override precedence on top of convention resolution.
fn resolve_request(path: &str, overrides: Overrides<'_>) -> Result<Resolution, AuthzError> {
    match (overrides.policy, overrides.query) {
        (Some(policy), Some(query)) => Ok(Resolution {
            policy: policy.to_string(),
            query: query.to_string(),
        }),
        (policy, query) => {
            let mut resolution = resolve(path)?;
            if let Some(name) = policy {
                resolution.policy = name.to_string();
            }
            if let Some(name) = query {
                resolution.query = name.to_string();
            }
            Ok(resolution)
        }
    }
}
