use inflector::Inflector;

use crate::errors::AuthzError;

/// The policy name and query name derived from an action path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// e.g. "Store::BookPolicy"
    pub policy: String,
    /// e.g. "index"
    pub query: String,
}

/// Derive {policy name, query name} from a hierarchical action path.
///
/// For `Store::Books::Index`: the last segment is the action, the remainder
/// is the base namespace. The base's final component is singularized and
/// suffixed with `Policy`, the action is snake-cased:
/// `Store::BookPolicy` / `index`.
///
/// Singularization is delegated to a general-purpose inflection routine, so
/// irregular plurals resolve the way English does (`People::Show` →
/// `PersonPolicy`).
pub fn resolve(path: &str) -> Result<Resolution, AuthzError> {
    let segments: Vec<&str> = path.split("::").collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(AuthzError::InvalidActionPath(path.to_string()));
    }

    let Some((action, base)) = segments.split_last() else {
        return Err(AuthzError::InvalidActionPath(path.to_string()));
    };
    let Some((noun, namespace)) = base.split_last() else {
        return Err(AuthzError::InvalidActionPath(path.to_string()));
    };

    let mut policy = String::new();
    for segment in namespace {
        policy.push_str(segment);
        policy.push_str("::");
    }
    policy.push_str(&noun.to_singular());
    policy.push_str("Policy");

    let query = action.to_snake_case();

    tracing::debug!(path = %path, policy = %policy, query = %query, "resolved action path");

    Ok(Resolution { policy, query })
}
