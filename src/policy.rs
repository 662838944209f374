use crate::errors::AuthzError;

/// A permission ruleset for one record type, queried per action.
///
/// An implementation holds the actor requesting permission (possibly absent,
/// e.g. anonymous visitors) and the record being authorized against (possibly
/// absent, e.g. collection-level actions). Both are borrowed and immutable
/// for the lifetime of the check; a policy is built once per check and
/// discarded after the query returns.
///
/// Every standard query denies by default. `can_new` and `can_edit` are
/// derivations, not independent defaults: they call `can_create` and
/// `can_update`, so overriding only those changes the derived answers too.
pub trait Policy<'a>: Sized {
    type Actor: 'a;
    type Record: 'a;

    /// Pure data holder; never fails.
    fn build(actor: Option<&'a Self::Actor>, record: Option<&'a Self::Record>) -> Self;

    fn actor(&self) -> Option<&'a Self::Actor>;

    fn record(&self) -> Option<&'a Self::Record>;

    /// Whether the collection listing action is permitted.
    fn can_index(&self) -> bool {
        false
    }

    /// Whether viewing a single record is permitted.
    fn can_show(&self) -> bool {
        false
    }

    /// Whether creating a record is permitted.
    fn can_create(&self) -> bool {
        false
    }

    /// Whether rendering the creation form is permitted. Follows `can_create`.
    fn can_new(&self) -> bool {
        self.can_create()
    }

    /// Whether updating a record is permitted.
    fn can_update(&self) -> bool {
        false
    }

    /// Whether rendering the edit form is permitted. Follows `can_update`.
    fn can_edit(&self) -> bool {
        self.can_update()
    }

    /// Whether deleting a record is permitted.
    fn can_delete(&self) -> bool {
        false
    }

    /// Dispatch a permission query by name.
    ///
    /// Override to add custom query names, delegating unmatched names to
    /// [`standard_query`] so convention-resolved queries keep working:
    ///
    /// ```ignore
    /// fn query(&self, query: &str) -> Result<bool, AuthzError> {
    ///     match query {
    ///         "archive" => Ok(self.can_archive()),
    ///         other => standard_query(self, other),
    ///     }
    /// }
    /// ```
    fn query(&self, query: &str) -> Result<bool, AuthzError> {
        standard_query(self, query)
    }

    /// Build the policy, run `query`, and enforce the answer: the original
    /// record comes back on an allow, `NotAuthorized` on a deny.
    fn authorize(
        actor: Option<&'a Self::Actor>,
        record: Option<&'a Self::Record>,
        query: &str,
    ) -> Result<Option<&'a Self::Record>, AuthzError> {
        let policy = Self::build(actor, record);
        if policy.query(query)? {
            Ok(record)
        } else {
            Err(AuthzError::NotAuthorized)
        }
    }
}

/// Dispatch one of the seven standard query names on a policy.
///
/// Kept as a free function so `query` overrides can fall back to it.
pub fn standard_query<'a, P: Policy<'a>>(policy: &P, query: &str) -> Result<bool, AuthzError> {
    match query {
        "index" => Ok(policy.can_index()),
        "show" => Ok(policy.can_show()),
        "create" => Ok(policy.can_create()),
        "new" => Ok(policy.can_new()),
        "update" => Ok(policy.can_update()),
        "edit" => Ok(policy.can_edit()),
        "delete" => Ok(policy.can_delete()),
        other => Err(AuthzError::UnknownQuery(other.to_string())),
    }
}
