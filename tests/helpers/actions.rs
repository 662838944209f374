//! A stand-in for framework actions: carries the hierarchical action path
//! and the session's current account.

use palisade::{ActionContext, CurrentActor};

use super::fixtures::Account;

pub struct RequestContext {
    path: String,
    actor: Option<Account>,
}

impl RequestContext {
    pub fn anonymous(path: &str) -> Self {
        Self {
            path: path.into(),
            actor: None,
        }
    }

    pub fn signed_in(path: &str, actor: Account) -> Self {
        Self {
            path: path.into(),
            actor: Some(actor),
        }
    }
}

impl CurrentActor for RequestContext {
    type Actor = Account;

    fn current_actor(&self) -> Option<&Account> {
        self.actor.as_ref()
    }
}

impl ActionContext for RequestContext {
    fn action_path(&self) -> &str {
        &self.path
    }
}
