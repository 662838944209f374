//! A small bookstore domain used across the integration tests.

use palisade::{standard_query, AuthzError, Policy, PolicyRegistry};

pub struct Account {
    pub name: String,
    pub admin: bool,
}

impl Account {
    pub fn member(name: &str) -> Self {
        Self {
            name: name.into(),
            admin: false,
        }
    }

    pub fn admin(name: &str) -> Self {
        Self {
            name: name.into(),
            admin: true,
        }
    }
}

#[derive(Debug)]
pub struct Book {
    pub title: String,
    pub owner: String,
}

/// Relies entirely on the deny-all trait defaults.
pub struct DefaultBookPolicy<'a> {
    actor: Option<&'a Account>,
    record: Option<&'a Book>,
}

impl<'a> Policy<'a> for DefaultBookPolicy<'a> {
    type Actor = Account;
    type Record = Book;

    fn build(actor: Option<&'a Account>, record: Option<&'a Book>) -> Self {
        Self { actor, record }
    }

    fn actor(&self) -> Option<&'a Account> {
        self.actor
    }

    fn record(&self) -> Option<&'a Book> {
        self.record
    }
}

/// The store's real rules: browsing needs a session, editing needs ownership
/// or staff, archiving is staff-only via a custom query.
pub struct BookPolicy<'a> {
    actor: Option<&'a Account>,
    record: Option<&'a Book>,
}

impl<'a> BookPolicy<'a> {
    pub fn can_archive(&self) -> bool {
        self.actor().map(|a| a.admin).unwrap_or(false)
    }
}

impl<'a> Policy<'a> for BookPolicy<'a> {
    type Actor = Account;
    type Record = Book;

    fn build(actor: Option<&'a Account>, record: Option<&'a Book>) -> Self {
        Self { actor, record }
    }

    fn actor(&self) -> Option<&'a Account> {
        self.actor
    }

    fn record(&self) -> Option<&'a Book> {
        self.record
    }

    fn can_index(&self) -> bool {
        self.actor.is_some()
    }

    fn can_show(&self) -> bool {
        true
    }

    fn can_create(&self) -> bool {
        self.actor.is_some()
    }

    fn can_update(&self) -> bool {
        match (self.actor, self.record) {
            (Some(actor), Some(book)) => actor.admin || actor.name == book.owner,
            (Some(actor), None) => actor.admin,
            _ => false,
        }
    }

    fn can_delete(&self) -> bool {
        self.actor.map(|a| a.admin).unwrap_or(false)
    }

    fn query(&self, query: &str) -> Result<bool, AuthzError> {
        match query {
            "archive" => Ok(self.can_archive()),
            other => standard_query(self, other),
        }
    }
}

/// Account administration is staff-only across the board.
pub struct AccountPolicy<'a> {
    actor: Option<&'a Account>,
    record: Option<&'a Account>,
}

impl<'a> Policy<'a> for AccountPolicy<'a> {
    type Actor = Account;
    type Record = Account;

    fn build(actor: Option<&'a Account>, record: Option<&'a Account>) -> Self {
        Self { actor, record }
    }

    fn actor(&self) -> Option<&'a Account> {
        self.actor
    }

    fn record(&self) -> Option<&'a Account> {
        self.record
    }

    fn can_index(&self) -> bool {
        self.actor.map(|a| a.admin).unwrap_or(false)
    }
}

fn book_policy(
    actor: Option<&Account>,
    record: Option<&Book>,
    query: &str,
) -> Result<bool, AuthzError> {
    BookPolicy::build(actor, record).query(query)
}

fn default_book_policy(
    actor: Option<&Account>,
    record: Option<&Book>,
    query: &str,
) -> Result<bool, AuthzError> {
    DefaultBookPolicy::build(actor, record).query(query)
}

fn account_policy(
    actor: Option<&Account>,
    record: Option<&Account>,
    query: &str,
) -> Result<bool, AuthzError> {
    AccountPolicy::build(actor, record).query(query)
}

/// Registry as the store application would assemble it at startup.
pub fn store_registry() -> PolicyRegistry<Account> {
    let mut registry = PolicyRegistry::new();
    registry.register("BookPolicy", book_policy);
    registry.register("Store::BookPolicy", book_policy);
    registry.register("AccountPolicy", account_policy);
    registry
}

/// Registry whose `BookPolicy` keeps every trait default.
pub fn default_registry() -> PolicyRegistry<Account> {
    let mut registry = PolicyRegistry::new();
    registry.register("BookPolicy", default_book_policy);
    registry
}
