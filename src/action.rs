/// Capability the calling context must expose: the current actor, which may
/// be absent for anonymous requests.
///
/// The actor type is fixed once per application; implement this on whatever
/// carries request identity (an extracted session, a request context, an
/// action struct).
pub trait CurrentActor {
    type Actor;

    fn current_actor(&self) -> Option<&Self::Actor>;
}

/// Hierarchical identity of an action, used for convention-based policy
/// resolution.
///
/// The path must reflect namespace nesting and end in the action segment,
/// e.g. `"Store::Books::Index"`. Actions that only ever authorize with
/// explicit policy and query overrides may return any placeholder.
pub trait ActionContext: CurrentActor {
    fn action_path(&self) -> &str;
}
