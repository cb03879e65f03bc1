//! Route guarding as an explicit two-state machine.
//!
//! DESIGN
//! ======
//! The complete navigation table lives in [`resolve`] so it is testable
//! without any rendering. Pages install the effect wrapper, which
//! re-evaluates on every session mutation; evaluation is synchronous since
//! session restoration is, so no intermediate loading state exists.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Navigation targets the router can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Root,
    Login,
    Signup,
    Home,
    DropFiles,
    Unknown,
}

/// Guard verdict for one (target, session) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The target's own screen may render.
    Render,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// The transition table, driven solely by the authenticated flag.
pub fn resolve(target: Target, authenticated: bool) -> Outcome {
    match (target, authenticated) {
        (Target::Root, false) => Outcome::Redirect("/login"),
        (Target::Root, true) => Outcome::Redirect("/home"),
        (Target::Login | Target::Signup, false) => Outcome::Render,
        (Target::Login | Target::Signup, true) => Outcome::Redirect("/home"),
        (Target::Home | Target::DropFiles, false) => Outcome::Redirect("/login"),
        (Target::Home | Target::DropFiles, true) => Outcome::Render,
        (Target::Unknown, _) => Outcome::Redirect("/"),
    }
}

/// Re-run the guard for `target` on every session change, navigating away
/// whenever the table says so.
pub fn install_guard<F>(target: Target, session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Outcome::Redirect(path) = resolve(target, session.get().authenticated()) {
            navigate(path, NavigateOptions::default());
        }
    });
}
