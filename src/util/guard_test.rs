use super::*;

// =============================================================
// Transition table, cell by cell
// =============================================================

#[test]
fn root_redirects_by_state() {
    assert_eq!(resolve(Target::Root, false), Outcome::Redirect("/login"));
    assert_eq!(resolve(Target::Root, true), Outcome::Redirect("/home"));
}

#[test]
fn credential_forms_render_only_while_unauthenticated() {
    assert_eq!(resolve(Target::Login, false), Outcome::Render);
    assert_eq!(resolve(Target::Signup, false), Outcome::Render);
    assert_eq!(resolve(Target::Login, true), Outcome::Redirect("/home"));
    assert_eq!(resolve(Target::Signup, true), Outcome::Redirect("/home"));
}

#[test]
fn protected_screens_never_render_while_unauthenticated() {
    assert_eq!(resolve(Target::Home, false), Outcome::Redirect("/login"));
    assert_eq!(resolve(Target::DropFiles, false), Outcome::Redirect("/login"));
}

#[test]
fn protected_screens_render_while_authenticated() {
    assert_eq!(resolve(Target::Home, true), Outcome::Render);
    assert_eq!(resolve(Target::DropFiles, true), Outcome::Render);
}

#[test]
fn unknown_paths_return_to_root_in_both_states() {
    assert_eq!(resolve(Target::Unknown, false), Outcome::Redirect("/"));
    assert_eq!(resolve(Target::Unknown, true), Outcome::Redirect("/"));
}

// =============================================================
// Login/logout scenario walked through the table
// =============================================================

#[test]
fn login_then_logout_flips_protected_access() {
    // Unauthenticated: the dashboard is unreachable.
    assert_eq!(resolve(Target::Home, false), Outcome::Redirect("/login"));
    // After a committed login the same navigation renders.
    assert_eq!(resolve(Target::Home, true), Outcome::Render);
    // After logout it redirects again.
    assert_eq!(resolve(Target::Home, false), Outcome::Redirect("/login"));
}
