//! Text rendering of the list and detail screens.

use std::fmt::Write as _;

use gitadmin_app::AppState;
use gitadmin_core::types::{UserDetail, UserItem};

/// Load up to `pages` pages of the profile list and render them.
pub async fn show_list(state: &AppState, pages: u32) -> String {
    let list = state.user_list_controller();
    list.load_initial().await;
    for _ in 1..pages {
        if !list.has_more_data().await {
            break;
        }
        list.load_more().await;
    }

    let items = list.items().await;
    if list.state().await.is_loading() {
        return "Profile list could not be loaded.\n".to_string();
    }
    let mut out = render_items(&items);
    if list.has_more_data().await {
        let _ = writeln!(out, "... more after id {}", list.cursor().await);
    }
    out
}

/// Fetch and render the profile of `login`.
pub async fn show_detail(state: &AppState, login: &str) -> String {
    let detail = state.user_detail_controller(login);
    detail.fetch_detail().await;
    match detail.user().await {
        Some(user) => render_detail(&user),
        None => format!("Profile of {login} could not be loaded.\n"),
    }
}

pub fn render_items(items: &[UserItem]) -> String {
    if items.is_empty() {
        return "No users.\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let _ = write!(out, "{:>10}  {}", item.id, item.login);
        if item.name != item.login {
            let _ = write!(out, " ({})", item.name);
        }
        out.push('\n');
    }
    out
}

pub fn render_detail(user: &UserDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (@{})", user.item.name, user.item.login);
    for (label, value) in [
        ("Location", &user.item.location),
        ("Profile", &user.item.html_url),
        ("Blog", &user.blog),
        ("Followers", &user.followers),
        ("Following", &user.following),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "  {label:<10} {value}");
        }
    }
    out
}
