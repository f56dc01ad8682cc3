use std::sync::Arc;

use proplus::notifications::NotificationCenter;
use proplus::site::{Route, SiteShell};

fn shell_at_home() -> (SiteShell, Arc<NotificationCenter>) {
    let center = Arc::new(NotificationCenter::new());
    (SiteShell::new(center.clone()), center)
}

#[test]
fn stub_pages_notify_exactly_once_per_mount() {
    for route in [Route::Buy, Route::Rent, Route::Agents, Route::Login] {
        let center = Arc::new(NotificationCenter::new());
        let shell = SiteShell::at(route, center.clone());

        assert_eq!(center.active_count(), 1, "{route:?} notifies on mount");

        // re-render without remount raises nothing new
        let _ = shell.page().render();
        let _ = shell.page().render();
        assert_eq!(center.active_count(), 1, "{route:?} is silent on re-render");
    }
}

#[test]
fn remounting_a_stub_page_notifies_again() {
    let (mut shell, center) = shell_at_home();

    shell.navigate_to(Route::Buy);
    shell.navigate_to(Route::Home);
    shell.navigate_to(Route::Buy);

    assert_eq!(center.active_count(), 2);
}

#[test]
fn content_pages_mount_silently() {
    let (mut shell, center) = shell_at_home();
    assert_eq!(center.active_count(), 0);

    shell.navigate_to(Route::FeaturedProperties);
    assert_eq!(center.active_count(), 0);
}

#[test]
fn layout_identity_survives_navigation() {
    let (mut shell, _center) = shell_at_home();
    let navbar_id = shell.navbar().id();
    let footer_id = shell.footer().id();
    let home_page_id = shell.page().id();

    shell.navigate_to(Route::Buy);

    assert_ne!(shell.page().id(), home_page_id, "page was remounted");
    assert_eq!(shell.navbar().id(), navbar_id, "navbar instance persists");
    assert_eq!(shell.footer().id(), footer_id, "footer instance persists");
}

#[test]
fn navigation_does_not_cancel_in_flight_notifications() {
    let (mut shell, center) = shell_at_home();

    shell.navigate_to(Route::Buy);
    let raised_on_buy = center.active();
    assert_eq!(raised_on_buy.len(), 1);

    shell.navigate_to(Route::FeaturedProperties);

    let still_active = center.active();
    assert_eq!(still_active.len(), 1);
    assert_eq!(still_active[0].id, raised_on_buy[0].id);
}

#[test]
fn notifications_expire_independently() {
    let (mut shell, center) = shell_at_home();

    // 3000 ms stub notice and the 5000 ms publish notice
    shell.navigate_to(Route::Buy);
    shell.navigate_to(Route::Publish);

    let stack = center.active();
    assert_eq!(stack.len(), 2);
    let buy_deadline = stack[0].expires_at;

    assert_eq!(center.sweep_at(buy_deadline), 1);
    let survivors = center.active();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].duration_ms, 5000);
}

#[test]
fn navigate_path_resolves_the_route_table() {
    let (mut shell, _center) = shell_at_home();

    assert!(shell.navigate_path("/comprar"));
    assert_eq!(shell.current_route(), Route::Buy);

    assert!(!shell.navigate_path("/remates"));
    assert_eq!(shell.current_route(), Route::Buy, "unknown path changes nothing");
}

#[test]
fn back_navigation_restores_the_previous_page() {
    let (mut shell, _center) = shell_at_home();

    shell.navigate_to(Route::FeaturedProperties);
    shell.navigate_to(Route::Agents);

    assert!(shell.navigate_back());
    assert_eq!(shell.current_route(), Route::FeaturedProperties);
    assert!(shell.navigate_back());
    assert_eq!(shell.current_route(), Route::Home);
    assert!(!shell.navigate_back(), "history is exhausted");
}

#[test]
fn shell_view_reflects_the_current_page() {
    let (mut shell, _center) = shell_at_home();
    shell.navigate_to(Route::Rent);

    let view = shell.render("ProPlus");
    assert_eq!(view.route, Route::Rent);
    assert_eq!(view.path, "/arrendar");
    assert!(view
        .navbar
        .items
        .iter()
        .any(|item| item.active && item.path == "/arrendar"));
}
