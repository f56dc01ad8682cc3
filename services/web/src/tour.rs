use clap::Args;
use proplus::catalog::PropertyId;
use proplus::error::AppError;
use proplus::notifications::NotificationCenter;
use proplus::site::{AuthMode, CardClick, Route, SiteShell, SocialProvider};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct TourArgs {
    /// Path to load the site at (defaults to the home page)
    #[arg(long, default_value = "/")]
    pub(crate) start: String,
    /// Skip the auth modal portion of the tour
    #[arg(long)]
    pub(crate) skip_auth: bool,
}

/// Walks every route and interaction, printing each notification as the
/// site raises it.
pub(crate) fn run_tour(args: TourArgs) -> Result<(), AppError> {
    let center = Arc::new(NotificationCenter::new());
    let mut shell = match SiteShell::at_path(&args.start, center.clone()) {
        Some(shell) => shell,
        None => {
            println!("Unknown path {}, starting at /", args.start);
            SiteShell::new(center.clone())
        }
    };

    let mut cursor = 0;

    println!("ProPlus site tour");
    println!(
        "Loaded at {} ({})",
        shell.current_route().path(),
        shell.current_route().page_title()
    );
    cursor = drain(&center, cursor);

    println!("\nRoute walkthrough");
    for route in Route::ordered() {
        if route == shell.current_route() {
            continue;
        }
        shell.navigate_to(route);
        println!("-> {} | {}", route.path(), route.page_title());
        cursor = drain(&center, cursor);
    }

    println!("\nBack navigation");
    while shell.navigate_back() {
        println!("<- {}", shell.current_route().path());
    }

    println!("\nFavorites on {}", Route::FeaturedProperties.path());
    shell.navigate_to(Route::FeaturedProperties);
    cursor = drain(&center, cursor);
    let first = PropertyId(1);
    if let Some(cards) = shell.page_mut().cards_mut() {
        println!(
            "- toggle property {first}: favorite = {}",
            cards.toggle_favorite(first)
        );
        println!(
            "- toggle property {first}: favorite = {}",
            cards.toggle_favorite(first)
        );
        cards.click(first, CardClick::Card, &center);
    }
    cursor = drain(&center, cursor);

    if !args.skip_auth {
        println!("\nAuth modal");
        shell.open_auth(AuthMode::Register);
        shell.auth_mut().set_email("cliente@proplus.cl");
        shell.auth_mut().set_password("secreta");
        shell.auth_mut().set_confirm_password("distinta");
        println!("- register with mismatched passwords: {:?}", shell.auth().submit(&center));
        cursor = drain(&center, cursor);

        shell.auth_mut().set_confirm_password("secreta");
        println!("- register with matching passwords: {:?}", shell.auth().submit(&center));
        cursor = drain(&center, cursor);

        shell.auth().social_auth(SocialProvider::Google, &center);
        cursor = drain(&center, cursor);
        shell.auth_mut().close();
    }

    println!("\nHero search");
    shell.navigate_to(Route::Home);
    cursor = drain(&center, cursor);
    if let Some(home) = shell.page_mut().home_mut() {
        home.show_search();
        home.search.set_location("Las Condes");
        home.search.submit_location(&center);
    }
    drain(&center, cursor);

    println!("\nActive notifications at the end: {}", center.active_count());
    center.clear();
    Ok(())
}

/// Prints every notification raised since the last call and returns the new
/// cursor.
fn drain(center: &NotificationCenter, cursor: u64) -> u64 {
    let mut latest = cursor;
    for active in center.active() {
        if active.id.0 > cursor {
            println!(
                "   toast: {} | {} ({} ms)",
                active.title, active.description, active.duration_ms
            );
            latest = active.id.0;
        }
    }
    latest
}
