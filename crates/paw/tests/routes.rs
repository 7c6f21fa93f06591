use paw::domain::config::RouterConfig;
use paw::domain::views::View;
use paw::routes::{app_router, app_routes};

#[test]
fn app_table_has_the_calculator_at_root() {
    let routes = app_routes();

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path, "/");
    assert_eq!(routes[0].name, "CalculatorView");
    assert_eq!(routes[0].component, View::Calculator);
}

#[test]
fn default_router_resolves_root_only() {
    let router = app_router(&RouterConfig::default()).unwrap();

    assert_eq!(router.resolve("/").map(|m| m.view()), Some(View::Calculator));
    assert!(router.resolve("/breeds").is_none());
    assert_eq!(router.href("CalculatorView", &[]).unwrap(), "/");
}

#[test]
fn configured_base_is_honored() {
    let config = RouterConfig { base: "/calc/".to_owned(), ..RouterConfig::default() };
    let router = app_router(&config).unwrap();

    assert_eq!(router.history().base(), "/calc");
    assert_eq!(router.resolve("/calc/").map(|m| m.name()), Some("CalculatorView"));
    assert!(router.resolve("/").is_none());
}

#[test]
fn strict_config_still_resolves_the_bare_base_to_the_calculator() {
    let config = RouterConfig { base: "/calc".to_owned(), sensitive: false, strict: true };
    let router = app_router(&config).unwrap();

    assert!(router.resolve("/calc").is_some());
    assert!(router.resolve("/calc/").is_some());
    assert!(router.options().strict);
}
