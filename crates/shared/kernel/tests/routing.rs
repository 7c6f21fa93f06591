use paw_kernel::prelude::*;
use proptest::prelude::*;

fn calculator_router(history: History) -> Router {
    Router::builder().history(history).route(RouteEntry::for_view("/", View::Calculator)).build().unwrap()
}

#[test]
fn root_resolves_to_the_calculator() {
    let router = calculator_router(History::default());
    let matched = router.resolve("/").unwrap();

    assert_eq!(matched.view(), View::Calculator);
    assert_eq!(matched.name(), "CalculatorView");
    assert_eq!(matched.path(), "/");
    assert!(matched.params().is_empty());
}

#[test]
fn unknown_paths_are_not_found() {
    let router = calculator_router(History::default());
    for location in ["/about", "/calculator", "/CalculatorView", "//", "/a/b"] {
        assert!(router.resolve(location).is_none(), "{location} should not resolve");
    }
}

#[test]
fn deployment_base_is_applied_to_resolve_and_href() {
    let router = calculator_router(History::web("/paws/"));

    assert_eq!(router.resolve("/paws").map(|m| m.view()), Some(View::Calculator));
    assert_eq!(router.resolve("/paws/?breed=3").map(|m| m.view()), Some(View::Calculator));
    assert!(router.resolve("/").is_none());
    assert_eq!(router.href("CalculatorView", &[]).unwrap(), "/paws/");
}

#[test]
fn hash_mode_routes_on_the_fragment() {
    let router = calculator_router(History::hash("/"));

    assert_eq!(router.resolve("/#/").map(|m| m.view()), Some(View::Calculator));
    assert_eq!(router.resolve("/").map(|m| m.view()), Some(View::Calculator));
    assert!(router.resolve("/#/breeds").is_none());
    assert_eq!(router.href("CalculatorView", &[]).unwrap(), "/#/");
}

#[test]
fn strict_and_sensitive_options_reach_the_matcher() {
    let router = Router::builder()
        .strict(true)
        .sensitive(true)
        .route(RouteEntry::new("/breeds", "Breeds", View::Calculator))
        .build()
        .unwrap();

    assert_eq!(router.options(), MatchOptions { sensitive: true, strict: true });
    assert!(router.resolve("/breeds").is_some());
    assert!(router.resolve("/breeds/").is_none());
    assert!(router.resolve("/Breeds").is_none());
}

#[test]
fn strict_mode_separates_trailing_slash_under_a_base() {
    let build = |strict| {
        Router::builder()
            .history(History::web("/calc"))
            .strict(strict)
            .route(RouteEntry::new("/x", "X", View::Calculator))
            .build()
            .unwrap()
    };

    let strict = build(true);
    assert_eq!(strict.resolve("/calc/x").map(|m| m.name()), Some("X"));
    assert!(strict.resolve("/calc/x/").is_none());

    let loose = build(false);
    assert!(loose.resolve("/calc/x").is_some());
    assert!(loose.resolve("/calc/x/").is_some());
}

#[test]
fn entries_keep_registration_order() {
    let router = Router::builder()
        .routes([
            RouteEntry::for_view("/", View::Calculator),
            RouteEntry::new("/breeds/:id", "Breed", View::Calculator),
        ])
        .build()
        .unwrap();

    let names: Vec<_> = router.entries().map(|entry| entry.name.as_ref()).collect();
    assert_eq!(names, ["CalculatorView", "Breed"]);
}

#[test]
fn routing_errors_carry_context() {
    let err = Router::builder()
        .route(RouteEntry::new("/a//b", "Broken", View::Calculator))
        .build()
        .unwrap_err();

    assert!(matches!(err, RoutingError::InvalidPattern { .. }));
    assert!(err.to_string().starts_with("Invalid route pattern (/a//b):"), "got: {err}");
}

proptest! {
    #[test]
    fn only_the_root_path_reaches_the_calculator(path in "/[a-z0-9/]{1,20}") {
        let router = calculator_router(History::default());
        prop_assert!(router.resolve(&path).is_none());
    }

    #[test]
    fn query_and_fragment_never_change_the_match(query in "[a-z0-9=&]{0,12}", fragment in "[a-z0-9]{0,8}") {
        let router = calculator_router(History::default());
        let location = format!("/?{query}#{fragment}");
        prop_assert_eq!(router.resolve(&location).map(|m| m.view()), Some(View::Calculator));
    }
}
