use paw_domain::constants::{API_KEY_HEADER, CALCULATOR_VIEW, IMAGE_SEARCH_PATH, ROOT_PATH};
use paw_domain::views::View;

#[test]
fn constants_match_route_and_api_strings() {
    assert_eq!(CALCULATOR_VIEW, "CalculatorView");
    assert_eq!(ROOT_PATH, "/");
    assert_eq!(API_KEY_HEADER, "x-api-key");
    assert_eq!(IMAGE_SEARCH_PATH, "images/search");
}

#[test]
fn views_are_named_after_their_routes() {
    assert_eq!(View::Calculator.route_name(), CALCULATOR_VIEW);
    assert_eq!(View::Calculator.to_string(), "CalculatorView");
    assert_eq!(View::ALL, &[View::Calculator]);
}
