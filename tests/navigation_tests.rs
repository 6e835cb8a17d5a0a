use std::sync::Arc;

use ara_web::config::RouterConfig;
use ara_web::domain::route_table;
use ara_web::services::{Location, NavigationError, NavigationState, Navigator};
use rstest::rstest;

fn navigator() -> Navigator {
    Navigator::new(Arc::new(route_table::build()), RouterConfig::default())
}

fn navigator_under(base: &str) -> Navigator {
    Navigator::new(Arc::new(route_table::build()), RouterConfig::new(base))
}

#[rstest]
#[case("/", "login", "Login")]
#[case("/dashboard", "dashboard", "Dashboard")]
#[case("/issues", "issues", "Issues")]
#[case("/features", "features", "Features")]
#[case("/settings", "settings", "Settings")]
#[case("/projects", "projects", "Projects")]
#[case("/faq", "faq", "FAQ")]
fn test_path_resolves_to_named_view(#[case] path: &str, #[case] name: &str, #[case] view: &str) {
    let mut navigator = navigator();
    let route = navigator.navigate(path).unwrap();

    assert_eq!(route.name, name);
    assert_eq!(route.view.as_str(), view);
}

#[rstest]
#[case("login")]
#[case("dashboard")]
#[case("issues")]
#[case("features")]
#[case("settings")]
#[case("projects")]
#[case("faq")]
fn test_name_and_path_lookup_agree(#[case] name: &str) {
    let navigator = navigator();
    let by_name = navigator.resolve(&Location::Name(name.to_string())).unwrap();
    let by_path = navigator.resolve(&Location::Path(by_name.path.clone())).unwrap();

    assert_eq!(by_name, by_path);
}

#[test]
fn test_unknown_path_has_no_match() {
    let mut navigator = navigator();
    let result = navigator.navigate("/does-not-exist");

    assert_eq!(
        result,
        Err(NavigationError::NoMatch {
            location: Location::Path("/does-not-exist".to_string())
        })
    );
    assert_eq!(
        navigator.state(),
        &NavigationState::NotFound("/does-not-exist".to_string())
    );
}

#[test]
fn test_unknown_name_has_no_match() {
    let mut navigator = navigator();
    let err = navigator.navigate("home").unwrap_err();

    assert_eq!(err.to_string(), "No route matches route named \"home\"");
    assert_eq!(navigator.state(), &NavigationState::NotFound("home".to_string()));
}

#[test]
fn test_starts_unresolved() {
    let navigator = navigator();
    assert_eq!(navigator.state(), &NavigationState::Unresolved);
    assert!(navigator.current().is_none());
}

#[test]
fn test_no_match_after_resolved_leaves_not_found() {
    let mut navigator = navigator();
    navigator.navigate("/issues").unwrap();
    let _ = navigator.navigate("/nope");

    assert!(navigator.current().is_none());
    assert!(matches!(navigator.state(), NavigationState::NotFound(_)));
}

#[rstest]
#[case("/issues/")]
#[case("/issues?status=open")]
#[case("/issues#top")]
#[case("/ISSUES")]
fn test_path_normalization(#[case] path: &str) {
    let mut navigator = navigator();
    assert_eq!(navigator.navigate(path).unwrap().name, "issues");
}

#[rstest]
#[case("/ara", "login")]
#[case("/ara/", "login")]
#[case("/ara/issues", "issues")]
#[case("/ara/faq/", "faq")]
#[case("/ARA/issues", "issues")]
#[case("/Ara", "login")]
#[case("/Ara/", "login")]
fn test_base_url_is_stripped(#[case] path: &str, #[case] name: &str) {
    let mut navigator = navigator_under("/ara/");
    assert_eq!(navigator.navigate(path).unwrap().name, name);
}

#[rstest]
#[case("/issues")]
#[case("/arabica/issues")]
#[case("/ar")]
fn test_paths_outside_base_do_not_match(#[case] path: &str) {
    let mut navigator = navigator_under("ara");
    assert!(navigator.navigate(path).is_err());
}

#[test]
fn test_href_includes_base() {
    assert_eq!(navigator().href("issues").unwrap(), "/issues");
    assert_eq!(navigator().href("login").unwrap(), "/");
    assert_eq!(navigator_under("/ara/").href("faq").unwrap(), "/ara/faq");
    assert_eq!(navigator_under("/ara/").href("login").unwrap(), "/ara/");
    assert!(navigator().href("missing").is_err());
}

#[test]
fn test_back_and_forward() {
    let mut navigator = navigator();
    navigator.navigate("/").unwrap();
    navigator.navigate("dashboard").unwrap();
    navigator.navigate("/settings").unwrap();

    assert_eq!(navigator.back().unwrap().name, "dashboard");
    assert_eq!(navigator.back().unwrap().name, "login");
    assert_eq!(
        navigator.back(),
        Err(NavigationError::HistoryExhausted { direction: "back" })
    );
    assert_eq!(navigator.current().unwrap().name, "login");

    assert_eq!(navigator.forward().unwrap().name, "dashboard");
    assert_eq!(navigator.current().unwrap().view.as_str(), "Dashboard");
}

#[test]
fn test_failed_navigation_is_not_recorded_in_history() {
    let mut navigator = navigator();
    navigator.navigate("/issues").unwrap();
    let _ = navigator.navigate("/missing");

    assert_eq!(navigator.history().len(), 1);
}

#[test]
fn test_navigators_are_isolated() {
    let table = Arc::new(route_table::build());
    let mut first = Navigator::new(table.clone(), RouterConfig::default());
    let second = Navigator::new(table, RouterConfig::default());

    first.navigate("/faq").unwrap();
    assert_eq!(second.state(), &NavigationState::Unresolved);
}
