//! End-to-end navigation scenarios over the in-memory router.

use std::sync::Arc;

use rstest::rstest;
use wayline_nav::{
	AppRouter, MemoryRouter, NavError, NavigateTarget, NavigationRequest, RouterBackend,
	parse_query,
};

fn app_router(routes: &[&str]) -> (AppRouter, Arc<MemoryRouter>) {
	let backend = Arc::new(MemoryRouter::with_routes(routes).unwrap());
	(AppRouter::new(backend.clone(), backend.clone()), backend)
}

#[test]
fn href_and_push_resolve_identically() {
	let (router, backend) = app_router(&["/", "/item/$id"]);
	let target = NavigateTarget::route("/item/$id")
		.param("id", 42)
		.search("tab", "info")
		.hash("top");

	let href = router.href(&target).unwrap();
	router.push(&target).unwrap();

	let location = backend.location();
	let navigated = if location.search.is_empty() {
		format!("{}#{}", location.pathname, location.hash)
	} else {
		format!(
			"{}?{}#{}",
			location.pathname, location.search, location.hash
		)
	};
	assert_eq!(href, navigated);
}

#[test]
fn structured_target_substitutes_params() {
	let (router, _) = app_router(&["/"]);
	let target = NavigateTarget::route("/item/$id").param("id", 42);
	assert_eq!(router.href(&target).unwrap(), "/item/42");
}

#[test]
fn missing_param_fails_href_and_push() {
	let (router, _) = app_router(&["/"]);
	let target = NavigateTarget::route("/item/$id");

	let expected = NavError::MissingParameter {
		param: "id".to_string(),
		template: "/item/$id".to_string(),
	};
	assert_eq!(router.href(&target).unwrap_err(), expected);
	assert_eq!(router.push(&target).unwrap_err(), expected);
	// The failed push must not have navigated
	assert_eq!(router.pathname(), "/");
}

#[test]
fn absent_query_values_are_omitted_entirely() {
	let (router, _) = app_router(&["/"]);
	let target = NavigateTarget::route("/list")
		.search("tab", "info")
		.search_opt("page", None::<i64>);
	assert_eq!(router.href(&target).unwrap(), "/list?tab=info");
}

#[rstest]
#[case("/flash", true)]
#[case("/flash/123", true)]
#[case("/flashsale", false)]
fn is_active_respects_slash_boundary(#[case] current: &str, #[case] expected: bool) {
	let (router, _) = app_router(&["/"]);
	router.push(&NavigateTarget::path(current)).unwrap();
	assert_eq!(router.is_active("/flash"), expected);
}

#[test]
fn back_with_single_entry_uses_fallback() {
	let (router, _) = app_router(&["/", "/flash"]);
	// Simulate a deep link: replace the lone entry instead of pushing
	router.replace(&"/flash/123".into()).unwrap();

	router.back(None).unwrap();
	assert_eq!(router.pathname(), "/");
}

#[test]
fn back_with_custom_fallback() {
	let (router, _) = app_router(&["/", "/flash"]);
	router.replace(&"/flash/123".into()).unwrap();

	router.back(Some("/flash")).unwrap();
	assert_eq!(router.pathname(), "/flash");
}

#[test]
fn back_steps_through_history_when_available() {
	let (router, _) = app_router(&["/", "/flash"]);
	router.push(&"/flash".into()).unwrap();

	router.back(None).unwrap();
	assert_eq!(router.pathname(), "/");

	router.forward();
	assert_eq!(router.pathname(), "/flash");
}

#[test]
fn resolved_target_round_trips() {
	let (router, backend) = app_router(&["/", "/item/$id"]);
	let target = NavigateTarget::route("/item/$id")
		.param("id", 42)
		.search("tab", "info")
		.search("page", 3)
		.hash("reviews");

	router.push(&target).unwrap();
	let location = backend.location();

	assert_eq!(location.pathname, "/item/42");
	assert_eq!(
		parse_query(&location.search),
		vec![
			("tab".to_string(), "info".to_string()),
			("page".to_string(), "3".to_string()),
		]
	);
	assert_eq!(location.hash, "reviews");
}

#[test]
fn encoded_param_values_round_trip_through_matching() {
	let (router, backend) = app_router(&["/", "/search/$term"]);
	router
		.push(&NavigateTarget::route("/search/$term").param("term", "a b"))
		.unwrap();

	// The built path carries the encoded segment, but matched params
	// come back decoded
	assert_eq!(backend.location().pathname, "/search/a%20b");
	assert_eq!(router.params().get("term").map(String::as_str), Some("a b"));
}

#[test]
fn params_and_query_never_contain_absent_entries() {
	let (router, _) = app_router(&["/", "/item/$id"]);
	let target = NavigateTarget::route("/item/$id")
		.param("id", 1)
		.search("tab", "info")
		.search_opt("page", None::<i64>);
	router.push(&target).unwrap();

	let query = router.query();
	assert_eq!(query.get("tab").map(String::as_str), Some("info"));
	assert!(!query.contains_key("page"));

	let params = router.params();
	assert_eq!(params.len(), 1);
	assert_eq!(params.get("id").map(String::as_str), Some("1"));
}

#[test]
fn nested_matches_merge_with_deeper_match_winning() {
	let backend = Arc::new(MemoryRouter::new());
	backend.register("/shop/$section").unwrap();
	backend.register("/shop/$section/$item").unwrap();
	let router = AppRouter::new(backend.clone(), backend.clone());

	// Only the deeper pattern matches a two-segment path
	backend
		.navigate(&NavigationRequest::push("/shop/flash/42"))
		.unwrap();
	let params = router.params();
	assert_eq!(params.get("section").map(String::as_str), Some("flash"));
	assert_eq!(params.get("item").map(String::as_str), Some("42"));
}

#[test]
fn replace_does_not_grow_history() {
	let (router, backend) = app_router(&["/", "/flash"]);
	router.push(&"/flash".into()).unwrap();
	let len_before = wayline_nav::BrowsingHistory::len(backend.as_ref());
	router.replace(&"/flash?tab=live".into()).unwrap();
	assert_eq!(wayline_nav::BrowsingHistory::len(backend.as_ref()), len_before);
	assert_eq!(router.pathname(), "/flash");
	assert_eq!(router.query().get("tab").map(String::as_str), Some("live"));
}
