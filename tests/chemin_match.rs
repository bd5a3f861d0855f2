use chemin_rs::param::{constant, number, optional, optional_const, string};
use chemin_rs::{Chemin, CheminMatch, ParamValue, Params, chemin, split_pathname};

fn params<const N: usize>(entries: [(&str, ParamValue); N]) -> Params {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn matched<const N: usize>(entries: [(&str, ParamValue); N], rest: &[&str]) -> CheminMatch {
    CheminMatch {
        params: params(entries),
        rest: rest.iter().map(|seg| seg.to_string()).collect(),
        exact: rest.is_empty(),
    }
}

#[test]
fn parsed_pattern_matches_and_reports_absent_optional_const() {
    let route = Chemin::parse("/admin/post/:postId/delete?").expect("pattern should parse");

    assert_eq!(route.match_path("/no/valid"), None);
    assert_eq!(
        route.match_path("/admin/post/e5t89u"),
        Some(matched(
            [("postId", "e5t89u".into()), ("delete", ParamValue::Bool(false))],
            &[]
        ))
    );
}

#[test]
fn root_pattern_matches_everything_and_keeps_rest() {
    let root = Chemin::parse("/").expect("pattern should parse");

    assert_eq!(root.match_path("/"), Some(matched([], &[])));
    assert_eq!(root.match_path(""), Some(matched([], &[])));
    assert_eq!(root.match_path("//"), Some(matched([], &[""])));
    assert_eq!(root.match_path("/foo"), Some(matched([], &["foo"])));
    assert_eq!(root.match_path("/foo/"), Some(matched([], &["foo"])));
    assert_eq!(root.match_path("/foo/bar/"), Some(matched([], &["foo", "bar"])));
}

#[test]
fn literal_pattern_requires_exact_segment() {
    let admin = chemin!["admin"];

    assert_eq!(admin.match_path("/"), None);
    assert_eq!(admin.match_path(""), None);
    assert_eq!(admin.match_path("/admin"), Some(matched([], &[])));
    assert_eq!(admin.match_path("/admin/"), Some(matched([], &[])));
    assert_eq!(admin.match_path("/admin/home/"), Some(matched([], &["home"])));
    assert_eq!(admin.match_path("/adminnnn/"), None);
    assert_eq!(admin.match_path("/admi"), None);
}

#[test]
fn optional_param_reports_presence_and_leaves_rest() {
    let route = chemin!["admin", optional(string("tool"))];

    assert_eq!(route.match_path("/"), None);
    assert_eq!(
        route.match_path("/admin"),
        Some(matched([("tool", ParamValue::absent())], &[]))
    );
    assert_eq!(
        route.match_path("/admin/home"),
        Some(matched([("tool", ParamValue::present("home"))], &[]))
    );
    assert_eq!(
        route.match_path("/admin/blabla/then"),
        Some(matched([("tool", ParamValue::present("blabla"))], &["then"]))
    );
}

#[test]
fn match_exact_only_returns_params_without_rest() {
    let route = chemin!["foo", optional_const("bar")];

    assert_eq!(
        route.match_exact("/foo"),
        Some(params([("bar", ParamValue::Bool(false))]))
    );
    assert_eq!(
        route.match_exact("/foo/bar"),
        Some(params([("bar", ParamValue::Bool(true))]))
    );
    assert_eq!(route.match_exact("/foo/bar/baz"), None);
    assert!(route.match_path("/foo/bar/baz").is_some());
}

#[test]
fn match_exact_agrees_with_match_path() {
    let route = chemin!["post", number("postId"), optional_const("edit")];

    for path in ["/post/1", "/post/1/edit", "/post/1/edit/more", "/post/x", "", "/post"] {
        let loose = route.match_path(path);
        let exact = route.match_exact(path);
        match loose {
            Some(found) if found.rest.is_empty() => {
                assert!(found.exact);
                assert_eq!(exact, Some(found.params), "path {path}");
            }
            _ => assert_eq!(exact, None, "path {path}"),
        }
    }
}

#[test]
fn empty_chemin_only_matches_empty_paths_exactly() {
    let empty = chemin![];

    assert_eq!(empty.match_exact(""), Some(Params::new()));
    assert_eq!(empty.match_exact("/"), Some(Params::new()));
    assert_eq!(empty.match_exact("/foo"), None);
}

#[test]
fn accepts_pre_split_segments() {
    let route = chemin!["foo", "bar", optional_const("baz")];
    let segments = split_pathname("/foo/bar");

    assert_eq!(
        route.match_segments(&segments),
        Some(matched([("baz", ParamValue::Bool(false))], &[]))
    );

    let owned = vec!["foo".to_string(), "bar".to_string(), "baz".to_string()];
    assert_eq!(
        route.match_path(&owned),
        Some(matched([("baz", ParamValue::Bool(true))], &[]))
    );
    assert_eq!(
        route.match_path(&["foo", "bar"]),
        Some(matched([("baz", ParamValue::Bool(false))], &[]))
    );
}

#[test]
fn same_chemin_embedded_twice_must_match_twice() {
    let base = chemin!["foo", "bar"];
    let route = chemin![&base, &base];

    assert_eq!(route.match_path("/foo/bar/foo/bar"), Some(matched([], &[])));
    assert_eq!(route.match_path("/foo/bar"), None);
}

#[test]
fn nested_chemins_merge_params_and_later_parts_win() {
    let user = chemin!["user", string("id")];
    let route = chemin!["admin", string("id"), &user, "demo"];

    let found = route
        .match_path("/admin/123/user/456/demo")
        .expect("route should match");
    assert_eq!(found.params, params([("id", "456".into())]));
    assert!(found.exact);
}

#[test]
fn constants_never_contribute_keys() {
    let route = chemin![constant("a"), optional(constant("b"))];

    let found = route.match_exact("/a/b").expect("route should match");
    assert_eq!(found.len(), 1);
    assert_eq!(found["b"], ParamValue::present(ParamValue::Null));
}

#[test]
fn matching_is_left_to_right_without_backtracking() {
    // the optional string swallows "edit", so the trailing literal cannot match
    let route = chemin!["post", chemin_rs::param::optional_string("slug"), "edit"];

    assert_eq!(route.match_path("/post/edit"), None);
    assert!(route.match_path("/post/hello/edit").is_some());
}

#[test]
fn inner_empty_segments_fail_value_params() {
    let route = chemin!["a", string("b")];

    assert_eq!(route.match_path("/a//c"), None);
}

#[test]
fn match_result_renders_to_json() {
    let route = chemin!["post", number("postId"), optional(string("tab"))];
    let found = route.match_path("/post/42/comments/x").expect("route should match");

    let json = serde_json::to_value(&found).expect("match should serialize");
    assert_eq!(json["params"]["postId"], serde_json::json!(42.0));
    assert_eq!(json["params"]["tab"], serde_json::json!("comments"));
    assert_eq!(json["rest"], serde_json::json!(["x"]));
    assert_eq!(json["exact"], serde_json::json!(false));
}
