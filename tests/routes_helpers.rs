use chemin_rs::param::{constant, number, optional, string};
use chemin_rs::routes::{
    CheminTree, NestedMatches, match_all, match_all_nested, match_first, match_first_exact,
    namespace, partial_match, prefix,
};
use chemin_rs::{Chemin, ParamValue, Params, chemin};
use hashbrown::HashMap;

fn app_routes() -> HashMap<&'static str, Chemin> {
    let home = chemin![];
    let posts = chemin![&home, "posts"];
    let post_fragment = chemin!["post", number("postId")];
    let post = chemin![&home, &post_fragment];
    let admin_home = chemin![&home, "admin"];
    let admin_post = chemin![&admin_home, &post_fragment, optional(constant("delete"))];

    HashMap::from([
        ("home", home),
        ("posts", posts),
        ("post", post),
        ("adminHome", admin_home),
        ("adminPost", admin_post),
    ])
}

#[test]
fn match_all_reports_every_key() {
    let routes = app_routes();
    let results = match_all(&routes, "/post/42");

    assert_eq!(results.len(), routes.len());
    assert!(results["home"].as_ref().is_some_and(|found| !found.exact));
    assert!(results["posts"].is_none());
    let post = results["post"].as_ref().expect("post should match");
    assert!(post.exact);
    assert_eq!(post.params["postId"], ParamValue::Number(42.0));
    assert!(results["adminPost"].is_none());
}

#[test]
fn match_all_nested_keeps_the_shape() {
    let tree = HashMap::from([
        ("home".to_string(), CheminTree::Leaf(chemin!["home"])),
        (
            "admin".to_string(),
            CheminTree::Branch(HashMap::from([
                ("users".to_string(), CheminTree::Leaf(chemin!["admin", "users"])),
                ("user".to_string(), CheminTree::Leaf(chemin!["admin", "users", string("id")])),
            ])),
        ),
    ]);

    let results = match_all_nested(&tree, "/admin/users/7");

    assert_eq!(results["home"], NestedMatches::Leaf(None));
    let admin = &results["admin"];
    let users = admin
        .get("users")
        .and_then(NestedMatches::as_match)
        .expect("users should match");
    assert_eq!(users.rest, vec!["7".to_string()]);
    let user = admin
        .get("user")
        .and_then(NestedMatches::as_match)
        .expect("user should match");
    assert_eq!(user.params["id"], ParamValue::from("7"));
    assert!(user.exact);
}

#[test]
fn match_first_follows_list_order() {
    let loose = chemin!["a"];
    let strict = chemin!["a", "b"];
    let routes = vec![loose.clone(), strict.clone()];

    let first = match_first(&routes, "/a/b").expect("a route should match");
    assert!(first.chemin.ptr_eq(&loose));
    assert_eq!(first.matched.rest, vec!["b".to_string()]);

    let exact = match_first_exact(&routes, "/a/b").expect("a route should match exactly");
    assert!(exact.chemin.ptr_eq(&strict));
    assert_eq!(exact.params, Params::new());

    assert!(match_first(&routes, "/b").is_none());
    assert!(match_first_exact(&routes, "/a/b/c").is_none());
}

#[test]
fn namespace_with_literal() {
    let routes = namespace("base", &app_routes());

    assert_eq!(routes.len(), 5);
    assert_eq!(routes["home"].stringify(), "/base");
    assert_eq!(routes["posts"].stringify(), "/base/posts");
    assert_eq!(
        routes["adminPost"].stringify(),
        "/base/admin/post/:postId(number)/delete?"
    );

    let found = routes["adminPost"]
        .match_path("/base/admin/post/42/delete")
        .expect("namespaced route should match");
    assert!(found.exact);
    assert_eq!(found.params["postId"], ParamValue::Number(42.0));
    assert_eq!(found.params["delete"], ParamValue::present(ParamValue::Null));
}

#[test]
fn namespace_with_param() {
    let routes = namespace(string("base"), &app_routes());

    assert_eq!(routes["home"].stringify(), "/:base");
    assert_eq!(
        routes["adminPost"].stringify(),
        "/:base/admin/post/:postId(number)/delete?"
    );
    let found = routes["adminPost"]
        .match_exact("/yolo/admin/post/42/delete")
        .expect("namespaced route should match");
    assert_eq!(found["base"], ParamValue::from("yolo"));
    assert_eq!(found.len(), 3);
}

#[test]
fn namespace_with_chemin() {
    let base = chemin!["base", string("org"), number("orgId")];
    let routes = namespace(&base, &app_routes());

    assert_eq!(routes["home"].stringify(), "/base/:org/:orgId(number)");
    assert_eq!(
        routes["adminPost"].stringify(),
        "/base/:org/:orgId(number)/admin/post/:postId(number)/delete?"
    );
    let found = routes["adminPost"]
        .match_exact("/base/yolo/42/admin/post/43/delete")
        .expect("namespaced route should match");
    assert_eq!(found["org"], ParamValue::from("yolo"));
    assert_eq!(found["orgId"], ParamValue::Number(42.0));
    assert_eq!(found["postId"], ParamValue::Number(43.0));
    assert!(routes["post"].contains(&base));
}

#[test]
fn prefix_renames_keys() {
    let prefixed = prefix("admin", [("home", 1), ("users", 2)]);

    assert_eq!(prefixed.len(), 2);
    assert_eq!(prefixed["admin.home"], 1);
    assert_eq!(prefixed["admin.users"], 2);
}

#[test]
fn partial_match_requires_embedded_fragment() {
    let user_part = chemin!["user", string("id")];
    let route1 = chemin!["admin", string("id"), &user_part, "demo"];
    let route2 = chemin![&user_part, "demo", string("action")];
    let route3 = chemin!["admin", string("id"), "user", string("id")];

    let m1 = route1.match_path("/admin/123/user/456/demo");
    let m2 = route2.match_path("/user/123/demo/edit");
    let m3 = route3.match_path("/admin/123/user/456");
    let m3_miss = route3.match_path("/yolo");

    let p1 = partial_match(&route1, m1.as_ref(), &user_part).expect("fragment is embedded");
    assert_eq!(p1["id"], ParamValue::from("456"));
    let p2 = partial_match(&route2, m2.as_ref(), &user_part).expect("fragment is embedded");
    assert_eq!(p2["id"], ParamValue::from("123"));
    assert!(partial_match(&route3, m3.as_ref(), &user_part).is_none());
    assert!(partial_match(&route3, m3_miss.as_ref(), &user_part).is_none());
}

#[test]
fn routing_with_first_match_and_partial_match() {
    let workspace = chemin!["workspace", string("tenant")];
    let routes = vec![
        chemin!["home"],
        chemin!["settings"],
        chemin![&workspace, "home"],
        chemin![&workspace, "settings"],
    ];

    let app = |path: &str| -> (Option<String>, Option<String>) {
        let Some(first) = match_first(&routes, path) else {
            return (None, None);
        };
        let tenant = partial_match(&first.chemin, Some(&first.matched), &workspace)
            .and_then(|params| params.get("tenant"))
            .and_then(|value| value.as_str())
            .map(str::to_string);
        (Some(first.chemin.stringify()), tenant)
    };

    assert_eq!(app("/home"), (Some("/home".to_string()), None));
    assert_eq!(app("/yolo"), (None, None));
    assert_eq!(app("/settings"), (Some("/settings".to_string()), None));
    assert_eq!(
        app("/workspace/yolo/settings"),
        (Some("/workspace/:tenant/settings".to_string()), Some("yolo".to_string()))
    );
    assert_eq!(
        app("/workspace/yolo/home"),
        (Some("/workspace/:tenant/home".to_string()), Some("yolo".to_string()))
    );
    assert_eq!(app("/workspace/yolo/yolo"), (None, None));
}
