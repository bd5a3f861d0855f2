//! Composable path patterns.
//!
//! A [`Chemin`] is an ordered list of parts, each either a typed param or
//! another Chemin. The same value matches paths, serializes params back
//! into a path and describes itself:
//!
//! ```
//! use chemin_rs::{Chemin, chemin, param::{number, optional_const, string}};
//!
//! let post = chemin!["post", number("postId")];
//! let route = chemin!["admin", string("userId"), &post, optional_const("edit")];
//!
//! assert_eq!(route.stringify(), "/admin/:userId/post/:postId(number)/edit?");
//!
//! let params = route.match_exact("/admin/paul/post/42").expect("route should match");
//! assert_eq!(params["postId"].as_f64(), Some(42.0));
//! assert_eq!(params["edit"].as_bool(), Some(false));
//! ```

pub mod chemin;
pub mod errors;
pub mod param;
pub mod path;
pub mod pattern;
pub mod routes;

pub use chemin::{Chemin, CheminFactory, CheminMatch, Part, SlashOptions, chemins_equal};
pub use errors::{CheminError, CheminResult};
pub use param::{Param, ParamKind, ParamValue, Params};
pub use path::{Pathname, split_pathname};

/// Builds a [`Chemin`] from any mix of literals, params and Chemins.
///
/// ```
/// use chemin_rs::{chemin, param::integer};
///
/// let empty = chemin![];
/// let user = chemin!["users", integer("id")];
/// assert_eq!(empty.stringify(), "/");
/// assert_eq!(user.stringify(), "/users/:id(integer)");
/// ```
#[macro_export]
macro_rules! chemin {
    ($($part:expr),* $(,)?) => {
        $crate::Chemin::new(::std::vec![$($crate::Part::from($part)),*])
    };
}
