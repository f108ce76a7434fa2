//! Shared form parameter building utilities for endpoint modules.
//!
//! The [`form_params!`] macro keeps the per-endpoint parameter lists
//! declarative and makes the encoding rules uniform:
//!
//! - booleans are rendered as the literal strings `true` / `false`;
//! - lists are joined with a single `,` and are NOT escaped, so a name that
//!   itself contains a comma cannot be sent unambiguously;
//! - optional strings are pushed only when present and non-empty.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut form: Vec<(&str, String)> = vec![];
//! form_params! { form =>
//!     "type" => required params.role_type,
//!     "roleName" => required params.role_name,
//!     "permissionIds" => join params.permission_ids,
//!     "overwrite" => bool params.overwrite,
//!     "pattern" => non_empty params.pattern,
//! }
//! ```

/// Build form or query parameters into a `Vec<(&'static str, String)>`.
///
/// # Syntax Patterns
///
/// - `key => required expr` - always included, via `to_string()`
/// - `key => bool expr` - required `bool`, always included as `true`/`false`
/// - `key => join expr` - `Vec<String>` or slice, always included, comma-joined
/// - `key => non_empty expr` - `Option<String>`, included if Some and not empty
#[macro_export]
macro_rules! form_params {
    // Base case: no more parameters
    ($vec:ident =>) => {};

    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $vec.push(($key, $val.to_string()));
        $crate::form_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => bool $val:expr, $($rest:tt)*) => {
        $vec.push(($key, if $val { "true" } else { "false" }.to_string()));
        $crate::form_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => join $val:expr, $($rest:tt)*) => {
        $vec.push(($key, $val.join(",")));
        $crate::form_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => non_empty $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val.as_deref().filter(|v: &&str| !v.is_empty()) {
            $vec.push(($key, v.to_string()));
        }
        $crate::form_params!($vec => $($rest)*);
    };
}
