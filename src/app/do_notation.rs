//! Do-notation for apps.
//!
//! The [`app_do!`](crate::app_do) macro flattens a chain of dependent apps
//! into a sequence of bindings, the way a `for`-comprehension would.

/// Do-notation macro for apps.
///
/// # Syntax
///
/// - `pattern <= app;` runs `app` and binds its output
/// - `_ <= app;` runs `app` and discards its output
/// - `let pattern = expr;` binds a pure value
/// - the final expression must be an app; its outcome is the outcome of the
///   whole block
///
/// Each binding expands into [`AppExt::chain`](crate::app::AppExt::chain),
/// so the first failure short-circuits the rest of the block. Because plans
/// can be run more than once, the generated closures are `Fn`: clone values
/// captured from outside the block before moving them into a later step.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app_do;
/// use rover_app::app::prelude::*;
///
/// let app = app_do! {
///     planet <= get_planet();
///     state <= get_rover_state();
///     let next = state.execute(command, planet);
///     _ <= set_rover_state(next.clone());
///     succeed(next)
/// };
/// ```
#[macro_export]
macro_rules! app_do {
    // Bind with identifier pattern: `identifier <= app; rest`
    ($pattern:ident <= $app:expr ; $($rest:tt)+) => {
        $crate::app::AppExt::chain($app, move |$pattern| {
            $crate::app_do!($($rest)+)
        })
    };

    // Bind with tuple pattern: `(a, b) <= app; rest`
    (($($pattern:tt)*) <= $app:expr ; $($rest:tt)+) => {
        $crate::app::AppExt::chain($app, move |($($pattern)*)| {
            $crate::app_do!($($rest)+)
        })
    };

    // Bind with wildcard pattern: `_ <= app; rest`
    (_ <= $app:expr ; $($rest:tt)+) => {
        $crate::app::AppExt::chain($app, move |_| {
            $crate::app_do!($($rest)+)
        })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::app_do!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::app_do!($($rest)+)
        }
    };

    // Terminal app
    ($result:expr) => {
        $result
    };
}
