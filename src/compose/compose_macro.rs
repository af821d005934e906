//! `compose!`: chain plain functions right to left.

/// Builds one closure from a chain of functions, applied right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. Each function's output feeds the
/// function on its left, so types may change along the chain. A single
/// argument is returned as is.
///
/// Composition is associative, and [`identity`](crate::compose::identity)
/// is a unit on either side.
///
/// ```
/// use optikon::compose;
///
/// let add_one = |n: i32| n + 1;
/// let add_two = |n: i32| n + 2;
/// let show = |n: i32| format!("Some({n})");
///
/// let add_three_and_show = compose!(show, add_two, add_one);
/// assert_eq!(add_three_and_show(1), "Some(4)");
/// ```
#[macro_export]
macro_rules! compose {
    ($last:expr $(,)?) => {
        $last
    };

    ($head:expr, $($tail:expr),+ $(,)?) => {{
        let head = $head;
        let tail = $crate::compose!($($tail),+);
        move |input| head(tail(input))
    }};
}
