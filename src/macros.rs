// Shorthand for rule lists in tests, panicking on malformed rules

macro_rules! rules {
    () => {
        Vec::<$crate::rewriting::rule::Rule>::new()
    };
    ($from:expr => $to:expr $(, $($rest:tt)*)? ) => {{
        let mut v = Vec::new();
        v.push($crate::rewriting::rule::Rule::from_strings($from, $to).unwrap());
        $( v.extend($crate::macros::rules!($($rest)*)); )?
        v
    }};
}

pub(crate) use rules;
