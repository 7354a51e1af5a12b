#[macro_export]
macro_rules! tree {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array($crate::JsonList::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array($crate::JsonList::from(vec![$($crate::tree!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::tree!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    // Handle different literal types explicitly

    // Fallback for any expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::JsonValue::Null)
    }};
}
