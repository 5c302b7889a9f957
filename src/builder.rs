/// A builder macro that creates a `HamtMap` from a list of key-value pairs.
///
/// # Examples
///
/// This example creates a `HamtMap` without specifying the expected size.
///
/// > Note: the map is still created with an expected size equal to the
/// > number of key-value pairs, so the root array is sized up front.
///
/// ```
/// use hamt_map::hamt;
///
/// let dict = hamt! {
///  "one" : 1,
///  "two" : 2,
///  "three": 3,
/// };
///
/// assert_eq!(dict.len(), 3);
///
/// assert_eq!(dict.get(&"one"), Some(&1));
/// assert_eq!(dict.get(&"two"), Some(&2));
/// assert_eq!(dict.get(&"three"), Some(&3));
/// ```
///
/// This example creates a `HamtMap` with an explicit expected size,
/// specified before the key-value pairs.
///
/// ```
/// use hamt_map::hamt;
///
/// let dict = hamt! {
///   10; // Expected size
///  "one" : 1,
///  "two" : 2,
/// };
///
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get(&"one"), Some(&1));
/// ```
#[macro_export]
macro_rules! hamt {
    // Pattern without explicit expected size.
    ( $( $key:tt : $value:expr ),* $(,)? ) => {
        {
            use $crate::HamtMap;

            const KV_COUNT: usize = [$($key),*].len();

            let mut map = HamtMap::with_expected_size(KV_COUNT);
            $(
                let _ = map.insert($key, $value);
            )*
            map
        }
    };
    // Pattern with explicit expected size.
    ( $expected:expr; $( $key:tt : $value:expr ),* $(,)? ) => {
        {
            use $crate::HamtMap;

            const KV_COUNT: usize = [$($key),*].len();

            const EXPECTED: usize = if $expected > KV_COUNT { $expected } else { KV_COUNT };

            let mut map = HamtMap::with_expected_size(EXPECTED);
            $(
                let _ = map.insert($key, $value);
            )*
            map
        }
    };
    // Catch-all pattern for invalid patterns.
    ( $($tt:tt)* ) => {
        compile_error!("Invalid syntax. Use `hamt! { key: value, ... }` or `hamt! { expected; key: value, ... }`.");
    };
}

#[cfg(test)]
mod builder_tests {
    #[test]
    fn test_builder_without_expected_size() {
        let dict = hamt! {
            "one" : 1,
            "two" : 2,
            "three": 3,
        };

        assert_eq!(dict.len(), 3);

        assert_eq!(dict.get(&"one"), Some(&1));
        assert_eq!(dict.get(&"two"), Some(&2));
        assert_eq!(dict.get(&"three"), Some(&3));
    }

    #[test]
    fn test_builder_with_expected_size() {
        let dict = hamt! {
            10; // Expected size
            "one" : 1,
            "two" : 2,
            "three": 3,
        };

        assert_eq!(dict.len(), 3);

        assert_eq!(dict.get(&"one"), Some(&1));
        assert_eq!(dict.get(&"two"), Some(&2));
        assert_eq!(dict.get(&"three"), Some(&3));
    }
}
