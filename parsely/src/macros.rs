/// Builds a tool-call argument map from `"name" => value` pairs.
///
/// Values go through `serde_json::json!`, so anything serializable works.
///
/// ```rust
/// use parsely::ps_args;
/// use parsely::serde_json::json;
///
/// let args = ps_args! { "a" => 2, "b" => 3 };
/// assert_eq!(args["a"], json!(2));
/// assert_eq!(args.keys().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[macro_export]
macro_rules! ps_args {
    () => {
        $crate::serde_json::Map::<::std::string::String, $crate::serde_json::Value>::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut args = $crate::serde_json::Map::<
            ::std::string::String,
            $crate::serde_json::Value,
        >::new();
        $(
            args.insert(
                ::std::string::String::from($key),
                $crate::serde_json::json!($value),
            );
        )+
        args
    }};
}

/// Builds a [`ParameterSet`](crate::ParameterSet) from named properties.
///
/// A name followed by `?` is optional; every other name is required.
///
/// ```rust
/// use parsely::{integer_property, ps_params, string_property};
///
/// let parameters = ps_params! {
///     "path" => string_property("File to read")?,
///     "limit"? => integer_property("Maximum lines")?,
/// };
///
/// assert_eq!(parameters.required(), ["path"]);
/// assert!(parameters.property("limit").is_some());
/// # Ok::<(), parsely::SchemaError>(())
/// ```
#[macro_export]
macro_rules! ps_params {
    (@build $builder:expr;) => {
        $builder.build()
    };
    (@build $builder:expr; $name:literal ? => $property:expr $(, $($rest:tt)*)?) => {
        $crate::ps_params!(@build $builder.optional($name, $property); $($($rest)*)?)
    };
    (@build $builder:expr; $name:literal => $property:expr $(, $($rest:tt)*)?) => {
        $crate::ps_params!(@build $builder.required($name, $property); $($($rest)*)?)
    };
    () => {
        $crate::ParameterSet::empty()
    };
    ($($body:tt)+) => {
        $crate::ps_params!(@build $crate::ParameterSet::builder(); $($body)+)
    };
}
