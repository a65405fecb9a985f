/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// Handy for describing the objects handed to [`detect`](crate::detect).
/// Leaf expressions are converted with `Value::from`, so typed arrays and
/// byte buffers can be embedded directly.
///
/// # Examples
///
/// ```rust
/// use audio_format::{detect, value};
///
/// let samples = value!({
///     "shape": [4, 2],
///     "dtype": "float32",
///     "channels": 2,
///     "format": { "sampleRate": 48000 }
/// });
///
/// assert_eq!(detect(&samples).to_string(), "ndsamples stereo 48000");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::FieldMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FieldMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{FieldMap, Number, TypedArray, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(44100), Value::Number(Number::Integer(44100)));
        assert_eq!(value!("be"), Value::String("be".to_string()));
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(FieldMap::new()));

        let obj = value!({
            "numberOfChannels": 2,
            "planar": true
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("numberOfChannels"), Some(&Value::from(2)));
                assert_eq!(map.get("planar"), Some(&Value::Bool(true)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_value_macro_embeds_typed_arrays() {
        let data = TypedArray::Float32(vec![0.0, 1.0]);
        let obj = value!({ "data": (data.clone()) });
        assert_eq!(obj.get("data"), Some(&Value::Typed(data)));
    }
}
