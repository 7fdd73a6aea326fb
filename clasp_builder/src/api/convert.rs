use std::path::PathBuf;

use crate::prelude::{Convert, Value};

macro_rules! implement_from_str {
    ( $($self:ty),+ ) => {
        $(
            impl Value for $self {
                fn hint() -> String {
                    stringify!($self).to_string()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }

            impl<'a> Convert<'a> for $self {
                fn convert(text: &'a str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )+
    };
}

// `bool::from_str` accepts exactly `true` and `false`.
implement_from_str!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, String
);

impl Value for PathBuf {
    fn hint() -> String {
        "PathBuf".to_string()
    }

    fn render(&self) -> String {
        self.display().to_string()
    }
}

impl<'a> Convert<'a> for PathBuf {
    fn convert(text: &'a str) -> Option<Self> {
        Some(PathBuf::from(text))
    }
}

impl Value for &str {
    fn hint() -> String {
        "str".to_string()
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

// A view of the token itself; no copy is made.
impl<'a> Convert<'a> for &'a str {
    fn convert(text: &'a str) -> Option<Self> {
        Some(text)
    }
}

impl<T: Value> Value for Vec<T> {
    fn hint() -> String {
        format!("{} ...", T::hint())
    }

    fn render(&self) -> String {
        self.iter()
            .map(Value::render)
            .collect::<Vec<String>>()
            .join(" ")
    }
}

// Each space separated item is converted independently; any failure fails the whole.
impl<'a, T: Convert<'a>> Convert<'a> for Vec<T> {
    fn convert(text: &'a str) -> Option<Self> {
        text.split(' ')
            .filter(|item| !item.is_empty())
            .map(T::convert)
            .collect()
    }
}

impl<T: Value> Value for Option<T> {
    fn hint() -> String {
        T::hint()
    }

    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "none".to_string(),
        }
    }
}

impl<'a, T: Convert<'a>> Convert<'a> for Option<T> {
    fn convert(text: &'a str) -> Option<Self> {
        T::convert(text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case("01", Some(1))]
    #[case("+1", Some(1))]
    #[case("-1", None)]
    #[case("1.0", None)]
    #[case("", None)]
    #[case("abc", None)]
    fn convert_u32(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(u32::convert(text), expected);
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("false", Some(false))]
    #[case("True", None)]
    #[case("1", None)]
    #[case("", None)]
    fn convert_bool(#[case] text: &str, #[case] expected: Option<bool>) {
        assert_eq!(bool::convert(text), expected);
    }

    #[test]
    fn convert_scalars() {
        assert_eq!(i64::convert("-12"), Some(-12));
        assert_eq!(f64::convert("1.5"), Some(1.5));
        assert_eq!(char::convert("x"), Some('x'));
        assert_eq!(char::convert("xy"), None);
        assert_eq!(String::convert("a b"), Some("a b".to_string()));
        assert_eq!(PathBuf::convert("/tmp/x"), Some(PathBuf::from("/tmp/x")));
        assert_eq!(<&str>::convert("abc"), Some("abc"));
    }

    #[rstest]
    #[case("windows linux xboxone", Some(vec!["windows", "linux", "xboxone"]))]
    #[case("windows  linux ", Some(vec!["windows", "linux"]))]
    #[case("windows", Some(vec!["windows"]))]
    #[case("", Some(vec![]))]
    fn convert_vec_str(#[case] text: &str, #[case] expected: Option<Vec<&str>>) {
        assert_eq!(Vec::<&str>::convert(text), expected);
    }

    #[rstest]
    #[case("1 2 3", Some(vec![1, 2, 3]))]
    #[case("3 1 2", Some(vec![3, 1, 2]))]
    #[case("1 x 3", None)]
    fn convert_vec_u32(#[case] text: &str, #[case] expected: Option<Vec<u32>>) {
        assert_eq!(Vec::<u32>::convert(text), expected);
    }

    #[test]
    fn convert_option() {
        assert_eq!(Option::<u32>::convert("1"), Some(Some(1)));
        assert_eq!(Option::<u32>::convert("x"), None);
    }

    #[test]
    fn hint() {
        assert_eq!(u32::hint(), "u32");
        assert_eq!(bool::hint(), "bool");
        assert_eq!(String::hint(), "String");
        assert_eq!(<&str>::hint(), "str");
        assert_eq!(PathBuf::hint(), "PathBuf");
        assert_eq!(Vec::<u32>::hint(), "u32 ...");
        assert_eq!(Option::<f64>::hint(), "f64");
    }

    #[test]
    fn render() {
        assert_eq!(1920u32.render(), "1920");
        assert_eq!(true.render(), "true");
        assert_eq!("anonymous".to_string().render(), "anonymous");
        assert_eq!(PathBuf::from("/tmp/x").render(), "/tmp/x");
        assert_eq!(vec![1u32, 2, 3].render(), "1 2 3");
        assert_eq!(Vec::<u32>::new().render(), "");
        assert_eq!(Some(1u8).render(), "1");
        assert_eq!(None::<u8>.render(), "none");
    }

    #[test]
    fn render_inverts_convert() {
        let values = vec!["windows".to_string(), "linux".to_string()];
        assert_eq!(Vec::<String>::convert(&values.render()), Some(values));
    }
}
