use serde_json::Value;

/// Anything that can name a row. Identifiers come in from paths, query
/// strings and request bodies, so most of them start life as text.
pub trait AsId {
    fn as_id(&self) -> Option<i64>;
}

impl AsId for i64 {
    fn as_id(&self) -> Option<i64> {
        Some(*self)
    }
}

impl AsId for str {
    fn as_id(&self) -> Option<i64> {
        self.trim().parse().ok()
    }
}

impl AsId for String {
    fn as_id(&self) -> Option<i64> {
        self.as_str().as_id()
    }
}

impl AsId for Value {
    fn as_id(&self) -> Option<i64> {
        match self.as_str() {
            Some(s) => s.as_id(),
            None => self.as_i64()
        }
    }
}

impl<'a, T: AsId + ?Sized> AsId for &'a T {
    fn as_id(&self) -> Option<i64> {
        (**self).as_id()
    }
}

impl<T: AsId> AsId for Option<T> {
    fn as_id(&self) -> Option<i64> {
        self.as_ref().and_then(AsId::as_id)
    }
}

#[cfg(test)]
mod tests {
    use super::AsId;
    use serde_json::{self, Value};

    fn json(raw: &str) -> Value {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn text_is_coerced() {
        assert_eq!("5".as_id(), Some(5));
        assert_eq!(" 12 ".as_id(), Some(12));
        assert_eq!("five".as_id(), None);
        assert_eq!("".as_id(), None);
        assert_eq!(String::from("-1").as_id(), Some(-1));
    }

    #[test]
    fn json_is_coerced() {
        assert_eq!(json("7").as_id(), Some(7));
        assert_eq!(json("-7").as_id(), Some(-7));
        assert_eq!(json("\"7\"").as_id(), Some(7));
        assert_eq!(json("true").as_id(), None);
        assert_eq!(json("null").as_id(), None);
        assert_eq!(json("7.5").as_id(), None);
        assert_eq!(json("[7]").as_id(), None);
    }

    #[test]
    fn absent_is_none() {
        let nothing: Option<&str> = None;
        assert_eq!(nothing.as_id(), None);
        assert_eq!(Some("3").as_id(), Some(3));
    }
}
