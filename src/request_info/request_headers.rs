use std::ops::{Deref, DerefMut};

/// Ordered header entries of a request description.
///
/// A name may appear more than once. Lookups compare names ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders(pub Vec<(String, String)>);

impl RequestHeaders {
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Deref for RequestHeaders {
    type Target = Vec<(String, String)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RequestHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for RequestHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        RequestHeaders(arr.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::request_info::request_headers::RequestHeaders;

    #[test]
    fn appends_without_overwriting() {
        let mut headers = RequestHeaders::default();
        headers.append("X", "1");
        headers.append("X", "2");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get_all("X").collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn looks_up_names_ignoring_case() {
        let headers = RequestHeaders::from([(
            "authorization".to_string(),
            "Bearer abc".to_string(),
        )]);

        assert!(headers.contains_key("Authorization"));
        assert!(headers.contains_key("AUTHORIZATION"));
        assert!(!headers.contains_key("Accept"));
        assert_eq!(
            headers.get_all("Authorization").collect::<Vec<_>>(),
            vec!["Bearer abc"]
        );
    }
}
