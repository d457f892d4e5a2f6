//! Test utilities for property-based testing
//!
//! Generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a host URL, sometimes with a path segment
    pub fn host_url() -> impl Strategy<Value = String> {
        ("[a-z][a-z0-9-]{0,15}", proptest::option::of("[a-z]{1,8}")).prop_map(
            |(domain, path)| match path {
                Some(p) => format!("http://{domain}.example.com/{p}"),
                None => format!("http://{domain}.example.com"),
            },
        )
    }

    /// Generate an OS identifier such as `centos7` or `f19`
    pub fn os_identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{1,10}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_host_url_generator(host in host_url()) {
            prop_assert!(host.starts_with("http://"));
        }

        #[test]
        fn test_os_identifier_generator(os in os_identifier()) {
            prop_assert!(!os.is_empty());
            prop_assert!(os.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
