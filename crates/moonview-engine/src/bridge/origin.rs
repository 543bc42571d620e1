/// Trust boundary for inbound messages.
///
/// An origin is accepted on an exact string match against the
/// configured allow-list, or when it is a local development host.
/// Everything else is discarded before any message field is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    pub fn allows(&self, origin: &str) -> bool {
        if self.allowed.iter().any(|a| a == origin) {
            return true;
        }
        is_local_dev(origin)
    }
}

fn is_local_dev(origin: &str) -> bool {
    origin == "http://localhost"
        || origin == "http://127.0.0.1"
        || origin.starts_with("http://localhost:")
        || origin.starts_with("http://127.0.0.1:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(vec!["https://moon.example.com".to_string()])
    }

    #[test]
    fn exact_match_is_allowed() {
        assert!(policy().allows("https://moon.example.com"));
    }

    #[test]
    fn unknown_origin_is_rejected() {
        assert!(!policy().allows("https://evil.example"));
        assert!(!policy().allows("https://moon.example.com.evil.example"));
    }

    #[test]
    fn prefix_of_allowed_origin_is_not_enough() {
        assert!(!policy().allows("https://moon.example"));
    }

    #[test]
    fn localhost_with_any_port_is_allowed() {
        assert!(policy().allows("http://localhost:3000"));
        assert!(policy().allows("http://localhost"));
        assert!(policy().allows("http://127.0.0.1:8080"));
    }

    #[test]
    fn localhost_lookalikes_are_rejected() {
        assert!(!policy().allows("http://localhost.evil.example"));
        assert!(!policy().allows("https://localhost:3000"));
    }
}
