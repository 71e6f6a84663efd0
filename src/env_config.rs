//! Shared environment configuration for the binaries.

/// Read `YATZY_PORT` (default 3000).
pub fn server_port() -> u16 {
    std::env::var("YATZY_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        if std::env::var("YATZY_PORT").is_err() {
            assert_eq!(server_port(), 3000);
        }
    }
}
