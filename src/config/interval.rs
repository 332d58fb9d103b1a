use std::time::Duration;

/// Parse an interval string like "500ms", "2s", "30m", "1h" or bare seconds.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();

    if let Some(millis) = s.strip_suffix("ms") {
        millis
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| format!("Invalid milliseconds: {}", millis))
    } else if let Some(hours) = s.strip_suffix('h') {
        hours
            .parse::<u64>()
            .ok()
            .and_then(|h| h.checked_mul(3600))
            .map(Duration::from_secs)
            .ok_or_else(|| format!("Invalid hours: {}", hours))
    } else if let Some(minutes) = s.strip_suffix('m') {
        minutes
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
            .ok_or_else(|| format!("Invalid minutes: {}", minutes))
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| format!("Invalid seconds: {}", secs))
    } else {
        // Try parsing as raw seconds
        s.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| format!("Invalid interval: {}. Use format like '500ms', '1s', '5m'", s))
    }
}

/// Format interval for display
pub fn format_interval(interval: Duration) -> String {
    let millis = interval.as_millis();

    if millis % 1000 != 0 {
        format!("{}ms", millis)
    } else {
        let secs = interval.as_secs();
        if secs >= 3600 && secs % 3600 == 0 {
            format!("{}h", secs / 3600)
        } else if secs >= 60 && secs % 60 == 0 {
            format!("{}m", secs / 60)
        } else {
            format!("{}s", secs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_interval("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_interval("30m").unwrap(), Duration::from_secs(1800));
        assert_eq!(parse_interval("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_interval("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_interval(" 2S ").unwrap(), Duration::from_secs(2));
        assert!(parse_interval("invalid").is_err());
        assert!(parse_interval("-1s").is_err());
        assert!(parse_interval("1.5s").is_err());
    }

    #[test]
    fn test_parse_interval_overflow() {
        assert!(parse_interval("6000000000000000h").is_err());
        assert!(parse_interval("400000000000000000m").is_err());
        assert_eq!(
            parse_interval("18446744073709551615s").unwrap(),
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(Duration::from_millis(250)), "250ms");
        assert_eq!(format_interval(Duration::from_millis(1500)), "1500ms");
        assert_eq!(format_interval(Duration::from_secs(1)), "1s");
        assert_eq!(format_interval(Duration::from_secs(90)), "90s");
        assert_eq!(format_interval(Duration::from_secs(120)), "2m");
        assert_eq!(format_interval(Duration::from_secs(7200)), "2h");
    }
}
