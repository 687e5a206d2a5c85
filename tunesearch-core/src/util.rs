use std::time::Duration;

/// Format a duration as "H:MM:SS", or "M:SS" when under an hour.
pub fn duration_to_hms_string(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_hms_string() {
        assert_eq!(duration_to_hms_string(Duration::from_secs(3661)), "1:01:01");
        assert_eq!(duration_to_hms_string(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(duration_to_hms_string(Duration::from_millis(429_500)), "7:09");
        assert_eq!(duration_to_hms_string(Duration::from_secs(59)), "0:59");
        assert_eq!(duration_to_hms_string(Duration::ZERO), "0:00");
    }
}
