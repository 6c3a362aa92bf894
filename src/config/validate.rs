//! configuration validation stuff
use {
    crate::{config::options::*, validator, validator_nested},
    color_eyre::Result,
};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

validator! { HttpConfig,
    timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    connect_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    pool_max_idle_per_host => |v: &usize| *v > 0,
        "must be greater than 0";
    pool_idle_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    user_agent => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

validator! { UiConfig,
    card_width => |v: &usize| *v >= 20 && *v <= 400,
        "must be between 20 and 400";
    body_lines => |v: &usize| *v >= 1 && *v <= 50,
        "must be between 1 and 50";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

/// check that a base url is an absolute http(s) url
fn is_http_url(v: &str) -> bool {
    url::Url::parse(v)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

validator_nested! { PostsRs,
    fields: {
        base_url => |v: &String| is_http_url(v),
            "must be an absolute http(s) url";
    }
    nested: { http; ui; logging }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_bad_field() {
        let cfg = PostsRs {
            base_url: Some("not a url".to_string()),
            ui: Some(UiConfig {
                card_width: Some(5),
                ..Default::default()
            }),
            logging: Some(LoggingConfig {
                level: Some("loud".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("base_url"));
        assert!(errors[1].starts_with("ui.card_width"));
        assert!(errors[2].starts_with("logging.level"));
    }

    #[test]
    fn test_every_accepted_level_maps_to_a_filter() {
        use {crate::utils::string_to_log_level, tracing::level_filters::LevelFilter};

        for level in VALID_LOG_LEVELS {
            let cfg = LoggingConfig {
                level: Some(level.to_string()),
                ..Default::default()
            };
            assert!(cfg.is_valid(), "{}", level);
        }

        assert_eq!(string_to_log_level("off"), LevelFilter::OFF);
        assert_eq!(string_to_log_level("trace"), LevelFilter::TRACE);
    }

    #[test]
    fn test_base_url_schemes() {
        assert!(is_http_url("https://dummyjson.com"));
        assert!(is_http_url("http://127.0.0.1:8080/api"));
        assert!(!is_http_url("ftp://dummyjson.com"));
        assert!(!is_http_url("dummyjson.com"));
    }

    #[test]
    fn test_format_validation_errors() {
        let out = format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]);
        assert_eq!(
            out,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
