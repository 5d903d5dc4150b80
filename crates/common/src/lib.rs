pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        assert_eq!(types::Health::OK.status, "ok");
        assert_eq!(serde_json::to_string(&types::Health::OK).unwrap(), r#"{"status":"ok"}"#);
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<utils::logging::LogFormat>(), Ok(utils::logging::LogFormat::Json));
        assert_eq!("compact".parse::<utils::logging::LogFormat>(), Ok(utils::logging::LogFormat::Compact));
        assert!("yaml".parse::<utils::logging::LogFormat>().is_err());
    }
}
