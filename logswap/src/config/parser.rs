//! INI parsing logic for converting `Ini` → `LoggingSettings`.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::LoggingSettings;

const SECTION: &str = "logging";

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: SECTION.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value, "must be true or false")),
    }
}

/// Parse an `Ini` object into `LoggingSettings`.
///
/// Starts from `LoggingSettings::default()` and overlays any values found in
/// the `[logging]` section. Unknown keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggingSettings, ConfigFileError> {
    let mut settings = LoggingSettings::default();

    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(settings);
    };

    if let Some(v) = section.get("backend") {
        settings.backend = v
            .parse()
            .map_err(|_| invalid("backend", v, "must be one of: console, syslog, tracing, none"))?;
    }
    if let Some(v) = section.get("debug") {
        settings.debug = parse_bool("debug", v)?;
    }
    if let Some(v) = section.get("label") {
        settings.label = v.trim().to_string();
    }
    if let Some(v) = section.get("facility") {
        settings.facility = v
            .parse()
            .map_err(|_| invalid("facility", v, "must be a syslog facility like user, daemon or local0"))?;
    }
    if let Some(v) = section.get("severity") {
        settings.severity = v.parse().map_err(|_| {
            invalid(
                "severity",
                v,
                "must be one of: emerg, alert, crit, err, warning, notice, info, debug",
            )
        })?;
    }
    if let Some(v) = section.get("address") {
        settings.address = v.parse().map_err(|reason: String| invalid("address", v, reason))?;
    }
    if let Some(v) = section.get("fallback") {
        settings.fallback = parse_bool("fallback", v)?;
    }

    Ok(settings)
}
