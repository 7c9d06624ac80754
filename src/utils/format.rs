// ============================================================================
// FORMAT - Fechas y estados para mostrar
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::BillStatus;

/// Interpreta una fecha cruda del store. Acepta `YYYY-MM-DD`,
/// RFC 3339 y `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// Instante completo para ordenar: una fecha sola cuenta como medianoche,
/// RFC 3339 se normaliza a UTC.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// `DD/MM/YYYY`, o la entrada sin tocar si no es una fecha
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Etiqueta del estado. Códigos desconocidos se devuelven tal cual.
pub fn format_status(code: &str) -> String {
    match code.parse::<BillStatus>() {
        Ok(status) => status.label().to_string(),
        Err(_) => code.to_string(),
    }
}
