use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::format::{format_date, format_status, parse_datetime};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused];

    pub fn as_code(self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            other => Err(format!("Unknown bill status: {}", other)),
        }
    }
}

/// Nota de frais tal como llega del store.
/// Tolerante: campos ausentes o nulos quedan vacíos, números pueden venir como string.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBill {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub expense_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vat: String,
    #[serde(deserialize_with = "lenient_number")]
    pub pct: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub commentary: String,
    #[serde(deserialize_with = "lenient_string")]
    pub comment_admin: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Nota de frais lista para renderizar.
/// `display_*` son derivados; `raw_*` son la fuente de verdad.
#[derive(Clone, PartialEq, Debug)]
pub struct Bill {
    pub id: String,
    pub raw_date: String,
    pub display_date: String,
    pub raw_status: String,
    pub display_status: String,
    pub name: String,
    pub amount: Option<f64>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: Option<String>,
    pub expense_type: String,
    pub vat: String,
    pub pct: Option<f64>,
    pub commentary: String,
    pub comment_admin: String,
}

impl Bill {
    /// Cada campo se formatea por separado: un campo que no se puede
    /// formatear conserva su valor crudo sin afectar a los demás.
    pub fn from_raw(raw: RawBill) -> Self {
        Self {
            display_date: format_date(&raw.date),
            display_status: format_status(&raw.status),
            id: raw.id,
            raw_date: raw.date,
            raw_status: raw.status,
            name: raw.name,
            amount: raw.amount,
            file_url: raw.file_url,
            file_name: raw.file_name,
            email: raw.email,
            expense_type: raw.expense_type,
            vat: raw.vat,
            pct: raw.pct,
            commentary: raw.commentary,
            comment_admin: raw.comment_admin,
        }
    }

    /// Clave cronológica (sobre la fecha cruda, nunca la formateada)
    pub fn date_key(&self) -> Option<NaiveDateTime> {
        parse_datetime(&self.raw_date)
    }

    pub fn status(&self) -> Option<BillStatus> {
        self.raw_status.parse().ok()
    }
}

/// Importe entero que se envía al store: se trunca, nunca se redondea
pub fn whole_amount(amount: f64) -> i64 {
    amount.trunc() as i64
}

/// Nota de frais enviada al `update` del store
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl BillPayload {
    /// Payload de la decisión del admin sobre una nota existente
    pub fn decided(bill: &Bill, status: BillStatus, comment_admin: String, default_pct: u32) -> Self {
        Self {
            email: bill.email.clone().unwrap_or_default(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            amount: bill.amount.map(whole_amount),
            date: bill.raw_date.clone(),
            vat: bill.vat.clone(),
            pct: bill.pct.map(|p| p.round() as u32).unwrap_or(default_pct),
            commentary: bill.commentary.clone(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            status: status.as_code().to_string(),
            comment_admin: Some(comment_admin),
        }
    }
}
