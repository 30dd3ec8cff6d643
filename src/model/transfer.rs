use serde::Serialize;

/// Placeholder team for a season with no first-team record.
pub const NPB_INACTIVE: &str = "NPB1軍稼働無し";

/// Kind of an inferred transfer.
///
/// Stat tables can't tell a trade from free agency or a waiver claim, so every
/// real team change is [`TransferType::Other`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransferType {
    Other,
    NpbInactive,
}

/// A team change or inactive season inferred from the stat series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_team: Option<String>,
    pub to_team: String,
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
}
