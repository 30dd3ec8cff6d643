use std::collections::BTreeMap;

use itertools::Itertools;

use crate::model::{BattingStats, PitchingStats, Transfer, TransferType, NPB_INACTIVE};

/// Build the year → team history from both stat series and infer transfers.
///
/// Batting rows are merged after pitching rows, so batting wins when both
/// name a team for the same year.
pub(crate) fn infer_transfers(pitching: &[PitchingStats], batting: &[BattingStats]) -> Vec<Transfer> {
    let seasons = pitching
        .iter()
        .map(|s| (s.year.as_str(), s.team.as_str()))
        .chain(batting.iter().map(|s| (s.year.as_str(), s.team.as_str())));

    let mut history = BTreeMap::new();
    for (year, team) in seasons {
        if year.is_empty() || team.is_empty() {
            continue;
        }
        if let Ok(year) = year.parse::<u32>() {
            history.insert(year, team.to_string());
        }
    }

    transfers_from_history(&history)
}

/// Walk consecutive seasons in year order.
///
/// A gap of more than one year yields one inactive entry per missing year and
/// a return entry for the season after the gap. Otherwise a change of team
/// yields a single entry.
pub(crate) fn transfers_from_history(history: &BTreeMap<u32, String>) -> Vec<Transfer> {
    let mut transfers = Vec::new();

    for ((prev_year, prev_team), (year, team)) in history.iter().tuple_windows() {
        if year - prev_year > 1 {
            transfers.extend((prev_year + 1..*year).map(|gap_year| Transfer {
                year: gap_year.to_string(),
                from_team: Some(prev_team.clone()),
                to_team: NPB_INACTIVE.to_string(),
                transfer_type: TransferType::NpbInactive,
            }));
            transfers.push(Transfer {
                year: year.to_string(),
                from_team: Some(NPB_INACTIVE.to_string()),
                to_team: team.clone(),
                transfer_type: TransferType::Other,
            });
        } else if team != prev_team {
            transfers.push(Transfer {
                year: year.to_string(),
                from_team: Some(prev_team.clone()),
                to_team: team.clone(),
                transfer_type: TransferType::Other,
            });
        }
    }

    transfers
}
