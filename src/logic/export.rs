//! CSV export of standings.

use crate::models::Player;

/// Write ranked players as CSV: `rank,id,name,wins,opponent_wins,byes,matches_played`.
pub fn standings_csv(standings: &[Player]) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["rank", "id", "name", "wins", "opponent_wins", "byes", "matches_played"])?;
    for (idx, p) in standings.iter().enumerate() {
        wtr.write_record([
            (idx + 1).to_string(),
            p.id.to_string(),
            p.name.clone(),
            p.wins.to_string(),
            p.opponent_wins.to_string(),
            p.byes.to_string(),
            p.matches_played.to_string(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
