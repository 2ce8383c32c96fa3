use super::model::AthleticEvent;
use serde::Deserialize;

const UNKNOWN_OPPONENT: &str = "Unknown Opponent";

/// The schedule object the home page assigns in an inline script
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub data: Vec<MatchResponse>,
}

#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    pub sport: SportResponse,
    #[serde(default)]
    pub opponent: Option<OpponentResponse>,
    /// ISO timestamp, e.g. "2025-03-05T19:00:00"
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct SportResponse {
    pub short_title: String,
}

#[derive(Debug, Deserialize)]
pub struct OpponentResponse {
    #[serde(default)]
    pub name: Option<String>,
}

impl MatchResponse {
    pub fn to_model(&self) -> AthleticEvent {
        let opponent = self
            .opponent
            .as_ref()
            .and_then(|opponent| opponent.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_OPPONENT);

        AthleticEvent {
            du_team: self.sport.short_title.to_string(),
            opponent: opponent.to_string(),
            date: Self::date_part(&self.date).to_string(),
        }
    }

    fn date_part(timestamp: &str) -> &str {
        timestamp.split('T').next().unwrap_or(timestamp)
    }
}
