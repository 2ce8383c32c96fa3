use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleticEvent {
    pub du_team: String,
    pub opponent: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleticsDocument {
    pub events: Vec<AthleticEvent>,
}
