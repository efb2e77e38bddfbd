//! The closed set of state transitions a view may request.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{WorkshopDate, WorkshopTime};
use crate::types::{Email, WorkshopDateId, WorkshopTimeId};

/// A request to change the console state.
///
/// Serialized adjacently tagged, so a script entry reads
/// `{ type: DELETE_DATE, payload: "1" }`. An entry whose `type` is not
/// known here reads as [`Action::Unrecognized`], payload or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Mark the session as logged in.
    Login { email: Email },
    /// Clear the session.
    Logout,
    /// Append a date. The caller supplies a fresh id.
    AddDate(WorkshopDate),
    /// Replace the date with the same id, keeping its position.
    UpdateDate(WorkshopDate),
    /// Remove a date and every time window attached to it.
    DeleteDate(WorkshopDateId),
    /// Append a time window. The caller supplies a fresh id and a valid
    /// remaining count.
    AddTime(WorkshopTime),
    /// Replace the time window with the same id, keeping its position.
    UpdateTime(WorkshopTime),
    /// Remove one time window.
    DeleteTime(WorkshopTimeId),
    /// Replace the whole time collection.
    SetTimes(Vec<WorkshopTime>),
    /// Set the remaining seats of one time window, leaving capacity alone.
    AdjustRemaining {
        time_id: WorkshopTimeId,
        remain_slot: u32,
    },
    /// Any action type this build does not know. Transitions to the same
    /// state.
    Unrecognized,
}

impl Action {
    /// Stable action name, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Login { .. } => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::AddDate(_) => "ADD_DATE",
            Self::UpdateDate(_) => "UPDATE_DATE",
            Self::DeleteDate(_) => "DELETE_DATE",
            Self::AddTime(_) => "ADD_TIME",
            Self::UpdateTime(_) => "UPDATE_TIME",
            Self::DeleteTime(_) => "DELETE_TIME",
            Self::SetTimes(_) => "SET_TIMES",
            Self::AdjustRemaining { .. } => "ADJUST_REMAINING",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// The `{type, payload}` shape of every script entry.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

#[derive(Deserialize)]
struct LoginPayload {
    email: Email,
}

#[derive(Deserialize)]
struct AdjustRemainingPayload {
    time_id: WorkshopTimeId,
    remain_slot: u32,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;
        let action = match kind.as_str() {
            "LOGIN" => {
                let LoginPayload { email } = content(&kind, payload)?;
                Self::Login { email }
            }
            "LOGOUT" => Self::Logout,
            "ADD_DATE" => Self::AddDate(content(&kind, payload)?),
            "UPDATE_DATE" => Self::UpdateDate(content(&kind, payload)?),
            "DELETE_DATE" => Self::DeleteDate(content(&kind, payload)?),
            "ADD_TIME" => Self::AddTime(content(&kind, payload)?),
            "UPDATE_TIME" => Self::UpdateTime(content(&kind, payload)?),
            "DELETE_TIME" => Self::DeleteTime(content(&kind, payload)?),
            "SET_TIMES" => Self::SetTimes(content(&kind, payload)?),
            "ADJUST_REMAINING" => {
                let AdjustRemainingPayload {
                    time_id,
                    remain_slot,
                } = content(&kind, payload)?;
                Self::AdjustRemaining {
                    time_id,
                    remain_slot,
                }
            }
            _ => Self::Unrecognized,
        };
        Ok(action)
    }
}

fn content<T: DeserializeOwned, E: de::Error>(kind: &str, payload: Option<Value>) -> Result<T, E> {
    let payload = payload.ok_or_else(|| E::custom(format!("{kind} requires a payload")))?;
    T::deserialize(payload).map_err(|e| E::custom(format!("invalid {kind} payload: {e}")))
}
