use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airplane {
    pub id: i32,
    pub name: String,
}

/// One flight offer as returned by the upstream provider. Field names follow
/// the wire contract shared with the booking collaborators, so renames here
/// would break cached payloads as well as clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub id: i32,
    pub dep_city: City,
    pub arr_city: City,
    pub dep_time: DateTime<Utc>,
    pub arr_time: DateTime<Utc>,
    pub airplane: Airplane,
    pub airline: String,
    pub price: i32,
    pub cxl_sit_id: i32,
    pub remaining_seats: i32,
}

impl FlightRecord {
    /// Scheduled time in the air for this offer.
    pub fn duration(&self) -> chrono::Duration {
        self.arr_time - self.dep_time
    }
}
