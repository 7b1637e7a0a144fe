//! Fixed notification records inserted by the seeder.

use bson::oid::ObjectId;
use time::macros::datetime;

use crate::models::Notification;

/// Ids of the seed records, in insertion order.
pub const SEED_IDS: [ObjectId; 4] = [
    ObjectId::from_bytes([
        0x65, 0xd7, 0xe3, 0xa9, 0xd3, 0xb7, 0xf5, 0x3e, 0xb4, 0xe4, 0xe9, 0xb1,
    ]),
    ObjectId::from_bytes([
        0x65, 0xd7, 0xe3, 0xa9, 0xd3, 0xb7, 0xf5, 0x3e, 0xb4, 0xe4, 0xe9, 0xb2,
    ]),
    ObjectId::from_bytes([
        0x65, 0xd7, 0xe3, 0xa9, 0xd3, 0xb7, 0xf5, 0x3e, 0xb4, 0xe4, 0xe9, 0xb3,
    ]),
    ObjectId::from_bytes([
        0x65, 0xd7, 0xe3, 0xa9, 0xd3, 0xb7, 0xf5, 0x3e, 0xb4, 0xe4, 0xe9, 0xb4,
    ]),
];

const AUCTION_FINISHED: &str = "The auction is finished";
const NEW_BID: &str = "The auction have a new bid";

/// Returns the four seed notifications.
pub fn seed_notifications() -> Vec<Notification> {
    let finished_at = datetime!(2024-03-27 12:00 UTC);
    let bid_at = datetime!(2024-03-27 12:30 UTC);

    vec![
        Notification::new(SEED_IDS[0], 1, AUCTION_FINISHED, finished_at, false),
        Notification::new(SEED_IDS[1], 1, NEW_BID, bid_at, true),
        Notification::new(SEED_IDS[2], 2, NEW_BID, bid_at, false),
        Notification::new(SEED_IDS[3], 3, NEW_BID, bid_at, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_match_hex() {
        let hex: Vec<String> = SEED_IDS.iter().map(|id| id.to_hex()).collect();
        assert_eq!(
            hex,
            [
                "65d7e3a9d3b7f53eb4e4e9b1",
                "65d7e3a9d3b7f53eb4e4e9b2",
                "65d7e3a9d3b7f53eb4e4e9b3",
                "65d7e3a9d3b7f53eb4e4e9b4",
            ]
        );
    }

    #[test]
    fn test_seed_ids_unique() {
        let ids: HashSet<_> = seed_notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_seed_records() {
        let records = seed_notifications();

        let user_ids: Vec<i64> = records.iter().map(|n| n.user_id).collect();
        assert_eq!(user_ids, [1, 1, 2, 3]);

        let read: Vec<bool> = records.iter().map(|n| n.read).collect();
        assert_eq!(read, [false, true, false, false]);

        assert_eq!(records[0].message, "The auction is finished");
        for n in &records[1..] {
            assert_eq!(n.message, "The auction have a new bid");
        }
    }

    #[test]
    fn test_seed_timestamps_exact() {
        let records = seed_notifications();

        assert_eq!(
            records[0].timestamp.try_to_rfc3339_string().unwrap(),
            "2024-03-27T12:00:00Z"
        );
        for n in &records[1..] {
            assert_eq!(
                n.timestamp.try_to_rfc3339_string().unwrap(),
                "2024-03-27T12:30:00Z"
            );
        }
        assert_eq!(records[0].timestamp.timestamp_millis(), 1_711_540_800_000);
    }
}
