//! Built-in starter dataset written when no data file exists yet.

/// Seed records, stored verbatim in the on-disk format.
pub const SEED_DATASET: &str = r#"[
  {
    "handle": "@fjordsketch",
    "platform": "Instagram",
    "category": "watercolor timelapses",
    "note": "Uploads 60-second coastal watercolor loops.",
    "heat": 0.87,
    "last_seen": "2026-02-12",
    "last_boosted": "2026-02-04"
  },
  {
    "handle": "@auroraaudio",
    "platform": "YouTube",
    "category": "field recordings",
    "note": "Ambient expeditions with crisp thumbnails.",
    "heat": 0.92,
    "last_seen": "2026-02-11",
    "last_boosted": "2026-01-29"
  },
  {
    "handle": "@northernknots",
    "platform": "X",
    "category": "macro weaving",
    "note": "Threading reels pair textile close-ups w/ founder tips.",
    "heat": 0.74,
    "last_seen": "2026-02-08",
    "last_boosted": "2026-02-01"
  }
]"#;
