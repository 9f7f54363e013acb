//! Catalogue analytics for ECM Records.
//!
//! The entity model covers musicians, albums, musical instruments and the
//! musician-instrument credits that tie them together. The analytics service
//! answers top-k queries over those entities (most prolific musicians, busiest
//! release years, most similar albums, ...), pulling read-only snapshots from a
//! repository port that a storage adapter implements elsewhere.

pub mod entities;
pub mod ports;
pub mod services;
