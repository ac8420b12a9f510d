//! The closed set of maps a score can be recorded against.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator as _, IntoStaticStr};

use crate::{Error, Result};

/// A playable map. Each map has its own independent leaderboard.
///
/// The set is part of the schema: adding a map is a code change, never a
/// write-time decision. Variant order is the declaration order used when
/// assembling [`crate::TopScores`].
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  EnumIter,
  IntoStaticStr,
  strum::Display,
  strum::EnumString,
)]
pub enum MapId {
  #[serde(rename = "dual vision")]
  #[strum(serialize = "dual vision")]
  DualVision,
  #[serde(rename = "clockback")]
  #[strum(serialize = "clockback")]
  Clockback,
  #[serde(rename = "curl valley")]
  #[strum(serialize = "curl valley")]
  CurlValley,
}

impl MapId {
  /// Every map, in declaration order.
  pub fn all() -> impl Iterator<Item = MapId> { Self::iter() }

  /// The wire and database identifier, e.g. `"dual vision"`.
  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse a wire identifier, rejecting anything outside the fixed set.
  pub fn from_id(id: &str) -> Result<Self> {
    id.parse().map_err(|_| Error::UnknownMap(id.to_owned()))
  }

  /// Human-readable list of the accepted identifiers, for error messages.
  pub fn expected_ids() -> String {
    Self::all()
      .map(|m| format!("{:?}", m.as_str()))
      .collect::<Vec<_>>()
      .join(", ")
  }
}
