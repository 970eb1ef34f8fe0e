// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Lot layouts as configuration data.
//!
//! A layout is a plain description of floors and their spots that can be kept in a
//! JSON file:
//!
//! ```json
//! { "floors": [ { "spots": [ { "id": "C1", "category": "COMPACT" } ] } ] }
//! ```

use crate::{err::LayoutError, lot::Lot, spot::Spot};
use park_alloc_core::{category::SpotCategory, id::SpotId};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotLayout {
    pub id: SpotId,
    pub category: SpotCategory,
}

impl SpotLayout {
    #[inline]
    pub fn new(id: impl Into<SpotId>, category: SpotCategory) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloorLayout {
    #[serde(default)]
    pub spots: Vec<SpotLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    pub floors: Vec<FloorLayout>,
}

impl Default for LotLayout {
    /// Two floors, each with one compact, one large and one handicapped spot.
    fn default() -> Self {
        let floor = |n: u32| FloorLayout {
            spots: vec![
                SpotLayout::new(format!("C{n}"), SpotCategory::Compact),
                SpotLayout::new(format!("L{n}"), SpotCategory::Large),
                SpotLayout::new(format!("H{n}"), SpotCategory::Handicapped),
            ],
        };
        Self {
            floors: vec![floor(1), floor(2)],
        }
    }
}

impl LotLayout {
    pub fn from_json_str(s: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LayoutError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build_lot(&self) -> Result<Lot, LayoutError> {
        let mut builder = Lot::builder();
        for floor in &self.floors {
            builder.floor(
                floor
                    .spots
                    .iter()
                    .map(|s| Spot::new(s.id.clone(), s.category)),
            );
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::LotBuildError;

    #[test]
    fn test_default_layout_builds_two_floors() {
        let lot = LotLayout::default().build_lot().unwrap();
        assert_eq!(lot.floors().len(), 2);
        assert_eq!(lot.total_spots(), 6);
        let ids: Vec<&str> = lot.floors()[1]
            .spots()
            .iter()
            .map(|s| s.id().as_str())
            .collect();
        assert_eq!(ids, vec!["C2", "L2", "H2"]);
    }

    #[test]
    fn test_json_layout_is_parsed() {
        let layout = LotLayout::from_json_str(
            r#"{ "floors": [
                  { "spots": [ { "id": "A", "category": "LARGE" } ] },
                  { }
               ] }"#,
        )
        .unwrap();
        assert_eq!(layout.floors.len(), 2);
        assert_eq!(layout.floors[0].spots[0], SpotLayout::new("A", SpotCategory::Large));
        assert!(layout.floors[1].spots.is_empty());
    }

    #[test]
    fn test_json_round_trip_of_default_layout() {
        let json = LotLayout::default().to_json_pretty().unwrap();
        assert_eq!(LotLayout::from_json_str(&json).unwrap(), LotLayout::default());
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let err = LotLayout::from_json_str(
            r#"{ "floors": [ { "spots": [ { "id": "A", "category": "VALET" } ] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = LotLayout::from_path("/definitely/not/here/layout.json").unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }

    #[test]
    fn test_duplicate_ids_fail_to_build() {
        let layout = LotLayout {
            floors: vec![FloorLayout {
                spots: vec![
                    SpotLayout::new("X", SpotCategory::Compact),
                    SpotLayout::new("X", SpotCategory::Large),
                ],
            }],
        };
        assert!(matches!(
            layout.build_lot(),
            Err(LayoutError::Build(LotBuildError::DuplicateSpotId(_)))
        ));
    }
}
