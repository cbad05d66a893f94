//! Journal records as supplied by the store

use crate::domain::dates::parse_entry_date;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Ordered list of record ids referenced by an entry.
///
/// Stores hand these over either as a comma-delimited string (`"2,3"`) or as
/// a JSON array. Blank, negative and non-numeric tokens are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdList(Vec<u32>);

impl IdList {
    /// Parse a comma-delimited id list, skipping tokens that are not ids
    pub fn parse(raw: &str) -> Self {
        IdList(
            raw.split(',')
                .filter_map(|token| token.trim().parse::<u32>().ok())
                .collect(),
        )
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for IdList {
    fn from(ids: Vec<u32>) -> Self {
        IdList(ids)
    }
}

impl<'de> Deserialize<'de> for IdList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Id(u32),
            Text(String),
            Other(IgnoredAny),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawIds {
            Delimited(String),
            Ids(Vec<RawId>),
            Other(IgnoredAny),
        }

        Ok(match Option::<RawIds>::deserialize(deserializer)? {
            Some(RawIds::Delimited(raw)) => IdList::parse(&raw),
            Some(RawIds::Ids(ids)) => IdList(
                ids.into_iter()
                    .filter_map(|id| match id {
                        RawId::Id(id) => Some(id),
                        RawId::Text(raw) => raw.trim().parse().ok(),
                        RawId::Other(_) => None,
                    })
                    .collect(),
            ),
            Some(RawIds::Other(_)) | None => IdList::default(),
        })
    }
}

/// Accept any JSON value as an entry date. Non-strings become an empty,
/// unparseable date so the entry is kept but treated as undated.
fn deserialize_loose_date<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(date) => date,
        RawDate::Other(_) => String::new(),
    })
}

/// A single journal entry. One per calendar day; the date is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntryRecord {
    #[serde(deserialize_with = "deserialize_loose_date")]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub primary_mood_id: Option<u32>,
    #[serde(default)]
    pub secondary_mood_ids: IdList,
    #[serde(default)]
    pub tag_ids: IdList,
}

impl JournalEntryRecord {
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        JournalEntryRecord {
            date: date.into(),
            title: String::new(),
            content: content.into(),
            primary_mood_id: None,
            secondary_mood_ids: IdList::default(),
            tag_ids: IdList::default(),
        }
    }

    pub fn with_primary_mood(mut self, mood_id: u32) -> Self {
        self.primary_mood_id = Some(mood_id);
        self
    }

    pub fn with_secondary_moods(mut self, ids: impl Into<IdList>) -> Self {
        self.secondary_mood_ids = ids.into();
        self
    }

    pub fn with_tags(mut self, ids: impl Into<IdList>) -> Self {
        self.tag_ids = ids.into();
        self
    }

    /// Day this entry belongs to, or None if the stored date is unparseable
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.date)
    }

    /// Primary mood followed by secondary moods, in order
    pub fn mood_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.primary_mood_id
            .into_iter()
            .chain(self.secondary_mood_ids.ids().iter().copied())
    }
}

/// Mood categories used for the category roll-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoodCategory {
    #[serde(alias = "positive")]
    Positive,
    #[serde(alias = "neutral")]
    Neutral,
    #[serde(alias = "negative")]
    Negative,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 3] = [
        MoodCategory::Positive,
        MoodCategory::Neutral,
        MoodCategory::Negative,
    ];
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Negative => "Negative",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub id: u32,
    pub name: String,
    pub category: MoodCategory,
    #[serde(default)]
    pub icon: String,
}

impl MoodRecord {
    pub fn new(id: u32, name: &str, category: MoodCategory) -> Self {
        MoodRecord {
            id,
            name: name.to_string(),
            category,
            icon: String::new(),
        }
    }

    /// The moods a fresh journal starts with
    pub fn default_catalog() -> Vec<MoodRecord> {
        use MoodCategory::{Negative, Neutral, Positive};

        let seed = [
            ("Happy", Positive, "😊"),
            ("Excited", Positive, "🤩"),
            ("Relaxed", Positive, "😌"),
            ("Grateful", Positive, "🙏"),
            ("Confident", Positive, "😎"),
            ("Calm", Neutral, "😐"),
            ("Thoughtful", Neutral, "🤔"),
            ("Curious", Neutral, "🧐"),
            ("Nostalgic", Neutral, "😌"),
            ("Bored", Neutral, "😑"),
            ("Sad", Negative, "😢"),
            ("Angry", Negative, "😠"),
            ("Stressed", Negative, "😰"),
            ("Lonely", Negative, "😔"),
            ("Anxious", Negative, "😟"),
        ];

        seed.iter()
            .zip(1u32..)
            .map(|(&(name, category, icon), id)| MoodRecord {
                id,
                name: name.to_string(),
                category,
                icon: icon.to_string(),
            })
            .collect()
    }
}

fn default_tag_color() -> String {
    "#667eea".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_tag_color")]
    pub color: String,
}

impl TagRecord {
    pub fn new(id: u32, name: &str) -> Self {
        TagRecord {
            id,
            name: name.to_string(),
            color: default_tag_color(),
        }
    }
}

/// Reference records addressable by a numeric id
pub trait Identified {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

impl Identified for MoodRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for TagRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Id lookup over a reference table. The store does not guarantee
/// referential integrity, so a lookup may come back empty.
#[derive(Debug)]
pub struct ReferenceIndex<'a, T> {
    by_id: HashMap<u32, &'a T>,
}

impl<'a, T: Identified> ReferenceIndex<'a, T> {
    /// Index records by id. On duplicate ids the first record wins.
    pub fn new(records: &'a [T]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.entry(record.id()).or_insert(record);
        }
        ReferenceIndex { by_id }
    }

    pub fn resolve(&self, id: u32) -> Option<&'a T> {
        self.by_id.get(&id).copied()
    }
}
