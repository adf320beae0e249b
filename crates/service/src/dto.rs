//! Request and response models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use todolist_core::{Percentage, Time, TodoError, TodoItem};

/// A progression as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionDto {
    /// Progression date
    pub date: Time,
    /// Increment
    pub percentage: Percentage,
}

/// A to-do item as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemDto {
    /// Item id
    pub id: u32,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Category label
    pub category: String,
    /// Progressions, oldest first
    pub progressions: Vec<ProgressionDto>,
    /// Sum of progressions
    pub total_progress: Percentage,
    /// Total is exactly 100%
    pub is_completed: bool,
    /// Description may still change and the item may be removed
    pub can_be_modified: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().value(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            category: item.category().to_string(),
            progressions: item
                .history()
                .progressions()
                .iter()
                .map(|p| ProgressionDto {
                    date: p.date(),
                    percentage: p.percentage(),
                })
                .collect(),
            total_progress: item.total_progress(),
            is_completed: item.is_completed(),
            can_be_modified: item.can_be_modified(),
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Category label
    pub category: String,
}

/// Body of an update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// New description
    pub description: String,
}

/// Body of a progression request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterProgressionRequest {
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Time,
    /// Increment
    pub percentage: Percentage,
}

/// Parse an RFC 3339 timestamp, or a plain `YYYY-MM-DD` date as midnight UTC.
pub fn parse_date(s: &str) -> Result<Time, TodoError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| TodoError::validation("Invalid date format. Use yyyy-MM-dd."))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Time, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use todolist_core::{Category, CategorySet, TodoList};

    #[test]
    fn test_parse_date_forms() {
        let midnight = Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2025-03-18").unwrap(), midnight);
        assert_eq!(parse_date("2025-03-18T00:00:00Z").unwrap(), midnight);
        assert_eq!(
            parse_date("2025-03-18T02:00:00+02:00").unwrap(),
            midnight
        );
        assert!(matches!(
            parse_date("18/03/2025"),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn test_progression_request_from_json() {
        let req: RegisterProgressionRequest =
            serde_json::from_str(r#"{"date": "2025-03-18", "percentage": 12.5}"#).unwrap();
        assert_eq!(req.percentage, Percentage::from_hundredths(1250));
        assert_eq!(req.date, Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap());

        assert!(serde_json::from_str::<RegisterProgressionRequest>(
            r#"{"date": "yesterday", "percentage": 10}"#
        )
        .is_err());
    }

    #[test]
    fn test_item_mapping() {
        let mut list = TodoList::new();
        let category = Category::parse("Health", &CategorySet::default()).unwrap();
        let (item, _) = list.add_item("Run", "5k", category).unwrap();
        let id = item.id();
        let date = Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap();
        let (item, _) = list
            .register_progression(id, date, Percentage::whole(60))
            .unwrap();

        let dto = TodoItemDto::from(item);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.category, "Health");
        assert_eq!(dto.progressions.len(), 1);
        assert_eq!(dto.total_progress, Percentage::whole(60));
        assert!(!dto.is_completed);
        assert!(!dto.can_be_modified);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["total_progress"], 60.0);
        assert_eq!(json["progressions"][0]["percentage"], 60.0);
    }
}
