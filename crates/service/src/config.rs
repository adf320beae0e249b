//! Service configuration.

use todolist_core::CategorySet;

/// Application service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Categories items may be filed under
    pub categories: CategorySet,
}

impl ServiceConfig {
    /// Configuration with a custom category set.
    ///
    /// An empty `labels` keeps the default set.
    pub fn with_categories<I, S>(labels: I) -> todolist_core::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            categories: CategorySet::new(labels)?,
        })
    }
}
