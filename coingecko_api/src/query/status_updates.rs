//! Query builders for status-update endpoints.

use url::Url;

use crate::types::{StatusUpdateCategory, StatusUpdateProjectType};

use super::common::{append_param, Query, QueryCommon};

/// Query for the per-resource status feeds (`/coins/{id}/status_updates` and
/// `/exchanges/{id}/status_updates`): pagination only.
#[derive(Default)]
pub struct StatusUpdatesQuery {
    pub common: QueryCommon,
}

impl Query for StatusUpdatesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

/// Query for the global `/status_updates` feed.
#[derive(Default)]
pub struct GlobalStatusUpdatesQuery {
    pub common: QueryCommon,
    pub category: Option<StatusUpdateCategory>,
    pub project_type: Option<StatusUpdateProjectType>,
}

impl Query for GlobalStatusUpdatesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_param(&mut url, "category", &self.category);
        append_param(&mut url, "project_type", &self.project_type);
        url
    }
}

impl GlobalStatusUpdatesQuery {
    pub fn with_category(mut self, category: StatusUpdateCategory) -> Self {
        self.category = Some(category);
        self
    }
    pub fn with_project_type(mut self, project_type: StatusUpdateProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }
}
