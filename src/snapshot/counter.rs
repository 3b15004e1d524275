//! Best-effort element counting for list-shaped responses
//!
//! A count is the number of elements in the response actually received,
//! i.e. the first page only. Anything that is not the expected list counts
//! as zero instead of failing.

use serde::Deserialize;
use serde_json::Value;

use crate::client::models::{OpaqueList, WorkflowPage};

/// Number of elements in a list-shaped body, 0 for any other shape
pub fn count_elements(body: &Value) -> usize {
    OpaqueList::deserialize(body).map_or(0, |list| list.len())
}

/// Number of workflows in a workflow page, 0 if the page is malformed
pub fn count_workflows(body: &Value) -> usize {
    WorkflowPage::deserialize(body).map_or(0, |page| page.workflows.len())
}
