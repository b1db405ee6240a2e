//! Check 3: every character on the first page has a name.

use crate::client::AsyncCharacterClient;
use crate::error::{CheckError, CheckResult};
use crate::models::CharacterPage;

pub async fn run(client: &dyn AsyncCharacterClient) -> CheckResult<String> {
    let page = super::fetch_page(client, None).await?;
    assert_names(&page)
}

/// Passes vacuously on an empty page.
pub fn assert_names(page: &CharacterPage) -> CheckResult<String> {
    if !page.data.iter().all(|c| c.has_name()) {
        return Err(CheckError::MissingName);
    }
    Ok("All characters have a name property".to_string())
}
