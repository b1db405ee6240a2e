//! Check 4: a name-filtered lookup returns the target character.

use crate::client::AsyncCharacterClient;
use crate::error::{CheckError, CheckResult};
use crate::models::CharacterPage;

pub async fn run(client: &dyn AsyncCharacterClient, target: &str) -> CheckResult<String> {
    let page = super::fetch_page(client, Some(target)).await?;
    assert_record(&page, target)
}

/// Requires an exact, case-sensitive name match.
pub fn assert_record(page: &CharacterPage, target: &str) -> CheckResult<String> {
    if !page.data.iter().any(|c| c.name() == Some(target)) {
        return Err(CheckError::RecordNotFound(target.to_string()));
    }
    Ok(format!("Character '{}' found", target))
}
