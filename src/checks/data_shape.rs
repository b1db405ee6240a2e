//! Check 2: the body holds a non-empty `data` array.

use crate::client::AsyncCharacterClient;
use crate::error::{CheckError, CheckResult};
use crate::models::CharacterPage;

pub async fn run(client: &dyn AsyncCharacterClient) -> CheckResult<String> {
    let page = super::fetch_page(client, None).await?;
    assert_shape(&page)
}

pub fn assert_shape(page: &CharacterPage) -> CheckResult<String> {
    if page.is_empty() {
        return Err(CheckError::EmptyData);
    }
    Ok(format!("Data is an array with {} characters", page.len()))
}
