//! Check 1: the endpoint answers with HTTP 200.

use crate::client::{ApiResponse, AsyncCharacterClient};
use crate::error::{CheckError, CheckResult};

pub const EXPECTED_STATUS: u16 = 200;

/// Fetch the listing and require a 200 status.
pub async fn run(client: &dyn AsyncCharacterClient) -> CheckResult<String> {
    let response = client.get_characters(None).await?;
    assert_status(&response)
}

pub fn assert_status(response: &ApiResponse) -> CheckResult<String> {
    if response.status != EXPECTED_STATUS {
        return Err(CheckError::UnexpectedStatus {
            expected: EXPECTED_STATUS,
            actual: response.status,
        });
    }
    Ok(format!("Status code is {}", response.status))
}
