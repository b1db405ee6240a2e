//! Check 5: the first page holds the default page size.
//!
//! Only page one is inspected; `nextPage` and `totalPages` are not followed.

use crate::client::AsyncCharacterClient;
use crate::error::{CheckError, CheckResult};
use crate::models::CharacterPage;

pub async fn run(client: &dyn AsyncCharacterClient, expected: usize) -> CheckResult<String> {
    let page = super::fetch_page(client, None).await?;
    assert_page_size(&page, expected)
}

pub fn assert_page_size(page: &CharacterPage, expected: usize) -> CheckResult<String> {
    let actual = page.len();
    if actual != expected {
        return Err(CheckError::PageSize { expected, actual });
    }
    Ok(format!("Pagination works, got {} items", actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn page_of(n: usize) -> CharacterPage {
        CharacterPage::from_value(json!({ "data": vec![Value::Null; n] })).unwrap()
    }

    #[test]
    fn test_full_page() {
        assert!(assert_page_size(&page_of(50), 50).is_ok());
    }

    #[test]
    fn test_short_page() {
        let err = assert_page_size(&page_of(10), 50).unwrap_err();
        assert_eq!(err.to_string(), "Expected 50 items per page, but got 10");
    }

    #[test]
    fn test_oversized_page() {
        assert!(matches!(
            assert_page_size(&page_of(51), 50),
            Err(CheckError::PageSize { expected: 50, actual: 51 })
        ));
    }
}
