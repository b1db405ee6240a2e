//! The five smoke checks run against the characters endpoint.
//!
//! Each check issues its own request and shares nothing with the others.
//! Every module splits into an async `run` that fetches and a pure `assert_*`
//! function that inspects what was fetched. Checks that read the body first
//! require a 200 status.

pub mod data_shape;
pub mod name_presence;
pub mod page_size;
pub mod specific_record;
pub mod status_code;

use crate::client::AsyncCharacterClient;
use crate::config::Expectations;
use crate::error::CheckResult;
use crate::models::CharacterPage;
use std::fmt;

/// One assertion routine against the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    StatusCode,
    DataShape,
    NamePresence,
    SpecificRecord,
    PageSize,
}

impl Check {
    /// All checks in the order a run executes them.
    pub const ALL: [Check; 5] = [
        Check::StatusCode,
        Check::DataShape,
        Check::NamePresence,
        Check::SpecificRecord,
        Check::PageSize,
    ];

    /// 1-based position in [`Check::ALL`].
    pub fn number(self) -> usize {
        match self {
            Check::StatusCode => 1,
            Check::DataShape => 2,
            Check::NamePresence => 3,
            Check::SpecificRecord => 4,
            Check::PageSize => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Check::StatusCode => "status code",
            Check::DataShape => "data shape",
            Check::NamePresence => "name presence",
            Check::SpecificRecord => "specific record",
            Check::PageSize => "pagination",
        }
    }

    /// Run this check, returning the detail line reported on success.
    pub async fn run(
        self,
        client: &dyn AsyncCharacterClient,
        expectations: &Expectations,
    ) -> CheckResult<String> {
        match self {
            Check::StatusCode => status_code::run(client).await,
            Check::DataShape => data_shape::run(client).await,
            Check::NamePresence => name_presence::run(client).await,
            Check::SpecificRecord => {
                specific_record::run(client, &expectations.target_name).await
            }
            Check::PageSize => page_size::run(client, expectations.page_size).await,
        }
    }
}

/// Fetch one page, requiring a 200 status before the body is inspected.
pub(crate) async fn fetch_page(
    client: &dyn AsyncCharacterClient,
    name: Option<&str>,
) -> CheckResult<CharacterPage> {
    let response = client.get_characters(name).await?;
    status_code::assert_status(&response)?;
    CharacterPage::parse(&response.body)
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
