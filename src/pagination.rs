//! The pagination engine.
//!
//! Pages are contiguous windows over an organization's filtered result set,
//! addressed by an opaque continuation token that names the last record of
//! the previous page. The engine guarantees that walking pages from an
//! empty token until `next_token` is `None` reproduces the unpaginated
//! fetch exactly: same order, no duplicates, no omissions.

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::FolderError;
use crate::model::Folder;
use crate::store::FolderSource;
use crate::token::{decode_token, encode_token};

/// One page of an organization's result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub folders: Vec<Folder>,
    /// `None` exactly when this page reaches the end of the filtered set.
    pub next_token: Option<String>,
}

impl Page {
    fn empty() -> Self {
        Self {
            folders: Vec::new(),
            next_token: None,
        }
    }
}

/// Fetch the next page of `org_id`'s folders.
///
/// `token` is the continuation token from the previous page; `None` (or an
/// empty string) starts from the beginning. A token whose cursor is no
/// longer part of the current result set fails with
/// [`FolderError::StaleToken`]; iteration cannot resume from an unknown
/// position.
#[instrument(skip_all)]
pub async fn fetch_page(
    source: &dyn FolderSource,
    org_id: Uuid,
    per_page: i64,
    token: Option<&str>,
) -> Result<Page, FolderError> {
    if per_page <= 0 {
        return Err(FolderError::InvalidPageSize(per_page));
    }

    let mut folders = source.fetch_by_org(org_id).await?;
    if folders.is_empty() {
        // Zero matching records terminate iteration regardless of token
        // input; there is no position left for a cursor to be stale against.
        return Ok(Page::empty());
    }

    let start = match parse_cursor(token)? {
        None => 0,
        Some(cursor) => match folders.iter().position(|folder| folder.id == cursor) {
            Some(index) => index + 1,
            None => return Err(FolderError::StaleToken { cursor }),
        },
    };

    let total = folders.len();
    if start >= total {
        // The cursor named the final record; iteration is complete.
        return Ok(Page::empty());
    }

    // per_page can exceed usize::MAX on 32-bit targets; saturate, never
    // truncate.
    let limit = usize::try_from(per_page).unwrap_or(usize::MAX);
    let end = usize::min(start.saturating_add(limit), total);
    debug!(%org_id, per_page, start, end, total, "resolved page window");

    let next_token = if end == total {
        None
    } else {
        Some(encode_token(folders[end - 1].id))
    };

    folders.truncate(end);
    Ok(Page {
        folders: folders.split_off(start),
        next_token,
    })
}

/// Normalize the optional token: absent or empty means "first page".
fn parse_cursor(token: Option<&str>) -> Result<Option<Uuid>, FolderError> {
    match token {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => Ok(Some(decode_token(raw)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    const ORG_A: Uuid = Uuid::from_u128(0xa11ce000_0000_4000_8000_000000000001);
    const ORG_B: Uuid = Uuid::from_u128(0xb0bb1e00_0000_4000_8000_000000000002);

    struct FixtureSource {
        folders: Vec<Folder>,
    }

    #[async_trait]
    impl FolderSource for FixtureSource {
        async fn fetch_by_org(&self, org_id: Uuid) -> anyhow::Result<Vec<Folder>> {
            Ok(self
                .folders
                .iter()
                .filter(|f| f.org_id == org_id)
                .cloned()
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl FolderSource for FailingSource {
        async fn fetch_by_org(&self, _org_id: Uuid) -> anyhow::Result<Vec<Folder>> {
            Err(anyhow!("backend offline"))
        }
    }

    fn folder(org_id: Uuid, n: u128) -> Folder {
        Folder {
            id: Uuid::from_u128(0xf01d_0000_0000_4000_8000_0000_0000_0000 + n),
            name: format!("folder-{n}"),
            org_id,
            deleted: n % 2 == 0,
            created_at: Utc.with_ymd_and_hms(2022, 8, 1, 0, 0, 0).unwrap(),
        }
    }

    fn source_with(counts: &[(Uuid, u128)]) -> FixtureSource {
        let mut folders = Vec::new();
        let mut n = 0;
        for &(org_id, count) in counts {
            for _ in 0..count {
                folders.push(folder(org_id, n));
                n += 1;
            }
        }
        FixtureSource { folders }
    }

    #[tokio::test]
    async fn rejects_non_positive_page_sizes() {
        let source = source_with(&[(ORG_A, 3)]);
        for per_page in [0, -1, -20] {
            let err = fetch_page(&source, ORG_A, per_page, None).await.unwrap_err();
            assert!(matches!(err, FolderError::InvalidPageSize(got) if got == per_page));
        }
    }

    #[tokio::test]
    async fn first_page_has_no_token_prerequisite() {
        let source = source_with(&[(ORG_A, 5)]);
        let page = fetch_page(&source, ORG_A, 2, None).await.unwrap();
        assert_eq!(page.folders, source.folders[..2].to_vec());

        let token = page.next_token.expect("more records remain");
        assert_eq!(decode_token(&token).unwrap(), source.folders[1].id);
    }

    #[tokio::test]
    async fn empty_string_token_is_the_first_page() {
        let source = source_with(&[(ORG_A, 3)]);
        let with_none = fetch_page(&source, ORG_A, 2, None).await.unwrap();
        let with_empty = fetch_page(&source, ORG_A, 2, Some("")).await.unwrap();
        assert_eq!(with_none, with_empty);
    }

    #[tokio::test]
    async fn token_walk_reproduces_the_full_set_in_order() {
        let source = source_with(&[(ORG_A, 5)]);
        let mut collected = Vec::new();
        let mut token: Option<String> = None;
        let mut lengths = Vec::new();

        loop {
            let page = fetch_page(&source, ORG_A, 2, token.as_deref()).await.unwrap();
            lengths.push(page.folders.len());
            collected.extend(page.folders);
            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        assert_eq!(lengths, vec![2, 2, 1]);
        assert_eq!(collected, source.folders);
    }

    #[tokio::test]
    async fn oversized_page_returns_all_remaining_records() {
        let source = source_with(&[(ORG_A, 5)]);
        let page = fetch_page(&source, ORG_A, 100, None).await.unwrap();
        assert_eq!(page.folders.len(), 5);
        assert_eq!(page.next_token, None);
    }

    #[tokio::test]
    async fn page_sizes_beyond_the_platform_word_stay_a_single_full_page() {
        let source = source_with(&[(ORG_A, 5)]);
        for per_page in [i64::from(u32::MAX) + 1, i64::MAX] {
            let page = fetch_page(&source, ORG_A, per_page, None).await.unwrap();
            assert_eq!(page.folders.len(), 5);
            assert_eq!(page.next_token, None);
        }
    }

    #[tokio::test]
    async fn exact_multiple_terminates_on_the_final_full_page() {
        let source = source_with(&[(ORG_A, 4)]);
        let first = fetch_page(&source, ORG_A, 2, None).await.unwrap();
        let token = first.next_token.expect("half the set remains");

        let last = fetch_page(&source, ORG_A, 2, Some(&token)).await.unwrap();
        assert_eq!(last.folders.len(), 2);
        // No trailing empty page: the final full page is already terminal.
        assert_eq!(last.next_token, None);
    }

    #[tokio::test]
    async fn cursor_at_the_last_record_is_a_terminal_empty_page() {
        let source = source_with(&[(ORG_A, 3)]);
        let token = encode_token(source.folders[2].id);
        let page = fetch_page(&source, ORG_A, 2, Some(&token)).await.unwrap();
        assert!(page.folders.is_empty());
        assert_eq!(page.next_token, None);
    }

    #[tokio::test]
    async fn unknown_cursor_is_stale_not_a_restart() {
        let source = source_with(&[(ORG_A, 3)]);
        let ghost = Uuid::from_u128(0xdead_0000_0000_4000_8000_0000_0000_0000);
        let err = fetch_page(&source, ORG_A, 2, Some(&encode_token(ghost)))
            .await
            .unwrap_err();
        assert!(matches!(err, FolderError::StaleToken { cursor } if cursor == ghost));
    }

    #[tokio::test]
    async fn cursor_from_another_org_is_stale() {
        let source = source_with(&[(ORG_A, 3), (ORG_B, 3)]);
        let foreign = source
            .folders
            .iter()
            .find(|f| f.org_id == ORG_B)
            .unwrap()
            .id;
        let err = fetch_page(&source, ORG_A, 2, Some(&encode_token(foreign)))
            .await
            .unwrap_err();
        assert!(matches!(err, FolderError::StaleToken { cursor } if cursor == foreign));
    }

    #[tokio::test]
    async fn malformed_token_is_invalid() {
        let source = source_with(&[(ORG_A, 3)]);
        let err = fetch_page(&source, ORG_A, 2, Some("%%not-base64%%"))
            .await
            .unwrap_err();
        assert!(matches!(err, FolderError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn empty_result_set_ends_iteration_regardless_of_token() {
        let source = source_with(&[(ORG_B, 3)]);
        let stray = encode_token(Uuid::from_u128(7));

        for token in [None, Some(stray.as_str()), Some("%%not-base64%%")] {
            let page = fetch_page(&source, ORG_A, 2, token).await.unwrap();
            assert!(page.folders.is_empty());
            assert_eq!(page.next_token, None);
        }
    }

    #[tokio::test]
    async fn source_errors_propagate_unchanged() {
        let err = fetch_page(&FailingSource, ORG_A, 2, None).await.unwrap_err();
        match err {
            FolderError::Source(inner) => {
                assert_eq!(inner.to_string(), "backend offline");
            }
            other => panic!("expected a source error, got {other:?}"),
        }
    }
}
