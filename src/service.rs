use tracing::{debug, instrument};

use crate::error::FolderError;
use crate::model::{
    FetchFolderRequest, FetchFolderResponse, FolderPaginationRequest, PaginatedFolderResponse,
};
use crate::pagination::fetch_page;
use crate::store::FolderSource;

/// Fetch every folder of the requested organization in one response.
#[instrument(skip_all)]
pub async fn get_all_folders(
    source: &dyn FolderSource,
    req: &FetchFolderRequest,
) -> Result<FetchFolderResponse, FolderError> {
    if req.org_id.is_nil() {
        debug!("nil org id, returning empty result set");
        return Ok(FetchFolderResponse {
            folders: Vec::new(),
        });
    }

    let folders = source.fetch_by_org(req.org_id).await?;
    debug!(org_id = %req.org_id, count = folders.len(), "fetched all folders");
    Ok(FetchFolderResponse { folders })
}

/// Fetch one page of the requested organization's folders.
///
/// A nil org id is a valid request for an empty page and never reaches the
/// source; the page size is validated before that shortcut.
#[instrument(skip_all)]
pub async fn get_paginated_folders(
    source: &dyn FolderSource,
    req: &FolderPaginationRequest,
) -> Result<PaginatedFolderResponse, FolderError> {
    if req.per_page <= 0 {
        return Err(FolderError::InvalidPageSize(req.per_page));
    }

    if req.org_id.is_nil() {
        debug!("nil org id, returning empty page");
        return Ok(PaginatedFolderResponse {
            folders: Vec::new(),
            next_token: None,
        });
    }

    let page = fetch_page(source, req.org_id, req.per_page, req.token.as_deref()).await?;
    Ok(PaginatedFolderResponse {
        folders: page.folders,
        next_token: page.next_token,
    })
}
