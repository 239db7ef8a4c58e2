use crate::domain::models::guest::Guest;
use crate::domain::ports::GuestRepository;
use crate::domain::services::slug::normalize_slug;
use crate::error::AppError;

/// Resolve a URL path segment to a guest.
///
/// The stored slug is free text; it is canonicalized here and compared
/// exactly against the lower-cased input. The whole guest set is scanned
/// because the canonical form only exists in memory, never in storage.
pub async fn resolve_by_slug(
    repo: &dyn GuestRepository,
    url_slug: &str,
) -> Result<Option<Guest>, AppError> {
    let wanted = url_slug.to_lowercase();

    let guests = repo.list().await.map_err(AppError::into_fetch_failed)?;

    Ok(guests
        .into_iter()
        .find(|guest| normalize_slug(&guest.slug) == wanted))
}

/// Resolve a name typed into the lookup form.
///
/// Verbatim equality against the stored slug after trimming. Intentionally a
/// different rule than [`resolve_by_slug`]: "Jane-Doe" does not match a
/// stored "jane-doe" here, while the URL path form does.
pub async fn resolve_by_submitted_name(
    repo: &dyn GuestRepository,
    name: &str,
) -> Result<Option<Guest>, AppError> {
    repo.find_by_slug_verbatim(name.trim())
        .await
        .map_err(AppError::into_fetch_failed)
}
