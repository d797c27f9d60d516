use crate::api::AccountApi;
use crate::error::Result;
use crate::pagination::fetch_all_filtered;
use crate::types::RegionEntry;

/// Names of every selectable region of the account, in service order.
pub async fn list_regions<A>(api: &A) -> Result<Vec<String>>
where
    A: AccountApi + ?Sized,
{
    let regions = fetch_all_filtered(
        |token| api.list_regions_page(token),
        RegionEntry::is_selectable,
    )
    .await?;
    Ok(regions.into_iter().map(|region| region.name).collect())
}
