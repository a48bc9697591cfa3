use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::repositories::{bookings, grounds, teams, users};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlatformStats {
    pub users: i64,
    pub teams: i64,
    pub grounds: i64,
    pub bookings: i64,
}

/// Dashboard headline numbers. The user count excludes admin accounts.
pub async fn fetch_stats<C: Context>(ctx: &C) -> ServiceResult<PlatformStats> {
    Ok(PlatformStats {
        users: users::count_non_admins(ctx).await?,
        teams: teams::count(ctx).await?,
        grounds: grounds::count(ctx).await?,
        bookings: bookings::count(ctx).await?,
    })
}
