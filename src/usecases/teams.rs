use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::teams::{CreateTeamRequest, Team, UpdateTeamRequest};
use crate::repositories::{teams, users};

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Team>> {
    let entities = teams::fetch_all_with_leagues(ctx).await?;
    let mut resolved = Vec::with_capacity(entities.len());
    for entity in entities {
        let players = users::fetch_team_member_names(ctx, entity.id).await?;
        resolved.push(Team::from_entity(entity, players));
    }
    Ok(resolved)
}

pub async fn create<C: Context>(ctx: &C, request: CreateTeamRequest) -> ServiceResult<Team> {
    let name = required(request.name).ok_or(AppError::TeamsMissingFields)?;
    let captain = required(request.captain).ok_or(AppError::TeamsMissingFields)?;
    let password = request.password.ok_or(AppError::TeamsMissingFields)?;

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    let team = teams::create(
        ctx,
        teams::CreateTeamArgs {
            name,
            captain,
            password_hash,
            logo: request.logo,
        },
    )
    .await?;
    let entity = teams::fetch_one_with_league(ctx, team.id).await?;
    Ok(Team::from_entity(entity, vec![]))
}

pub async fn update<C: Context>(
    ctx: &C,
    team_id: i64,
    request: UpdateTeamRequest,
) -> ServiceResult<Team> {
    let current = match teams::fetch_one(ctx, team_id).await {
        Ok(team) => team,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::TeamsNotFound),
        Err(e) => return unexpected(e),
    };
    teams::update(
        ctx,
        team_id,
        teams::UpdateTeamArgs {
            name: required(request.name).unwrap_or(current.name),
            captain: required(request.captain).unwrap_or(current.captain),
            logo: request.logo.or(current.logo),
        },
    )
    .await?;

    let entity = teams::fetch_one_with_league(ctx, team_id).await?;
    let players = users::fetch_team_member_names(ctx, team_id).await?;
    Ok(Team::from_entity(entity, players))
}

pub async fn delete<C: Context>(ctx: &C, team_id: i64) -> ServiceResult<()> {
    users::clear_team_members(ctx, team_id).await?;
    let deleted = teams::delete(ctx, team_id).await?;
    if !deleted {
        return Err(AppError::TeamsNotFound);
    }
    Ok(())
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
