use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::leagues::{CreateLeagueRequest, League, LeagueStatus, MemberTeam};
use crate::models::matches::parse_date;
use crate::models::users::Actor;
use crate::repositories::{leagues, teams, users};
use chrono::Utc;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<League>> {
    let entities = leagues::fetch_all(ctx).await?;
    let mut resolved = Vec::with_capacity(entities.len());
    for entity in entities {
        let members = fetch_members(ctx, entity.id).await?;
        resolved.push(League::from_entity(entity, members)?);
    }
    Ok(resolved)
}

pub async fn create<C: Context>(ctx: &C, request: CreateLeagueRequest) -> ServiceResult<League> {
    let name = required(request.name).ok_or(AppError::LeaguesMissingFields)?;
    let start_raw = required(request.start_date).ok_or(AppError::LeaguesMissingFields)?;
    let end_raw = required(request.end_date).ok_or(AppError::LeaguesMissingFields)?;

    let start_date = parse_date(&start_raw).ok_or(AppError::LeaguesInvalidDates)?;
    let end_date = parse_date(&end_raw).ok_or(AppError::LeaguesInvalidDates)?;
    if end_date <= start_date {
        return Err(AppError::LeaguesInvalidDates);
    }
    let status = LeagueStatus::for_new(start_date, Utc::now().date_naive());

    let entity = leagues::create(
        ctx,
        leagues::CreateLeagueArgs {
            name,
            description: request.description.unwrap_or_default(),
            start_date,
            end_date,
            status: status.as_str().to_string(),
        },
    )
    .await?;
    League::from_entity(entity, vec![])
}

pub async fn join<C: Context>(ctx: &C, actor: &Actor, league_id: i64) -> ServiceResult<League> {
    let user = users::fetch_one(ctx, actor.user_id).await?;
    let team_id = user.team_id.ok_or(AppError::LeaguesTeamRequired)?;

    let entity = match leagues::fetch_one(ctx, league_id).await {
        Ok(entity) => entity,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::LeaguesNotFound),
        Err(e) => return unexpected(e),
    };
    if LeagueStatus::try_from(entity.status.as_str())? == LeagueStatus::Completed {
        return Err(AppError::LeaguesCompleted);
    }
    if leagues::is_member(ctx, league_id, team_id).await? {
        return Err(AppError::LeaguesAlreadyJoined);
    }

    leagues::add_member(ctx, league_id, team_id).await?;
    teams::set_current_league(ctx, team_id, league_id).await?;

    let members = fetch_members(ctx, league_id).await?;
    League::from_entity(entity, members)
}

async fn fetch_members<C: Context>(ctx: &C, league_id: i64) -> ServiceResult<Vec<MemberTeam>> {
    let members = leagues::fetch_members(ctx, league_id).await?;
    Ok(members
        .into_iter()
        .map(|m| MemberTeam {
            id: m.team_id,
            name: m.team_name,
        })
        .collect())
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
