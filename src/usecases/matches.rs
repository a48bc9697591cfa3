use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::matches::{AddPlayerArgs, CreateMatchArgs, JoinOutcome, Match as MatchEntity};
use crate::models::matches::{
    CreateMatchRequest, JoinMatchRequest, Match, MatchAttrs, UpdateMatchRequest,
    apply_match_update, ensure_joinable, start_instant, validate_new_match,
};
use crate::models::users::{Actor, can_mutate_match};
use crate::repositories::matches;
use crate::repositories::users;
use chrono::Utc;
use std::collections::HashMap;

pub async fn create<C: Context>(
    ctx: &C,
    actor: &Actor,
    request: CreateMatchRequest,
) -> ServiceResult<Match> {
    let validated = validate_new_match(request, Utc::now().date_naive())?;
    let entity = matches::create(
        ctx,
        CreateMatchArgs {
            name: validated.name,
            date: validated.date,
            time: validated.time.to_string(),
            location: validated.location,
            match_type: validated.format.as_str().to_string(),
            max_players: validated.max_players,
            max_teams: validated.max_teams,
            creator_id: actor.user_id,
            description: validated.description,
        },
    )
    .await?;
    resolve(ctx, entity).await
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<Match> {
    let entity = fetch_entity(ctx, match_id).await?;
    resolve(ctx, entity).await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Match>> {
    let entities = matches::fetch_all(ctx).await?;

    // Creators repeat across matches; resolve each one once. A creator
    // whose account is gone resolves to None, never a failed listing.
    let mut creators: HashMap<i64, Option<_>> = HashMap::new();
    let mut resolved = Vec::with_capacity(entities.len());
    for entity in entities {
        let creator_id = entity.creator_id;
        if !creators.contains_key(&creator_id) {
            let creator = users::fetch_optional(ctx, creator_id).await?;
            creators.insert(creator_id, creator.map(|c| c.display()));
        }
        let creator = creators.get(&creator_id).cloned().flatten();
        let players = matches::fetch_players(ctx, entity.id).await?;
        resolved.push(Match::from_entity(entity, creator, players)?);
    }
    Ok(resolved)
}

pub async fn join<C: Context>(
    ctx: &C,
    actor: &Actor,
    match_id: i64,
    request: JoinMatchRequest,
) -> ServiceResult<Match> {
    let player_name = request
        .player_name
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::MatchesMissingJoinInfo)?;
    let contact_info = request
        .contact_info
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::MatchesMissingJoinInfo)?;
    let team_name = request.team_name.unwrap_or_default();

    let entity = fetch_entity(ctx, match_id).await?;
    let attrs = MatchAttrs::from_entity(&entity)?;
    let joined = matches::player_count(ctx, match_id).await?;
    let already_joined = matches::has_player(ctx, match_id, actor.user_id).await?;
    ensure_joinable(
        attrs.status,
        start_instant(attrs.date, attrs.time),
        joined as usize,
        attrs.max_players,
        already_joined,
        Utc::now(),
    )?;

    // The repository re-runs the capacity and duplicate checks under a row
    // lock; a concurrent join can still win the last slot between the
    // pre-flight above and here.
    let outcome = matches::add_player(
        ctx,
        AddPlayerArgs {
            match_id,
            user_id: actor.user_id,
            player_name,
            team_name,
            contact_info,
        },
    )
    .await?;
    match outcome {
        JoinOutcome::Joined => {}
        JoinOutcome::Full => return Err(AppError::MatchesFull),
        JoinOutcome::AlreadyJoined => return Err(AppError::MatchesAlreadyJoined),
    }

    fetch_one(ctx, match_id).await
}

pub async fn update<C: Context>(
    ctx: &C,
    actor: &Actor,
    match_id: i64,
    request: UpdateMatchRequest,
) -> ServiceResult<Match> {
    let entity = fetch_entity(ctx, match_id).await?;
    if !can_mutate_match(actor, entity.creator_id) {
        return Err(AppError::MatchesUnauthorized);
    }
    let attrs = apply_match_update(MatchAttrs::from_entity(&entity)?, request)?;
    let updated = matches::update(
        ctx,
        match_id,
        matches::UpdateMatchArgs {
            name: attrs.name,
            date: attrs.date,
            time: attrs.time.to_string(),
            location: attrs.location,
            match_type: attrs.format.as_str().to_string(),
            max_players: attrs.max_players,
            status: attrs.status.as_str().to_string(),
            description: attrs.description,
        },
    )
    .await?;
    resolve(ctx, updated).await
}

pub async fn delete<C: Context>(ctx: &C, actor: &Actor, match_id: i64) -> ServiceResult<()> {
    let entity = fetch_entity(ctx, match_id).await?;
    if !can_mutate_match(actor, entity.creator_id) {
        return Err(AppError::MatchesUnauthorized);
    }
    matches::delete(ctx, match_id).await?;
    Ok(())
}

async fn fetch_entity<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<MatchEntity> {
    match matches::fetch_one(ctx, match_id).await {
        Ok(entity) => Ok(entity),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MatchesNotFound),
        Err(e) => unexpected(e),
    }
}

async fn resolve<C: Context>(ctx: &C, entity: MatchEntity) -> ServiceResult<Match> {
    let creator = users::fetch_optional(ctx, entity.creator_id).await?;
    let players = matches::fetch_players(ctx, entity.id).await?;
    Match::from_entity(entity, creator.map(|c| c.display()), players)
}
