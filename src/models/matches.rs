use crate::common::error::{AppError, ServiceResult};
use crate::entities::matches::{Match as MatchEntity, MatchPlayer as MatchPlayerEntity};
use crate::models::users::UserDisplay;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three supported match formats. Each format implies a default player
/// capacity; this mapping is the single source used by both the creation
/// and the update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchFormat {
    #[serde(rename = "5v5")]
    FiveASide,
    #[serde(rename = "7v7")]
    SevenASide,
    #[serde(rename = "11v11")]
    ElevenASide,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [
        MatchFormat::FiveASide,
        MatchFormat::SevenASide,
        MatchFormat::ElevenASide,
    ];

    pub const fn default_capacity(self) -> i32 {
        match self {
            MatchFormat::FiveASide => 10,
            MatchFormat::SevenASide => 14,
            MatchFormat::ElevenASide => 22,
        }
    }

    pub fn parse(value: &str) -> Option<MatchFormat> {
        match value {
            "5v5" => Some(MatchFormat::FiveASide),
            "7v7" => Some(MatchFormat::SevenASide),
            "11v11" => Some(MatchFormat::ElevenASide),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchFormat::FiveASide => "5v5",
            MatchFormat::SevenASide => "7v7",
            MatchFormat::ElevenASide => "11v11",
        }
    }
}

impl TryFrom<&str> for MatchFormat {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MatchFormat::parse(value).ok_or(AppError::InternalServerError("invalid match type value"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl MatchStatus {
    pub fn parse(value: &str) -> Option<MatchStatus> {
        match value {
            "upcoming" => Some(MatchStatus::Upcoming),
            "ongoing" => Some(MatchStatus::Ongoing),
            "completed" => Some(MatchStatus::Completed),
            "cancelled" => Some(MatchStatus::Cancelled),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    /// Allowed transitions: upcoming -> {ongoing, cancelled},
    /// ongoing -> {completed, cancelled}. Completed and cancelled are
    /// terminal. Setting the current status again is a no-op.
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        use MatchStatus::*;
        self == next
            || matches!(
                (self, next),
                (Upcoming, Ongoing)
                    | (Upcoming, Cancelled)
                    | (Ongoing, Completed)
                    | (Ongoing, Cancelled)
            )
    }
}

impl TryFrom<&str> for MatchStatus {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MatchStatus::parse(value).ok_or(AppError::InternalServerError("invalid status value"))
    }
}

/// Wall-clock kick-off time. Accepts `H:MM` or `HH:MM` with hours 00-23 and
/// exactly two minute digits 00-59; renders zero-padded so stored values
/// sort lexicographically by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchTime {
    hour: u8,
    minute: u8,
}

impl MatchTime {
    pub fn parse(value: &str) -> Option<MatchTime> {
        let (hours, minutes) = value.split_once(':')?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return None;
        }
        if !hours.bytes().all(|b| b.is_ascii_digit())
            || !minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let hour: u8 = hours.parse().ok()?;
        let minute: u8 = minutes.parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(MatchTime { hour, minute })
    }

    pub fn as_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
            .expect("hour and minute are validated on construction")
    }
}

impl fmt::Display for MatchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for MatchTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl TryFrom<&str> for MatchTime {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MatchTime::parse(value).ok_or(AppError::InternalServerError("invalid time value"))
    }
}

/// The instant the match kicks off, combining the stored date and time.
pub fn start_instant(date: NaiveDate, time: MatchTime) -> DateTime<Utc> {
    date.and_time(time.as_naive()).and_utc()
}

/// Accepts a plain ISO calendar date or a full ISO-8601 timestamp, of which
/// only the date part is kept.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedPlayer {
    pub user: UserDisplay,
    pub player_name: String,
    pub team_name: String,
    pub contact_info: String,
    pub joined_at: DateTime<Utc>,
}

impl TryFrom<MatchPlayerEntity> for JoinedPlayer {
    type Error = AppError;

    fn try_from(value: MatchPlayerEntity) -> Result<Self, Self::Error> {
        Ok(JoinedPlayer {
            user: UserDisplay {
                id: value.user_id,
                name: value.user_name,
                email: value.user_email,
            },
            player_name: value.player_name,
            team_name: value.team_name,
            contact_info: value.contact_info,
            joined_at: value.joined_at.and_utc(),
        })
    }
}

/// A match with creator and roster resolved to display identities.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: MatchTime,
    pub location: String,
    pub match_type: MatchFormat,
    pub max_players: i32,
    pub max_teams: Option<i32>,
    // None when the creator's account has since been deleted; the match
    // stays listable either way.
    pub creator: Option<UserDisplay>,
    pub joined_players: Vec<JoinedPlayer>,
    pub status: MatchStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn from_entity(
        entity: MatchEntity,
        creator: Option<UserDisplay>,
        players: Vec<MatchPlayerEntity>,
    ) -> ServiceResult<Match> {
        let joined_players = players
            .into_iter()
            .map(JoinedPlayer::try_from)
            .collect::<ServiceResult<Vec<_>>>()?;
        Ok(Match {
            id: entity.id,
            name: entity.name,
            date: entity.date,
            time: MatchTime::try_from(entity.time.as_str())?,
            location: entity.location,
            match_type: MatchFormat::try_from(entity.match_type.as_str())?,
            max_players: entity.max_players,
            max_teams: entity.max_teams,
            creator,
            joined_players,
            status: MatchStatus::try_from(entity.status.as_str())?,
            description: entity.description,
            created_at: entity.created_at.and_utc(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMatchRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub match_type: Option<String>,
    pub description: Option<String>,
    pub max_players: Option<i64>,
    pub max_teams: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMatchRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub match_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinMatchRequest {
    pub player_name: Option<String>,
    pub team_name: Option<String>,
    pub contact_info: Option<String>,
}

/// A fully validated creation request, ready to persist.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedMatch {
    pub name: String,
    pub date: NaiveDate,
    pub time: MatchTime,
    pub location: String,
    pub format: MatchFormat,
    pub max_players: i32,
    pub max_teams: Option<i32>,
    pub description: String,
}

pub fn validate_new_match(
    req: CreateMatchRequest,
    today: NaiveDate,
) -> ServiceResult<ValidatedMatch> {
    let name = required_text(req.name).ok_or(AppError::MatchesMissingFields)?;
    let date_raw = required_text(req.date).ok_or(AppError::MatchesMissingFields)?;
    let time_raw = required_text(req.time).ok_or(AppError::MatchesMissingFields)?;
    let location = required_text(req.location).ok_or(AppError::MatchesMissingFields)?;
    let match_type = required_text(req.match_type).ok_or(AppError::MatchesMissingFields)?;

    let format = MatchFormat::parse(&match_type).ok_or(AppError::MatchesInvalidFormat)?;
    // Capacities are stored as i32; a positive value past that range is a
    // caller error, not something to wrap or silently default.
    let max_players = match req.max_players {
        Some(n) if n > 0 => i32::try_from(n).map_err(|_| AppError::MatchesInvalidCapacity)?,
        _ => format.default_capacity(),
    };
    let max_teams = match req.max_teams.filter(|&n| n > 0) {
        Some(n) => Some(i32::try_from(n).map_err(|_| AppError::MatchesInvalidCapacity)?),
        None => None,
    };

    let date = parse_date(&date_raw).ok_or(AppError::MatchesInvalidDate)?;
    if date < today {
        return Err(AppError::MatchesDateInPast);
    }
    let time = MatchTime::parse(&time_raw).ok_or(AppError::MatchesInvalidTime)?;

    Ok(ValidatedMatch {
        name,
        date,
        time,
        location,
        format,
        max_players,
        max_teams,
        description: req.description.unwrap_or_default(),
    })
}

/// The mutable attributes of a stored match, as seen by the update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchAttrs {
    pub name: String,
    pub date: NaiveDate,
    pub time: MatchTime,
    pub location: String,
    pub format: MatchFormat,
    pub max_players: i32,
    pub status: MatchStatus,
    pub description: String,
}

impl MatchAttrs {
    pub fn from_entity(entity: &MatchEntity) -> ServiceResult<MatchAttrs> {
        Ok(MatchAttrs {
            name: entity.name.clone(),
            date: entity.date,
            time: MatchTime::try_from(entity.time.as_str())?,
            location: entity.location.clone(),
            format: MatchFormat::try_from(entity.match_type.as_str())?,
            max_players: entity.max_players,
            status: MatchStatus::try_from(entity.status.as_str())?,
            description: entity.description.clone(),
        })
    }
}

/// Merges a partial update into the current attributes. Blank or absent
/// fields no-op (a null `date` never clears the stored one); a present
/// `matchType` overwrites the format AND the capacity together so the two
/// can never diverge; `status` must follow the transition graph.
pub fn apply_match_update(
    mut attrs: MatchAttrs,
    req: UpdateMatchRequest,
) -> ServiceResult<MatchAttrs> {
    if let Some(name) = required_text(req.name) {
        attrs.name = name;
    }
    if let Some(date_raw) = required_text(req.date) {
        attrs.date = parse_date(&date_raw).ok_or(AppError::MatchesInvalidDate)?;
    }
    if let Some(time_raw) = required_text(req.time) {
        attrs.time = MatchTime::parse(&time_raw).ok_or(AppError::MatchesInvalidTime)?;
    }
    if let Some(location) = required_text(req.location) {
        attrs.location = location;
    }
    if let Some(description) = req.description {
        attrs.description = description;
    }
    if let Some(status_raw) = required_text(req.status) {
        let next = MatchStatus::parse(&status_raw).ok_or(AppError::MatchesInvalidStatus)?;
        if !attrs.status.can_transition_to(next) {
            return Err(AppError::MatchesInvalidTransition);
        }
        attrs.status = next;
    }
    if let Some(match_type) = required_text(req.match_type) {
        let format = MatchFormat::parse(&match_type).ok_or(AppError::MatchesInvalidFormat)?;
        attrs.format = format;
        attrs.max_players = format.default_capacity();
    }
    Ok(attrs)
}

/// Pre-flight join checks, in the order the original service applied them.
/// The capacity and duplicate checks are re-run atomically by the
/// repository append; this pass exists to fail fast with a precise error.
pub fn ensure_joinable(
    status: MatchStatus,
    start: DateTime<Utc>,
    joined_count: usize,
    max_players: i32,
    already_joined: bool,
    now: DateTime<Utc>,
) -> ServiceResult<()> {
    if joined_count >= max_players.max(0) as usize {
        return Err(AppError::MatchesFull);
    }
    if already_joined {
        return Err(AppError::MatchesAlreadyJoined);
    }
    if status != MatchStatus::Upcoming {
        return Err(AppError::MatchesNotJoinable);
    }
    if start <= now {
        return Err(AppError::MatchesAlreadyStarted);
    }
    Ok(())
}

fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub message: &'static str,
    #[serde(rename = "match")]
    pub match_: Match,
}

#[derive(Debug, Serialize)]
pub struct MatchDeletedResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn create_request() -> CreateMatchRequest {
        CreateMatchRequest {
            name: Some("Test".to_string()),
            date: Some("2999-01-01".to_string()),
            time: Some("18:00".to_string()),
            location: Some("Field A".to_string()),
            match_type: Some("7v7".to_string()),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn format_capacities() {
        assert_eq!(MatchFormat::FiveASide.default_capacity(), 10);
        assert_eq!(MatchFormat::SevenASide.default_capacity(), 14);
        assert_eq!(MatchFormat::ElevenASide.default_capacity(), 22);
    }

    #[test]
    fn time_parsing() {
        assert_eq!(MatchTime::parse("09:30"), MatchTime::parse("9:30"));
        assert_eq!(MatchTime::parse("00:00").unwrap().to_string(), "00:00");
        assert_eq!(MatchTime::parse("23:59").unwrap().to_string(), "23:59");
        assert_eq!(MatchTime::parse("9:30").unwrap().to_string(), "09:30");
        for invalid in ["25:00", "9:60", "24:00", "9:3", "930", "ab:cd", "", ":30", "9:300"] {
            assert!(MatchTime::parse(invalid).is_none(), "accepted {invalid:?}");
        }
    }

    #[test]
    fn times_order_by_clock() {
        let morning = MatchTime::parse("9:30").unwrap();
        let evening = MatchTime::parse("18:00").unwrap();
        assert!(morning < evening);
    }

    #[test]
    fn status_transition_graph() {
        use MatchStatus::*;
        assert!(Upcoming.can_transition_to(Ongoing));
        assert!(Upcoming.can_transition_to(Cancelled));
        assert!(Ongoing.can_transition_to(Completed));
        assert!(Ongoing.can_transition_to(Cancelled));
        assert!(!Upcoming.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Ongoing));
        assert!(!Cancelled.can_transition_to(Upcoming));
        assert!(!Completed.can_transition_to(Upcoming));
        // setting the current status again is fine
        for status in [Upcoming, Ongoing, Completed, Cancelled] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn create_defaults_capacity_from_format() {
        let validated = validate_new_match(create_request(), today()).unwrap();
        assert_eq!(validated.max_players, 14);
        assert_eq!(validated.format, MatchFormat::SevenASide);
    }

    #[test]
    fn create_keeps_positive_capacity_override() {
        let mut req = create_request();
        req.max_players = Some(8);
        let validated = validate_new_match(req, today()).unwrap();
        assert_eq!(validated.max_players, 8);
    }

    #[test]
    fn create_ignores_non_positive_capacity_override() {
        let mut req = create_request();
        req.max_players = Some(0);
        let validated = validate_new_match(req, today()).unwrap();
        assert_eq!(validated.max_players, 14);
    }

    #[test]
    fn create_rejects_capacity_beyond_i32() {
        let mut req = create_request();
        req.max_players = Some(i64::from(i32::MAX) + 1);
        assert_eq!(
            validate_new_match(req, today()).unwrap_err(),
            AppError::MatchesInvalidCapacity
        );

        let mut req = create_request();
        req.max_teams = Some(i64::from(i32::MAX) + 1);
        assert_eq!(
            validate_new_match(req, today()).unwrap_err(),
            AppError::MatchesInvalidCapacity
        );

        let mut req = create_request();
        req.max_players = Some(i64::from(i32::MAX));
        let validated = validate_new_match(req, today()).unwrap();
        assert_eq!(validated.max_players, i32::MAX);
    }

    #[test]
    fn create_rejects_missing_fields() {
        for wipe in 0..5 {
            let mut req = create_request();
            match wipe {
                0 => req.name = None,
                1 => req.date = Some("  ".to_string()),
                2 => req.time = None,
                3 => req.location = None,
                _ => req.match_type = None,
            }
            assert_eq!(
                validate_new_match(req, today()).unwrap_err(),
                AppError::MatchesMissingFields
            );
        }
    }

    #[test]
    fn create_rejects_unknown_format() {
        let mut req = create_request();
        req.match_type = Some("6v6".to_string());
        assert_eq!(
            validate_new_match(req, today()).unwrap_err(),
            AppError::MatchesInvalidFormat
        );
    }

    #[test]
    fn create_rejects_past_date_allows_today() {
        let mut req = create_request();
        req.date = Some("2026-08-28".to_string());
        assert_eq!(
            validate_new_match(req, today()).unwrap_err(),
            AppError::MatchesDateInPast
        );

        let mut req = create_request();
        req.date = Some("2026-08-29".to_string());
        assert!(validate_new_match(req, today()).is_ok());
    }

    #[test]
    fn create_rejects_unparsable_date() {
        let mut req = create_request();
        req.date = Some("not-a-date".to_string());
        assert_eq!(
            validate_new_match(req, today()).unwrap_err(),
            AppError::MatchesInvalidDate
        );
    }

    #[test]
    fn create_rejects_bad_times() {
        for bad in ["25:00", "9:60"] {
            let mut req = create_request();
            req.time = Some(bad.to_string());
            assert_eq!(
                validate_new_match(req, today()).unwrap_err(),
                AppError::MatchesInvalidTime
            );
        }
        for good in ["09:30", "9:30"] {
            let mut req = create_request();
            req.time = Some(good.to_string());
            assert!(validate_new_match(req, today()).is_ok());
        }
    }

    fn attrs() -> MatchAttrs {
        MatchAttrs {
            name: "Test".to_string(),
            date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            time: MatchTime::parse("18:00").unwrap(),
            location: "Field A".to_string(),
            format: MatchFormat::SevenASide,
            max_players: 14,
            status: MatchStatus::Upcoming,
            description: String::new(),
        }
    }

    #[test]
    fn update_format_also_updates_capacity() {
        let req = UpdateMatchRequest {
            match_type: Some("11v11".to_string()),
            ..Default::default()
        };
        let updated = apply_match_update(attrs(), req).unwrap();
        assert_eq!(updated.format, MatchFormat::ElevenASide);
        assert_eq!(updated.max_players, 22);
    }

    #[test]
    fn update_rejects_unknown_format() {
        let req = UpdateMatchRequest {
            match_type: Some("3v3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_match_update(attrs(), req).unwrap_err(),
            AppError::MatchesInvalidFormat
        );
    }

    #[test]
    fn update_skips_absent_and_blank_fields() {
        let req = UpdateMatchRequest {
            name: Some("".to_string()),
            date: None,
            ..Default::default()
        };
        let updated = apply_match_update(attrs(), req).unwrap();
        assert_eq!(updated, attrs());
    }

    #[test]
    fn update_applies_empty_description() {
        let mut start = attrs();
        start.description = "old".to_string();
        let req = UpdateMatchRequest {
            description: Some(String::new()),
            ..Default::default()
        };
        let updated = apply_match_update(start, req).unwrap();
        assert_eq!(updated.description, "");
    }

    #[test]
    fn update_enforces_status_transitions() {
        let req = UpdateMatchRequest {
            status: Some("ongoing".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_match_update(attrs(), req).unwrap().status,
            MatchStatus::Ongoing
        );

        let req = UpdateMatchRequest {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_match_update(attrs(), req).unwrap_err(),
            AppError::MatchesInvalidTransition
        );

        let req = UpdateMatchRequest {
            status: Some("paused".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_match_update(attrs(), req).unwrap_err(),
            AppError::MatchesInvalidStatus
        );
    }

    #[test]
    fn join_checks_fire_in_order() {
        let now = Utc::now();
        let future = now + TimeDelta::hours(2);
        let past = now - TimeDelta::hours(2);

        assert_eq!(
            ensure_joinable(MatchStatus::Upcoming, future, 14, 14, false, now).unwrap_err(),
            AppError::MatchesFull
        );
        assert_eq!(
            ensure_joinable(MatchStatus::Upcoming, future, 3, 14, true, now).unwrap_err(),
            AppError::MatchesAlreadyJoined
        );
        assert_eq!(
            ensure_joinable(MatchStatus::Cancelled, future, 3, 14, false, now).unwrap_err(),
            AppError::MatchesNotJoinable
        );
        assert_eq!(
            ensure_joinable(MatchStatus::Upcoming, past, 3, 14, false, now).unwrap_err(),
            AppError::MatchesAlreadyStarted
        );
        assert!(ensure_joinable(MatchStatus::Upcoming, future, 13, 14, false, now).is_ok());
    }

    #[test]
    fn full_status_blocks_join_even_with_capacity() {
        let now = Utc::now();
        let future = now + TimeDelta::hours(2);
        for status in [
            MatchStatus::Ongoing,
            MatchStatus::Completed,
            MatchStatus::Cancelled,
        ] {
            assert_eq!(
                ensure_joinable(status, future, 0, 14, false, now).unwrap_err(),
                AppError::MatchesNotJoinable
            );
        }
    }

    #[test]
    fn match_resolves_without_creator() {
        let entity = crate::entities::matches::Match {
            id: 1,
            name: "Orphaned".to_string(),
            date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            time: "18:00".to_string(),
            location: "Field A".to_string(),
            match_type: "7v7".to_string(),
            max_players: 14,
            max_teams: None,
            creator_id: 42,
            status: "upcoming".to_string(),
            description: String::new(),
            created_at: NaiveDate::from_ymd_opt(2026, 8, 29)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };
        let resolved = Match::from_entity(entity, None, vec![]).unwrap();
        assert!(resolved.creator.is_none());
        assert_eq!(resolved.status, MatchStatus::Upcoming);
    }

    #[test]
    fn start_instant_combines_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        let time = MatchTime::parse("18:00").unwrap();
        let instant = start_instant(date, time);
        assert_eq!(instant.to_rfc3339(), "2999-01-01T18:00:00+00:00");
    }

    #[test]
    fn date_parsing_accepts_iso_timestamps() {
        assert_eq!(
            parse_date("2999-01-01T17:00:00Z"),
            NaiveDate::from_ymd_opt(2999, 1, 1)
        );
        assert_eq!(parse_date("2999-01-01"), NaiveDate::from_ymd_opt(2999, 1, 1));
        assert_eq!(parse_date("January 1st"), None);
    }
}
