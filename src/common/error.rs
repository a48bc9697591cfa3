use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    Forbidden,
    InternalServerError(&'static str),

    UsersNotFound,
    UsersEmailTaken,
    UsersPasswordTooShort,
    UsersInvalidCredentials,
    UsersMissingFields,
    UsersInvalidRole,

    TeamsNotFound,
    TeamsInvalidPassword,
    TeamsMissingFields,

    GroundsNotFound,
    GroundsMissingFields,
    GroundsInvalidPrice,

    ReviewsInvalidRating,

    BookingsNotFound,
    BookingsMissingFields,

    LeaguesNotFound,
    LeaguesMissingFields,
    LeaguesInvalidDates,
    LeaguesCompleted,
    LeaguesAlreadyJoined,
    LeaguesTeamRequired,

    NewsNotFound,
    NewsMissingFields,
    NewsInvalidKind,

    MatchesNotFound,
    MatchesUnauthorized,
    MatchesMissingFields,
    MatchesInvalidFormat,
    MatchesInvalidDate,
    MatchesDateInPast,
    MatchesInvalidTime,
    MatchesInvalidCapacity,
    MatchesMissingJoinInfo,
    MatchesFull,
    MatchesAlreadyJoined,
    MatchesNotJoinable,
    MatchesAlreadyStarted,
    MatchesInvalidStatus,
    MatchesInvalidTransition,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::Forbidden => "forbidden",
            AppError::InternalServerError(_) => "internal_server_error",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersEmailTaken => "users.email_taken",
            AppError::UsersPasswordTooShort => "users.password_too_short",
            AppError::UsersInvalidCredentials => "users.invalid_credentials",
            AppError::UsersMissingFields => "users.missing_fields",
            AppError::UsersInvalidRole => "users.invalid_role",

            AppError::TeamsNotFound => "teams.not_found",
            AppError::TeamsInvalidPassword => "teams.invalid_password",
            AppError::TeamsMissingFields => "teams.missing_fields",

            AppError::GroundsNotFound => "grounds.not_found",
            AppError::GroundsMissingFields => "grounds.missing_fields",
            AppError::GroundsInvalidPrice => "grounds.invalid_price",

            AppError::ReviewsInvalidRating => "reviews.invalid_rating",

            AppError::BookingsNotFound => "bookings.not_found",
            AppError::BookingsMissingFields => "bookings.missing_fields",

            AppError::LeaguesNotFound => "leagues.not_found",
            AppError::LeaguesMissingFields => "leagues.missing_fields",
            AppError::LeaguesInvalidDates => "leagues.invalid_dates",
            AppError::LeaguesCompleted => "leagues.completed",
            AppError::LeaguesAlreadyJoined => "leagues.already_joined",
            AppError::LeaguesTeamRequired => "leagues.team_required",

            AppError::NewsNotFound => "news.not_found",
            AppError::NewsMissingFields => "news.missing_fields",
            AppError::NewsInvalidKind => "news.invalid_kind",

            AppError::MatchesNotFound => "matches.not_found",
            AppError::MatchesUnauthorized => "matches.unauthorized",
            AppError::MatchesMissingFields => "matches.missing_fields",
            AppError::MatchesInvalidFormat => "matches.invalid_format",
            AppError::MatchesInvalidDate => "matches.invalid_date",
            AppError::MatchesDateInPast => "matches.date_in_past",
            AppError::MatchesInvalidTime => "matches.invalid_time",
            AppError::MatchesInvalidCapacity => "matches.invalid_capacity",
            AppError::MatchesMissingJoinInfo => "matches.missing_join_info",
            AppError::MatchesFull => "matches.full",
            AppError::MatchesAlreadyJoined => "matches.already_joined",
            AppError::MatchesNotJoinable => "matches.not_joinable",
            AppError::MatchesAlreadyStarted => "matches.already_started",
            AppError::MatchesInvalidStatus => "matches.invalid_status",
            AppError::MatchesInvalidTransition => "matches.invalid_transition",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "Authentication required.",
            AppError::Forbidden => "You do not have permission to perform this action.",
            AppError::InternalServerError(_) => "An internal server error has occurred.",

            AppError::UsersNotFound => "User not found.",
            AppError::UsersEmailTaken => "User with this email already exists.",
            AppError::UsersPasswordTooShort => "Password must be at least 6 characters long.",
            AppError::UsersInvalidCredentials => "Invalid credentials.",
            AppError::UsersMissingFields => "Name, email and password are required.",
            AppError::UsersInvalidRole => "Role must be customer, team, or admin.",

            AppError::TeamsNotFound => "Team not found.",
            AppError::TeamsInvalidPassword => "Invalid team password.",
            AppError::TeamsMissingFields => "Name, captain and password are required.",

            AppError::GroundsNotFound => "Ground not found.",
            AppError::GroundsMissingFields => {
                "Missing required fields: name, location, size, and pricePerHour are required."
            }
            AppError::GroundsInvalidPrice => "pricePerHour must be a positive number.",

            AppError::ReviewsInvalidRating => "Rating must be a number between 1 and 5.",

            AppError::BookingsNotFound => "Booking not found.",
            AppError::BookingsMissingFields => {
                "Missing required fields: groundId, date, and time are required."
            }

            AppError::LeaguesNotFound => "League not found.",
            AppError::LeaguesMissingFields => {
                "Missing required fields: name, startDate, and endDate are required."
            }
            AppError::LeaguesInvalidDates => "endDate must be after startDate.",
            AppError::LeaguesCompleted => "Cannot join a completed league.",
            AppError::LeaguesAlreadyJoined => "Team already in this league.",
            AppError::LeaguesTeamRequired => "You must be part of a team to join a league.",

            AppError::NewsNotFound => "News item not found.",
            AppError::NewsMissingFields => "Type and content are required.",
            AppError::NewsInvalidKind => "Type must be text, image, or video.",

            AppError::MatchesNotFound => "Match not found.",
            AppError::MatchesUnauthorized => {
                "Only the match creator or an admin can modify this match."
            }
            AppError::MatchesMissingFields => {
                "Missing required fields: name, date, time, location, and matchType are required."
            }
            AppError::MatchesInvalidFormat => "Invalid match type. Must be 5v5, 7v7, or 11v11.",
            AppError::MatchesInvalidDate => "Invalid date format.",
            AppError::MatchesDateInPast => "Match date cannot be in the past.",
            AppError::MatchesInvalidTime => "Invalid time format. Use HH:MM format.",
            AppError::MatchesInvalidCapacity => "maxPlayers and maxTeams must fit a 32-bit count.",
            AppError::MatchesMissingJoinInfo => "Player name and contact info are required.",
            AppError::MatchesFull => "Match is already full.",
            AppError::MatchesAlreadyJoined => "You have already joined this match.",
            AppError::MatchesNotJoinable => "Cannot join a match that is not upcoming.",
            AppError::MatchesAlreadyStarted => {
                "Cannot join a match that has already started or passed."
            }
            AppError::MatchesInvalidStatus => "Unknown match status.",
            AppError::MatchesInvalidTransition => "Invalid match status transition.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::UsersEmailTaken
            | AppError::UsersPasswordTooShort
            | AppError::UsersInvalidCredentials
            | AppError::UsersMissingFields
            | AppError::UsersInvalidRole
            | AppError::BookingsMissingFields
            | AppError::TeamsInvalidPassword
            | AppError::TeamsMissingFields
            | AppError::GroundsMissingFields
            | AppError::GroundsInvalidPrice
            | AppError::ReviewsInvalidRating
            | AppError::LeaguesMissingFields
            | AppError::LeaguesInvalidDates
            | AppError::LeaguesCompleted
            | AppError::LeaguesAlreadyJoined
            | AppError::LeaguesTeamRequired
            | AppError::NewsMissingFields
            | AppError::NewsInvalidKind
            | AppError::MatchesMissingFields
            | AppError::MatchesInvalidFormat
            | AppError::MatchesInvalidDate
            | AppError::MatchesDateInPast
            | AppError::MatchesInvalidTime
            | AppError::MatchesInvalidCapacity
            | AppError::MatchesMissingJoinInfo
            | AppError::MatchesFull
            | AppError::MatchesAlreadyJoined
            | AppError::MatchesNotJoinable
            | AppError::MatchesAlreadyStarted
            | AppError::MatchesInvalidStatus
            | AppError::MatchesInvalidTransition => StatusCode::BAD_REQUEST,

            AppError::Unauthorized => StatusCode::UNAUTHORIZED,

            AppError::Forbidden | AppError::MatchesUnauthorized => StatusCode::FORBIDDEN,

            AppError::UsersNotFound
            | AppError::TeamsNotFound
            | AppError::GroundsNotFound
            | AppError::LeaguesNotFound
            | AppError::NewsNotFound
            | AppError::BookingsNotFound
            | AppError::MatchesNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
