//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer or repository for the actual work.

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use chrono::{Datelike, NaiveDate};

use super::dto::{
    CreateCountryRequest, CreateHolidayRequest, CreateRegionRequest, CreateSchoolHolidayRequest,
    DeleteResponse, DeleteSchoolHolidaysQuery, HealthResponse, HolidaysQuery, ImportAllQuery,
    ImportCountResult, ImportAllResponse, ImportQuery, ImportResponse, LoginRequest,
    LoginResponse, RegionsQuery, SchoolHolidaysQuery, UpdateNamedRequest, VacationAnalysisQuery,
    VacationLoadQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CountryId, HolidayId, RegionId, SchoolHolidayId, VacationAnalysisData, VacationLoadData};
use crate::auth::verify_password;
use crate::db;
use crate::models::{Country, PublicHoliday, Region, SchoolHoliday};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const ADMIN_ROLE: &str = "ADMIN";

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization format".to_string()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Authentication
// =============================================================================

/// POST /api/auth/login
///
/// Authenticate the configured admin account and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    let auth = &state.config.auth;
    if request.username != auth.admin_username
        || !verify_password(&request.password, &auth.admin_password_sha256)
    {
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state
        .tokens
        .issue(&request.username, ADMIN_ROLE)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        token,
        username: request.username,
        role: ADMIN_ROLE.to_string(),
    }))
}

/// GET /api/auth/validate
///
/// Check the Bearer token in the Authorization header and report its
/// claims. Invalid or missing tokens yield 401 with `valid: false`.
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    use axum::response::IntoResponse;

    let claims = bearer_token(&headers)
        .ok()
        .and_then(|token| state.tokens.validate(token).ok());

    match claims {
        Some(claims) => Json(super::dto::ValidateResponse {
            valid: true,
            username: Some(claims.sub),
            role: Some(claims.role),
        })
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(super::dto::ValidateResponse {
                valid: false,
                username: None,
                role: None,
            }),
        )
            .into_response(),
    }
}

/// Middleware guarding the admin routes. Requires a valid Bearer token
/// carrying the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let claims = state
        .tokens
        .validate(token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    if claims.role != ADMIN_ROLE {
        return Err(AppError::Unauthorized(
            "Admin privileges required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

// =============================================================================
// Vacation Load & Analysis
// =============================================================================

/// GET /api/vacation-load?country_code=DE&year=2025
///
/// Daily and weekly holiday population load for one country and year,
/// including the detected peak period.
pub async fn get_vacation_load(
    State(state): State<AppState>,
    Query(query): Query<VacationLoadQuery>,
) -> HandlerResult<VacationLoadData> {
    let data = services::calculate_vacation_load(
        state.repository.as_ref(),
        &query.country_code,
        query.year,
    )
    .await?;

    Ok(Json(data))
}

/// GET /api/vacation-analysis?country=DE&start_date=..&end_date=..&subdivision=..
///
/// Public holidays and school breaks inside a date range.
pub async fn get_vacation_analysis(
    State(state): State<AppState>,
    Query(query): Query<VacationAnalysisQuery>,
) -> HandlerResult<VacationAnalysisData> {
    let start_date = parse_date_param("start_date", &query.start_date)?;
    let end_date = parse_date_param("end_date", &query.end_date)?;
    if start_date > end_date {
        return Err(AppError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let data = services::analyze_range(
        state.repository.as_ref(),
        &query.country,
        start_date,
        end_date,
        query.subdivision.as_deref(),
    )
    .await?;

    Ok(Json(data))
}

fn parse_date_param(name: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {} '{}': expected YYYY-MM-DD", name, value)))
}

// =============================================================================
// Reference Data
// =============================================================================

/// GET /api/countries
pub async fn list_countries(State(state): State<AppState>) -> HandlerResult<Vec<Country>> {
    let countries = state.repository.list_countries().await?;
    Ok(Json(countries))
}

/// GET /api/regions?country_code=DE
pub async fn list_regions(
    State(state): State<AppState>,
    Query(query): Query<RegionsQuery>,
) -> HandlerResult<Vec<Region>> {
    let regions = match query.country_code {
        Some(country_code) => {
            state
                .repository
                .list_regions_by_country(&country_code)
                .await?
        }
        None => state.repository.list_regions().await?,
    };
    Ok(Json(regions))
}

/// GET /api/regions/{code}
pub async fn get_region(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> HandlerResult<Region> {
    let region = state
        .repository
        .get_region_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Region not found: {}", code)))?;
    Ok(Json(region))
}

// =============================================================================
// Holidays
// =============================================================================

/// GET /api/holidays?country=DE&year=2025
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<HolidaysQuery>,
) -> HandlerResult<Vec<PublicHoliday>> {
    let holidays = state
        .repository
        .list_public_holidays(&query.country, query.year)
        .await?;
    Ok(Json(holidays))
}

/// GET /api/school-holidays
///
/// Filter precedence: (region, year), then (region, date range), then
/// (country, year), then the full list.
pub async fn list_school_holidays(
    State(state): State<AppState>,
    Query(query): Query<SchoolHolidaysQuery>,
) -> HandlerResult<Vec<SchoolHoliday>> {
    let repo = state.repository.as_ref();
    let school_holidays = match (
        query.region_code.as_deref(),
        query.country_code.as_deref(),
        query.year,
        query.start_date,
        query.end_date,
    ) {
        (Some(region), _, Some(year), _, _) => {
            repo.school_holidays_by_region_and_year(region, year).await?
        }
        (Some(region), _, None, Some(start), Some(end)) => {
            repo.school_holidays_by_region_in_range(region, start, end)
                .await?
        }
        (None, Some(country), Some(year), _, _) => {
            repo.school_holidays_by_country_and_year(country, year)
                .await?
        }
        _ => repo.list_school_holidays().await?,
    };
    Ok(Json(school_holidays))
}

// =============================================================================
// Admin: Import
// =============================================================================

/// POST /api/admin/import?country=DE&year=2025
pub async fn import_holidays(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
) -> HandlerResult<ImportResponse> {
    let holidays = services::import_public_holidays(
        state.repository.as_ref(),
        state.provider.as_ref(),
        &query.country,
        query.year,
    )
    .await?;

    Ok(Json(ImportResponse {
        country: query.country,
        year: query.year,
        imported: holidays.len(),
        holidays,
    }))
}

/// POST /api/admin/import-all?year=2025
pub async fn import_all_holidays(
    State(state): State<AppState>,
    Query(query): Query<ImportAllQuery>,
) -> HandlerResult<ImportAllResponse> {
    let results = services::import_all_countries(
        state.repository.as_ref(),
        state.provider.as_ref(),
        query.year,
    )
    .await?;

    Ok(Json(ImportAllResponse {
        year: query.year,
        results: results
            .into_iter()
            .map(|(country, imported)| ImportCountResult { country, imported })
            .collect(),
    }))
}

// =============================================================================
// Admin: Reference CRUD
// =============================================================================

/// POST /api/admin/countries
pub async fn create_country(
    State(state): State<AppState>,
    Json(request): Json<CreateCountryRequest>,
) -> Result<(StatusCode, Json<Country>), AppError> {
    let country = state
        .repository
        .save_country(Country::new(request.code, request.name, request.population))
        .await?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// PUT /api/admin/countries/{id}
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateNamedRequest>,
) -> HandlerResult<Country> {
    let country = state
        .repository
        .update_country(CountryId::new(id), &request.name, request.population)
        .await?;
    Ok(Json(country))
}

/// DELETE /api/admin/countries/{id}
///
/// Removes the country and its regions; reports the cascade size.
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<DeleteResponse> {
    let regions_removed = state.repository.delete_country(CountryId::new(id)).await?;
    Ok(Json(DeleteResponse {
        deleted: 1 + regions_removed,
    }))
}

/// POST /api/admin/regions
pub async fn create_region(
    State(state): State<AppState>,
    Json(request): Json<CreateRegionRequest>,
) -> Result<(StatusCode, Json<Region>), AppError> {
    let region = state
        .repository
        .save_region(Region::new(
            request.code,
            request.name,
            request.country_code,
            request.population,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(region)))
}

/// PUT /api/admin/regions/{id}
pub async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateNamedRequest>,
) -> HandlerResult<Region> {
    let region = state
        .repository
        .update_region(RegionId::new(id), &request.name, request.population)
        .await?;
    Ok(Json(region))
}

/// DELETE /api/admin/regions/{id}
pub async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_region(RegionId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Admin: Holiday CRUD
// =============================================================================

/// POST /api/admin/holidays
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(request): Json<CreateHolidayRequest>,
) -> Result<(StatusCode, Json<PublicHoliday>), AppError> {
    let year = request.date.year();
    let holiday = state
        .repository
        .save_public_holiday(PublicHoliday {
            id: None,
            country_code: request.country_code,
            date: request.date,
            local_name: request.local_name,
            english_name: request.english_name,
            global: request.global,
            region_code: request.region_code,
            types: request.types,
            year,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(holiday)))
}

/// DELETE /api/admin/holidays/{id}
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .repository
        .delete_public_holiday(HolidayId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/school-holidays
pub async fn create_school_holiday(
    State(state): State<AppState>,
    Json(request): Json<CreateSchoolHolidayRequest>,
) -> Result<(StatusCode, Json<SchoolHoliday>), AppError> {
    if request.start_date > request.end_date {
        return Err(AppError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }
    let school_holiday = state
        .repository
        .save_school_holiday(SchoolHoliday::new(
            request.name,
            request.region_code,
            request.start_date,
            request.end_date,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(school_holiday)))
}

/// POST /api/admin/school-holidays/batch
pub async fn create_school_holidays_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateSchoolHolidayRequest>>,
) -> Result<(StatusCode, Json<Vec<SchoolHoliday>>), AppError> {
    if let Some(bad) = requests.iter().find(|r| r.start_date > r.end_date) {
        return Err(AppError::BadRequest(format!(
            "start_date must not be after end_date for '{}'",
            bad.name
        )));
    }
    let school_holidays = requests
        .into_iter()
        .map(|r| SchoolHoliday::new(r.name, r.region_code, r.start_date, r.end_date))
        .collect();
    let saved = state
        .repository
        .save_school_holidays(school_holidays)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/admin/school-holidays/{id}
pub async fn delete_school_holiday(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .repository
        .delete_school_holiday(SchoolHolidayId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admin/school-holidays?region_code=DE-BY&year=2025
pub async fn delete_school_holidays(
    State(state): State<AppState>,
    Query(query): Query<DeleteSchoolHolidaysQuery>,
) -> HandlerResult<DeleteResponse> {
    let deleted = state
        .repository
        .delete_school_holidays_by_region_and_year(&query.region_code, query.year)
        .await?;
    Ok(Json(DeleteResponse { deleted }))
}
