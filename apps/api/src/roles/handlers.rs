use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roles::{can_access, dashboard_path, navigation_for, NavItem, Role};

#[derive(Deserialize)]
pub struct RoleQuery {
    pub role: String,
}

#[derive(Deserialize)]
pub struct AccessQuery {
    pub role: String,
    pub path: String,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub role: Role,
    pub dashboard: &'static str,
    pub items: &'static [NavItem],
}

#[derive(Serialize)]
pub struct AccessResponse {
    pub role: Role,
    pub path: String,
    pub allowed: bool,
}

fn parse_role(raw: &str) -> Result<Role, AppError> {
    raw.parse::<Role>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// GET /api/v1/navigation?role=
pub async fn handle_navigation(
    Query(params): Query<RoleQuery>,
) -> Result<Json<NavigationResponse>, AppError> {
    let role = parse_role(&params.role)?;
    Ok(Json(NavigationResponse {
        role,
        dashboard: dashboard_path(role),
        items: navigation_for(role),
    }))
}

/// GET /api/v1/access?role=&path=
pub async fn handle_access(
    Query(params): Query<AccessQuery>,
) -> Result<Json<AccessResponse>, AppError> {
    let role = parse_role(&params.role)?;
    let allowed = can_access(role, &params.path);
    Ok(Json(AccessResponse {
        role,
        path: params.path,
        allowed,
    }))
}
