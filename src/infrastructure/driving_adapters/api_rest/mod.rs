//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::{middleware as axum_middleware, Router};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::assignments::{
    CreateAssignmentUseCase, GetAssignmentUseCase, ListAssignmentsUseCase,
};
use crate::application::use_cases::auth::{LoginUserUseCase, RegisterUserUseCase};
use crate::application::use_cases::courses::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListTeacherCoursesUseCase, UpdateCourseUseCase,
};
use crate::application::use_cases::enrollments::{
    EnrollStudentUseCase, ListCourseStudentsUseCase, RemoveStudentUseCase,
};
use crate::application::use_cases::materials::{ListMaterialsUseCase, UploadMaterialUseCase};
use crate::application::use_cases::submissions::{MarkSubmissionUseCase, SubmitAssignmentUseCase};
use crate::application::use_cases::users::ListUsersUseCase;
use crate::domain::gateways::{Gateways, TokenService};
use crate::infrastructure::driven_adapters::config::{AppConfig, RateLimitConfig};
use crate::shared::errors::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_service: Arc<dyn TokenService>,
    pub register_user_use_case: Arc<RegisterUserUseCase>,
    pub login_user_use_case: Arc<LoginUserUseCase>,
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub create_course_use_case: Arc<CreateCourseUseCase>,
    pub get_course_use_case: Arc<GetCourseUseCase>,
    pub list_teacher_courses_use_case: Arc<ListTeacherCoursesUseCase>,
    pub update_course_use_case: Arc<UpdateCourseUseCase>,
    pub delete_course_use_case: Arc<DeleteCourseUseCase>,
    pub upload_material_use_case: Arc<UploadMaterialUseCase>,
    pub list_materials_use_case: Arc<ListMaterialsUseCase>,
    pub enroll_student_use_case: Arc<EnrollStudentUseCase>,
    pub list_course_students_use_case: Arc<ListCourseStudentsUseCase>,
    pub remove_student_use_case: Arc<RemoveStudentUseCase>,
    pub create_assignment_use_case: Arc<CreateAssignmentUseCase>,
    pub get_assignment_use_case: Arc<GetAssignmentUseCase>,
    pub list_assignments_use_case: Arc<ListAssignmentsUseCase>,
    pub submit_assignment_use_case: Arc<SubmitAssignmentUseCase>,
    pub mark_submission_use_case: Arc<MarkSubmissionUseCase>,
}

impl AppState {
    /// Wire every use case to the given gateways
    #[must_use]
    pub fn new(config: Arc<AppConfig>, gateways: Gateways) -> Self {
        let Gateways {
            users,
            courses,
            enrollments,
            assignments,
            submissions,
            materials,
            material_storage,
            password_hasher,
            token_service,
        } = gateways;

        Self {
            config,
            token_service: token_service.clone(),
            register_user_use_case: Arc::new(RegisterUserUseCase::new(users.clone(), password_hasher.clone())),
            login_user_use_case: Arc::new(LoginUserUseCase::new(users.clone(), password_hasher, token_service)),
            list_users_use_case: Arc::new(ListUsersUseCase::new(users)),
            create_course_use_case: Arc::new(CreateCourseUseCase::new(courses.clone())),
            get_course_use_case: Arc::new(GetCourseUseCase::new(courses.clone())),
            list_teacher_courses_use_case: Arc::new(ListTeacherCoursesUseCase::new(courses.clone())),
            update_course_use_case: Arc::new(UpdateCourseUseCase::new(courses.clone())),
            delete_course_use_case: Arc::new(DeleteCourseUseCase::new(courses.clone())),
            upload_material_use_case: Arc::new(UploadMaterialUseCase::new(
                courses.clone(),
                materials.clone(),
                material_storage,
            )),
            list_materials_use_case: Arc::new(ListMaterialsUseCase::new(courses.clone(), materials)),
            enroll_student_use_case: Arc::new(EnrollStudentUseCase::new(courses.clone(), enrollments.clone())),
            list_course_students_use_case: Arc::new(ListCourseStudentsUseCase::new(
                courses.clone(),
                enrollments.clone(),
            )),
            remove_student_use_case: Arc::new(RemoveStudentUseCase::new(courses.clone(), enrollments.clone())),
            create_assignment_use_case: Arc::new(CreateAssignmentUseCase::new(courses.clone(), assignments.clone())),
            get_assignment_use_case: Arc::new(GetAssignmentUseCase::new(assignments.clone())),
            list_assignments_use_case: Arc::new(ListAssignmentsUseCase::new(courses.clone(), assignments.clone())),
            submit_assignment_use_case: Arc::new(SubmitAssignmentUseCase::new(
                assignments.clone(),
                enrollments,
                submissions.clone(),
            )),
            mark_submission_use_case: Arc::new(MarkSubmissionUseCase::new(courses, assignments, submissions)),
        }
    }
}

/// Build the full application router
///
/// With rate limiting enabled the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`, since limits are keyed on the peer IP.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    let body_limit = state.config.uploads.max_bytes;
    let rate_limit = state.config.rate_limit.clone();

    let course_routes = handlers::courses::router()
        .merge(handlers::materials::router())
        .merge(handlers::enrollments::router())
        .merge(handlers::assignments::router())
        .merge(handlers::submissions::router());

    let router = Router::new()
        .merge(handlers::auth::router())
        .merge(handlers::users::router())
        .nest("/courses", course_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_token_service_extension,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    with_rate_limit(router, &rate_limit)
        .layer(axum_middleware::from_fn(middleware::request_id::request_id_middleware))
        .with_state(state)
}

/// Per-peer-IP rate limiting whose rejections share the API error body
fn with_rate_limit(router: Router<AppState>, settings: &RateLimitConfig) -> Router<AppState> {
    if !settings.enabled {
        return router;
    }

    let Some(governor_config) = GovernorConfigBuilder::default()
        .per_second(settings.replenish_secs)
        .burst_size(settings.burst_size)
        .error_handler(|error| ApiError::from(error).into_response())
        .finish()
    else {
        tracing::warn!(
            replenish_secs = settings.replenish_secs,
            burst_size = settings.burst_size,
            "Invalid rate limit settings, serving without rate limiting"
        );
        return router;
    };

    tracing::info!(
        replenish_secs = settings.replenish_secs,
        burst_size = settings.burst_size,
        "Per-IP rate limiting enabled"
    );
    router.layer(GovernorLayer {
        config: Arc::new(governor_config),
    })
}

/// CORS policy from the configured origins; `"*"` allows any origin
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
