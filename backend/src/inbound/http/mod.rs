//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod auth;
pub mod error;
pub mod health;
pub mod projects;
pub mod schemas;
pub mod state;
pub mod tasks;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// The `/api` scope with every authenticated route registered.
///
/// Malformed JSON bodies inside the scope are answered with the domain error
/// envelope rather than Actix's plain-text default.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use taskboard::inbound::http::{api_scope, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(api_scope());
/// ```
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(projects::create_project)
        .service(projects::list_projects)
        .service(tasks::summarize_tasks)
        .service(tasks::create_task)
        .service(tasks::list_tasks)
        .service(tasks::update_task)
        .service(tasks::delete_task)
}
