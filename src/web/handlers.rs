use actix_web::{
    HttpResponse,
    http::header::{self, ContentType},
    web,
};
use serde::Deserialize;

use crate::{
    models::project::Project,
    services::projects::{ProjectError, ProjectRepository},
    storage::StorageError,
    web::{errors::WebError, templates},
};

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    #[serde(rename = "Name", default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewProjectForm {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// Runs a repository call on the blocking pool, since storage does file I/O.
async fn with_repository<T, F>(
    repository: &web::Data<ProjectRepository>,
    call: F,
) -> Result<T, WebError>
where
    F: FnOnce(&ProjectRepository) -> Result<T, ProjectError> + Send + 'static,
    T: Send + 'static,
{
    let repository = repository.clone();
    Ok(web::block(move || call(&repository)).await??)
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_to_projects() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/projects"))
        .finish()
}

pub async fn index() -> HttpResponse {
    tracing::info!("Rendering main page");
    html(templates::index_page())
}

pub async fn list_projects(
    repository: web::Data<ProjectRepository>,
) -> Result<HttpResponse, WebError> {
    tracing::info!("Listing projects");
    let projects = with_repository(&repository, |r| r.all()).await?;
    Ok(html(templates::project_list_page(&projects)))
}

pub async fn new_project_form() -> HttpResponse {
    tracing::info!("Rendering new project form");
    html(templates::new_project_page())
}

pub async fn create_project(
    repository: web::Data<ProjectRepository>,
    form: web::Form<NewProjectForm>,
) -> Result<HttpResponse, WebError> {
    let form = form.into_inner();
    tracing::info!(name = %form.name, "Creating project");

    let project = Project::new(form.name, form.description);
    with_repository(&repository, move |r| r.save(project)).await?;

    Ok(redirect_to_projects())
}

pub async fn view_project(
    repository: web::Data<ProjectRepository>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, WebError> {
    let name = query.into_inner().name;
    tracing::info!(name = %name, "Viewing project");

    let project = with_repository(&repository, move |r| r.get(&name)).await?;
    Ok(html(templates::project_page(&project)))
}

pub async fn delete_project(
    repository: web::Data<ProjectRepository>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, WebError> {
    let name = query.into_inner().name;
    tracing::info!(name = %name, "Deleting project");

    let result = with_repository(&repository, move |r| r.delete(&name)).await;
    if let Err(WebError::Project(ProjectError::Storage(StorageError::RemoveDirFailed {
        path, ..
    }))) = &result
    {
        tracing::warn!(
            path = %path.display(),
            "Project deleted but its directory was left behind; a new project with the same name will reuse it"
        );
    }
    result?;

    Ok(redirect_to_projects())
}

/// Answers requests whose path exists but whose method does not
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type(ContentType::plaintext())
        .body("Method not allowed")
}
