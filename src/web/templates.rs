use ammonia::clean_text;
use jiff::Timestamp;

use crate::models::project::Project;

pub const APP_NAME: &str = "data-management";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_date(timestamp: Timestamp) -> String {
    timestamp.strftime(DATE_FORMAT).to_string()
}

fn header(page_name: &str) -> String {
    format!(
        r#"<header>
  <nav>
    <a href="/">Home</a>
    <a href="/projects">Projects</a>
    <a href="/projects/new">New project</a>
  </nav>
  <h1>{}</h1>
</header>"#,
        page_name
    )
}

fn footer() -> String {
    format!(
        "<footer><small>{} v{}</small></footer>",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

/// Wraps a page body with the shared head, header and footer.
///
/// `page_name` is trusted, `body` must already be escaped.
pub fn layout(page_name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} - {page}</title>
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = APP_NAME,
        page = page_name,
        header = header(page_name),
        body = body,
        footer = footer(),
    )
}

pub fn index_page() -> String {
    layout(
        "Main Page",
        r#"<p>Keep track of your projects.</p>
<p><a href="/projects">See all projects</a></p>"#,
    )
}

// The encoded name only holds URL-safe characters, so it needs no HTML escaping
fn project_link(action: &str, name: &str) -> String {
    format!("/projects/{}?Name={}", action, urlencoding::encode(name))
}

pub fn project_list_page(projects: &[Project]) -> String {
    if projects.is_empty() {
        return layout(
            "All Projects",
            r#"<p>No projects yet. <a href="/projects/new">Create one</a>.</p>"#,
        );
    }

    let rows: String = projects
        .iter()
        .map(|project| {
            format!(
                r#"  <tr>
    <td><a href="{view}">{name}</a></td>
    <td>{description}</td>
    <td>{created}</td>
    <td><a href="{delete}">Delete</a></td>
  </tr>
"#,
                view = project_link("view", &project.name),
                name = clean_text(&project.name),
                description = clean_text(&project.description),
                created = format_date(project.creation_date),
                delete = project_link("delete", &project.name),
            )
        })
        .collect();

    layout(
        "All Projects",
        &format!(
            r#"<table>
  <tr><th>Name</th><th>Description</th><th>Created</th><th></th></tr>
{}</table>"#,
            rows
        ),
    )
}

pub fn new_project_page() -> String {
    layout(
        "New Project",
        r#"<form method="post" action="/projects/new">
  <label>Name <input type="text" name="Name" required></label>
  <label>Description <textarea name="Description"></textarea></label>
  <button type="submit">Create</button>
</form>"#,
    )
}

pub fn project_page(project: &Project) -> String {
    layout(
        "View Project",
        &format!(
            r#"<h2>{name}</h2>
<p>{description}</p>
<dl>
  <dt>Created</dt><dd>{created}</dd>
  <dt>Last edit</dt><dd>{edited}</dd>
</dl>
<p><a href="{delete}">Delete this project</a></p>"#,
            name = clean_text(&project.name),
            description = clean_text(&project.description),
            created = format_date(project.creation_date),
            edited = format_date(project.last_edit),
            delete = project_link("delete", &project.name),
        ),
    )
}
