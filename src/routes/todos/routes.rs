use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use tera::Tera;
use uuid::Uuid;

use crate::state::AppState;
use super::dto::TodoForm;
use super::{queries, validate_title};

// The whole app redirects back to the list page after every successful
// mutation, same as the browser expects from a plain HTML form flow.
fn redirect_to_list() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

fn render(
    templates: &Tera,
    name: &str,
    context: &tera::Context,
) -> Result<Html<String>, (StatusCode, String)> {
    templates.render(name, context).map(Html).map_err(|e| {
        eprintln!("Failed to render {}: {:?}", name, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to render page".to_string(),
        )
    })
}

fn form_context(action: &str, title: &str, description: &str, completed: bool) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("action", action);
    context.insert("title", title);
    context.insert("description", description);
    context.insert("completed", &completed);
    context.insert("errors", &serde_json::json!({}));
    context
}

/// List all todos, newest first
pub async fn list(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let todos = queries::list_todos(&state.db).await.map_err(|e| {
        eprintln!("Failed to fetch todos: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch todos".to_string(),
        )
    })?;

    let mut context = tera::Context::new();
    context.insert("todos", &todos);

    render(&state.templates, "todo_list.html", &context)
}

/// Show the empty create form
pub async fn create_form(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let context = form_context("/create/", "", "", false);

    render(&state.templates, "todo_form.html", &context)
}

/// Create a new todo from the submitted form
pub async fn create(
    State(state): State<AppState>,
    Form(body): Form<TodoForm>,
) -> Result<Response, (StatusCode, String)> {
    let completed = body.completed.unwrap_or(false);

    // Invalid input re-renders the form with the submitted values intact
    if let Err(message) = validate_title(&body.title) {
        let mut context = form_context("/create/", &body.title, &body.description, completed);
        context.insert("errors", &serde_json::json!({ "title": message }));

        return Ok(render(&state.templates, "todo_form.html", &context)?.into_response());
    }

    queries::create_todo(&state.db, body.title.trim(), &body.description, completed)
        .await
        .map_err(|e| {
            eprintln!("Failed to create todo: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create todo".to_string(),
            )
        })?;

    Ok(redirect_to_list())
}

/// Show the edit form prefilled with the stored values
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let todo = queries::get_todo(&state.db, id)
        .await
        .map_err(|e| {
            eprintln!("Failed to fetch todo: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch todo".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "Todo not found".to_string()))?;

    let context = form_context(
        &format!("/{}/update/", todo.id),
        &todo.title,
        &todo.description,
        todo.completed,
    );

    Ok(render(&state.templates, "todo_form.html", &context)?.into_response())
}

/// Replace a todo's fields with the submitted form values
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(body): Form<TodoForm>,
) -> Result<Response, (StatusCode, String)> {
    let exists = queries::get_todo(&state.db, id)
        .await
        .map_err(|e| {
            eprintln!("Failed to fetch todo: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch todo".to_string(),
            )
        })?
        .is_some();

    if !exists {
        return Err((StatusCode::NOT_FOUND, "Todo not found".to_string()));
    }

    let completed = body.completed.unwrap_or(false);

    if let Err(message) = validate_title(&body.title) {
        let mut context = form_context(
            &format!("/{}/update/", id),
            &body.title,
            &body.description,
            completed,
        );
        context.insert("errors", &serde_json::json!({ "title": message }));

        return Ok(render(&state.templates, "todo_form.html", &context)?.into_response());
    }

    let updated = queries::update_todo(&state.db, id, body.title.trim(), &body.description, completed)
        .await
        .map_err(|e| {
            eprintln!("Failed to update todo: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update todo".to_string(),
            )
        })?;

    match updated {
        Some(_) => Ok(redirect_to_list()),
        None => Err((StatusCode::NOT_FOUND, "Todo not found".to_string())),
    }
}

/// Show the delete confirmation page
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let todo = queries::get_todo(&state.db, id)
        .await
        .map_err(|e| {
            eprintln!("Failed to fetch todo: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch todo".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "Todo not found".to_string()))?;

    let mut context = tera::Context::new();
    context.insert("todo", &todo);

    Ok(render(&state.templates, "todo_confirm_delete.html", &context)?.into_response())
}

/// Delete a todo permanently
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let deleted = queries::delete_todo(&state.db, id).await.map_err(|e| {
        eprintln!("Failed to delete todo: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to delete todo".to_string(),
        )
    })?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Todo not found".to_string()));
    }

    Ok(redirect_to_list())
}

/// Flip a todo's completed flag
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let toggled = queries::toggle_todo(&state.db, id).await.map_err(|e| {
        eprintln!("Failed to toggle todo: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to toggle todo".to_string(),
        )
    })?;

    match toggled {
        Some(_) => Ok(redirect_to_list()),
        None => Err((StatusCode::NOT_FOUND, "Todo not found".to_string())),
    }
}
