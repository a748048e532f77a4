use serde::Deserialize;

/// Form payload shared by the create and update pages. The completed
/// checkbox posts `completed=true` when checked and nothing otherwise.
#[derive(Deserialize)]
pub struct TodoForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: Option<bool>,
}
