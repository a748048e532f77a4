pub mod dto;
pub mod model;
pub mod queries;
pub mod routes;

// HELPER FUNCTIONS

// Validating the todo title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {                                // Checks if the title is empty
        return Err("Title is required".to_string());
    }

    if title.chars().count() > 200 {
        return Err("Title is too long (Max: 200 characters)".to_string());      // Max size of title
    }

    Ok(())
}
