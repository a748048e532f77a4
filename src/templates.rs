use std::sync::Arc;

use tera::Tera;

/// Loads every template under `templates/` once, at startup.
pub fn load() -> tera::Result<Arc<Tera>> {
    let glob = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html");
    let tera = Tera::new(glob)?;
    Ok(Arc::new(tera))
}
