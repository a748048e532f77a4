use sqlx::SqlitePool;

use todo_web::{config, routes, state, templates};

#[tokio::main]
async fn main() {
    let config = config::Config::from_env();

    let db = SqlitePool::connect(&config.database_url)
        .await
        .expect("Error connecting DB");

    sqlx::migrate!()
        .run(&db)
        .await
        .expect("Error running migrations");

    let templates = templates::load().expect("Error loading templates");

    let state = state::AppState { db, templates };

    let app = routes::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await.unwrap();

    println!("server is chilling at http://{}", config.addr());

    axum::serve(listener, app).await.unwrap();
}
