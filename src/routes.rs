// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{auth, contest, leaderboard, question, quiz};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, questions, quiz, contests, leaderboard).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
///
/// Every endpoint is public; CORS allows any origin with credentials
/// disabled, matching the source deployment.
pub fn create_router(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login));

    let question_routes = Router::new()
        .route("/allQuestions", get(question::list_questions))
        .route("/byCategory/{category}", get(question::questions_by_category))
        .route("/add", post(question::add_question));

    let quiz_routes = Router::new()
        .route("/create", post(quiz::create_quiz))
        .route("/get/{quizId}", get(quiz::get_quiz))
        .route("/submit/{quizId}", post(quiz::submit_quiz));

    let contest_routes = Router::new()
        .route("/create", post(contest::create_contest))
        .route("/active", get(contest::active_contests))
        .route("/{id}", get(contest::get_contest));

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/questions", question_routes)
        .nest("/quiz", quiz_routes)
        .nest("/weekly-contests", contest_routes)
        .route("/leaderboard/{contestId}", get(leaderboard::get_leaderboard))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}
