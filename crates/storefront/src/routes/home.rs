//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use omniworld_core::pricing::format_inr;

use crate::filters;
use crate::state::AppState;

/// A division card on the home page.
#[derive(Clone)]
pub struct DivisionCard {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

/// A search suggestion row.
#[derive(Clone)]
pub struct SuggestionView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub href: String,
}

/// Query parameters for the home-page search box.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub divisions: Vec<DivisionCard>,
    pub query: String,
    pub suggestions: Vec<SuggestionView>,
}

/// The company divisions shown on the home page.
fn divisions() -> Vec<DivisionCard> {
    vec![
        DivisionCard {
            name: "Healthcare",
            href: "/healthcare",
            description: "Medical instruments, medicines, and supplies for professionals.",
        },
        DivisionCard {
            name: "IT Solutions",
            href: "/it-solutions",
            description: "Enterprise software and technology consulting services.",
        },
        DivisionCard {
            name: "Education",
            href: "/education",
            description: "Educational platforms and learning management systems.",
        },
    ]
}

/// Display the home page, with live search suggestions when `q` is set.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let rate = state.config().inr_rate;

    let suggestions = state
        .catalog()
        .search(&query)
        .into_iter()
        .take(6)
        .map(|p| SuggestionView {
            name: p.name.to_owned(),
            category: p.category.name().to_owned(),
            price: format_inr(p.price, rate),
            href: format!("/healthcare/{}", p.category.slug()),
        })
        .collect();

    HomeTemplate {
        divisions: divisions(),
        query,
        suggestions,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_home_renders() {
        let state = test_state();
        let response = home(State(state), Query(SearchParams { q: None }))
            .await
            .into_response();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_home_search_renders() {
        let state = test_state();
        let response = home(
            State(state),
            Query(SearchParams {
                q: Some("mask".to_owned()),
            }),
        )
        .await
        .into_response();
        assert!(response.status().is_success());
    }
}
