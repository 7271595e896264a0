use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use voyago_core::health::{healthz, readyz};
use voyago_core::middleware::request_id_layer;

use crate::handlers::{
    accommodation::{create_accommodation, delete_accommodation, list_accommodations},
    activity::{create_activity, delete_activity, list_activities},
    trip::{
        add_trip_accommodation, add_trip_activity, create_trip, delete_trip, get_trip,
        get_trip_details, list_trips, remove_trip_accommodation, remove_trip_activity,
        update_trip,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Trips
        .route("/trips", get(list_trips))
        .route("/trips", post(create_trip))
        .route("/trips/{id}", get(get_trip))
        .route("/trips/{id}", put(update_trip))
        .route("/trips/{id}", delete(delete_trip))
        .route("/trips/{id}/details", get(get_trip_details))
        // Trip links
        .route("/trips/{id}/activities", post(add_trip_activity))
        .route(
            "/trips/{id}/activities/{activity_id}",
            delete(remove_trip_activity),
        )
        .route("/trips/{id}/accommodations", post(add_trip_accommodation))
        .route(
            "/trips/{id}/accommodations/{accommodation_id}",
            delete(remove_trip_accommodation),
        )
        // Activity catalog
        .route("/activities", get(list_activities))
        .route("/activities", post(create_activity))
        .route("/activities/{id}", delete(delete_activity))
        // Accommodation catalog
        .route("/accommodations", get(list_accommodations))
        .route("/accommodations", post(create_accommodation))
        .route("/accommodations/{id}", delete(delete_accommodation))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
