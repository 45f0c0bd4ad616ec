// src/services/nearby_service.rs
// DOCUMENTATION: Nearby-places aggregation
// PURPOSE: Fan out one search per category, enrich with photos, group the results

use crate::models::{
    CategoryQuery, CategoryResult, EnrichedPlaceResult, NearbyPlaces, PlaceResult, TypeFilter,
    CATEGORY_RESULT_LIMIT,
};
use crate::services::{CallerContext, NearbySearchParams, PlacesApi};
use futures::future::join_all;
use serde_json::Number;

/// Validated input for one aggregation
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    pub location: String,
    pub radius: Number,
    pub filter: TypeFilter,
}

pub struct NearbyService;

impl NearbyService {
    /// Aggregate nearby places across all categories
    /// DOCUMENTATION: Categories are searched concurrently and all of them are
    /// awaited. A failed search or photo lookup only removes that slice of the
    /// result, so this never fails.
    pub async fn aggregate<A>(api: &A, query: &NearbyQuery, caller: &CallerContext) -> NearbyPlaces
    where
        A: PlacesApi + ?Sized,
    {
        let plan = query.filter.resolve();

        log::info!(
            "Nearby aggregation: location={}, radius={}, categories={}",
            query.location,
            query.radius,
            plan.len()
        );

        let results = join_all(
            plan.into_iter()
                .map(|category_query| Self::search_category(api, query, category_query, caller)),
        )
        .await;

        let grouped = NearbyPlaces::from_results(results);
        if grouped.is_empty() {
            log::info!("No nearby places found around {}", query.location);
        } else {
            log::info!("Nearby aggregation returned {} non-empty categories", grouped.len());
        }
        grouped
    }

    /// Search one category and enrich its places
    async fn search_category<A>(
        api: &A,
        query: &NearbyQuery,
        category_query: CategoryQuery,
        caller: &CallerContext,
    ) -> CategoryResult
    where
        A: PlacesApi + ?Sized,
    {
        let params = NearbySearchParams {
            location: query.location.clone(),
            radius: query.radius.clone(),
            types: category_query.types,
            limit: CATEGORY_RESULT_LIMIT,
        };

        let places = match api.nearby_search(&params, caller).await {
            Ok(places) => places,
            Err(e) => {
                log::warn!(
                    "Category {} search failed, treating as empty: {}",
                    category_query.category.as_str(),
                    e
                );
                Vec::new()
            }
        };

        let places = join_all(
            places
                .into_iter()
                .map(|place| Self::enrich_place(api, place, caller)),
        )
        .await;

        CategoryResult {
            category: category_query.category,
            places,
        }
    }

    /// Attach a photo URL when the place has a reference and the lookup succeeds
    async fn enrich_place<A>(api: &A, place: PlaceResult, caller: &CallerContext) -> EnrichedPlaceResult
    where
        A: PlacesApi + ?Sized,
    {
        let Some(reference) = place.first_photo_reference().map(str::to_string) else {
            return EnrichedPlaceResult::without_photo(place);
        };

        match api.photo(&reference, caller).await {
            Ok(url) => EnrichedPlaceResult::with_photo(place, url),
            Err(e) => {
                log::warn!(
                    "Photo lookup failed for place {}: {}",
                    place.place_id.as_deref().unwrap_or("<unknown>"),
                    e
                );
                EnrichedPlaceResult::without_photo(place)
            }
        }
    }
}
