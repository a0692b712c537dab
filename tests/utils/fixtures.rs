//! Upstream bodies as TMDB sends them (snake_case)
use serde_json::{json, Value};

pub fn movie_detail() -> Value {
    json!({
        "id": 348,
        "title": "Alien",
        "original_title": "Alien",
        "original_language": "en",
        "release_date": "1979-05-25",
        "runtime": 117,
        "budget": 11000000,
        "tagline": "In space no one can hear you scream.",
        "genres": [
            {"id": 27, "name": "Horror"},
            {"id": 878, "name": "Science Fiction"}
        ],
        "credits": {
            "cast": [
                {"id": 10205, "credit_id": "c-ripley", "name": "Sigourney Weaver", "character": "Ellen Ripley", "order": 0, "known_for_department": "Acting"},
                {"id": 5049, "credit_id": "c-kane", "name": "John Hurt", "character": "Kane", "order": 3, "known_for_department": "Acting"}
            ],
            "crew": [
                {"id": 578, "credit_id": "c-scott", "name": "Ridley Scott", "job": "Director", "department": "Directing"},
                {"id": 1723, "credit_id": "c-giger", "name": "H.R. Giger", "job": "Conceptual Design", "department": "Art"}
            ]
        },
        "images": {
            "backdrops": [{"file_path": "/backdrop.jpg", "width": 1920, "height": 1080, "iso_639_1": null}],
            "posters": [{"file_path": "/poster.jpg", "width": 500, "height": 750, "iso_639_1": "en"}],
            "logos": []
        },
        "videos": {
            "results": [
                {"id": "v1", "key": "LjLamj-b0I8", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true},
                {"id": "v2", "key": "aBcDeFg", "name": "Making of", "site": "YouTube", "type": "Behind the Scenes"}
            ]
        },
        "reviews": {
            "page": 1,
            "results": [{"id": "r1", "author": "critic", "content": "A masterpiece of tension."}],
            "total_pages": 1,
            "total_results": 1
        }
    })
}

pub fn list_page() -> Value {
    json!({
        "id": 8213,
        "name": "Sci-fi essentials",
        "description": "Required viewing",
        "public": true,
        "iso_639_1": "en",
        "iso_3166_1": "US",
        "sort_by": "original_order.asc",
        "average_rating": 7.9,
        "page": 1,
        "total_pages": 3,
        "total_results": 42,
        "results": [
            {"id": 348, "media_type": "movie", "title": "Alien"},
            {"id": 1399, "media_type": "tv", "name": "Game of Thrones"}
        ]
    })
}

pub fn status(success: bool, message: &str) -> Value {
    json!({
        "success": success,
        "status_code": if success { 1 } else { 3 },
        "status_message": message
    })
}
