//! Upstream payload fixtures shaped like the third-party catalog API.

use serde_json::{Value, json};

/// Build an upstream body listing `(id, title)` pairs, with the extra fields
/// the real API carries so projection tests see unknown keys.
#[must_use]
pub fn upstream_payload(items: &[(u64, &str)]) -> Value {
    let products: Vec<Value> = items
        .iter()
        .map(|(id, title)| {
            json!({
                "id": id,
                "title": title,
                "description": format!("{title} description"),
                "price": 10.0 + f64::from(u32::try_from(*id).unwrap_or(u32::MAX)),
                "thumbnail": format!("https://cdn.test/{id}/thumbnail.png"),
                "rating": 4.5,
                "stock": 12,
                "category": "misc"
            })
        })
        .collect();
    json!({
        "products": products,
        "total": items.len(),
        "skip": 0,
        "limit": items.len()
    })
}

/// A small catalog with a duplicate id to exercise order preservation.
#[must_use]
pub fn sample_upstream_payload() -> Value {
    upstream_payload(&[
        (1, "Essence Mascara Lash Princess"),
        (2, "Eyeshadow Palette with Mirror"),
        (3, "Powder Canister"),
        (2, "Eyeshadow Palette with Mirror"),
    ])
}
