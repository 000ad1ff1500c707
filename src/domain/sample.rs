// src/domain/sample.rs

use crate::domain::property::{normalize, Property};
use serde_json::{json, Value};

/// One raw record of the seeding bundle, addressed with frontend ids.
#[derive(Debug, Clone)]
pub struct SeedRecord {
    pub state: &'static str,
    pub slug: &'static str,
    pub record: Value,
}

/// Stand-in used while the store has nothing at a requested path.
pub fn mock_property(slug: &str) -> Property {
    let record = json!({
        "address": "100 Sample Avenue, Springfield, NJ 07081",
        "description": "Sample community shown while live data is unavailable.",
        "unit": "120",
        "yearBuilt": "1998",
        "renovated": "2020",
        "amenities": ["Swimming Pool", "Fitness Center", "On-site Laundry", "Covered Parking"],
        "phone": "(555) 555-0100",
        "images": ["/logo.png"],
        "vp": { "name": "Michael Reyes", "email": "michael.reyes@example.com" },
        "rem": { "name": "Jennifer Walsh", "email": "jennifer.walsh@example.com" },
        "rsd": { "name": "David Kim", "email": "david.kim@example.com" },
        "ds": { "name": "Angela Brooks", "email": "angela.brooks@example.com" },
        "pm": { "name": "Sarah Thompson", "email": "sarah.thompson@example.com" }
    });

    normalize(&record, slug, slug)
}

/// Sample properties written by the admin seeding operation.
pub fn seed_bundle() -> Vec<SeedRecord> {
    vec![
        SeedRecord {
            state: "newjersey",
            slug: "the-monarch",
            record: json!({
                "name": "The Monarch",
                "address": "12 River Road, Red Bank, NJ 07701",
                "description": "Garden-style apartments a short walk from the Navesink River.",
                "unit": "240",
                "yearBuilt": "1987",
                "renovated": "2019",
                "amenities": ["Swimming Pool", "Clubhouse", "Fitness Center"],
                "phone": "(732) 555-0142",
                "vp": { "name": "Michael Reyes", "email": "michael.reyes@example.com" },
                "rem": { "name": "Jennifer Walsh", "email": "jennifer.walsh@example.com" },
                "pm": { "name": "Sarah Thompson", "email": "sarah.thompson@example.com" }
            }),
        },
        SeedRecord {
            state: "newjersey",
            slug: "parkside-at-tinton-falls",
            record: json!({
                "address": "400 Hance Avenue, Tinton Falls, NJ 07724",
                "unit": "180",
                "yearBuilt": "2002",
                "amenities": ["Dog Park", "Playground"],
                "phone": "(732) 555-0187",
                "pm": { "name": "Kevin Patel", "email": "kevin.patel@example.com" }
            }),
        },
        SeedRecord {
            state: "newjersey",
            slug: "riverview-commons",
            record: json!({
                "address": "75 Commons Way, Toms River, NJ 08753",
                "description": "Townhome community with attached garages.",
                "unit": "96",
                "yearBuilt": "1994",
                "rsd": { "name": "David Kim", "email": "david.kim@example.com" }
            }),
        },
        SeedRecord {
            state: "newyork",
            slug: "harbor-pointe",
            record: json!({
                "name": "Harbor Pointe",
                "address": "1 Harbor Drive, Port Jefferson, NY 11777",
                "unit": "312",
                "yearBuilt": "1979",
                "renovated": "2016",
                "amenities": ["Marina Access", "Business Center", "Package Lockers"],
                "phone": "(631) 555-0110",
                "ds": { "name": "Angela Brooks", "email": "angela.brooks@example.com" },
                "pm": { "name": "Rachel Greene", "email": "rachel.greene@example.com" }
            }),
        },
        SeedRecord {
            state: "newyork",
            slug: "lakeview-towers",
            record: json!({
                "address": "220 Lakeshore Boulevard, Rochester, NY 14617",
                "unit": "150",
                "yearBuilt": "1972",
                "images": ["/images/lakeview-1.jpg", "/images/lakeview-2.jpg"]
            }),
        },
        SeedRecord {
            state: "pennsylvania",
            slug: "chestnut-hill-terrace",
            record: json!({
                "name": "Chestnut Hill Terrace",
                "address": "8600 Germantown Avenue, Philadelphia, PA 19118",
                "description": "Mid-rise residences near the Chestnut Hill shops.",
                "unit": "128",
                "yearBuilt": "1965",
                "renovated": "2021",
                "amenities": ["Rooftop Deck", "Bike Storage"],
                "phone": "(215) 555-0166",
                "vp": { "name": "Michael Reyes", "email": "michael.reyes@example.com" },
                "pm": { "name": "Tom Nguyen", "email": "tom.nguyen@example.com" }
            }),
        },
        SeedRecord {
            state: "pennsylvania",
            slug: "stonegate",
            record: json!({
                "address": "5 Stonegate Court, Lancaster, PA 17601"
            }),
        },
    ]
}
