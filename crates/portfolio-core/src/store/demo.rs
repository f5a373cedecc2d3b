//! Sample catalogue for offline mode.

use crate::mapping::RawProject;

struct Sample {
    title: &'static str,
    category: &'static str,
    description: Option<&'static str>,
    published: bool,
    order: Option<f64>,
    asset: &'static str,
    created: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Sunset vows at the fort",
        category: "wedding",
        description: Some("Golden hour ceremony on the ramparts"),
        published: true,
        order: Some(0.0),
        asset: "image-a1b2c3d4e5f6a7b8c9d0e1f2-2000x3000-jpg",
        created: "2024-04-12T17:30:00Z",
    },
    Sample {
        title: "Studio portrait, natural light",
        category: "portrait",
        description: None,
        published: true,
        order: Some(1.0),
        asset: "image-b2c3d4e5f6a7b8c9d0e1f2a3-2400x3000-jpg",
        created: "2024-03-02T10:00:00Z",
    },
    Sample {
        title: "Tea estate campaign",
        category: "commercial",
        description: Some("Product and landscape series for a spring launch"),
        published: true,
        order: None,
        asset: "image-c3d4e5f6a7b8c9d0e1f2a3b4-3000x2000-jpg",
        created: "2024-05-20T08:15:00Z",
    },
    Sample {
        title: "Skin retouch before and after",
        category: "retouch",
        description: None,
        published: true,
        order: None,
        asset: "image-d4e5f6a7b8c9d0e1f2a3b4c5-2000x2000-png",
        created: "2024-02-14T12:00:00Z",
    },
    Sample {
        title: "Linen-bound wedding album",
        category: "album",
        description: Some("Forty spreads, lay-flat binding"),
        published: true,
        order: None,
        asset: "image-e5f6a7b8c9d0e1f2a3b4c5d6-3000x2000-jpg",
        created: "2024-01-30T09:45:00Z",
    },
    Sample {
        title: "Harbour gala",
        category: "events",
        description: None,
        published: true,
        order: None,
        asset: "image-f6a7b8c9d0e1f2a3b4c5d6e7-3000x2000-webp",
        created: "2024-06-01T21:00:00Z",
    },
    Sample {
        title: "Beach photoshoot",
        category: "photoshoots",
        description: Some("Early morning, overcast"),
        published: true,
        order: None,
        asset: "image-a7b8c9d0e1f2a3b4c5d6e7f8-2000x3000-jpg",
        created: "2024-06-10T06:20:00Z",
    },
    Sample {
        title: "Garden ceremony",
        category: "wedding",
        description: None,
        published: false,
        order: None,
        asset: "image-b8c9d0e1f2a3b4c5d6e7f8a9-3000x2000-jpg",
        created: "2024-06-15T15:00:00Z",
    },
];

/// A small catalogue covering every category, with one draft.
pub fn demo_documents() -> Vec<RawProject> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(n, s)| RawProject {
            id: Some(format!("demo-{}", n + 1)),
            created_at: Some(s.created.to_string()),
            title: Some(s.title.to_string()),
            category: Some(s.category.to_string()),
            description: s.description.map(str::to_string),
            published: Some(s.published),
            order: s.order,
            image_ref: Some(s.asset.to_string()),
            lqip: None,
        })
        .collect()
}
