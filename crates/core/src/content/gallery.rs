use folio_protocol::{GalleryCategory, GalleryImage};

pub static GALLERY: [GalleryImage; 3] = [
    GalleryImage {
        src: "/uploads/f9291e1b-a331-40ad-aaa3-99926ecc76a8.png",
        alt: "Deva Narayan - Professional Portrait",
        category: GalleryCategory::Portrait,
    },
    GalleryImage {
        src: "/uploads/796bbc75-a786-4ecb-8944-065bb7bcd73e.png",
        alt: "Artistic Black & White Portrait",
        category: GalleryCategory::Artistic,
    },
    GalleryImage {
        src: "/uploads/4731e76e-fe46-4bed-b919-8d2c8a9f781c.png",
        alt: "Car Photography",
        category: GalleryCategory::Automotive,
    },
];

/// Cards in the "Featured Highlights" panel below the grid.
pub static HIGHLIGHTS: [(&str, &str); 2] = [
    (
        "Creative Vision",
        "Capturing moments and expressing creativity through various mediums.",
    ),
    (
        "Professional Growth",
        "Documenting the journey of personal and professional development.",
    ),
];
