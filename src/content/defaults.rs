//! Starter content: Colibri Brunch & Bistro, Barceloneta.

use super::*;

impl Default for Content {
    fn default() -> Self {
        Self {
            brand: "Colibri Brunch & Bistro".into(),
            reserve: CallToAction::inert("Reserve Table"),
            hero: Hero {
                headline: "Where Barcelona".into(),
                highlight: "Meets Brunch".into(),
                blurb: "Experience the finest brunch in Barceloneta with fresh ingredients, \
                        authentic flavors, and Mediterranean warmth."
                    .into(),
                background: Some("interior/interior_1.jpg".into()),
                actions: vec![
                    CallToAction::to_section("View Menu", SectionId::Menu),
                    CallToAction::to_section("Visit Us", SectionId::Contact),
                ],
            },
            about: About {
                title: "Our Story".into(),
                story: "Located in the heart of Barcelona's vibrant Barceloneta district, \
                        Colibri Brunch & Bistro brings together the best of Mediterranean \
                        cuisine with international brunch favorites.\n\n\
                        Our menu is designed to meet the needs of everyone, from completely \
                        vegan options to traditional Spanish dishes, including world-renowned \
                        varieties of benedict and British breakfast classics.\n"
                    .into(),
                rating: Some(Rating {
                    score: 4.6,
                    reviews: 489,
                }),
                ranking: Some(Ranking {
                    position: 230,
                    total: 10518,
                    area: "Barcelona".into(),
                }),
                images: vec![
                    GalleryImage::new("interior/interior_3.jpg", "Restaurant Interior"),
                    GalleryImage::new("food/food_4.jpg", "Delicious Food"),
                ],
            },
            menu: MenuSection {
                title: "Our Menu".into(),
                intro: "From traditional Spanish paellas to international brunch classics, \
                        our menu offers something special for every taste and dietary preference."
                    .into(),
                badges: vec![
                    badge("Vegetarian Friendly", "heart"),
                    badge("Vegan Options", "chef"),
                    badge("Gluten Free", "coffee"),
                ],
                categories: MenuCatalog::new(vec![
                    MenuCategory {
                        name: "Brunch Classics".into(),
                        items: vec![
                            MenuItem::new("Classic Benedict", "€10.50", "Poached eggs, hollandaise sauce, English muffin"),
                            MenuItem::new("Salmon Benedict", "€11.50", "Smoked salmon, poached eggs, hollandaise"),
                            MenuItem::new("Avocado Benedict", "€10.00", "Fresh avocado, poached eggs, hollandaise"),
                            MenuItem::new("Classic Pancakes", "€8.00", "Fluffy pancakes with maple syrup"),
                            MenuItem::new("Red Fruits Pancakes", "€9.00", "Pancakes with fresh berries"),
                            MenuItem::new("Avocado Toast", "€8.50", "Sourdough bread, smashed avocado, lime"),
                        ],
                    },
                    MenuCategory {
                        name: "Spanish Specialties".into(),
                        items: vec![
                            MenuItem::new("Paella de Marisco", "€16.00", "Traditional seafood paella"),
                            MenuItem::new("Paella de Pollo", "€14.00", "Chicken paella with saffron rice"),
                            MenuItem::new("Paella Vegetal", "€13.00", "Vegetarian paella with seasonal vegetables"),
                            MenuItem::new("Patatas Bravas", "€6.00", "Crispy potatoes with spicy tomato sauce"),
                            MenuItem::new("Gambas al Ajillo", "€12.00", "Garlic shrimp in olive oil"),
                            MenuItem::new("Pulpo a la Gallega", "€15.00", "Galician-style octopus"),
                        ],
                    },
                    MenuCategory {
                        name: "Fresh & Healthy".into(),
                        items: vec![
                            MenuItem::new("House Salad", "€8.50", "Mixed greens, tomatoes, cucumber, vinaigrette"),
                            MenuItem::new("Chicken Salad", "€9.50", "Grilled chicken, mixed greens, avocado"),
                            MenuItem::new("Veggie Burger", "€9.00", "Plant-based patty with fresh vegetables"),
                            MenuItem::new("Chicken Wrap", "€9.00", "Grilled chicken, vegetables, tortilla wrap"),
                            MenuItem::new("Veggie Wrap", "€8.50", "Fresh vegetables and hummus wrap"),
                        ],
                    },
                ]),
            },
            gallery: GallerySection {
                title: "Gallery".into(),
                intro: "Take a glimpse into our warm atmosphere and beautifully crafted dishes \
                        that make every visit memorable."
                    .into(),
                images: GalleryCatalog::new(vec![
                    GalleryImage::new("interior/interior_1.jpg", "Restaurant Interior"),
                    GalleryImage::new("food/food_1.jpg", "Signature Dish"),
                    GalleryImage::new("interior/interior_3.jpg", "Cozy Atmosphere"),
                    GalleryImage::new("food/food_4.jpg", "Fresh Ingredients"),
                    GalleryImage::new("interior/interior_6.jpg", "Dining Area"),
                    GalleryImage::new("food/food_7.jpg", "Artisan Coffee"),
                ]),
            },
            contact: ContactSection {
                title: "Visit Us".into(),
                intro: "Located in the heart of Barceloneta, we're open every day to serve you \
                        the best brunch experience in Barcelona."
                    .into(),
                address: vec![
                    "Pg. de Joan de Borbó, 6".into(),
                    "08003 Barcelona, Spain".into(),
                ],
                phone: "+34 631 62 72 78".into(),
                hours: vec!["Monday - Sunday".into(), "8:00 AM - 11:00 PM".into()],
                map_caption: "Barceloneta, Barcelona".into(),
                reservation: CallToAction::inert("Make a Reservation"),
            },
            footer: Footer {
                tagline: "Barcelona's premier brunch destination in the heart of Barceloneta. \
                          Experience Mediterranean warmth with every bite."
                    .into(),
                hours_summary: "Open Daily: 8:00 AM - 11:00 PM".into(),
                copyright: "© 2025 Colibri Brunch & Bistro. All rights reserved.".into(),
                socials: vec![
                    social("Instagram", "https://instagram.com/"),
                    social("Facebook", "https://facebook.com/"),
                    social("Twitter", "https://twitter.com/"),
                ],
            },
        }
    }
}

fn badge(text: &str, icon: &str) -> Badge {
    Badge {
        text: text.into(),
        icon: icon.into(),
    }
}

fn social(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.into(),
        url: url.into(),
    }
}
