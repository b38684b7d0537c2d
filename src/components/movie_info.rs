//! Movie Info Component
//!
//! Read-only rendering of a loaded record: poster, title, overview,
//! statistics, genre badges, price with the purchase button, availability.

use dioxus::prelude::*;
use movieshelf_core::MovieDetails;

#[derive(Props, Clone, PartialEq)]
pub struct MovieInfoProps {
    /// Display model of the loaded record
    pub details: MovieDetails,
    /// Fired when the purchase button is pressed
    pub on_purchase: EventHandler<()>,
}

#[component]
pub fn MovieInfo(props: MovieInfoProps) -> Element {
    let details = &props.details;
    let on_purchase = props.on_purchase;
    let availability_class = format!("genre-badge {}", details.availability.class());

    rsx! {
        div { class: "details-container",
            div { class: "image-container",
                img { src: "{details.poster_url}", alt: "{details.title}" }
            }

            div { class: "info-container",
                h1 { class: "details-title", "{details.title}" }

                div { class: "data-text-container",
                    div { class: "overview-section",
                        h3 { class: "section-header", "Overview" }
                        p { class: "overview", "{details.overview}" }
                    }

                    div { class: "stat-genre-container",
                        div { class: "statistics-section",
                            h3 { class: "section-header", "Statistics" }
                            ul { class: "statistics-list",
                                li { "Release date: {details.release_date}" }
                                li { "Vote average: {details.vote_average}" }
                                li { "Votes: {details.vote_count}" }
                            }
                        }

                        div { class: "genres-section",
                            h3 { class: "section-header", "Genres" }
                            div { class: "genre-badges",
                                for genre in details.genres.iter() {
                                    span { key: "{genre.id}", class: "genre-badge", "{genre.name}" }
                                }
                            }
                        }
                    }

                    div { class: "genre-availability-container",
                        div { class: "genres-section badges-ext",
                            h3 { class: "section-header", "Pricing" }
                            div { class: "price-container",
                                div { class: "genre-badges",
                                    p { "Price in US:" }
                                    span { class: "genre-badge", "${details.price}" }
                                }
                                button {
                                    class: "btn-primary",
                                    r#type: "button",
                                    onclick: move |_| on_purchase.call(()),
                                    "{details.purchase_label()}"
                                }
                            }
                        }

                        div { class: "genres-section",
                            h3 { class: "section-header", "Availability" }
                            span { class: "{availability_class}", "{details.availability.label()}" }
                        }
                    }
                }
            }
        }
    }
}
