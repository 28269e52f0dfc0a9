use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{MAX_RATING, MAX_REVIEW_LEN},
    models::SearchResult,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                div class="flex items-start justify-between gap-6" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { "My Top " (movies.len()) " Movies" }
                        p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                    }
                    a class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" href="/add-review" { "Add Movie" }
                }

                @if movies.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "Nothing here yet. Search for a movie to start your list." }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for m in movies {
                            (movie_card(m))
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title: &str, error: Option<&str>) -> String {
    page(
        "Add Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { "Add a Movie" }
            (error_banner(error))
            form class="mt-8 space-y-6" method="post" action="/add-review" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                    input class=(INPUT_CLASS) name="title" id="title" value=(title) required;
                }
                button class=(BUTTON_CLASS) type="submit" { "Search" }
            }
        }),
    )
}

pub fn select_page(query: &str, results: &[SearchResult]) -> String {
    page(
        "Select Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { "Select Movie" }
            p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }
            @if results.is_empty() {
                p class="mt-6 text-gray-700" { "No movies matched that title." }
            } @else {
                ul class="mt-6 divide-y divide-gray-200" {
                    @for result in results {
                        li class="py-3" {
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/find?id={}", result.id)) {
                                (result.title)
                                @if let Some(date) = release_label(result) {
                                    span class="ml-2 text-gray-500" { " - " (date) }
                                }
                            }
                        }
                    }
                }
            }
            a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add-review" { "Search again" }
        }),
    )
}

pub fn edit_page(movie: &movie::Model, rating: &str, review: &str, error: Option<&str>) -> String {
    let action = format!("/edit-review?id={}", movie.id);
    page(
        "Edit Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { (movie.title) }
            p class="mt-2 text-gray-600" { "Edit Movie Rating" }
            (error_banner(error))
            form class="mt-8 space-y-6" method="post" action=(action) {
                div {
                    label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10 e.g. 7.5" }
                    input class=(INPUT_CLASS) name="rating" id="rating" value=(rating) inputmode="decimal" required;
                    p class="mt-2 text-xs text-gray-500" { "Between 0 and " (MAX_RATING) "." }
                }
                div {
                    label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                    input class=(INPUT_CLASS) name="review" id="review" value=(review) maxlength=(MAX_REVIEW_LEN);
                }
                button class=(BUTTON_CLASS) type="submit" { "Done" }
            }
        }),
    )
}

pub fn delete_page(movie: &movie::Model) -> String {
    let action = format!("/delete?id={}", movie.id);
    page(
        "Delete Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { "Delete " (movie.title) "?" }
            p class="mt-2 text-gray-600" { "This removes the movie and your review." }
            form class="mt-8" method="post" action=(action) {
                button class="w-full rounded-md bg-red-600 px-4 py-2 font-semibold text-white hover:bg-red-700" type="submit" { "Delete" }
            }
            a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Cancel" }
        }),
    )
}

pub fn error_page(heading: &str, message: &str) -> String {
    page(
        heading,
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { (heading) }
            p class="mt-4 text-gray-700" { (message) }
            a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
        }),
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}

fn card(inner: Markup) -> Markup {
    html! {
        div class="max-w-xl mx-auto px-6 py-12" {
            div class="bg-white shadow rounded-lg p-8" { (inner) }
        }
    }
}

fn error_banner(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p class="mt-4 rounded-md bg-red-50 px-4 py-2 text-sm text-red-700" role="alert" { (message) }
        }
    }
}

fn movie_card(m: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 rounded-md object-cover" src=(m.img_url) alt=(m.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(rank) = m.ranking {
                            span class="mr-2 text-gray-400" { "#" (rank) }
                        }
                        (m.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (m.year) ")" }
                    }
                    span class="text-lg font-semibold text-gray-700" { (rating_label(m.rating)) }
                }
                @if let Some(review) = &m.review {
                    p class="mt-2 italic text-gray-700" { "\"" (review) "\"" }
                }
                p class="mt-2 text-sm text-gray-600" { (m.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit-review?id={}", m.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", m.id)) { "Delete" }
                }
            }
        }
    }
}

fn release_label(result: &SearchResult) -> Option<&str> {
    result.release_date.as_deref().filter(|d| !d.is_empty())
}

fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{rating:.1}"),
        None => "Unrated".to_string(),
    }
}
