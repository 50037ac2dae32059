use dioxus::prelude::*;

use crate::profile::{BIO, DISPLAY_NAME, PROFILE_IMAGE, PROFILE_IMAGE_ALT, TAGS};

/// Static profile card: photo, name and bio, then a row of tags
#[component]
pub fn ProfileCard() -> Element {
    rsx! {
        div {
            class: "max-w-sm rounded overflow-hidden shadow-lg",

            img {
                class: "w-full",
                src: PROFILE_IMAGE,
                alt: PROFILE_IMAGE_ALT,
            }

            div {
                class: "px-6 py-4",
                h2 {
                    class: "profile-name font-bold text-xl mb-2",
                    "{DISPLAY_NAME}"
                }
                p {
                    class: "text-gray-700 text-base",
                    "{BIO}"
                }
            }

            div {
                class: "px-6 pt-4 pb-2",
                for tag in TAGS {
                    span {
                        key: "{tag}",
                        class: "inline-block bg-gray-200 rounded-full px-3 py-1 text-sm font-semibold text-gray-700 mr-2 mb-2",
                        "{tag}"
                    }
                }
            }
        }
    }
}
