//! Fixed content shown on the profile card.
//!
//! Everything here is resolved at compile time. `asset!` fails the build if
//! the image is missing, so the card has no runtime error path.

use dioxus::prelude::*;

pub const PROFILE_IMAGE: Asset = asset!("/assets/profile.jpg");
pub const PROFILE_IMAGE_ALT: &str = "Display";

pub const DISPLAY_NAME: &str = "Blessing Krofegha";

pub const BIO: &str =
    "When i’m not coding i switch to netflix with biscuits and cold tea as my companion. 😜";

/// Tags in display order
pub const TAGS: [&str; 3] = ["#Software Engineer", "#Writter", "#Public Speaker"];
