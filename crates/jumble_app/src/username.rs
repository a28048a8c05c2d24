//! Profile name components
//!
//! [`Username`] renders a link to the profile page with a hover card;
//! [`SimpleUsername`] renders the same name as plain text. Both show a
//! skeleton until the profile lookup resolves.

use crate::services::{to_profile, Destination, Navigator, ProfileSource};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsernameView {
    /// Profile not loaded yet
    Skeleton,
    Link {
        text: String,
        destination: Destination,
        /// Public key of the profile shown in the hover card
        hover_card: String,
    },
    Text(String),
}

impl UsernameView {
    pub fn text(&self) -> Option<&str> {
        match self {
            UsernameView::Skeleton => None,
            UsernameView::Link { text, .. } | UsernameView::Text(text) => Some(text),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UsernameView::Skeleton)
    }

    /// Follow the link, if this view is one. Returns `true` if navigation happened.
    pub fn activate(&self, navigator: &dyn Navigator) -> bool {
        match self {
            UsernameView::Link { destination, .. } => {
                navigator.push(destination.clone());
                true
            }
            _ => false,
        }
    }
}

fn display_name(username: &str, show_at: bool) -> String {
    if show_at {
        format!("@{username}")
    } else {
        username.to_string()
    }
}

#[derive(Clone, Debug)]
pub struct Username {
    user_id: String,
    show_at: bool,
}

impl Username {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            show_at: false,
        }
    }

    /// Prefix the name with `@`
    pub fn show_at(mut self, show_at: bool) -> Self {
        self.show_at = show_at;
        self
    }

    pub fn render(&self, profiles: &dyn ProfileSource) -> UsernameView {
        let Some(profile) = profiles.fetch_profile(&self.user_id) else {
            return UsernameView::Skeleton;
        };
        UsernameView::Link {
            text: display_name(&profile.username, self.show_at),
            destination: to_profile(&profile.pubkey),
            hover_card: profile.pubkey,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimpleUsername {
    user_id: String,
    show_at: bool,
}

impl SimpleUsername {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            show_at: false,
        }
    }

    pub fn show_at(mut self, show_at: bool) -> Self {
        self.show_at = show_at;
        self
    }

    pub fn render(&self, profiles: &dyn ProfileSource) -> UsernameView {
        match profiles.fetch_profile(&self.user_id) {
            Some(profile) => UsernameView::Text(display_name(&profile.username, self.show_at)),
            None => UsernameView::Skeleton,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{PageManager, Profile, ProfileCache};
    use jumble_core::PageId;

    const PUBKEY: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

    fn cache() -> ProfileCache {
        let cache = ProfileCache::new();
        cache.insert(Profile::new(PUBKEY, "fiatjaf"));
        cache
    }

    #[test]
    fn skeleton_until_loaded() {
        let empty = ProfileCache::new();
        assert_eq!(Username::new(PUBKEY).render(&empty), UsernameView::Skeleton);
        assert!(SimpleUsername::new(PUBKEY).render(&empty).is_loading());
    }

    #[test]
    fn username_links_to_profile() {
        let view = Username::new(PUBKEY).show_at(true).render(&cache());
        assert_eq!(
            view,
            UsernameView::Link {
                text: "@fiatjaf".to_string(),
                destination: to_profile(PUBKEY),
                hover_card: PUBKEY.to_string(),
            }
        );

        let pages = PageManager::new(PageId::from_static("home"));
        assert!(view.activate(&pages));
        assert_eq!(pages.top(), Some(Destination::new(format!("/users/{PUBKEY}"))));
    }

    #[test]
    fn simple_username_is_plain_text() {
        let view = SimpleUsername::new(PUBKEY).render(&cache());
        assert_eq!(view, UsernameView::Text("fiatjaf".to_string()));
        assert_eq!(view.text(), Some("fiatjaf"));

        let pages = PageManager::new(PageId::from_static("home"));
        assert!(!view.activate(&pages));
        assert!(pages.top().is_none());
    }
}
