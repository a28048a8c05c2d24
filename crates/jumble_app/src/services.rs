//! Collaborator interfaces the components talk to
//!
//! Profiles, navigation and the clipboard are reached through narrow traits
//! so hosts can plug in their own implementations. In-memory implementations
//! ([`ProfileCache`], [`PageManager`], [`MemoryClipboard`]) back the app shell
//! and the headless runner.

use std::fmt;
use std::sync::{Mutex, RwLock};

use jumble_core::PageId;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A user record as the profile lookup returns it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub pubkey: String,
    pub username: String,
}

impl Profile {
    pub fn new(pubkey: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            username: username.into(),
        }
    }
}

/// Profile lookup. `None` means "not loaded yet".
pub trait ProfileSource: Send + Sync {
    fn fetch_profile(&self, user_id: &str) -> Option<Profile>;
}

/// Profiles known so far, keyed by public key
#[derive(Default)]
pub struct ProfileCache {
    profiles: RwLock<FxHashMap<String, Profile>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: Profile) {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.pubkey.clone(), profile);
    }

    pub fn remove(&self, pubkey: &str) -> Option<Profile> {
        self.profiles.write().unwrap().remove(pubkey)
    }

    pub fn len(&self) -> usize {
        self.profiles.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileSource for ProfileCache {
    fn fetch_profile(&self, user_id: &str) -> Option<Profile> {
        self.profiles.read().unwrap().get(user_id).cloned()
    }
}

/// A secondary-page route
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn to_profile(pubkey: &str) -> Destination {
    Destination(format!("/users/{pubkey}"))
}

pub fn to_relay_settings() -> Destination {
    Destination::new("/relay-settings")
}

pub trait Navigator: Send + Sync {
    /// Open a secondary page on top of the current one
    fn push(&self, destination: Destination);

    /// The primary page currently shown
    fn current_page(&self) -> PageId;
}

/// Tracks the current primary page and the stack of secondary pages above it
pub struct PageManager {
    current: RwLock<PageId>,
    secondary: Mutex<Vec<Destination>>,
}

impl PageManager {
    pub fn new(initial: PageId) -> Self {
        Self {
            current: RwLock::new(initial),
            secondary: Mutex::new(Vec::new()),
        }
    }

    /// Switch primary pages. Returns `true` if the page changed.
    ///
    /// Switching clears the secondary stack.
    pub fn set_current_page(&self, page: PageId) -> bool {
        let mut current = self.current.write().unwrap();
        if *current == page {
            return false;
        }
        debug!("PageManager::set_current_page: {} -> {}", *current, page);
        *current = page;
        drop(current);

        self.secondary.lock().unwrap().clear();
        true
    }

    pub fn secondary_stack(&self) -> Vec<Destination> {
        self.secondary.lock().unwrap().clone()
    }

    pub fn top(&self) -> Option<Destination> {
        self.secondary.lock().unwrap().last().cloned()
    }

    /// Close the top secondary page
    pub fn pop(&self) -> Option<Destination> {
        self.secondary.lock().unwrap().pop()
    }
}

impl Navigator for PageManager {
    fn push(&self, destination: Destination) {
        debug!(%destination, "secondary page pushed");
        self.secondary.lock().unwrap().push(destination);
    }

    fn current_page(&self) -> PageId {
        self.current.read().unwrap().clone()
    }
}

/// Write-only clipboard. Fire-and-forget from the caller's side.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str);
}

/// Clipboard that keeps the last written text in memory
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self.contents.lock().unwrap() = Some(text.to_string());
    }
}
